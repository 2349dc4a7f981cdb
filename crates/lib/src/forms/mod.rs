//! Login and signup form checks
//!
//! These run before any account operation is attempted, matching the checks
//! the site's forms perform: every field is required, and the two signup
//! passwords must match.

use thiserror::Error;

use crate::Result;

#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// The wording the site shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingFields => "All fields are required",
            FormError::PasswordMismatch => "Passwords do not match",
        }
    }
}

impl From<FormError> for crate::Error {
    fn from(err: FormError) -> Self {
        crate::Error::Form(err)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields.into());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Missing fields are reported before a password mismatch.
    pub fn validate(&self) -> Result<()> {
        if [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(FormError::MissingFields.into());
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch.into());
        }
        Ok(())
    }
}
