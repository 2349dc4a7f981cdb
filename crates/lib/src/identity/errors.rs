//! Error types for the identity system
use thiserror::Error;

/// Errors returned by account operations.
///
/// All of these are recoverable: the caller decides what to show and where to
/// send the user next (for example, switching from signup to login on
/// [`AccountError::AlreadyExists`]).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Account already exists: {email}")]
    AlreadyExists { email: String },

    #[error("No account found: {email}")]
    NoSuchAccount { email: String },

    #[error("Invalid credential for account: {email}")]
    InvalidCredential { email: String },

    #[error("Account is protected and cannot be removed: {email}")]
    ProtectedAccount { email: String },
}

impl AccountError {
    /// Check if this error indicates the account was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccountError::NoSuchAccount { .. })
    }

    /// Check if this error indicates the account already exists.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AccountError::AlreadyExists { .. })
    }

    /// Check if this error came from a failed login attempt.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AccountError::NoSuchAccount { .. } | AccountError::InvalidCredential { .. }
        )
    }

    /// Check if this error refused to touch a protected account.
    pub fn is_protected(&self) -> bool {
        matches!(self, AccountError::ProtectedAccount { .. })
    }

    /// The email the failed operation was about.
    pub fn email(&self) -> &str {
        match self {
            AccountError::AlreadyExists { email }
            | AccountError::NoSuchAccount { email }
            | AccountError::InvalidCredential { email }
            | AccountError::ProtectedAccount { email } => email,
        }
    }

    /// The wording the site shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AccountError::AlreadyExists { .. } => "Account already exists with this email",
            AccountError::NoSuchAccount { .. } => "No account found with this email",
            AccountError::InvalidCredential { .. } => "Invalid password",
            AccountError::ProtectedAccount { .. } => {
                crate::admin::AdminError::CannotDeleteAdmin.user_message()
            }
        }
    }
}

impl From<AccountError> for crate::Error {
    fn from(err: AccountError) -> Self {
        crate::Error::Account(err)
    }
}
