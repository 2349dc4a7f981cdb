//! Error types for the admin panel
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AdminError {
    /// The active session is not the administrator.
    #[error("Admin access denied for {}", email.as_deref().unwrap_or("anonymous session"))]
    AccessDenied { email: Option<String> },

    /// The administrator account cannot be deleted.
    #[error("The admin account cannot be deleted")]
    CannotDeleteAdmin,
}

impl AdminError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            AdminError::AccessDenied { .. } | AdminError::CannotDeleteAdmin
        )
    }

    /// The wording the site shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AdminError::AccessDenied { .. } => "You do not have permission to access this page",
            AdminError::CannotDeleteAdmin => "The admin account cannot be deleted",
        }
    }
}

impl From<AdminError> for crate::Error {
    fn from(err: AdminError) -> Self {
        crate::Error::Admin(err)
    }
}
