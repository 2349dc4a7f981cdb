//!
//! Egytravel: accounts, sessions and favorites for the Egypt travel site.
//! This library provides the stateful core behind the site's navigation bar,
//! login and signup forms, favorites popover and admin panel.
//!
//! ## Core Concepts
//!
//! * **Backends (`backend::Backend`)**: A pluggable key-value storage layer. Every value is UTF-8 JSON text.
//! * **Identity Store (`identity::IdentityStore`)**: The email → account mapping, with a built-in administrator that always exists.
//! * **Sessions (`session::SessionManager`)**: The single active identity, persisted so it survives restarts.
//! * **Favorites (`favorites::FavoritesManager`)**: Per-account lists of bookmarked hotel listings.
//! * **Site (`site::Site`)**: Wires the above together and keeps favorites in step with session transitions.
//! * **Admin (`admin::AdminPanel`)**: User management, available only to the administrator session.
//! * **Catalog (`catalog`)**: The destinations and hotel listings the site offers, with location search.
//! * **Forms (`forms`)**: Field checks run before login and signup are attempted.

pub mod admin;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod favorites;
pub mod forms;
pub mod identity;
pub mod session;
pub mod site;

pub use config::{Config, Latency};
pub use site::Site;

/// Result type used throughout the Egytravel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Egytravel library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured account errors from the identity module
    #[error(transparent)]
    Account(identity::AccountError),

    /// Structured admin errors from the admin module
    #[error(transparent)]
    Admin(admin::AdminError),

    /// Structured validation errors from the forms module
    #[error(transparent)]
    Form(forms::FormError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Backend(_) => "backend",
            Error::Account(_) => "identity",
            Error::Admin(_) => "admin",
            Error::Form(_) => "forms",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_already_exists(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Admin(admin_err) => admin_err.is_permission_denied(),
            Error::Account(account_err) => account_err.is_protected(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Backend(backend_err) => backend_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Form(_))
    }

    /// Message suitable for showing to the person filling in a form.
    ///
    /// Falls back to the error's `Display` output for errors that have no
    /// dedicated wording on the site.
    pub fn user_message(&self) -> String {
        match self {
            Error::Account(account_err) => account_err.user_message().to_string(),
            Error::Form(form_err) => form_err.user_message().to_string(),
            Error::Admin(admin_err) => admin_err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
