//! Identity system for Egytravel
//!
//! Provides the email-keyed account directory: existence checks, account
//! creation, credential checks and the always-present administrator.

pub mod errors;
pub mod store;
pub mod types;

pub use errors::AccountError;
pub use store::IdentityStore;
pub use types::*;
