//! Constants used throughout the Egytravel library.
//!
//! This module provides central definitions for the storage keys the site
//! writes and the built-in administrator account.

/// Storage key holding the email → account mapping.
pub const USERS_KEY: &str = "egypt-travel-users";

/// Storage key holding the persisted session record.
pub const SESSION_KEY: &str = "loggedInUser";

/// Prefix of the per-account favorites keys (`favorites-<email>`).
pub const FAVORITES_PREFIX: &str = "favorites-";

/// Email of the built-in administrator account.
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Display name of the built-in administrator account.
pub const ADMIN_NAME: &str = "Administrator";

/// Password of the built-in administrator account.
pub const ADMIN_PASSWORD: &str = "1234";
