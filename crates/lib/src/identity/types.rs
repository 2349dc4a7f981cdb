//! Core data types for the identity system

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Account record stored in the users mapping, keyed by email.
///
/// The password is kept as typed, matching data already written by the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Display name
    pub name: String,

    /// Secret compared on login
    pub password: String,
}

/// The full email → account mapping as stored.
pub type AccountMap = BTreeMap<String, AccountRecord>;

/// Public view of an account, without its secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub email: String,
    pub name: String,
}
