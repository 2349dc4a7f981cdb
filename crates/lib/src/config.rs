//! Runtime configuration
//!
//! [`Config`] names the storage keys the site uses and the artificial
//! latency applied to account operations. Defaults match the keys the site
//! has always written, so existing stored data is picked up unchanged.
//!
//! # Example
//!
//! ```
//! use egytravel::{Config, Latency};
//!
//! let config = Config::default().with_latency(Latency::simulated());
//! assert_eq!(config.favorites_key("ann@x.com"), "favorites-ann@x.com");
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    constants::{FAVORITES_PREFIX, SESSION_KEY, USERS_KEY},
};

/// Library configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key holding the email → account mapping
    pub users_key: String,

    /// Key holding the persisted session record
    pub session_key: String,

    /// Prefix prepended to an email to form its favorites key
    pub favorites_prefix: String,

    /// Artificial delays applied before account operations
    pub latency: Latency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_key: USERS_KEY.to_string(),
            session_key: SESSION_KEY.to_string(),
            favorites_prefix: FAVORITES_PREFIX.to_string(),
            latency: Latency::none(),
        }
    }
}

impl Config {
    /// Replace the latency settings.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Storage key of the favorites list belonging to `email`.
    pub fn favorites_key(&self, email: &str) -> String {
        format!("{}{email}", self.favorites_prefix)
    }

    /// Parse a configuration from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }
}

/// Artificial delays, in milliseconds, applied before account operations.
///
/// The delays mimic a remote account service. They are awaited before the
/// store is touched, so dropping an in-flight operation during its delay
/// leaves storage unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    /// Delay before an account existence check
    pub exists_ms: u64,

    /// Delay before a login attempt
    pub login_ms: u64,

    /// Delay before a signup attempt
    pub signup_ms: u64,
}

impl Latency {
    /// No artificial delay.
    pub const fn none() -> Self {
        Self {
            exists_ms: 0,
            login_ms: 0,
            signup_ms: 0,
        }
    }

    /// The delays the site has always shown: 300 ms for existence checks,
    /// 500 ms for login and signup.
    pub const fn simulated() -> Self {
        Self {
            exists_ms: 300,
            login_ms: 500,
            signup_ms: 500,
        }
    }

    pub fn exists(&self) -> Duration {
        Duration::from_millis(self.exists_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn signup(&self) -> Duration {
        Duration::from_millis(self.signup_ms)
    }
}

/// Wait out an artificial delay. Zero durations return immediately.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
