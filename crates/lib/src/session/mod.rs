//! Session management
//!
//! Tracks the single active identity and persists it under the session key,
//! so a restart picks up where the user left off.
//!
//! The manager is a two-state machine:
//!
//! * `LoggedOut`: the initial state unless a persisted record is found.
//! * `LoggedIn`: entered by a successful [`SessionManager::login`] or
//!   [`SessionManager::signup`], or by restoring a persisted record.
//!
//! Logging in or signing up while already logged in replaces the current
//! identity.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    Config, Latency, Result,
    backend::{Backend, load_json, store_json},
    config::simulate,
    identity::{AccountError, IdentityStore},
};

/// The identity a session belongs to, as persisted under the session key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

impl CurrentUser {
    /// Name to greet the user with, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(CurrentUser),
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::LoggedIn(user) => Some(user),
            SessionState::LoggedOut => None,
        }
    }
}

/// Owns the active-session pointer and orchestrates identity checks.
pub struct SessionManager {
    identity: IdentityStore,
    backend: Arc<dyn Backend>,
    session_key: String,
    latency: Latency,
    state: SessionState,
}

impl SessionManager {
    /// Create a manager, restoring a persisted session if one exists.
    ///
    /// A restored session is trusted as is; the password is not checked
    /// again. An unparseable record is logged and ignored.
    pub async fn restore(
        identity: IdentityStore,
        backend: Arc<dyn Backend>,
        config: &Config,
    ) -> Result<Self> {
        let state = match load_json::<CurrentUser>(backend.as_ref(), &config.session_key).await? {
            Some(user) => {
                tracing::debug!(email = %user.email, "Restored persisted session");
                SessionState::LoggedIn(user)
            }
            None => SessionState::LoggedOut,
        };

        Ok(Self {
            identity,
            backend,
            session_key: config.session_key.clone(),
            latency: config.latency,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.state.user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    /// Log in with an email and password.
    ///
    /// Fails with [`AccountError::NoSuchAccount`] for an unknown email and
    /// [`AccountError::InvalidCredential`] for a wrong password. On failure
    /// the current state is left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<CurrentUser> {
        simulate(self.latency.login()).await;

        let Some(record) = self.identity.get(email).await? else {
            tracing::debug!(email = %email, "Login for unknown account");
            return Err(AccountError::NoSuchAccount {
                email: email.to_string(),
            }
            .into());
        };
        if record.password != password {
            tracing::debug!(email = %email, "Login with wrong password");
            return Err(AccountError::InvalidCredential {
                email: email.to_string(),
            }
            .into());
        }

        let user = CurrentUser {
            name: Some(record.name),
            email: email.to_string(),
        };
        self.enter(user.clone()).await?;
        tracing::info!(email = %email, "Logged in");
        Ok(user)
    }

    /// Create an account and log straight into it.
    ///
    /// Fails with [`AccountError::AlreadyExists`] if the email is taken; the
    /// caller decides whether to offer a login instead.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<CurrentUser> {
        simulate(self.latency.signup()).await;

        self.identity.create(email, name, password).await?;

        let user = CurrentUser {
            name: Some(name.to_string()),
            email: email.to_string(),
        };
        self.enter(user.clone()).await?;
        tracing::info!(email = %email, "Signed up and logged in");
        Ok(user)
    }

    /// End the session. Always succeeds in reaching `LoggedOut` unless the
    /// backend fails to remove the record.
    pub async fn logout(&mut self) -> Result<()> {
        self.backend.remove(&self.session_key).await?;
        if let SessionState::LoggedIn(user) = std::mem::take(&mut self.state) {
            tracing::info!(email = %user.email, "Logged out");
        }
        Ok(())
    }

    async fn enter(&mut self, user: CurrentUser) -> Result<()> {
        store_json(self.backend.as_ref(), &self.session_key, &user).await?;
        self.state = SessionState::LoggedIn(user);
        Ok(())
    }
}
