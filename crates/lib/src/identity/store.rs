//! Identity store
//!
//! Owns the email → account mapping persisted under the users key.
//!
//! Every operation reads the whole mapping, mutates it in memory and writes
//! it back. There is one writer per store, so no merge or compare-and-swap is
//! attempted.

use std::sync::Arc;

use super::{
    errors::AccountError,
    types::{AccountMap, AccountRecord, AccountSummary},
};
use crate::{
    Config, Latency, Result,
    backend::{Backend, load_json, store_json},
    config::simulate,
    constants::{ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD},
};

/// Handle to the persisted account mapping.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct IdentityStore {
    backend: Arc<dyn Backend>,
    users_key: String,
    latency: Latency,
}

impl IdentityStore {
    pub fn new(backend: Arc<dyn Backend>, config: &Config) -> Self {
        Self {
            backend,
            users_key: config.users_key.clone(),
            latency: config.latency,
        }
    }

    /// Whether `email` is the built-in administrator.
    pub fn is_admin(email: &str) -> bool {
        email == ADMIN_EMAIL
    }

    /// Make sure the administrator account exists.
    ///
    /// Idempotent. Storage is only written when the entry was missing.
    pub async fn ensure_bootstrap(&self) -> Result<()> {
        self.accounts().await.map(|_| ())
    }

    /// Read the full mapping, bootstrapping the administrator if needed.
    ///
    /// A missing or unparseable mapping reads as empty, so the result always
    /// holds at least the administrator.
    pub async fn accounts(&self) -> Result<AccountMap> {
        let mut accounts: AccountMap = load_json(self.backend.as_ref(), &self.users_key)
            .await?
            .unwrap_or_default();

        if !accounts.contains_key(ADMIN_EMAIL) {
            accounts.insert(
                ADMIN_EMAIL.to_string(),
                AccountRecord {
                    name: ADMIN_NAME.to_string(),
                    password: ADMIN_PASSWORD.to_string(),
                },
            );
            self.save(&accounts).await?;
            tracing::info!(email = ADMIN_EMAIL, "Bootstrapped administrator account");
        }

        Ok(accounts)
    }

    async fn save(&self, accounts: &AccountMap) -> Result<()> {
        store_json(self.backend.as_ref(), &self.users_key, accounts).await
    }

    /// Whether an account exists for `email`.
    ///
    /// Waits out the configured existence-check latency first.
    pub async fn exists(&self, email: &str) -> Result<bool> {
        simulate(self.latency.exists()).await;
        Ok(self.accounts().await?.contains_key(email))
    }

    /// Fetch the record stored for `email`.
    pub async fn get(&self, email: &str) -> Result<Option<AccountRecord>> {
        Ok(self.accounts().await?.remove(email))
    }

    /// Register a new account.
    ///
    /// Fails with [`AccountError::AlreadyExists`] without touching the
    /// existing record if `email` is taken.
    pub async fn create(&self, email: &str, name: &str, password: &str) -> Result<()> {
        let mut accounts = self.accounts().await?;
        if accounts.contains_key(email) {
            return Err(AccountError::AlreadyExists {
                email: email.to_string(),
            }
            .into());
        }

        accounts.insert(
            email.to_string(),
            AccountRecord {
                name: name.to_string(),
                password: password.to_string(),
            },
        );
        self.save(&accounts).await?;
        tracing::info!(email = %email, "Created account");
        Ok(())
    }

    /// Whether `email` exists and its stored password equals `password`.
    pub async fn verify(&self, email: &str, password: &str) -> Result<bool> {
        Ok(self
            .get(email)
            .await?
            .is_some_and(|record| record.password == password))
    }

    /// All accounts as (email, name) pairs, ordered by email.
    pub async fn list(&self) -> Result<Vec<AccountSummary>> {
        Ok(self
            .accounts()
            .await?
            .into_iter()
            .map(|(email, record)| AccountSummary {
                email,
                name: record.name,
            })
            .collect())
    }

    /// Remove the account for `email`.
    ///
    /// The administrator can never be removed. Favorites stored for the
    /// account are left as they are.
    pub async fn delete(&self, email: &str) -> Result<()> {
        if Self::is_admin(email) {
            return Err(AccountError::ProtectedAccount {
                email: email.to_string(),
            }
            .into());
        }

        let mut accounts = self.accounts().await?;
        if accounts.remove(email).is_none() {
            return Err(AccountError::NoSuchAccount {
                email: email.to_string(),
            }
            .into());
        }
        self.save(&accounts).await?;
        tracing::info!(email = %email, "Deleted account");
        Ok(())
    }
}
