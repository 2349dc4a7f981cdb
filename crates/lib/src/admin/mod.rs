//! Administrator user management
//!
//! An [`AdminPanel`] is only handed out by [`crate::Site::admin`] while the
//! built-in administrator is logged in, so holding one is proof of access.

pub mod errors;

pub use errors::AdminError;

use crate::{
    Result,
    identity::{AccountSummary, IdentityStore},
};

/// User management operations available to the administrator.
pub struct AdminPanel<'a> {
    identity: &'a IdentityStore,
}

impl<'a> AdminPanel<'a> {
    pub(crate) fn new(identity: &'a IdentityStore) -> Self {
        Self { identity }
    }

    /// Every account, ordered by email.
    pub async fn users(&self) -> Result<Vec<AccountSummary>> {
        self.identity.list().await
    }

    /// Accounts whose email or name contains `query`, ignoring case.
    ///
    /// An empty query returns every account.
    pub async fn search_users(&self, query: &str) -> Result<Vec<AccountSummary>> {
        let users = self.identity.list().await?;
        if query.is_empty() {
            return Ok(users);
        }

        let needle = query.to_lowercase();
        Ok(users
            .into_iter()
            .filter(|user| {
                user.email.to_lowercase().contains(&needle)
                    || user.name.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Delete the account for `email`.
    ///
    /// The administrator account is refused with
    /// [`AdminError::CannotDeleteAdmin`]; unknown emails fail with
    /// [`crate::identity::AccountError::NoSuchAccount`].
    pub async fn delete_user(&self, email: &str) -> Result<()> {
        if IdentityStore::is_admin(email) {
            return Err(AdminError::CannotDeleteAdmin.into());
        }
        self.identity.delete(email).await?;
        tracing::info!(email = %email, "Admin deleted user");
        Ok(())
    }
}
