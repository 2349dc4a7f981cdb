//! Site orchestration
//!
//! [`Site`] is the entry point the UI shell talks to. It owns the identity
//! store, the session manager and the favorites manager over one shared
//! backend, and keeps favorites in step with the session:
//!
//! * entering a session loads that account's stored favorites;
//! * leaving it clears the in-memory list and keeps the stored one.

use std::sync::Arc;

use crate::{
    Config, Result,
    admin::{AdminError, AdminPanel},
    backend::Backend,
    favorites::FavoritesManager,
    identity::IdentityStore,
    session::{CurrentUser, SessionManager, SessionState},
};

pub struct Site {
    backend: Arc<dyn Backend>,
    config: Config,
    identity: IdentityStore,
    session: SessionManager,
    favorites: FavoritesManager,
}

impl Site {
    /// Open the site over `backend`, restoring a persisted session and its
    /// favorites if present.
    pub async fn open(backend: Box<dyn Backend>, config: Config) -> Result<Self> {
        let backend: Arc<dyn Backend> = Arc::from(backend);
        let identity = IdentityStore::new(backend.clone(), &config);
        let session = SessionManager::restore(identity.clone(), backend.clone(), &config).await?;
        let mut favorites = FavoritesManager::new(backend.clone(), &config);

        if let Some(user) = session.current_user() {
            favorites.activate(&user.email).await?;
        }

        Ok(Self {
            backend,
            config,
            identity,
            session,
            favorites,
        })
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.session.current_user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Whether an account exists for `email`.
    pub async fn check_user_exists(&self, email: &str) -> Result<bool> {
        self.identity.exists(email).await
    }

    /// Log in and load the account's favorites.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<CurrentUser> {
        let user = self.session.login(email, password).await?;
        self.favorites.activate(&user.email).await?;
        Ok(user)
    }

    /// Create an account, log into it and load its (usually empty) favorites.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<CurrentUser> {
        let user = self.session.signup(name, email, password).await?;
        self.favorites.activate(&user.email).await?;
        Ok(user)
    }

    /// End the session and clear the in-memory favorites.
    pub async fn logout(&mut self) -> Result<()> {
        self.session.logout().await?;
        self.favorites.deactivate();
        Ok(())
    }

    pub fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    /// Mutable access to the favorites of the active account.
    ///
    /// Mutations are no-ops while logged out.
    pub fn favorites_mut(&mut self) -> &mut FavoritesManager {
        &mut self.favorites
    }

    /// The admin panel, if the administrator is logged in.
    pub fn admin(&self) -> Result<AdminPanel<'_>> {
        match self.session.current_user() {
            Some(user) if IdentityStore::is_admin(&user.email) => {
                Ok(AdminPanel::new(&self.identity))
            }
            other => {
                let email = other.map(|user| user.email.clone());
                tracing::warn!(email = ?email, "Admin panel access denied");
                Err(AdminError::AccessDenied { email }.into())
            }
        }
    }
}
