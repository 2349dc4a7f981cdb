//! Per-account favorites
//!
//! Holds the favorites list of the active account in memory and mirrors every
//! change to storage under `<favorites_prefix><email>`.
//!
//! The manager has no session of its own. [`crate::Site`] calls
//! [`FavoritesManager::activate`] when a session starts and
//! [`FavoritesManager::deactivate`] when it ends; while inactive every
//! mutation is a no-op.

pub mod types;

use std::sync::Arc;

pub use types::FavoriteItem;

use crate::{
    Config, Result,
    backend::{Backend, load_json, store_json},
};

pub struct FavoritesManager {
    backend: Arc<dyn Backend>,
    prefix: String,
    /// Email of the account whose list is loaded; `None` while logged out
    owner: Option<String>,
    items: Vec<FavoriteItem>,
}

impl FavoritesManager {
    pub fn new(backend: Arc<dyn Backend>, config: &Config) -> Self {
        Self {
            backend,
            prefix: config.favorites_prefix.clone(),
            owner: None,
            items: Vec::new(),
        }
    }

    fn key_for(&self, email: &str) -> String {
        format!("{}{email}", self.prefix)
    }

    /// Load the stored list for `email` and make it the active list.
    ///
    /// A missing or unparseable list loads as empty. Nothing is written.
    pub async fn activate(&mut self, email: &str) -> Result<()> {
        let key = self.key_for(email);
        let items: Vec<FavoriteItem> = load_json(self.backend.as_ref(), &key)
            .await?
            .unwrap_or_default();
        tracing::debug!(email = %email, count = items.len(), "Loaded favorites");

        self.owner = Some(email.to_string());
        self.items = items;
        Ok(())
    }

    /// Drop the in-memory list. Stored favorites are kept.
    pub fn deactivate(&mut self) {
        self.owner = None;
        self.items.clear();
    }

    /// Email of the account whose favorites are loaded.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Add `item` unless it is already a favorite.
    ///
    /// Returns `false` without writing when inactive or when an item with the
    /// same id is present.
    pub async fn add(&mut self, item: FavoriteItem) -> Result<bool> {
        if self.owner.is_none() || self.is_favorite(item.id) {
            return Ok(false);
        }

        self.items.push(item);
        self.persist().await?;
        Ok(true)
    }

    /// Remove the item with `id`.
    ///
    /// Returns `false` without writing when inactive or when no such item is
    /// present. Removing the last item stores an empty list.
    pub async fn remove(&mut self, id: u64) -> Result<bool> {
        if self.owner.is_none() {
            return Ok(false);
        }

        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }

        self.persist().await?;
        Ok(true)
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    async fn persist(&self) -> Result<()> {
        if let Some(owner) = &self.owner {
            store_json(self.backend.as_ref(), &self.key_for(owner), &self.items).await?;
        }
        Ok(())
    }
}
