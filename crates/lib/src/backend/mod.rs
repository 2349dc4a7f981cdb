//! Backend implementations for Egytravel storage
//!
//! This module provides the core `Backend` trait and the backend
//! implementations, organized by category.
//!
//! The `Backend` trait is a plain string key-value store, the same shape as a
//! browser's local storage. Every value the library writes is JSON text; the
//! typed helpers [`load_json`] and [`store_json`] handle the encoding so the
//! account, session and favorites logic never touches raw strings.

use std::any::Any;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

// Category modules
pub mod database;
pub mod errors;

pub use errors::BackendError;

/// Key-value storage abstraction used by every stateful component.
///
/// Implementations must be `Send` and `Sync` so a backend can be shared
/// behind an `Arc`, and implement `Any` to allow downcasting (for example to
/// save an [`database::InMemory`] backend to disk).
///
/// Writes replace the whole value stored under a key. There is no
/// compare-and-swap: with more than one writer the last write wins.
#[async_trait]
pub trait Backend: Send + Sync + Any {
    /// Retrieves the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Lists every key currently stored, in no particular order.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Returns a reference to the backend as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Reads and decodes the JSON value stored under `key`.
///
/// Returns `Ok(None)` when the key is absent. A value that does not decode as
/// `T` is logged and also reported as `None`: stored data with the wrong shape
/// is treated as missing rather than failing the caller's operation.
pub async fn load_json<T: DeserializeOwned>(
    backend: &dyn Backend,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = backend.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Discarding unparseable stored value");
            Ok(None)
        }
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub async fn store_json<T: Serialize + ?Sized>(
    backend: &dyn Backend,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| BackendError::SerializationFailed { source: e })?;
    backend.set(key, json).await
}
