#![allow(dead_code)]

use std::sync::Arc;

use egytravel::{Config, Site, backend::Backend, backend::database::InMemory};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// A shared backend handle that a test can keep after handing a boxed
/// backend to `Site::open`, to inspect what was written.
#[derive(Clone, Default)]
pub struct SharedBackend(pub Arc<InMemory>);

#[async_trait::async_trait]
impl Backend for SharedBackend {
    async fn get(&self, key: &str) -> egytravel::Result<Option<String>> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> egytravel::Result<()> {
        self.0.set(key, value).await
    }

    async fn remove(&self, key: &str) -> egytravel::Result<()> {
        self.0.remove(key).await
    }

    async fn keys(&self) -> egytravel::Result<Vec<String>> {
        self.0.keys().await
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl SharedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.0.get(key).await.expect("InMemory get cannot fail")
    }

    /// Value stored under `key`, parsed as JSON.
    pub async fn json(&self, key: &str) -> Option<serde_json::Value> {
        self.raw(key)
            .await
            .map(|raw| serde_json::from_str(&raw).expect("stored value should be JSON"))
    }
}

/// Open a site over a fresh backend with default configuration.
pub async fn test_site() -> Site {
    Site::open(Box::new(InMemory::new()), Config::default())
        .await
        .expect("Failed to open site")
}

/// Open a site over `backend` with default configuration.
pub async fn site_on(backend: &SharedBackend) -> Site {
    site_with_config(backend, Config::default()).await
}

/// Open a site over `backend` with `config`.
pub async fn site_with_config(backend: &SharedBackend, config: Config) -> Site {
    Site::open(Box::new(backend.clone()), config)
        .await
        .expect("Failed to open site")
}
