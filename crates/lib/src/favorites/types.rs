//! Favorite item type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bookmarked catalog entry.
///
/// Only `id` is interpreted. Every other field (title, location, price, …)
/// is carried in `details` and stored back exactly as it was read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: u64,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl FavoriteItem {
    /// An item with no display fields.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            details: Map::new(),
        }
    }

    /// Add or replace a display field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// The `title` display field, if it is a string.
    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }

    /// The `location` display field, if it is a string.
    pub fn location(&self) -> Option<&str> {
        self.details.get("location").and_then(Value::as_str)
    }
}
