//! Key-value persistence.
//!
//! Provides a string-valued [`KeyValueStore`] trait with in-memory and SQLite
//! backends, and [`JsonStore`], which layers typed JSON values on top.

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Backend trait for string key-value storage.
///
/// `set_item` overwrites any existing value for the key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value under a key.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed JSON store.
///
/// Wraps a [`KeyValueStore`] and encodes values with `serde_json`.
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    /// Create a new store over the given backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a store over a backend that is shared elsewhere.
    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get_item(key).await? {
            Some(raw) => Ok(Some(
                serde_json::from_str(&raw).map_err(StoreError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialization)?;
        self.backend.set_item(key, &raw).await
    }

    /// Get the raw string stored under a key.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.backend.get_item(key).await
    }

    /// Store a raw string under a key.
    pub async fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.set_item(key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocalIdentity;

    #[tokio::test]
    async fn test_typed_values() {
        let store = JsonStore::new(MemoryStore::new());
        let identity = LocalIdentity::new("1", "Ana Maria", "ana@x.com");

        store.set("@userInfo", &identity).await.unwrap();
        let loaded: Option<LocalIdentity> = store.get("@userInfo").await.unwrap();
        assert_eq!(loaded, Some(identity));

        let missing: Option<LocalIdentity> = store.get("@nothing").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_value_is_deserialization_error() {
        let store = JsonStore::new(MemoryStore::new());
        store.set_raw("@userInfo", "not json").await.unwrap();

        let result = store.get::<LocalIdentity>("@userInfo").await;
        assert!(matches!(result, Err(StoreError::Deserialization(_))));
    }
}
