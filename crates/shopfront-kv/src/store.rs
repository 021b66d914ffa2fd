//! The key-value seam and its in-memory backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Backend trait for persisting opaque string blobs under string keys.
///
/// `set` replaces the whole value for a key; `get` returns `None` for a key
/// that has never been written. Keys are namespaced by convention, e.g.
/// `shopfront:cart`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;
}

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a consumer wrote through its own clone.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the value stored under `key`, returning it if present.
    pub async fn remove(&self, key: &str) -> Option<String> {
        let mut map = self.inner.lock().await;
        map.remove(key)
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.inner.lock().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let mut map = self.inner.lock().await;
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("shopfront:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("shopfront:cart", "[]".to_string()).await.unwrap();

        let value = store.get("shopfront:cart").await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("key", "first".to_string()).await.unwrap();
        store.set("key", "second".to_string()).await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("key", "value".to_string()).await.unwrap();

        assert_eq!(observer.get("key").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_remove_returns_previous_value() {
        let store = MemoryStore::new();
        store.set("key", "value".to_string()).await.unwrap();

        assert_eq!(store.remove("key").await.as_deref(), Some("value"));
        assert!(store.is_empty().await);
        assert_eq!(store.remove("key").await, None);
    }
}
