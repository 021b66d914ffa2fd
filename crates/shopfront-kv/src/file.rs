//! File-backed key-value store.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::{KeyValueStore, StoreResult};

/// Key-value store persisting each key as one file under a root directory.
///
/// Writes replace the whole file atomically: the value goes to a sibling
/// `.tmp` file, is flushed and synced, then renamed over the target. A reader
/// never observes a torn value.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are namespaced with ':'; map everything non-portable to '_'
        // so the file name stays flat and the ".tmp" sibling never collides
        // with another key.
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(file_name)
    }

    fn read_value(path: &Path) -> StoreResult<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let mut file = File::open(path)?;
        let mut value = String::new();
        file.read_to_string(&mut value)?;
        Ok(Some(value))
    }

    fn write_value(root: &Path, path: &Path, value: &str) -> StoreResult<()> {
        fs::create_dir_all(root)?;
        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        tokio::task::spawn_blocking(move || Self::read_value(&path))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let root = self.root.clone();
        let path = self.path_for(key);
        let bytes = value.len();
        tokio::task::spawn_blocking(move || Self::write_value(&root, &path, &value))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))??;
        tracing::debug!(key, bytes, "persisted value to file store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("shopfront:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("shopfront:cart", r#"[{"id":1}]"#.to_string())
            .await
            .unwrap();

        let value = store.get("shopfront:cart").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[tokio::test]
    async fn test_set_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("key", "a much longer first value".to_string())
            .await
            .unwrap();
        store.set("key", "short".to_string()).await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("short"));
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();

        let store = FileStore::new(dir.path());
        store.set("shopfront:cart", "[]".to_string()).await.unwrap();
        drop(store);

        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.get("shopfront:cart").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("key", "value".to_string()).await.unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_get_distinct_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("shopfront:cart", "a".to_string()).await.unwrap();
        store
            .set("shopfront:session", "b".to_string())
            .await
            .unwrap();

        assert_eq!(store.get("shopfront:cart").await.unwrap().as_deref(), Some("a"));
        assert_eq!(
            store.get("shopfront:session").await.unwrap().as_deref(),
            Some("b")
        );
    }
}
