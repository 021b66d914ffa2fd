//! Key-value persistence backends for Shopfront.
//!
//! The cart persists itself as an opaque string blob under a namespaced key.
//! This crate defines the [`KeyValueStore`] seam plus two backends: an
//! in-memory map for tests and single-process use, and a file-per-key store
//! with atomic replace-on-write.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_kv::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//!
//! // Store a blob
//! store.set("shopfront:cart", "[]".to_string()).await?;
//!
//! // Retrieve it
//! let blob = store.get("shopfront:cart").await?;
//! assert_eq!(blob.as_deref(), Some("[]"));
//! ```

mod error;
mod file;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore, StoreResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StoreError};
}
