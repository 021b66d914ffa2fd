//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO failure from a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
