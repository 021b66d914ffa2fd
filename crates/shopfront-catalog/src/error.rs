//! Catalog error types.

use thiserror::Error;

use crate::product::ProductId;

/// Errors that can occur when querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed (transport or body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The catalog has no such product.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}
