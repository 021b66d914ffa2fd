//! Cart error types.

use thiserror::Error;

use shopfront_catalog::{CatalogError, ProductId};
use shopfront_kv::StoreError;

/// Errors that can occur in cart operations.
///
/// Stock violations and missing lines are distinct kinds so callers can
/// branch on them; the user-facing [`Notice`](crate::Notice) channel collapses
/// everything but stock violations into one generic message per operation.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity exceeds available stock.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Product not in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persisting or loading the cart failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serializing or deserializing the cart failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
