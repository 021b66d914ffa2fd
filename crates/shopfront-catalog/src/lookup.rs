//! The stock lookup seam and an in-memory catalog.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::CatalogError;
use crate::product::{Product, ProductId, StockLevel};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only view of the product catalog and its stock levels.
///
/// Lookups never mutate anything; an unknown id is a normal error, not a
/// panic. Implementations carry no retry or timeout policy of their own.
#[async_trait]
pub trait StockLookup: Send + Sync {
    /// Units currently available for a product (`stock/{id}`).
    async fn stock_level(&self, id: ProductId) -> CatalogResult<StockLevel>;

    /// Display metadata for a product (`products/{id}`).
    async fn product(&self, id: ProductId) -> CatalogResult<Product>;
}

/// In-memory catalog for tests and offline development.
///
/// Clones share the same underlying state, so a test can keep a handle and
/// adjust stock after handing the catalog to a consumer.
#[derive(Clone, Default)]
pub struct StaticCatalog {
    inner: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, i64>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with an initial stock amount.
    pub async fn insert(&self, product: Product, amount: i64) {
        let mut state = self.inner.lock().await;
        state.stock.insert(product.id, amount);
        state.products.insert(product.id, product);
    }

    /// Overwrite the stock amount for a product.
    pub async fn set_stock(&self, id: ProductId, amount: i64) {
        let mut state = self.inner.lock().await;
        state.stock.insert(id, amount);
    }
}

#[async_trait]
impl StockLookup for StaticCatalog {
    async fn stock_level(&self, id: ProductId) -> CatalogResult<StockLevel> {
        let state = self.inner.lock().await;
        match state.stock.get(&id) {
            Some(amount) => Ok(StockLevel::new(*amount)),
            None => Err(CatalogError::UnknownProduct(id)),
        }
    }

    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        let state = self.inner.lock().await;
        state
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::UnknownProduct(id))
    }
}
