//! HTTP catalog client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::lookup::{CatalogResult, StockLookup};
use crate::product::{Product, ProductId, StockLevel};

/// Catalog client for a JSON HTTP API.
///
/// Fetches `stock/{id}` and `products/{id}` relative to a base URL. Requests
/// are single-shot: no retry and no timeout beyond the transport defaults.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client for the catalog at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use an existing `reqwest::Client` (shared connection pool).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> CatalogResult<T> {
        let url = self.endpoint(path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let value = response.json().await?;
        Ok(value)
    }
}

#[async_trait]
impl StockLookup for HttpCatalog {
    async fn stock_level(&self, id: ProductId) -> CatalogResult<StockLevel> {
        self.fetch_json(&format!("stock/{id}")).await
    }

    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        self.fetch_json(&format!("products/{id}")).await
    }
}
