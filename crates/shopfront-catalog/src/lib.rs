//! Product catalog access for Shopfront.
//!
//! The cart validates every mutation against live stock data and fetches
//! display metadata when a product first enters the cart. This crate defines
//! the [`StockLookup`] seam plus two implementations: [`HttpCatalog`] for a
//! JSON HTTP API and [`StaticCatalog`] for tests and offline development.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_catalog::{HttpCatalog, ProductId, StockLookup};
//!
//! let catalog = HttpCatalog::new("http://localhost:3333");
//!
//! let stock = catalog.stock_level(ProductId::new(1)).await?;
//! if stock.can_fulfill(3) {
//!     let product = catalog.product(ProductId::new(1)).await?;
//!     println!("{} x3 available", product.title);
//! }
//! ```

mod error;
mod http;
mod lookup;
mod product;

pub use error::CatalogError;
pub use http::HttpCatalog;
pub use lookup::{CatalogResult, StaticCatalog, StockLookup};
pub use product::{Product, ProductId, StockLevel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogError, HttpCatalog, Product, ProductId, StaticCatalog, StockLevel, StockLookup,
    };
}
