//! Cart state for the Shopfront storefront.
//!
//! [`CartStore`] owns the shopper's cart: an ordered list of product lines,
//! at most one per product. Every mutation is validated against live stock
//! through a `shopfront_catalog::StockLookup`, persisted as a JSON blob
//! through a `shopfront_kv::KeyValueStore`, and only then made visible.
//! User-facing failures collapse into the small [`Notice`] catalog; callers
//! still get the precise [`CartError`] kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_cart::CartStore;
//! use shopfront_catalog::{HttpCatalog, ProductId};
//! use shopfront_kv::FileStore;
//!
//! let mut store = CartStore::new(
//!     HttpCatalog::new("http://localhost:3333"),
//!     FileStore::new("./data"),
//! );
//! store.initialize().await?;
//!
//! store.add_product(ProductId::new(1)).await?;
//! store.update_product_amount(ProductId::new(1), 3).await?;
//!
//! for item in store.cart().items() {
//!     println!("{} x{}", item.product.title, item.amount);
//! }
//! ```

mod cart;
mod error;
mod notice;
mod store;

pub use cart::{Cart, CartItem};
pub use error::CartError;
pub use notice::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use store::{CartStore, CART_STORAGE_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cart, CartError, CartItem, CartStore, Notice, Notifier, CART_STORAGE_KEY};
}
