//! Product catalog data models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product in the catalog.
///
/// A newtype keeps product ids from being mixed up with amounts or other
/// numeric values. Serializes as the bare integer the catalog API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Product information as served by `products/{id}`.
///
/// These are the display fields a cart line carries, so the storefront can
/// render the cart without a second catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    pub image: String,
}

/// Stock information as served by `stock/{id}`.
///
/// The payload contract is just the amount; any extra fields the stock
/// service sends alongside are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Units currently available.
    pub amount: i64,
}

impl StockLevel {
    /// Create a new stock level.
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}
