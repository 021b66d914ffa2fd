//! Cart and cart item types.

use serde::{Deserialize, Serialize};
use shopfront_catalog::{Product, ProductId};

/// A product line in the cart: display fields plus the amount.
///
/// The product metadata is captured when the product first enters the cart,
/// so the storefront renders lines without another catalog round trip. Serde
/// flattening keeps the persisted shape flat:
/// `{"id":1,"title":"...","price":9.9,"image":"...","amount":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display metadata of the product on this line.
    #[serde(flatten)]
    pub product: Product,
    /// Units of this product in the cart. Always >= 1.
    pub amount: i64,
}

impl CartItem {
    /// Create a line with the given amount.
    pub fn new(product: Product, amount: i64) -> Self {
        Self { product, amount }
    }

    /// Catalog identifier of the product on this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Line subtotal (unit price times amount).
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.amount as f64
    }
}

/// An ordered shopping cart.
///
/// Holds at most one line per product. Lines keep their insertion order;
/// amount updates never reorder them. Serializes transparently as a bare
/// JSON array of items, which is the persisted blob format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Whether the cart holds a line for a product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (sum of amounts).
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product.id == id)
    }

    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.product.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str, amount: i64) -> CartItem {
        CartItem::new(
            Product {
                id: ProductId::new(id),
                title: title.to_string(),
                price: 10.0,
                image: format!("{title}.jpg"),
            },
            amount,
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_units(), 0);
        assert!(!cart.contains(ProductId::new(1)));
    }

    #[test]
    fn test_push_and_get() {
        let mut cart = Cart::new();
        cart.push(item(1, "Sneaker", 2));

        assert!(cart.contains(ProductId::new(1)));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 2);
        assert_eq!(cart.get(ProductId::new(2)), None);
    }

    #[test]
    fn test_total_units_sums_amounts() {
        let mut cart = Cart::new();
        cart.push(item(1, "Sneaker", 2));
        cart.push(item(2, "Mug", 3));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_units(), 5);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut cart = Cart::new();
        cart.push(item(1, "Sneaker", 1));
        cart.push(item(2, "Mug", 1));
        cart.push(item(3, "Cap", 1));

        let removed = cart.remove(ProductId::new(2)).unwrap();
        assert_eq!(removed.product_id(), ProductId::new(2));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut cart = Cart::new();
        cart.push(item(1, "Sneaker", 1));

        assert_eq!(cart.remove(ProductId::new(9)), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_subtotal() {
        let line = item(1, "Sneaker", 3);
        assert_eq!(line.subtotal(), 30.0);
    }

    #[test]
    fn test_serializes_as_bare_array_with_flat_items() {
        let mut cart = Cart::new();
        cart.push(CartItem::new(
            Product {
                id: ProductId::new(1),
                title: "Sneaker".to_string(),
                price: 179.9,
                image: "sneaker.jpg".to_string(),
            },
            2,
        ));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"title":"Sneaker","price":179.9,"image":"sneaker.jpg","amount":2}]"#
        );
    }

    #[test]
    fn test_deserializes_persisted_blob() {
        let blob = r#"[
            {"id":1,"title":"Sneaker","price":179.9,"image":"sneaker.jpg","amount":2},
            {"id":2,"title":"Mug","price":9.9,"image":"mug.jpg","amount":1}
        ]"#;

        let cart: Cart = serde_json::from_str(blob).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 2);
        assert_eq!(cart.items()[1].product.title, "Mug");
    }
}
