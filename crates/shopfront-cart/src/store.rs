//! The cart state container.

use shopfront_catalog::{ProductId, StockLookup};
use shopfront_kv::KeyValueStore;

use crate::cart::{Cart, CartItem};
use crate::error::CartError;
use crate::notice::{LogNotifier, Notice, Notifier};

/// Default storage key the cart persists under.
pub const CART_STORAGE_KEY: &str = "shopfront:cart";

/// State container for a shopper's cart.
///
/// Owns the in-memory [`Cart`] and keeps it in lockstep with the persisted
/// copy: every mutation is validated against live stock, applied to a clone
/// of the cart, persisted, and only then swapped in. A failed lookup or
/// write leaves the previous state untouched.
///
/// Collaborators are injected at construction. Operations take `&mut self`,
/// so the caller's execution model serializes them; there is no retry or
/// locking inside the store.
pub struct CartStore<S: StockLookup, K: KeyValueStore> {
    stock: S,
    store: K,
    notifier: Box<dyn Notifier>,
    storage_key: String,
    cart: Cart,
}

impl<S: StockLookup, K: KeyValueStore> CartStore<S, K> {
    /// Create a store with an empty cart.
    ///
    /// Call [`initialize`](Self::initialize) to load a persisted cart.
    pub fn new(stock: S, store: K) -> Self {
        Self {
            stock,
            store,
            notifier: Box::new(LogNotifier),
            storage_key: CART_STORAGE_KEY.to_string(),
            cart: Cart::new(),
        }
    }

    /// Replace the notice sink (defaults to [`LogNotifier`]).
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Persist under a different key, e.g. one key per session.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Load the persisted cart, if any.
    ///
    /// An absent blob leaves the cart empty. A blob that fails to
    /// deserialize is propagated as [`CartError::Serialization`] and the
    /// in-memory cart is left as it was; the caller decides whether to clear
    /// the key. No notice is emitted.
    pub async fn initialize(&mut self) -> Result<(), CartError> {
        match self.store.get(&self.storage_key).await? {
            Some(blob) => {
                self.cart = serde_json::from_str(&blob)?;
                tracing::debug!(
                    key = %self.storage_key,
                    lines = self.cart.len(),
                    "loaded persisted cart"
                );
            }
            None => {
                self.cart = Cart::new();
            }
        }
        Ok(())
    }

    /// Add one unit of a product to the cart.
    ///
    /// The desired amount is the current line amount plus one, or one for a
    /// product not yet in the cart. Stock is checked before anything else;
    /// product metadata is fetched only when the product first enters the
    /// cart. On any failure the cart is unchanged.
    pub async fn add_product(&mut self, id: ProductId) -> Result<(), CartError> {
        let result = self.try_add(id).await;
        self.report(&result, Notice::AddFailed);
        result
    }

    /// Remove a product's line from the cart.
    ///
    /// Removing a product that is not in the cart is
    /// [`CartError::NotInCart`]; the shopper sees the generic removal
    /// notice.
    pub async fn remove_product(&mut self, id: ProductId) -> Result<(), CartError> {
        let result = self.try_remove(id).await;
        self.report(&result, Notice::RemoveFailed);
        result
    }

    /// Set the amount of a product already in the cart.
    ///
    /// Amounts of zero or less are ignored: nothing is persisted, no notice
    /// is emitted and `Ok(())` is returned. Otherwise the amount is set
    /// exactly (no reorder) after a stock check.
    pub async fn update_product_amount(
        &mut self,
        id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount <= 0 {
            return Ok(());
        }

        let result = self.try_update(id, amount).await;
        self.report(&result, Notice::UpdateFailed);
        result
    }

    async fn try_add(&mut self, id: ProductId) -> Result<(), CartError> {
        let desired = self
            .cart
            .get(id)
            .map(|item| item.amount.saturating_add(1))
            .unwrap_or(1);

        let stock = self.stock.stock_level(id).await?;
        if !stock.can_fulfill(desired) {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: desired,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        match next.get_mut(id) {
            Some(item) => item.amount = desired,
            None => {
                let product = self.stock.product(id).await?;
                next.push(CartItem::new(product, desired));
            }
        }

        self.commit(next).await
    }

    async fn try_remove(&mut self, id: ProductId) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if next.remove(id).is_none() {
            return Err(CartError::NotInCart(id));
        }
        self.commit(next).await
    }

    async fn try_update(&mut self, id: ProductId, amount: i64) -> Result<(), CartError> {
        let stock = self.stock.stock_level(id).await?;
        if !stock.can_fulfill(amount) {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        match next.get_mut(id) {
            Some(item) => item.amount = amount,
            None => return Err(CartError::NotInCart(id)),
        }

        self.commit(next).await
    }

    /// Persist `next`, then make it the current cart.
    async fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        let blob = serde_json::to_string(&next)?;
        self.store.set(&self.storage_key, blob).await?;
        self.cart = next;
        tracing::debug!(
            key = %self.storage_key,
            lines = self.cart.len(),
            units = self.cart.total_units(),
            "cart persisted"
        );
        Ok(())
    }

    /// Map a failed operation to its user-facing notice.
    ///
    /// Stock violations keep their distinct notice; everything else collapses
    /// into the operation's generic one.
    fn report(&self, result: &Result<(), CartError>, fallback: Notice) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "cart operation failed");
            let notice = match err {
                CartError::OutOfStock { .. } => Notice::OutOfStock,
                _ => fallback,
            };
            self.notifier.notify(notice);
        }
    }
}
