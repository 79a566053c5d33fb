//! Shared cart handle.

use crate::cart::{Cart, CartPricing, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to one cart.
///
/// Clones share the same cart. Every read and write goes through a mutex,
/// so callers on different threads are serialized and each operation sees
/// the effects of the ones before it.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Create a handle to a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    // A poisoned lock still guards a valid cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a closure with shared access to the cart.
    pub fn read<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(&*self.lock())
    }

    /// Run a closure with exclusive access to the cart.
    pub fn update<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        f(&mut *self.lock())
    }

    /// A copy of the cart as it is now.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// See [`Cart::add_to_cart`].
    pub fn add_to_cart(&self, product: &Product) {
        self.lock().add_to_cart(product);
    }

    /// See [`Cart::add_quantity`].
    pub fn add_quantity(&self, product: &Product, quantity: i64) {
        self.lock().add_quantity(product, quantity);
    }

    /// See [`Cart::remove_from_cart`].
    pub fn remove_from_cart(&self, product_id: &ProductId) -> bool {
        self.lock().remove_from_cart(product_id)
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> bool {
        self.lock().update_quantity(product_id, quantity)
    }

    /// See [`Cart::clear_cart`].
    pub fn clear_cart(&self) {
        self.lock().clear_cart();
    }

    /// See [`Cart::total_price`].
    pub fn total_price(&self) -> Money {
        self.lock().total_price()
    }

    /// See [`Cart::pricing`].
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        self.lock().pricing(policy)
    }

    /// See [`Cart::item_count`].
    pub fn item_count(&self) -> i64 {
        self.lock().item_count()
    }

    /// See [`Cart::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn gloves() -> Product {
        Product::new("3", "GripMaster Pro Gloves", Money::from_cents(5999), "gloves")
    }

    #[test]
    fn test_clones_share_state() {
        let cart = SharedCart::new();
        let other = cart.clone();
        other.add_to_cart(&gloves());

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_price(), Money::from_cents(5999));
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let cart = SharedCart::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cart = cart.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        cart.add_to_cart(&gloves());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.unique_item_count(), 1);
        assert_eq!(snapshot.item_count(), 2000);
    }

    #[test]
    fn test_update_closure() {
        let cart = SharedCart::new();
        let removed = cart.update(|c| {
            c.add_to_cart(&gloves());
            c.update_quantity(&ProductId::new("3"), 0)
        });

        assert!(removed);
        assert!(cart.read(Cart::is_empty));
    }
}
