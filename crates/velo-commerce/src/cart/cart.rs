//! Cart and line item types.

use crate::cart::{CartPricing, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A shopping cart.
///
/// Lines are kept in the order products were first added, with at most one
/// line per product and every quantity at least 1. Every operation is
/// total: unknown product ids are ignored rather than reported.
///
/// Serialize-only: carts are built through their operations, never parsed.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = line.quantity, "incremented cart line");
            return;
        }

        self.lines.push(CartLine::new(product.clone()));
        tracing::debug!(product_id = %product.id, "added cart line");
    }

    /// Add `quantity` units of a product, one at a time.
    ///
    /// Same result as calling [`add_to_cart`](Self::add_to_cart) `quantity`
    /// times. Non-positive quantities do nothing.
    pub fn add_quantity(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }

        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => {
                let mut line = CartLine::new(product.clone());
                line.quantity = quantity;
                self.lines.push(line);
            }
        }
        tracing::debug!(product_id = %product.id, added = quantity, "added units to cart");
    }

    /// Remove the line for a product.
    ///
    /// Returns whether a line was removed; an unknown id is a no-op.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| &line.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "removed cart line");
        }
        removed
    }

    /// Set a line's quantity exactly.
    ///
    /// A quantity of 0 or below removes the line. Returns whether a line
    /// was changed or removed; an unknown id is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::debug!(product_id = %product_id, quantity, "updated cart line");
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("cleared cart");
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Derive shipping, tax and grand total under a pricing policy.
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        policy.price(self.total_price())
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == product_id)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == product_id)
    }

    /// Get total item count (sum of quantities, saturating).
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, i64::saturating_add)
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// The product, as it was when added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}
