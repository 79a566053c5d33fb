//! Storefront session.
//!
//! The context object handed to the presentation layer: one catalog, one
//! cart handle and the pricing policy in force.

use crate::cart::{CartPricing, PricingPolicy, SharedCart};
use crate::catalog::{Catalog, Product};
use crate::checkout::{CheckoutFlow, Transition};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::QueryFilter;
use std::sync::Arc;

/// A shopper's session.
///
/// Cloning the session shares the catalog and the cart.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Arc<Catalog>,
    cart: SharedCart,
    pricing: PricingPolicy,
}

impl StorefrontSession {
    /// Start a session with an empty cart and the default pricing policy.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_catalog(Arc::new(catalog))
    }

    /// Start a session over an already shared catalog.
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: SharedCart::new(),
            pricing: PricingPolicy::default(),
        }
    }

    /// Replace the pricing policy.
    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart handle. Clones of it mutate this session's cart.
    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_product_by_id(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.add_quantity_by_id(id, 1)
    }

    /// Add several units of a catalog product to the cart.
    ///
    /// A quantity of zero or less leaves the cart unchanged.
    pub fn add_quantity_by_id(&self, id: &ProductId, quantity: i64) -> Result<&Product, CommerceError> {
        let product = self.catalog.require_product(id)?;
        self.cart.add_quantity(product, quantity);
        Ok(product)
    }

    /// Pricing for the cart as it is now.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing(&self.pricing)
    }

    /// Catalog listing for a filter.
    pub fn query(&self, filter: &QueryFilter) -> Vec<&Product> {
        self.catalog.query(filter)
    }

    /// Start checkout on this session's cart.
    pub fn begin_checkout(&self) -> Result<CheckoutFlow, CommerceError> {
        self.cart.read(|cart| CheckoutFlow::start(cart, self.pricing))
    }

    /// Advance a flow against this session's cart.
    pub fn advance_checkout(&self, flow: &mut CheckoutFlow) -> Transition {
        self.cart.update(|cart| flow.advance(cart))
    }

    /// Step a flow back against this session's cart.
    pub fn back_checkout(&self, flow: &mut CheckoutFlow) -> Transition {
        self.cart.read(|cart| flow.back(cart))
    }
}
