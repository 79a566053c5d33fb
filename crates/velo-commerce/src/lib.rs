//! Storefront domain logic for the Velo bicycle-accessories shop.
//!
//! This crate holds everything the storefront views need beyond markup:
//!
//! - **Catalog**: Products, categories and the built-in sample catalog
//! - **Cart**: Line items, quantity rules, pricing (shipping and tax)
//! - **Search**: Category/price filtering and sort keys for listings
//! - **Checkout**: The Shipping → Payment → Review → Completed flow
//! - **Session**: The context object handed to the presentation layer
//!
//! # Example
//!
//! ```rust
//! use velo_commerce::prelude::*;
//!
//! let session = StorefrontSession::new(Catalog::sample());
//! session.add_product_by_id(&ProductId::new("1")).unwrap();
//!
//! let pricing = session.pricing();
//! assert_eq!(pricing.subtotal.display(), "$249.99");
//! assert!(pricing.is_free_shipping());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, PricingPolicy, SharedCart};

    // Checkout
    pub use crate::checkout::{
        Address, CheckoutFlow, CheckoutStep, OrderReceipt, PaymentMethod, Transition,
    };

    // Search
    pub use crate::search::{query, QueryFilter, SortOption};

    // Session
    pub use crate::session::StorefrontSession;
}
