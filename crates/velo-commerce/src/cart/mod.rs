//! Shopping cart module.
//!
//! Contains the cart, its lines, the shared cart handle and pricing.

mod cart;
mod pricing;
mod shared;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, PricingPolicy};
pub use shared::SharedCart;
