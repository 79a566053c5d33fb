//! Commerce error types.
//!
//! Cart mutations, queries and pricing never fail. These errors only come
//! from the edges: looking things up by id, parsing user input and loading
//! catalog data.

use thiserror::Error;

/// Errors that can occur at the storefront boundaries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Two catalog entries share a product id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog entry violates a product invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Checkout needs at least one cart line.
    #[error("Cart is empty")]
    EmptyCart,

    /// Unknown listing sort key.
    #[error("Unknown sort key: {0} (expected featured, newest, price-low, price-high or rating)")]
    UnknownSortKey(String),

    /// Unknown payment method.
    #[error("Unknown payment method: {0} (expected card, paypal or upi)")]
    UnknownPaymentMethod(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
