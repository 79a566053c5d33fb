//! Payment choice and the receipt produced when an order is placed.

use crate::cart::{Cart, CartPricing};
use crate::checkout::Address;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment method picked on the Payment step.
///
/// Only recorded on the receipt; nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    PayPal,
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::PayPal, PaymentMethod::Upi];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Upi => "upi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Upi => "UPI",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a placed order.
///
/// Built from the cart right before it is cleared; the storefront keeps no
/// order history, so this is all that remains of the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Order number shown to the customer.
    pub order_id: OrderId,
    /// Items ordered.
    pub lines: Vec<ReceiptLine>,
    /// Pricing at the moment the order was placed.
    pub pricing: CartPricing,
    /// Shipping details, if the customer filled them in.
    pub shipping_address: Option<Address>,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl OrderReceipt {
    /// Snapshot a cart.
    pub(crate) fn from_cart(
        cart: &Cart,
        pricing: CartPricing,
        shipping_address: Option<Address>,
        payment_method: PaymentMethod,
    ) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| ReceiptLine {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.price,
                total_price: line.line_total(),
            })
            .collect();

        Self {
            order_id: OrderId::generate(),
            lines,
            pricing,
            shipping_address,
            payment_method,
            placed_at: current_timestamp(),
        }
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, i64::saturating_add)
    }

    /// Email the confirmation goes to, if one was given.
    pub fn confirmation_email(&self) -> Option<&str> {
        self.shipping_address
            .as_ref()
            .map(|addr| addr.email.as_str())
            .filter(|email| !email.is_empty())
    }
}

/// A line on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Total price for this line.
    pub total_price: Money,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
