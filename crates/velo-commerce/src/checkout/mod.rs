//! Checkout module.
//!
//! Contains the checkout flow, shipping details, payment choice and the
//! order receipt.

mod address;
mod flow;
mod order;

pub use address::Address;
pub use flow::{CheckoutFlow, CheckoutStep, Transition};
pub use order::{OrderReceipt, PaymentMethod, ReceiptLine};
