//! Checkout flow state machine.

use crate::cart::{Cart, CartPricing, PricingPolicy};
use crate::checkout::{Address, OrderReceipt, PaymentMethod};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Shipping address and contact details.
    Shipping,
    /// Payment method.
    Payment,
    /// Order review before placing it.
    Review,
    /// Order placed; terminal.
    Completed,
}

impl CheckoutStep {
    /// The steps shown in the progress indicator.
    pub const FORM_STEPS: [CheckoutStep; 3] =
        [CheckoutStep::Shipping, CheckoutStep::Payment, CheckoutStep::Review];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Completed => "Completed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
            CheckoutStep::Completed => 4,
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => Some(CheckoutStep::Completed),
            CheckoutStep::Completed => None,
        }
    }

    /// The step "Back" returns to, if any.
    ///
    /// `Completed` has none: a placed order cannot be re-entered.
    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
            CheckoutStep::Completed => None,
        }
    }
}

/// What a checkout action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved to a neighbouring step.
    Moved { from: CheckoutStep, to: CheckoutStep },
    /// Nothing to do from the current step.
    Unchanged(CheckoutStep),
    /// The order was placed and the cart cleared.
    Completed(Box<OrderReceipt>),
    /// The cart is empty; the flow is over and the customer goes back to
    /// the cart view.
    ReturnToCart,
}

/// Checkout flow state.
///
/// The flow never holds the cart; each action is given the cart so the
/// empty-cart guard sees its current contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    aborted: bool,
    policy: PricingPolicy,
    shipping_address: Option<Address>,
    payment_method: PaymentMethod,
}

impl CheckoutFlow {
    /// Start checkout at the Shipping step.
    ///
    /// Fails if the cart is empty.
    pub fn start(cart: &Cart, policy: PricingPolicy) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        tracing::debug!(items = cart.item_count(), "checkout started");

        Ok(Self {
            step: CheckoutStep::Shipping,
            aborted: false,
            policy,
            shipping_address: None,
            payment_method: PaymentMethod::default(),
        })
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Completed
    }

    /// Check if the flow was abandoned because the cart emptied.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Pricing policy the order summary uses.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Order summary for the current cart.
    pub fn summary(&self, cart: &Cart) -> CartPricing {
        cart.pricing(&self.policy)
    }

    /// Set the shipping details.
    pub fn set_shipping_address(&mut self, address: Address) {
        self.shipping_address = Some(address);
    }

    /// Shipping details entered so far.
    pub fn shipping_address(&self) -> Option<&Address> {
        self.shipping_address.as_ref()
    }

    /// Set the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Chosen payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Shipping fields the customer has not filled in yet.
    ///
    /// Informational; advancing does not require them.
    pub fn missing_details(&self) -> Vec<&'static str> {
        match &self.shipping_address {
            Some(address) => address.missing_fields(),
            None => vec!["shipping details"],
        }
    }

    /// Whether a step is finished, for the progress indicator.
    pub fn is_step_done(&self, step: CheckoutStep) -> bool {
        step.number() < self.step.number()
    }

    /// Abort if the cart has emptied under an unfinished flow.
    ///
    /// Returns `ReturnToCart` for an aborted flow, otherwise the current
    /// step unchanged.
    pub fn ensure_cart(&mut self, cart: &Cart) -> Transition {
        if self.aborted {
            return Transition::ReturnToCart;
        }
        if !self.is_complete() && cart.is_empty() {
            self.aborted = true;
            tracing::info!(step = self.step.as_str(), "cart emptied during checkout, returning to cart");
            return Transition::ReturnToCart;
        }
        Transition::Unchanged(self.step)
    }

    /// Move to the next step.
    ///
    /// Advancing from Review places the order: the cart is snapshotted into
    /// a receipt and then cleared. From Completed this does nothing.
    pub fn advance(&mut self, cart: &mut Cart) -> Transition {
        if let Transition::ReturnToCart = self.ensure_cart(cart) {
            return Transition::ReturnToCart;
        }

        let Some(next) = self.step.next() else {
            return Transition::Unchanged(self.step);
        };

        if next == CheckoutStep::Completed {
            let receipt = OrderReceipt::from_cart(
                cart,
                self.summary(cart),
                self.shipping_address.clone(),
                self.payment_method,
            );
            cart.clear_cart();
            self.step = CheckoutStep::Completed;
            tracing::info!(
                order_id = %receipt.order_id,
                items = receipt.item_count(),
                grand_total = %receipt.pricing.grand_total,
                "order placed"
            );
            return Transition::Completed(Box::new(receipt));
        }

        let from = self.step;
        self.step = next;
        tracing::debug!(from = from.as_str(), to = next.as_str(), "checkout advanced");
        Transition::Moved { from, to: next }
    }

    /// Go back one step.
    ///
    /// No-op from Shipping and from Completed.
    pub fn back(&mut self, cart: &Cart) -> Transition {
        if let Transition::ReturnToCart = self.ensure_cart(cart) {
            return Transition::ReturnToCart;
        }

        match self.step.previous() {
            Some(prev) => {
                let from = self.step;
                self.step = prev;
                tracing::debug!(from = from.as_str(), to = prev.as_str(), "checkout went back");
                Transition::Moved { from, to: prev }
            }
            None => Transition::Unchanged(self.step),
        }
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        let done = u16::from(self.step.number() - 1);
        let total = CheckoutStep::FORM_STEPS.len() as u16;
        (done * 100 / total) as u8
    }
}
