//! Cart pricing calculations.

use crate::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Shipping and tax rules applied to a cart subtotal.
///
/// The default policy is free shipping from $75.00, a flat $9.99 below
/// that, and an 8% tax on the subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Money,
    /// Shipping charged below the threshold.
    pub flat_shipping_rate: Money,
    /// Tax rate applied to the subtotal (0.08 = 8%).
    pub tax_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::new(dec!(75.00)),
            flat_shipping_rate: Money::new(dec!(9.99)),
            tax_rate: dec!(0.08),
        }
    }
}

impl PricingPolicy {
    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping_rate
        }
    }

    /// Tax on a subtotal, unrounded.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.multiply_rate(self.tax_rate)
    }

    /// Full pricing breakdown for a subtotal.
    pub fn price(&self, subtotal: Money) -> CartPricing {
        let shipping = self.shipping_for(subtotal);
        let tax = self.tax_for(subtotal);
        CartPricing {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
            free_shipping_threshold: self.free_shipping_threshold,
        }
    }

    /// Tax rate as a percentage for display (e.g. `8`).
    pub fn tax_percent(&self) -> Decimal {
        (self.tax_rate * Decimal::ONE_HUNDRED).normalize()
    }
}

/// Complete pricing breakdown for a cart.
///
/// Amounts are exact; round only when displaying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount.
    pub tax: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
    /// Threshold the subtotal was compared against.
    pub free_shipping_threshold: Money,
}

impl CartPricing {
    /// Check if shipping is free.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more to spend for free shipping, if not reached yet.
    pub fn amount_to_free_shipping(&self) -> Option<Money> {
        if self.subtotal < self.free_shipping_threshold {
            Some(self.free_shipping_threshold - self.subtotal)
        } else {
            None
        }
    }

    /// Shipping as the summary shows it: "FREE" or the amount.
    pub fn shipping_label(&self) -> String {
        if self.is_free_shipping() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_at_threshold() {
        let policy = PricingPolicy::default();
        assert!(policy.price(Money::new(dec!(75.00))).is_free_shipping());
        assert_eq!(policy.shipping_for(Money::new(dec!(74.99))), Money::new(dec!(9.99)));
    }

    #[test]
    fn test_scenario_above_threshold() {
        let pricing = PricingPolicy::default().price(Money::new(dec!(369.97)));
        assert_eq!(pricing.shipping, Money::zero());
        assert_eq!(pricing.tax.amount(), dec!(29.5976));
        assert_eq!(pricing.tax.display(), "$29.60");
        assert_eq!(pricing.grand_total.amount(), dec!(399.5676));
        assert_eq!(pricing.grand_total.display(), "$399.57");
        assert_eq!(pricing.amount_to_free_shipping(), None);
        assert_eq!(pricing.shipping_label(), "FREE");
    }

    #[test]
    fn test_scenario_below_threshold() {
        let pricing = PricingPolicy::default().price(Money::new(dec!(40.00)));
        assert_eq!(pricing.shipping.display(), "$9.99");
        assert_eq!(pricing.tax.display(), "$3.20");
        assert_eq!(pricing.grand_total.display(), "$53.19");
        assert_eq!(pricing.amount_to_free_shipping(), Some(Money::new(dec!(35.00))));
        assert_eq!(pricing.shipping_label(), "$9.99");
    }

    #[test]
    fn test_empty_cart_still_charges_flat_shipping() {
        let pricing = PricingPolicy::default().price(Money::zero());
        assert_eq!(pricing.tax, Money::zero());
        assert_eq!(pricing.grand_total.display(), "$9.99");
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            free_shipping_threshold: Money::new(dec!(50)),
            flat_shipping_rate: Money::new(dec!(5)),
            tax_rate: dec!(0.1),
        };
        let pricing = policy.price(Money::new(dec!(40)));
        assert_eq!(pricing.grand_total, Money::new(dec!(49)));
        assert_eq!(policy.tax_percent(), dec!(10));
    }

    #[test]
    fn test_policy_from_partial_json() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"tax_rate": "0.05"}"#).unwrap();
        assert_eq!(policy.tax_rate, dec!(0.05));
        assert_eq!(policy.free_shipping_threshold, Money::new(dec!(75)));
    }
}
