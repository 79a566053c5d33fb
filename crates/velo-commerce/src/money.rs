//! Money type for representing monetary values.
//!
//! Amounts are exact decimals in the store currency (USD). Sums and the
//! percentage tax are accumulated without rounding; rounding to cents only
//! happens when an amount is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Number of decimal places shown for the store currency.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Symbol shown in front of displayed amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary value in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Create a Money value from an exact decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a Money value from an integer number of cents.
    ///
    /// ```
    /// use velo_commerce::money::Money;
    /// let price = Money::from_cents(24999);
    /// assert_eq!(price.display(), "$249.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, DISPLAY_DECIMAL_PLACES))
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// The exact, unrounded amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, quantity: i64) -> Money {
        Money::new(self.amount.saturating_mul(Decimal::from(quantity)))
    }

    /// Multiply by a decimal rate (e.g. a tax rate of `0.08`).
    ///
    /// The result keeps full precision.
    pub fn multiply_rate(&self, rate: Decimal) -> Money {
        Money::new(self.amount.saturating_mul(rate))
    }

    /// The amount rounded to cents, midpoint away from zero.
    pub fn rounded(&self) -> Money {
        let mut amount = self
            .amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(DISPLAY_DECIMAL_PLACES);
        Money::new(amount)
    }

    /// Format as a display string (e.g. "$49.99").
    pub fn display(&self) -> String {
        let rounded = self.rounded();
        if rounded.is_negative() {
            format!("-{}{}", CURRENCY_SYMBOL, rounded.amount.abs())
        } else {
            format!("{}{}", CURRENCY_SYMBOL, rounded.amount)
        }
    }

    /// Format as a display string without symbol (e.g. "49.99").
    pub fn display_amount(&self) -> String {
        self.rounded().amount.to_string()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount.saturating_sub(other.amount))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.amount(), dec!(49.99));
    }

    #[test]
    fn test_money_display_pads_cents() {
        assert_eq!(Money::new(dec!(3.2)).display(), "$3.20");
        assert_eq!(Money::new(dec!(75)).display(), "$75.00");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_money_display_rounds_half_away_from_zero() {
        assert_eq!(Money::new(dec!(29.5976)).display(), "$29.60");
        assert_eq!(Money::new(dec!(0.125)).display(), "$0.13");
        assert_eq!(Money::new(dec!(399.5676)).display_amount(), "399.57");
    }

    #[test]
    fn test_money_negative_display() {
        let m = Money::from_cents(500) - Money::from_cents(1000);
        assert!(m.is_negative());
        assert_eq!(m.display(), "-$5.00");
    }

    #[test]
    fn test_money_multiply_keeps_precision() {
        let subtotal = Money::new(dec!(369.97));
        let tax = subtotal.multiply_rate(dec!(0.08));
        assert_eq!(tax.amount(), dec!(29.5976));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_cents(24999), Money::from_cents(5999) * 2]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(dec!(369.97)));
    }

    #[test]
    fn test_money_deserializes_from_number_and_string() {
        let a: Money = serde_json::from_str("\"9.99\"").unwrap();
        let b: Money = serde_json::from_str("9.99").unwrap();
        assert_eq!(a, Money::from_cents(999));
        assert_eq!(b, Money::from_cents(999));
    }
}
