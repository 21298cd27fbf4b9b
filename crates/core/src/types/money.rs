//! Money amounts backed by decimal arithmetic.
//!
//! All prices, sale totals, and account balances in the domain are plain
//! currency amounts in a single implicit currency (Argentine pesos in the
//! seeded data). [`Money`] wraps [`Decimal`] so arithmetic never goes
//! through floating point.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// A price or total may not be negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A currency amount.
///
/// Account balances are signed (a negative balance means the client owes
/// money), so `Money` itself permits negative values; use
/// [`Money::non_negative`] where the domain requires a price or total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Amount of sale total that earns one loyalty point.
    const POINTS_DIVISOR: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

    /// Create an amount from a decimal value, signed.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from whole currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create an amount that must not be negative (prices, totals).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if `amount` is below zero.
    pub fn non_negative(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Loyalty points earned by a sale of this total: `floor(total / 1000)`.
    ///
    /// Negative totals never occur for sales; they yield zero points.
    #[must_use]
    pub fn loyalty_points(&self) -> u64 {
        (self.0 / Self::POINTS_DIVISOR)
            .floor()
            .to_u64()
            .unwrap_or(0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_rejects_negative() {
        assert!(Money::non_negative(Decimal::from(-1)).is_err());
        assert!(Money::non_negative(Decimal::ZERO).is_ok());
        assert!(Money::non_negative(Decimal::from(500)).is_ok());
    }

    #[test]
    fn test_line_total() {
        let unit = Money::from_units(500);
        assert_eq!(unit * 3, Money::from_units(1500));
    }

    #[test]
    fn test_loyalty_points_floor() {
        assert_eq!(Money::from_units(999).loyalty_points(), 0);
        assert_eq!(Money::from_units(1000).loyalty_points(), 1);
        assert_eq!(Money::from_units(1500).loyalty_points(), 1);
        assert_eq!(Money::from_units(2999).loyalty_points(), 2);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_units(100), Money::from_units(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(350));
    }

    #[test]
    fn test_serializes_as_plain_number_string() {
        let m = Money::from_units(1500);
        let json = serde_json::to_string(&m).expect("serialize");
        assert_eq!(json, "\"1500\"");
        let back: Money = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, m);
    }
}
