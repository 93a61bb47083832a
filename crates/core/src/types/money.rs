//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount of money in US dollars.
///
/// Backed by [`Decimal`] so that cart arithmetic stays exact. The remote
/// catalog encodes prices as JSON numbers, so (de)serialization goes through
/// `rust_decimal::serde::float`.
///
/// ## Examples
///
/// ```
/// use papershop_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(1995, 2)).unwrap();
/// assert_eq!(price.to_string(), "$19.95");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// A price of $0.00.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount multiplied by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1995, 2)),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(20, 0)).unwrap();
        assert_eq!(price.to_string(), "$20.00");

        let price = Price::new(Decimal::new(10995, 2)).unwrap();
        assert_eq!(price.to_string(), "$109.95");
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::new(Decimal::new(1050, 2)).unwrap();
        assert_eq!(price.times(3), Decimal::new(3150, 2));
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(price.amount(), Decimal::new(10995, 2));
    }

    #[test]
    fn test_ordering() {
        let cheap = Price::new(Decimal::new(100, 2)).unwrap();
        let dear = Price::new(Decimal::new(200, 2)).unwrap();
        assert!(cheap < dear);
    }
}
