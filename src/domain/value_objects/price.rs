//! # Price Value Object
//!
//! Non-negative monetary amount backed by [`rust_decimal::Decimal`].

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative price in whole currency units or fractions thereof.
///
/// # Invariants
///
/// - Never negative
///
/// # Examples
///
/// ```
/// use website_quote::domain::value_objects::Price;
///
/// let seo = Price::from_units(300);
/// let ads = Price::from_units(400);
/// assert_eq!(seo + ads, Price::from_units(700));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `amount` is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_price(format!(
                "price must not be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Creates a price from a whole number of units.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies by a non-negative count, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, count: u64) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(count))
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
