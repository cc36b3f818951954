//! # Domain Enums
//!
//! Enumerations driving the quote listing:
//!
//! - [`SortKey`] - Field the listing is ordered by
//! - [`SortDirection`] - Ascending or descending order
//!
//! Both implement `Display`, `FromStr` and Serde traits using lowercase names.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a quote listing is ordered by.
///
/// # Examples
///
/// ```
/// use website_quote::domain::value_objects::{SortDirection, SortKey};
///
/// assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
/// assert_eq!(SortKey::Name.default_direction(), SortDirection::Ascending);
/// assert_eq!(SortKey::Date.default_direction(), SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Creation time.
    #[default]
    Date,
    /// Total price.
    Price,
    /// Client name.
    Name,
}

impl SortKey {
    /// Direction applied when the listing switches to this key.
    ///
    /// Names read alphabetically; dates and prices show the newest or
    /// most expensive first.
    #[must_use]
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Ascending,
            Self::Date | Self::Price => SortDirection::Descending,
        }
    }

    /// Returns the lowercase name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Price => "price",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "price" => Ok(Self::Price),
            "name" => Ok(Self::Name),
            _ => Err(DomainError::parse_enum("SortKey", s)),
        }
    }
}

/// Order applied on top of a key's natural ascending comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the short name (`asc` or `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(DomainError::parse_enum("SortDirection", s)),
        }
    }
}
