//! # Domain Errors
//!
//! Error types raised by domain value objects and entities.
//!
//! # Examples
//!
//! ```
//! use website_quote::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_website_config("pages must be at least 1");
//! assert!(err.to_string().contains("pages"));
//! ```

use thiserror::Error;

/// Business rule violations detected by the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price was negative or otherwise unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Website pages or languages fell below their minimum.
    #[error("invalid website configuration: {0}")]
    InvalidWebsiteConfig(String),

    /// A string could not be parsed into a domain enum.
    #[error("invalid {enum_name} value: '{value}'")]
    ParseEnum {
        /// Name of the target enum.
        enum_name: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid website configuration error.
    #[must_use]
    pub fn invalid_website_config(message: impl Into<String>) -> Self {
        Self::InvalidWebsiteConfig(message.into())
    }

    /// Creates an enum parse error.
    #[must_use]
    pub fn parse_enum(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self::ParseEnum {
            enum_name,
            value: value.into(),
        }
    }
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
