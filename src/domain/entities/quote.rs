//! # Quote Entity
//!
//! A submitted, priced request for website services.
//!
//! Quotes are immutable once created: the identifier, the creation time and
//! the total price are fixed at construction and exposed through accessors
//! only.
//!
//! # Examples
//!
//! ```
//! use website_quote::domain::entities::quote::{NewQuote, Quote};
//! use website_quote::domain::value_objects::{Price, ServiceSelection, WebsiteConfig};
//!
//! let quote = Quote::new(NewQuote {
//!     client_name: "Alice Johnson".to_string(),
//!     phone: "612 345 678".to_string(),
//!     email: "alice@example.com".to_string(),
//!     services: ServiceSelection::new(true, false, false),
//!     web_config: WebsiteConfig::default(),
//!     total_price: Price::from_units(300),
//! });
//!
//! assert_eq!(quote.services_summary(), "SEO");
//! ```

use crate::domain::value_objects::{Price, QuoteId, ServiceSelection, Timestamp, WebsiteConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data needed to create a [`Quote`].
///
/// The identifier and creation time are assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    /// Client full name.
    pub client_name: String,
    /// Contact phone number as entered.
    pub phone: String,
    /// Contact email as entered.
    pub email: String,
    /// Selected services.
    pub services: ServiceSelection,
    /// Website size; kept even when web is not selected.
    pub web_config: WebsiteConfig,
    /// Price computed at submission time.
    pub total_price: Price,
}

/// A persisted quote.
///
/// # Invariants
///
/// - `id` is unique and never changes
/// - `created_at` and `total_price` are fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    id: QuoteId,
    client_name: String,
    phone: String,
    email: String,
    services: ServiceSelection,
    web_config: WebsiteConfig,
    total_price: Price,
    created_at: Timestamp,
}

impl Quote {
    /// Creates a quote with a fresh identifier stamped with the current time.
    #[must_use]
    pub fn new(data: NewQuote) -> Self {
        Self::from_parts(QuoteId::new_v4(), Timestamp::now(), data)
    }

    /// Assembles a quote from an existing identity and creation time.
    #[must_use]
    pub fn from_parts(id: QuoteId, created_at: Timestamp, data: NewQuote) -> Self {
        let NewQuote {
            client_name,
            phone,
            email,
            services,
            web_config,
            total_price,
        } = data;

        Self {
            id,
            client_name,
            phone,
            email,
            services,
            web_config,
            total_price,
            created_at,
        }
    }

    /// Returns the quote ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuoteId {
        self.id
    }

    /// Returns the client name.
    #[inline]
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the phone number.
    #[inline]
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the email address.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the selected services.
    #[inline]
    #[must_use]
    pub fn services(&self) -> ServiceSelection {
        self.services
    }

    /// Returns the website configuration.
    #[inline]
    #[must_use]
    pub fn web_config(&self) -> WebsiteConfig {
        self.web_config
    }

    /// Returns the total price stored at creation.
    #[inline]
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns when this quote was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Human-readable list of the selected services.
    ///
    /// Services are joined with ` + `; the website detail is only shown when
    /// the web service is selected. Empty when nothing is selected.
    #[must_use]
    pub fn services_summary(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.services.seo {
            parts.push("SEO".to_string());
        }
        if self.services.ads {
            parts.push("Ads".to_string());
        }
        if self.services.web {
            parts.push(format!("Web ({})", self.web_config));
        }
        parts.join(" + ")
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({} for {}: {})",
            self.id, self.client_name, self.total_price
        )
    }
}
