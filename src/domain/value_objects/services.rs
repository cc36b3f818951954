//! # Service Selection
//!
//! The purchasable services and the website build configuration.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of pages or languages for a website build.
pub const MIN_WEBSITE_UNITS: u32 = 1;

/// Which services a client asked for.
///
/// The three flags are independent; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ServiceSelection {
    /// Search engine optimisation campaign.
    pub seo: bool,
    /// Paid advertising campaign.
    pub ads: bool,
    /// Website build.
    pub web: bool,
}

impl ServiceSelection {
    /// Creates a selection from the three flags.
    #[must_use]
    pub const fn new(seo: bool, ads: bool, web: bool) -> Self {
        Self { seo, ads, web }
    }

    /// Returns true if no service is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.seo && !self.ads && !self.web
    }
}

/// Size of the website build.
///
/// Kept on a quote even when the web service was not selected.
///
/// # Examples
///
/// ```
/// use website_quote::domain::value_objects::WebsiteConfig;
///
/// let config = WebsiteConfig::new(5, 2).unwrap();
/// assert_eq!(config.pages(), 5);
/// assert!(WebsiteConfig::new(0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWebsiteConfig")]
pub struct WebsiteConfig {
    pages: u32,
    languages: u32,
}

/// Unchecked wire form of [`WebsiteConfig`].
#[derive(Deserialize)]
struct RawWebsiteConfig {
    pages: u32,
    languages: u32,
}

impl TryFrom<RawWebsiteConfig> for WebsiteConfig {
    type Error = DomainError;

    fn try_from(raw: RawWebsiteConfig) -> Result<Self, Self::Error> {
        Self::new(raw.pages, raw.languages)
    }
}

impl WebsiteConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWebsiteConfig` if `pages` or `languages`
    /// is below [`MIN_WEBSITE_UNITS`].
    pub fn new(pages: u32, languages: u32) -> DomainResult<Self> {
        if pages < MIN_WEBSITE_UNITS {
            return Err(DomainError::invalid_website_config(format!(
                "pages must be at least {MIN_WEBSITE_UNITS}, got {pages}"
            )));
        }
        if languages < MIN_WEBSITE_UNITS {
            return Err(DomainError::invalid_website_config(format!(
                "languages must be at least {MIN_WEBSITE_UNITS}, got {languages}"
            )));
        }
        Ok(Self { pages, languages })
    }

    /// Number of pages.
    #[inline]
    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Number of languages.
    #[inline]
    #[must_use]
    pub const fn languages(&self) -> u32 {
        self.languages
    }
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            pages: MIN_WEBSITE_UNITS,
            languages: MIN_WEBSITE_UNITS,
        }
    }
}

impl fmt::Display for WebsiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages, {} languages", self.pages, self.languages)
    }
}
