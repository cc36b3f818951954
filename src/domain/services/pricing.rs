//! # Pricing Engine
//!
//! Turns a service selection and website size into a total price.
//!
//! ```text
//! total = seo?  * 300
//!       + ads?  * 400
//!       + web?  * (500 + pages * languages * 30)
//! ```
//!
//! Every contribution is independent of the others and is skipped entirely
//! when its flag is off, whatever the pages and languages are.
//!
//! # Examples
//!
//! ```
//! use website_quote::domain::services::pricing::PricingEngine;
//! use website_quote::domain::value_objects::{Price, ServiceSelection};
//!
//! let engine = PricingEngine::default();
//! let total = engine.total_price(ServiceSelection::new(false, false, true), 5, 2);
//! assert_eq!(total, Price::from_units(800));
//! ```

use crate::domain::value_objects::{Price, ServiceSelection};
use serde::{Deserialize, Serialize};

/// Default SEO campaign price.
pub const DEFAULT_SEO_PRICE: u64 = 300;

/// Default advertising campaign price.
pub const DEFAULT_ADS_PRICE: u64 = 400;

/// Default base price of a website build.
pub const DEFAULT_WEB_BASE_PRICE: u64 = 500;

/// Default price per page per language.
pub const DEFAULT_CUSTOMIZATION_RATE: u64 = 30;

/// Rates used by the [`PricingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    /// SEO campaign price.
    pub seo: Price,
    /// Advertising campaign price.
    pub ads: Price,
    /// Base price of a website build.
    pub web_base: Price,
    /// Price per page per language.
    pub customization_rate: Price,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            seo: Price::from_units(DEFAULT_SEO_PRICE),
            ads: Price::from_units(DEFAULT_ADS_PRICE),
            web_base: Price::from_units(DEFAULT_WEB_BASE_PRICE),
            customization_rate: Price::from_units(DEFAULT_CUSTOMIZATION_RATE),
        }
    }
}

/// Stateless price calculator.
///
/// Pure and deterministic; cheap enough to call on every form change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine {
    prices: PriceList,
}

impl PricingEngine {
    /// Creates an engine with the given rates.
    #[must_use]
    pub const fn new(prices: PriceList) -> Self {
        Self { prices }
    }

    /// Returns the rates in use.
    #[must_use]
    pub const fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Customisation surcharge: `pages * languages * rate`.
    ///
    /// Zero pages or zero languages yields zero.
    #[must_use]
    pub fn website_customization_price(&self, pages: u32, languages: u32) -> Price {
        let units = u64::from(pages) * u64::from(languages);
        self.prices.customization_rate.times(units)
    }

    /// Total price of a selection.
    ///
    /// `pages` and `languages` only matter when web is selected.
    #[must_use]
    pub fn total_price(&self, services: ServiceSelection, pages: u32, languages: u32) -> Price {
        let mut total = Price::ZERO;

        if services.seo {
            total = total + self.prices.seo;
        }
        if services.ads {
            total = total + self.prices.ads;
        }
        if services.web {
            total = total
                + self.prices.web_base
                + self.website_customization_price(pages, languages);
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    fn units(n: u64) -> Price {
        Price::from_units(n)
    }

    mod website_customization_price {
        use super::*;

        #[test]
        fn zero_pages_is_free() {
            assert_eq!(engine().website_customization_price(0, 5), Price::ZERO);
        }

        #[test]
        fn zero_languages_is_free() {
            assert_eq!(engine().website_customization_price(5, 0), Price::ZERO);
        }

        #[test]
        fn one_page_one_language() {
            assert_eq!(engine().website_customization_price(1, 1), units(30));
        }

        #[test]
        fn five_pages_two_languages() {
            assert_eq!(engine().website_customization_price(5, 2), units(300));
        }

        #[test]
        fn ten_pages_three_languages() {
            assert_eq!(engine().website_customization_price(10, 3), units(900));
        }

        #[test]
        fn large_inputs_do_not_overflow() {
            let price = engine().website_customization_price(u32::MAX, u32::MAX);
            assert!(price > Price::ZERO);
        }
    }

    mod total_price {
        use super::*;

        #[test]
        fn nothing_selected_is_zero() {
            let total = engine().total_price(ServiceSelection::default(), 7, 7);
            assert_eq!(total, Price::ZERO);
        }

        #[test]
        fn seo_only() {
            let total = engine().total_price(ServiceSelection::new(true, false, false), 0, 0);
            assert_eq!(total, units(300));
        }

        #[test]
        fn ads_only() {
            let total = engine().total_price(ServiceSelection::new(false, true, false), 0, 0);
            assert_eq!(total, units(400));
        }

        #[test]
        fn web_without_customization() {
            let total = engine().total_price(ServiceSelection::new(false, false, true), 0, 0);
            assert_eq!(total, units(500));
        }

        #[test]
        fn web_single_page() {
            let total = engine().total_price(ServiceSelection::new(false, false, true), 1, 1);
            assert_eq!(total, units(530));
        }

        #[test]
        fn web_five_pages_two_languages() {
            let total = engine().total_price(ServiceSelection::new(false, false, true), 5, 2);
            assert_eq!(total, units(800));
        }

        #[test]
        fn everything_single_page() {
            let total = engine().total_price(ServiceSelection::new(true, true, true), 1, 1);
            assert_eq!(total, units(1230));
        }

        #[test]
        fn everything_five_pages_two_languages() {
            let total = engine().total_price(ServiceSelection::new(true, true, true), 5, 2);
            assert_eq!(total, units(1500));
        }

        #[test]
        fn pages_ignored_without_web() {
            let total = engine().total_price(ServiceSelection::new(true, true, false), 9, 9);
            assert_eq!(total, units(700));
        }
    }

    #[test]
    fn custom_price_list() {
        let engine = PricingEngine::new(PriceList {
            seo: units(100),
            ads: units(200),
            web_base: units(1000),
            customization_rate: units(10),
        });
        let total = engine.total_price(ServiceSelection::new(true, true, true), 2, 3);
        assert_eq!(total, units(1360));
    }
}
