//! # Domain Services
//!
//! Stateless business logic that does not belong to a single entity.
//!
//! - [`PricingEngine`]: Quote price calculation

pub mod pricing;

pub use pricing::{PriceList, PricingEngine};
