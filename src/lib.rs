//! # Website Quote
//!
//! Quote engine for website services: price a selection of SEO, advertising
//! and website-build services, keep submitted quotes for the session, list
//! them filtered and sorted, and keep the quote form in step with the
//! navigation query string.
//!
//! ## Layers
//!
//! - [`domain`]: Quote entity, value objects and the pricing engine
//! - [`application`]: Quote store, listing and the quote form
//! - [`infrastructure`]: In-memory storage and navigation
//! - [`config`], [`telemetry`]: Settings and logging
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use website_quote::application::form::{FormValidator, QuoteFormController};
//! use website_quote::application::services::{QuoteListing, QuoteStore};
//! use website_quote::domain::services::PricingEngine;
//! use website_quote::infrastructure::navigation::InMemoryNavigator;
//!
//! let store = QuoteStore::in_memory();
//! let mut form = QuoteFormController::new(
//!     store.clone(),
//!     PricingEngine::default(),
//!     FormValidator::default(),
//!     Arc::new(InMemoryNavigator::new()),
//! );
//!
//! form.edit(|m| {
//!     m.client_name = "Alice Johnson".to_string();
//!     m.phone = "612 345 678".to_string();
//!     m.email = "alice@example.com".to_string();
//!     m.seo_selected = true;
//! });
//! form.submit().unwrap();
//!
//! let listing = QuoteListing::new(store);
//! assert_eq!(listing.view().unwrap().len(), 1);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
