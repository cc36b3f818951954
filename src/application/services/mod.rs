//! # Application Services
//!
//! - [`QuoteStore`]: Append-only session store of quotes
//! - [`QuoteListing`]: Filtered and sorted view over the store

pub mod quote_listing;
pub mod quote_store;

pub use quote_listing::{ListQuery, QuoteListing};
pub use quote_store::QuoteStore;
