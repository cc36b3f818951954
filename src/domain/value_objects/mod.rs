//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`QuoteId`]: UUID-based quote identity
//! - [`Price`]: Non-negative decimal price
//! - [`Timestamp`]: UTC creation instant
//! - [`ServiceSelection`], [`WebsiteConfig`]: What the client ordered
//! - [`SortKey`], [`SortDirection`]: Listing order
//! - [`QueryParams`]: Navigation query string

pub mod enums;
pub mod ids;
pub mod price;
pub mod query_params;
pub mod services;
pub mod timestamp;

pub use enums::{SortDirection, SortKey};
pub use ids::QuoteId;
pub use price::Price;
pub use query_params::QueryParams;
pub use services::{MIN_WEBSITE_UNITS, ServiceSelection, WebsiteConfig};
pub use timestamp::Timestamp;
