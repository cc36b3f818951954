//! # Domain Entities
//!
//! - [`Quote`]: A submitted, priced service request

pub mod quote;

pub use quote::{NewQuote, Quote};
