//! # Application Layer
//!
//! Use cases over the domain: the quote store and listing, and the quote
//! form with its validation and query-string binding.

pub mod error;
pub mod form;
pub mod services;
