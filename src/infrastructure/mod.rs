//! # Infrastructure Layer
//!
//! Adapters behind the ports the application layer depends on.
//!
//! - `persistence`: Quote storage
//! - `navigation`: Query-parameter access

pub mod navigation;
pub mod persistence;
