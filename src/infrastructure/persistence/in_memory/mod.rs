//! # In-Memory Repositories
//!
//! Storage that lives as long as the session.
//!
//! - [`InMemoryQuoteRepository`]: Quote persistence
//!
//! Implementations use `Arc<parking_lot::RwLock<_>>` so handles can be
//! cloned and shared.

pub mod quote_repository;

pub use quote_repository::InMemoryQuoteRepository;
