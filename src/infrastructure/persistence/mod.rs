//! # Persistence Layer
//!
//! - [`QuoteRepository`]: Port for quote storage
//! - `in_memory`: Session-lifetime implementation

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryQuoteRepository;
pub use traits::{QuoteRepository, RepositoryError, RepositoryResult};
