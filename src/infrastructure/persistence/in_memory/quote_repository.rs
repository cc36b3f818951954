//! # In-Memory Quote Repository
//!
//! Session-lifetime implementation of [`QuoteRepository`].
//!
//! Clones share the same storage, so one repository handle can be given to
//! both the form that creates quotes and the listing that reads them.

use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::QuoteId;
use crate::infrastructure::persistence::traits::{
    QuoteRepository, RepositoryError, RepositoryResult,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory implementation of [`QuoteRepository`].
///
/// Keeps quotes in a `Vec` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRepository {
    storage: Arc<RwLock<Vec<Quote>>>,
}

impl InMemoryQuoteRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuoteRepository for InMemoryQuoteRepository {
    fn append(&self, quote: Quote) -> RepositoryResult<()> {
        let mut storage = self.storage.write();
        if storage.iter().any(|q| q.id() == quote.id()) {
            return Err(RepositoryError::duplicate("Quote", quote.id().to_string()));
        }
        storage.push(quote);
        Ok(())
    }

    fn list(&self) -> RepositoryResult<Vec<Quote>> {
        Ok(self.storage.read().clone())
    }

    fn get(&self, id: &QuoteId) -> RepositoryResult<Option<Quote>> {
        let storage = self.storage.read();
        Ok(storage.iter().find(|q| &q.id() == id).cloned())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.storage.read().len())
    }
}
