//! # Quote Store
//!
//! Canonical, append-only collection of the quotes submitted in a session.
//!
//! The store assigns identity and creation time; the caller supplies the
//! already-priced data. Nothing is ever updated or removed.
//!
//! # Examples
//!
//! ```
//! use website_quote::application::services::quote_store::QuoteStore;
//! use website_quote::domain::entities::NewQuote;
//! use website_quote::domain::value_objects::{Price, ServiceSelection, WebsiteConfig};
//!
//! let store = QuoteStore::in_memory();
//! let id = store.create(NewQuote {
//!     client_name: "Alice Johnson".to_string(),
//!     phone: "612345678".to_string(),
//!     email: "alice@example.com".to_string(),
//!     services: ServiceSelection::new(true, false, false),
//!     web_config: WebsiteConfig::default(),
//!     total_price: Price::from_units(300),
//! }).unwrap();
//!
//! let quotes = store.list().unwrap();
//! assert_eq!(quotes.len(), 1);
//! assert_eq!(quotes[0].id(), id);
//! ```

use crate::application::error::ApplicationResult;
use crate::domain::entities::quote::{NewQuote, Quote};
use crate::domain::value_objects::QuoteId;
use crate::infrastructure::persistence::{InMemoryQuoteRepository, QuoteRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Session quote store.
///
/// Cheap to clone; clones share the underlying repository, so the same
/// store can be handed to every view that needs it.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    repository: Arc<dyn QuoteRepository>,
}

impl QuoteStore {
    /// Creates a store over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn QuoteRepository>) -> Self {
        Self { repository }
    }

    /// Creates a store backed by a fresh in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryQuoteRepository::new()))
    }

    /// Creates a quote with a fresh id and the current time, appends it and
    /// returns its id.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the quote cannot be stored.
    pub fn create(&self, data: NewQuote) -> ApplicationResult<QuoteId> {
        let quote = Quote::new(data);
        let id = quote.id();
        let total_price = quote.total_price();

        self.repository.append(quote)?;

        info!(quote_id = %id, total_price = %total_price, "quote created");
        Ok(id)
    }

    /// Appends an already assembled quote.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if a quote with the same id is
    /// already stored.
    pub fn append(&self, quote: Quote) -> ApplicationResult<()> {
        debug!(quote_id = %quote.id(), "appending quote");
        self.repository.append(quote)?;
        Ok(())
    }

    /// Returns every quote in insertion order.
    ///
    /// The returned vector is a snapshot; changing it does not affect the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the repository cannot be read.
    pub fn list(&self) -> ApplicationResult<Vec<Quote>> {
        Ok(self.repository.list()?)
    }

    /// Looks up a quote by id.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the repository cannot be read.
    pub fn get(&self, id: &QuoteId) -> ApplicationResult<Option<Quote>> {
        Ok(self.repository.get(id)?)
    }

    /// Number of stored quotes.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the repository cannot be read.
    pub fn len(&self) -> ApplicationResult<usize> {
        Ok(self.repository.count()?)
    }

    /// Returns true if no quote has been stored.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the repository cannot be read.
    pub fn is_empty(&self) -> ApplicationResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Price, ServiceSelection, Timestamp, WebsiteConfig};
    use std::collections::HashSet;

    fn data(name: &str, total: u64) -> NewQuote {
        NewQuote {
            client_name: name.to_string(),
            phone: "612345678".to_string(),
            email: "client@example.com".to_string(),
            services: ServiceSelection::new(false, true, false),
            web_config: WebsiteConfig::default(),
            total_price: Price::from_units(total),
        }
    }

    mod create {
        use super::*;

        #[test]
        fn grows_by_one_per_call_in_order() {
            let store = QuoteStore::in_memory();
            let mut ids = Vec::new();

            for (i, name) in ["Alice", "Bob", "Charlie"].iter().enumerate() {
                ids.push(store.create(data(name, 100)).unwrap());
                assert_eq!(store.len().unwrap(), i + 1);
            }

            let listed: Vec<QuoteId> = store.list().unwrap().iter().map(Quote::id).collect();
            assert_eq!(listed, ids);
        }

        #[test]
        fn ids_are_pairwise_distinct() {
            let store = QuoteStore::in_memory();
            let ids: HashSet<QuoteId> = (0..200)
                .map(|i| store.create(data(&format!("Client {i}"), 300)).unwrap())
                .collect();
            assert_eq!(ids.len(), 200);
        }

        #[test]
        fn stamps_creation_time() {
            let store = QuoteStore::in_memory();
            let before = Timestamp::now();
            let id = store.create(data("Alice", 300)).unwrap();
            let after = Timestamp::now();

            let quote = store.get(&id).unwrap().unwrap();
            assert!(!quote.created_at().is_before(&before));
            assert!(!quote.created_at().is_after(&after));
        }

        #[test]
        fn stores_total_as_given() {
            let store = QuoteStore::in_memory();
            let id = store.create(data("Alice", 1230)).unwrap();
            let quote = store.get(&id).unwrap().unwrap();
            assert_eq!(quote.total_price(), Price::from_units(1230));
        }
    }

    mod append {
        use super::*;

        #[test]
        fn append_adds_to_end() {
            let store = QuoteStore::in_memory();
            store.create(data("First", 100)).unwrap();
            let quote = Quote::new(data("Second", 200));
            let id = quote.id();

            store.append(quote).unwrap();

            let quotes = store.list().unwrap();
            assert_eq!(quotes.last().map(Quote::id), Some(id));
        }

        #[test]
        fn append_rejects_duplicate() {
            let store = QuoteStore::in_memory();
            let quote = Quote::new(data("Alice", 100));
            store.append(quote.clone()).unwrap();

            assert!(store.append(quote).is_err());
            assert_eq!(store.len().unwrap(), 1);
        }
    }

    #[test]
    fn clones_share_contents() {
        let store = QuoteStore::in_memory();
        let listing = store.clone();
        assert!(listing.is_empty().unwrap());

        store.create(data("Alice", 300)).unwrap();

        assert_eq!(listing.len().unwrap(), 1);
    }
}
