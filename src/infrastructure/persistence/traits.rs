//! # Repository Traits
//!
//! Port definitions for quote persistence.
//!
//! Quotes are append-only: the port offers no update or delete.
//!
//! # Examples
//!
//! ```
//! use website_quote::infrastructure::persistence::traits::QuoteRepository;
//!
//! fn describe(repo: &dyn QuoteRepository) -> String {
//!     format!("{} quotes", repo.count().unwrap_or(0))
//! }
//! ```

use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::QuoteId;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Insertion-ordered, append-only storage of quotes.
pub trait QuoteRepository: Send + Sync + std::fmt::Debug {
    /// Appends a quote at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a quote with the same id is
    /// already stored.
    fn append(&self, quote: Quote) -> RepositoryResult<()>;

    /// Returns a snapshot of all quotes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend cannot be read.
    fn list(&self) -> RepositoryResult<Vec<Quote>>;

    /// Looks up a quote by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend cannot be read.
    fn get(&self, id: &QuoteId) -> RepositoryResult<Option<Quote>>;

    /// Returns the number of stored quotes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` if the backend cannot be read.
    fn count(&self) -> RepositoryResult<usize>;
}
