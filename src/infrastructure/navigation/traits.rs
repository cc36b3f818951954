//! # Navigation Port
//!
//! Access to the query parameters of the current navigation entry.

use crate::domain::value_objects::QueryParams;

/// Reads and rewrites the current navigation entry's query parameters.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Returns the parameters of the current entry.
    fn current_params(&self) -> QueryParams;

    /// Merges `params` into the current entry's parameters.
    ///
    /// The current history entry is replaced, never pushed, so form edits do
    /// not grow the back-button history.
    fn replace_params(&self, params: &QueryParams);
}
