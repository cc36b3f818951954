//! # In-Memory Navigator
//!
//! History stack kept in memory, for sessions without a browser and for
//! tests.

use crate::domain::value_objects::QueryParams;
use crate::infrastructure::navigation::traits::Navigator;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
struct History {
    entries: Vec<QueryParams>,
    replacements: usize,
}

/// In-memory implementation of [`Navigator`].
///
/// Starts with a single empty entry. Clones share the same history.
#[derive(Debug, Clone)]
pub struct InMemoryNavigator {
    history: Arc<RwLock<History>>,
}

impl InMemoryNavigator {
    /// Creates a navigator whose only entry has no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(QueryParams::new())
    }

    /// Creates a navigator whose only entry carries `params`.
    #[must_use]
    pub fn with_params(params: QueryParams) -> Self {
        Self {
            history: Arc::new(RwLock::new(History {
                entries: vec![params],
                replacements: 0,
            })),
        }
    }

    /// Pushes a new history entry, as a link click or reload would.
    pub fn navigate(&self, params: QueryParams) {
        self.history.write().entries.push(params);
    }

    /// Number of entries in the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.read().entries.len()
    }

    /// Number of times the current entry was rewritten.
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.history.read().replacements
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for InMemoryNavigator {
    fn current_params(&self) -> QueryParams {
        self.history
            .read()
            .entries
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn replace_params(&self, params: &QueryParams) {
        let mut history = self.history.write();
        match history.entries.last_mut() {
            Some(current) => current.merge(params),
            None => history.entries.push(params.clone()),
        }
        history.replacements += 1;
    }
}
