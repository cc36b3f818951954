//! # Quote Listing
//!
//! Filtered and sorted view over the [`QuoteStore`].
//!
//! The view is recomputed from the store on every read, so it can never be
//! stale with respect to the store, the search text or the sort selection.
//!
//! # Pipeline
//!
//! ```text
//! store.list() → filter(client name contains search) → stable sort(key, direction)
//! ```
//!
//! Ties on the sort key keep insertion order in both directions.

use crate::application::error::ApplicationResult;
use crate::application::services::quote_store::QuoteStore;
use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::{SortDirection, SortKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Search text and sort selection of a listing.
///
/// Starts as "everything, newest first".
///
/// # Examples
///
/// ```
/// use website_quote::application::services::quote_listing::ListQuery;
/// use website_quote::domain::value_objects::{SortDirection, SortKey};
///
/// let mut query = ListQuery::default();
/// query.select_sort(SortKey::Name);
/// assert_eq!(query.sort_direction, SortDirection::Ascending);
///
/// query.select_sort(SortKey::Name);
/// assert_eq!(query.sort_direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against client names.
    pub search_text: String,
    /// Field to order by.
    pub sort_key: SortKey,
    /// Order direction.
    pub sort_direction: SortDirection,
}

impl ListQuery {
    /// Creates a query with the given search text and default ordering.
    #[must_use]
    pub fn with_search(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..Self::default()
        }
    }

    /// Sets the ordering explicitly.
    #[must_use]
    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    /// Handles a click on a sort control.
    ///
    /// Selecting the current key flips the direction; selecting another key
    /// switches to it with that key's default direction.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_key = key;
            self.sort_direction = key.default_direction();
        }
    }

    /// Returns true if `quote` passes the search filter.
    ///
    /// Blank search text matches everything.
    #[must_use]
    pub fn matches(&self, quote: &Quote) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        needle.is_empty() || quote.client_name().to_lowercase().contains(&needle)
    }

    /// Compares two quotes by the selected key and direction.
    #[must_use]
    pub fn compare(&self, a: &Quote, b: &Quote) -> Ordering {
        let natural = match self.sort_key {
            SortKey::Date => a.created_at().cmp(&b.created_at()),
            SortKey::Price => a.total_price().cmp(&b.total_price()),
            SortKey::Name => compare_names(a.client_name(), b.client_name()),
        };
        self.sort_direction.apply(natural)
    }

    /// Filters and sorts `quotes` into a new vector.
    #[must_use]
    pub fn apply(&self, quotes: &[Quote]) -> Vec<Quote> {
        let mut visible: Vec<Quote> = quotes.iter().filter(|q| self.matches(q)).cloned().collect();
        visible.sort_by(|a, b| self.compare(a, b));
        visible
    }
}

/// Compares client names alphabetically, the way a reader expects.
///
/// Accents and case are ignored first, so `Álvaro` sorts with the `A`s.
/// Names equal under that rule are ordered by their lowercase form (plain
/// letters before accented ones) and then by the exact text.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use website_quote::application::services::quote_listing::compare_names;
///
/// assert_eq!(compare_names("Álvaro", "Bob"), Ordering::Less);
/// assert_eq!(compare_names("Émile", "Zoe"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercase text with diacritics removed.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The listing shown next to the form.
#[derive(Debug, Clone)]
pub struct QuoteListing {
    store: QuoteStore,
    query: ListQuery,
}

impl QuoteListing {
    /// Creates a listing over `store` with the default query.
    #[must_use]
    pub fn new(store: QuoteStore) -> Self {
        Self {
            store,
            query: ListQuery::default(),
        }
    }

    /// Returns the current query.
    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, search_text: impl Into<String>) {
        self.query.search_text = search_text.into();
    }

    /// Handles a click on a sort control. See [`ListQuery::select_sort`].
    pub fn select_sort(&mut self, key: SortKey) {
        self.query.select_sort(key);
    }

    /// Current filtered and sorted quotes.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store cannot be read.
    pub fn view(&self) -> ApplicationResult<Vec<Quote>> {
        let quotes = self.store.list()?;
        let visible = self.query.apply(&quotes);
        debug!(
            total = quotes.len(),
            visible = visible.len(),
            sort_key = %self.query.sort_key,
            sort_direction = %self.query.sort_direction,
            "quote listing recomputed"
        );
        Ok(visible)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::quote::NewQuote;
    use crate::domain::value_objects::{
        Price, QuoteId, ServiceSelection, Timestamp, WebsiteConfig,
    };

    fn quote_at(name: &str, total: u64, millis: i64) -> Quote {
        Quote::from_parts(
            QuoteId::new_v4(),
            Timestamp::from_millis(millis).unwrap(),
            NewQuote {
                client_name: name.to_string(),
                phone: "612345678".to_string(),
                email: "client@example.com".to_string(),
                services: ServiceSelection::new(true, false, false),
                web_config: WebsiteConfig::default(),
                total_price: Price::from_units(total),
            },
        )
    }

    fn sample() -> Vec<Quote> {
        vec![
            quote_at("Alice Johnson", 300, 1_000),
            quote_at("Bob Smith", 400, 2_000),
            quote_at("Charlie Brown", 700, 3_000),
        ]
    }

    fn names(quotes: &[Quote]) -> Vec<&str> {
        quotes.iter().map(Quote::client_name).collect()
    }

    mod filter {
        use super::*;

        #[test]
        fn blank_search_matches_everything() {
            let query = ListQuery::with_search("   ");
            assert_eq!(query.apply(&sample()).len(), 3);
        }

        #[test]
        fn search_is_case_insensitive_substring() {
            let query = ListQuery::with_search("SMI");
            assert_eq!(names(&query.apply(&sample())), ["Bob Smith"]);
        }

        #[test]
        fn search_is_trimmed() {
            let query = ListQuery::with_search("  brown ");
            assert_eq!(names(&query.apply(&sample())), ["Charlie Brown"]);
        }

        #[test]
        fn search_o_matches_all_three() {
            let query = ListQuery::with_search("o");
            assert_eq!(query.apply(&sample()).len(), 3);
        }

        #[test]
        fn no_match_is_empty() {
            let query = ListQuery::with_search("zed");
            assert!(query.apply(&sample()).is_empty());
        }
    }

    mod sort {
        use super::*;

        #[test]
        fn default_is_newest_first() {
            let sorted = ListQuery::default().apply(&sample());
            assert_eq!(names(&sorted), ["Charlie Brown", "Bob Smith", "Alice Johnson"]);
        }

        #[test]
        fn name_ascending() {
            let mut shuffled = sample();
            shuffled.reverse();
            let query = ListQuery::default().sorted_by(SortKey::Name, SortDirection::Ascending);
            assert_eq!(
                names(&query.apply(&shuffled)),
                ["Alice Johnson", "Bob Smith", "Charlie Brown"]
            );
        }

        #[test]
        fn price_descending() {
            let query = ListQuery::default().sorted_by(SortKey::Price, SortDirection::Descending);
            let prices: Vec<Price> = query.apply(&sample()).iter().map(Quote::total_price).collect();
            assert_eq!(
                prices,
                [Price::from_units(700), Price::from_units(400), Price::from_units(300)]
            );
        }

        #[test]
        fn ties_keep_insertion_order_in_both_directions() {
            let quotes = vec![
                quote_at("First", 500, 1_000),
                quote_at("Second", 500, 2_000),
                quote_at("Cheap", 100, 3_000),
            ];

            let asc = ListQuery::default().sorted_by(SortKey::Price, SortDirection::Ascending);
            let desc = ListQuery::default().sorted_by(SortKey::Price, SortDirection::Descending);

            assert_eq!(names(&asc.apply(&quotes)), ["Cheap", "First", "Second"]);
            assert_eq!(names(&desc.apply(&quotes)), ["First", "Second", "Cheap"]);
        }

        #[test]
        fn name_comparison_ignores_case() {
            assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
            assert_eq!(compare_names("Émile", "émile"), Ordering::Less);
        }

        #[test]
        fn name_comparison_ignores_accents() {
            assert_eq!(compare_names("Álvaro", "Bob"), Ordering::Less);
            assert_eq!(compare_names("Émile", "Zoe"), Ordering::Less);
            assert_eq!(compare_names("Ñandú", "Oscar"), Ordering::Less);
            assert_eq!(compare_names("Zoë", "Zoey"), Ordering::Less);
        }

        #[test]
        fn unaccented_name_precedes_accented_twin() {
            assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
            assert_eq!(compare_names("emile", "Émile"), Ordering::Less);
        }

        #[test]
        fn accented_names_sort_among_plain_ones() {
            let quotes = vec![
                quote_at("Zoe Adams", 100, 1_000),
                quote_at("Álvaro Pérez", 100, 2_000),
                quote_at("Émile Zola", 100, 3_000),
                quote_at("Bob Smith", 100, 4_000),
            ];

            let asc = ListQuery::default().sorted_by(SortKey::Name, SortDirection::Ascending);
            let desc = ListQuery::default().sorted_by(SortKey::Name, SortDirection::Descending);

            assert_eq!(
                names(&asc.apply(&quotes)),
                ["Álvaro Pérez", "Bob Smith", "Émile Zola", "Zoe Adams"]
            );
            assert_eq!(
                names(&desc.apply(&quotes)),
                ["Zoe Adams", "Émile Zola", "Bob Smith", "Álvaro Pérez"]
            );
        }

        #[test]
        fn apply_leaves_input_untouched() {
            let quotes = sample();
            let before = names(&quotes).join(",");
            let _ = ListQuery::default().sorted_by(SortKey::Name, SortDirection::Descending).apply(&quotes);
            assert_eq!(names(&quotes).join(","), before);
        }
    }

    mod select_sort {
        use super::*;

        #[test]
        fn same_key_toggles() {
            let mut query = ListQuery::default();
            query.select_sort(SortKey::Date);
            assert_eq!(query.sort_direction, SortDirection::Ascending);
            query.select_sort(SortKey::Date);
            assert_eq!(query.sort_direction, SortDirection::Descending);
        }

        #[test]
        fn switching_uses_key_default() {
            let mut query = ListQuery::default();

            query.select_sort(SortKey::Name);
            assert_eq!((query.sort_key, query.sort_direction), (SortKey::Name, SortDirection::Ascending));

            query.select_sort(SortKey::Price);
            assert_eq!((query.sort_key, query.sort_direction), (SortKey::Price, SortDirection::Descending));
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn view_tracks_store_and_query() {
            let store = QuoteStore::in_memory();
            for quote in sample() {
                store.append(quote).unwrap();
            }
            let mut listing = QuoteListing::new(store.clone());

            assert_eq!(listing.view().unwrap().len(), 3);

            listing.set_search("alice");
            assert_eq!(names(&listing.view().unwrap()), ["Alice Johnson"]);

            store.append(quote_at("Alicia Keys", 900, 4_000)).unwrap();
            listing.set_search("ali");
            listing.select_sort(SortKey::Price);
            assert_eq!(names(&listing.view().unwrap()), ["Alicia Keys", "Alice Johnson"]);
        }

        #[test]
        fn view_does_not_reorder_store() {
            let store = QuoteStore::in_memory();
            for quote in sample() {
                store.append(quote).unwrap();
            }
            let mut listing = QuoteListing::new(store.clone());
            listing.select_sort(SortKey::Name);
            listing.select_sort(SortKey::Name);
            let _ = listing.view().unwrap();

            assert_eq!(
                names(&store.list().unwrap()),
                ["Alice Johnson", "Bob Smith", "Charlie Brown"]
            );
        }
    }
}
