//! # Query Parameters
//!
//! Flat string-keyed map mirroring the navigation query string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Navigation query parameters.
///
/// Keys are unique; values are always strings. Iteration order is the key
/// order, which keeps rendered query strings stable.
///
/// # Examples
///
/// ```
/// use website_quote::domain::value_objects::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("pages", "3");
/// params.merge(&QueryParams::from_iter([("pages", "4"), ("seo", "true")]));
///
/// assert_eq!(params.get("pages"), Some("4"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Overlays `other` on top of this map; keys in `other` win.
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.0.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unrelated_keys() {
        let mut params = QueryParams::from_iter([("tab", "quotes"), ("pages", "1")]);
        params.merge(&QueryParams::from_iter([("pages", "2")]));

        assert_eq!(params.get("tab"), Some("quotes"));
        assert_eq!(params.get("pages"), Some("2"));
    }

    #[test]
    fn remove_and_empty() {
        let mut params = QueryParams::from_iter([("seo", "true")]);
        assert_eq!(params.remove("seo").as_deref(), Some("true"));
        assert!(params.is_empty());
    }

    #[test]
    fn display_joins_in_key_order() {
        let params = QueryParams::from_iter([("web", "false"), ("ads", "true")]);
        assert_eq!(params.to_string(), "ads=true&web=false");
    }
}
