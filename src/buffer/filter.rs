//! Payload field filters

use std::collections::HashMap;

use super::stringify::filter_string;
use crate::types::Payload;

/// Required exact-match constraints on payload fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    fields: HashMap<String, String>,
}

impl Filters {
    /// Create an empty filter set, matching every payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Build filters from decoded query pairs; the first value of a repeated key wins
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = HashMap::new();
        for (key, value) in pairs {
            fields.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { fields }
    }

    /// Require `key` to render as `value`, replacing any earlier constraint on `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check every constraint against a payload. A missing key never matches.
    pub fn matches(&self, payload: &Payload) -> bool {
        self.fields.iter().all(|(key, expected)| {
            payload
                .get(key)
                .is_some_and(|value| filter_string(value) == expected.as_str())
        })
    }
}

impl From<HashMap<String, String>> for Filters {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_query_pairs(iter)
    }
}
