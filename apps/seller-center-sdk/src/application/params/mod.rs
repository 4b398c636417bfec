//! Parameter sets: the flat key/value payload of one call.

mod builder;

pub use builder::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, DateFacet, ListOptions, OrderFilters, SortDirection, SortField,
    TIMESTAMP_FORMAT, format_timestamp,
};

use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain string.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Remote identifier.
    Identifier(u64),
    /// Value already serialized as JSON.
    Json(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Json(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Identifier(value)
    }
}

/// Ordered key/value parameters for one call.
///
/// Keys are unique and iterate in ascending order. Inserting an existing
/// key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert into this set, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Return a copy of this set with `key` set to `value`.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let mut next = self.clone();
        next.insert(key, value);
        next
    }

    /// Return a copy of this set overlaid with `other`; `other` wins on conflicts.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut next = self.clone();
        for (key, value) in &other.entries {
            next.entries.insert(key.clone(), value.clone());
        }
        next
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Look up a value in its wire form.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(ToString::to_string)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
