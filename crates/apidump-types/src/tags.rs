use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// String markers attached to a taggable entity (`Deprecated`, `Hidden`, ...).
///
/// Tags form an order-insensitive, deduplicated set. Two tag sets are equal
/// when they contain the same markers regardless of insertion order, and
/// iteration is always in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeSet<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the tag is present.
    pub fn has(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Remove a tag. Returns `false` if it was absent.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The tags as a comparable value in canonical order.
    pub fn to_value(&self) -> Value {
        Value::Tags(self.0.iter().cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
