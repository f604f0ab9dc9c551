use serde::Serialize;

use crate::utils::ordered_set::OrderedSet;

/// Unique, scheme-less hostnames found live, in discovery order.
///
/// A host answering on both http and https is stored once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LiveHostSet(OrderedSet<String>);

impl LiveHostSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the host was not known yet.
    pub fn insert(&mut self, host: impl Into<String>) -> bool {
        self.0.insert(host.into())
    }

    pub fn contains(&self, host: &str) -> bool {
        self.0.contains(host)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The first `limit` hosts in the order they were discovered.
    pub fn first(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.iter().take(limit)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.as_slice().to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for LiveHostSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
