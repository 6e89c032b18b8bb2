//! Peer dependencies shared by every package in a release.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from a peer dependency name to the global symbol a UMD bundle
/// reads it from (`"solid-js"` → `Solid`).
///
/// The key set doubles as the set of module names that are never bundled.
/// Insertion order is kept so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerDependencySet {
    globals: IndexMap<String, String>,
}

impl PeerDependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, global: impl Into<String>) -> Self {
        self.insert(name, global);
        self
    }

    /// Insert or replace a peer. Returns the previous global symbol, if any.
    pub fn insert(&mut self, name: impl Into<String>, global: impl Into<String>) -> Option<String> {
        self.globals.insert(name.into(), global.into())
    }

    /// Exact-name membership; no prefix or subpath matching.
    pub fn contains(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }

    pub fn global_for(&self, name: &str) -> Option<&str> {
        self.globals.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.globals.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.globals.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PeerDependencySet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            globals: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
