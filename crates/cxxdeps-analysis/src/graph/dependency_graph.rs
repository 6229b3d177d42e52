//! Build target -> prerequisite set.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Append-only map from object targets to their prerequisites.
///
/// Keys only appear once they have at least one edge, and duplicate edges
/// collapse. Cycles are representable and never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `target -> prerequisite`. Returns false if the edge already existed.
    pub fn add_edge(&mut self, target: &str, prerequisite: &str) -> bool {
        self.edges
            .entry(target.to_string())
            .or_default()
            .insert(prerequisite.to_string())
    }

    /// Union `prerequisites` into `target`'s set.
    pub fn merge(&mut self, target: &str, prerequisites: &BTreeSet<String>) {
        if prerequisites.is_empty() {
            return;
        }
        self.edges
            .entry(target.to_string())
            .or_default()
            .extend(prerequisites.iter().cloned());
    }

    pub fn prerequisites(&self, target: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(target)
    }

    /// Targets in sorted order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// `(target, prerequisites)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.edges.iter().map(|(t, deps)| (t.as_str(), deps))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}
