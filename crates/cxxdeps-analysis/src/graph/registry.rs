//! Module name -> exporting source file.

use std::collections::BTreeMap;

use serde::Serialize;

/// Which file provides each module seen so far.
///
/// Grows monotonically during a run. When two files export the same name
/// the later registration wins; the collision is logged, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportRegistry {
    exports: BTreeMap<String, String>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` exports `module`. Returns the previous exporter, if any.
    pub fn register(&mut self, module: &str, path: &str) -> Option<String> {
        let previous = self.exports.insert(module.to_string(), path.to_string());
        if let Some(ref old) = previous {
            if old != path {
                tracing::warn!(module, previous = %old, current = path, "module exported by more than one file, keeping the latest");
            }
        }
        previous
    }

    /// The file exporting `module`.
    pub fn lookup(&self, module: &str) -> Option<&str> {
        self.exports.get(module).map(String::as_str)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.exports.contains_key(module)
    }

    /// `(module, path)` pairs sorted by module name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exports.iter().map(|(m, p)| (m.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}
