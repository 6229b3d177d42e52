//! In-memory project, for tests and embedding.

use std::collections::BTreeMap;
use std::io;

use cxxdeps_core::constants::SOURCE_EXTENSIONS;

use super::SourceTree;
use crate::paths::strip_dot_slash;

/// A [`SourceTree`] holding file contents in a map.
///
/// Paths are stored without a leading `./`, so `./src/a.cpp` and
/// `src/a.cpp` name the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: &str, content: impl Into<Vec<u8>>) -> &mut Self {
        self.files
            .insert(strip_dot_slash(path).to_string(), content.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }
}

impl SourceTree for MemoryTree {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(strip_dot_slash(path))
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(strip_dot_slash(path))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }

    fn source_files(&self) -> Vec<String> {
        self.files
            .keys()
            .filter(|path| SOURCE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)))
            .cloned()
            .collect()
    }
}
