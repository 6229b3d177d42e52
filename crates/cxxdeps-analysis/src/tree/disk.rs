//! Project directory on disk.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use super::SourceTree;
use crate::scanner::{SourceWalker, WalkOptions};

/// A [`SourceTree`] backed by a real directory.
///
/// The source inventory is walked once, on first request, and reused.
pub struct DiskTree {
    walker: SourceWalker,
    inventory: OnceCell<Vec<String>>,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>, options: &WalkOptions) -> Self {
        Self {
            walker: SourceWalker::new(root, options),
            inventory: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// The walker, for enumerating sources under a sub-directory.
    pub fn walker(&self) -> &SourceWalker {
        &self.walker
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.walker.root().join(path)
    }
}

impl SourceTree for DiskTree {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path))
    }

    fn source_files(&self) -> Vec<String> {
        self.inventory
            .get_or_init(|| {
                let files = self.walker.collect();
                tracing::debug!(count = files.len(), root = %self.root().display(), "source inventory collected");
                files
            })
            .clone()
    }
}
