//! File inventory configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_THREADS};

/// Configuration for source discovery and the parallel read stage.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Additional gitignore-style patterns to skip.
    pub extra_ignore: Vec<String>,
    /// Honour `.gitignore` and `.cxxdepsignore` at the project root. Default: true.
    pub use_gitignore: Option<bool>,
    /// Files larger than this are skipped and recorded as errors. Default: 4MB.
    pub max_file_size: Option<u64>,
    /// Worker threads for reading and scanning files. 0 = auto.
    pub threads: Option<usize>,
}

impl ScanConfig {
    /// Returns the effective gitignore setting, defaulting to true.
    pub fn effective_use_gitignore(&self) -> bool {
        self.use_gitignore.unwrap_or(true)
    }

    /// Returns the effective max file size, defaulting to 4MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }
}
