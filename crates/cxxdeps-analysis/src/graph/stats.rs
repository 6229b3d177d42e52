//! Run counters.

use serde::Serialize;

/// Write-only accumulator, read once for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub files_processed: usize,
    pub modules_found: usize,
    pub imports_found: usize,
    pub includes_found: usize,
    pub errors: Vec<String>,
}

impl Stats {
    /// Record a per-file failure as `Error processing <path>: <message>`.
    pub fn record_error(&mut self, path: &str, message: impl std::fmt::Display) {
        let entry = format!("Error processing {path}: {message}");
        tracing::warn!("{entry}");
        self.errors.push(entry);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
