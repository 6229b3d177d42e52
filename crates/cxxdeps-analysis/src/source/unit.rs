//! Per-file extraction into an immutable `SourceUnit`.

use std::collections::BTreeSet;

use serde::Serialize;

use super::comments::CommentStripper;
use super::line::{classify_line, LineKind};
use crate::options::AnalysisOptions;

/// The dependency-relevant content of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceUnit {
    path: String,
    imports: BTreeSet<String>,
    exports: BTreeSet<String>,
    includes: BTreeSet<String>,
}

impl SourceUnit {
    pub fn new(
        path: impl Into<String>,
        imports: BTreeSet<String>,
        exports: BTreeSet<String>,
        includes: BTreeSet<String>,
    ) -> Self {
        Self {
            path: path.into(),
            imports,
            exports,
            includes,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn exports(&self) -> &BTreeSet<String> {
        &self.exports
    }

    pub fn includes(&self) -> &BTreeSet<String> {
        &self.includes
    }

    /// Nothing here can produce a dependency edge.
    pub fn has_no_dependencies(&self) -> bool {
        self.imports.is_empty() && self.includes.is_empty()
    }
}

/// A scanned unit plus the statement counts for the run statistics.
///
/// Counts include statements whose names were dropped by the options
/// (system imports without `include_standard_modules`, includes without
/// `process_includes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub unit: SourceUnit,
    pub imports_found: usize,
    pub includes_found: usize,
}

/// Scan the text of one file.
pub fn scan_source(path: &str, text: &str, options: &AnalysisOptions) -> ScanOutcome {
    let mut imports = BTreeSet::new();
    let mut exports = BTreeSet::new();
    let mut includes = BTreeSet::new();
    let mut imports_found = 0;
    let mut includes_found = 0;

    let mut stripper = CommentStripper::new();

    for (index, raw) in text.lines().enumerate() {
        let line = stripper.strip(raw);
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        match classify_line(&line) {
            LineKind::Import(name) | LineKind::LocalImport(name) => {
                tracing::debug!(file = path, line = line_number, module = %name, "found import");
                imports_found += 1;
                imports.insert(name);
            }
            LineKind::SystemImport(name) => {
                tracing::debug!(file = path, line = line_number, module = %name, "found system import");
                imports_found += 1;
                if options.include_standard_modules {
                    imports.insert(name);
                }
            }
            LineKind::Export(name) => {
                tracing::debug!(file = path, line = line_number, module = %name, "found export");
                exports.insert(name);
            }
            LineKind::ModuleImpl(name) => {
                tracing::debug!(file = path, line = line_number, module = %name, "found module implementation");
                exports.insert(name);
            }
            LineKind::SystemInclude(name) | LineKind::LocalInclude(name) => {
                tracing::debug!(file = path, line = line_number, header = %name, "found include");
                includes_found += 1;
                if options.process_includes {
                    includes.insert(name);
                }
            }
            LineKind::Other => {}
        }
    }

    ScanOutcome {
        unit: SourceUnit::new(path, imports, exports, includes),
        imports_found,
        includes_found,
    }
}
