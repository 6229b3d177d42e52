//! Frozen result of one run.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::{DependencyGraph, ExportRegistry, Stats, TargetCorrection};
use crate::options::AnalysisOptions;

/// Everything the renderers need, read-only.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot {
    pub(crate) options: AnalysisOptions,
    pub(crate) registry: ExportRegistry,
    pub(crate) raw_graph: DependencyGraph,
    pub(crate) graph: DependencyGraph,
    pub(crate) corrections: Vec<TargetCorrection>,
    pub(crate) module_imports: BTreeMap<String, BTreeSet<String>>,
    pub(crate) include_dependencies: BTreeMap<String, BTreeSet<String>>,
    pub(crate) sources: Vec<String>,
    pub(crate) objects: BTreeSet<String>,
    pub(crate) stats: Stats,
    pub(crate) has_modules: bool,
}

impl AnalysisSnapshot {
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn registry(&self) -> &ExportRegistry {
        &self.registry
    }

    /// Graph as accumulated during scanning.
    pub fn raw_graph(&self) -> &DependencyGraph {
        &self.raw_graph
    }

    /// Graph after the correction pass. This is what gets rendered.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn corrections(&self) -> &[TargetCorrection] {
        &self.corrections
    }

    /// Resolved module imports, per importing file.
    pub fn module_imports(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.module_imports
    }

    /// Header prerequisites, per including file.
    pub fn include_dependencies(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.include_dependencies
    }

    /// Source inventory, sorted.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Object target of every inventory source.
    pub fn objects(&self) -> &BTreeSet<String> {
        &self.objects
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn has_modules(&self) -> bool {
        self.has_modules
    }
}
