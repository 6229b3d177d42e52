//! Scan accumulator.
//!
//! [`DependencyAnalyzer`] owns the export registry, the raw dependency
//! graph, and the run statistics while files are being scanned. Files are
//! fed one at a time or in batches; [`DependencyAnalyzer::finish`] runs the
//! correction pass and hands back an immutable [`AnalysisSnapshot`].

mod snapshot;

pub use snapshot::AnalysisSnapshot;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use cxxdeps_core::errors::{CxxdepsErrorCode, ScanError};

use crate::graph::{correct_targets, DependencyGraph, ExportRegistry, Stats};
use crate::options::AnalysisOptions;
use crate::paths::{strip_dot_slash, PathMapper};
use crate::resolver::Resolver;
use crate::source::{scan_source, ScanOutcome};
use crate::tree::SourceTree;

/// Accumulates one run's registry, graph, and statistics.
pub struct DependencyAnalyzer<T: SourceTree> {
    options: AnalysisOptions,
    mapper: PathMapper,
    tree: T,
    registry: ExportRegistry,
    graph: DependencyGraph,
    stats: Stats,
    /// file -> module names it imported that resolved.
    module_imports: BTreeMap<String, BTreeSet<String>>,
    /// file -> header paths it depends on.
    include_dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl<T: SourceTree> DependencyAnalyzer<T> {
    pub fn new(options: AnalysisOptions, tree: T) -> Self {
        if options.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(options.threads)
                .build_global()
                .ok();
        }

        Self {
            mapper: PathMapper::from_options(&options),
            options,
            tree,
            registry: ExportRegistry::new(),
            graph: DependencyGraph::new(),
            stats: Stats::default(),
            module_imports: BTreeMap::new(),
            include_dependencies: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn registry(&self) -> &ExportRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Raw graph as accumulated so far, before correction.
    pub fn raw_graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Scan one file and fold its dependencies in.
    ///
    /// Read failures are recorded in the stats; they never abort the run.
    pub fn parse_file(&mut self, path: &str) {
        self.stats.files_processed += 1;
        tracing::info!(file = path, "processing");
        match self.read_and_scan(path) {
            Ok(outcome) => {
                self.count(&outcome);
                self.resolve(&outcome);
                self.register_exports(&outcome);
            }
            Err(err) => self.record_scan_error(err),
        }
    }

    /// Scan a batch of files.
    ///
    /// Reading and scanning run in parallel. Resolution then walks the
    /// results in input order, so the registry seen by each file matches a
    /// sequential scan. With `two_pass`, every export in the batch is
    /// registered before any import is resolved.
    pub fn parse_files(&mut self, paths: &[String]) {
        let start = Instant::now();
        let outcomes: Vec<Result<ScanOutcome, ScanError>> = paths
            .par_iter()
            .map(|path| self.read_and_scan(path))
            .collect();

        let mut scanned = Vec::with_capacity(outcomes.len());
        for (path, outcome) in paths.iter().zip(outcomes) {
            self.stats.files_processed += 1;
            tracing::info!(file = %path, "processing");
            match outcome {
                Ok(outcome) => {
                    self.count(&outcome);
                    scanned.push(outcome);
                }
                Err(err) => self.record_scan_error(err),
            }
        }

        if self.options.two_pass {
            for outcome in &scanned {
                self.register_exports(outcome);
            }
            for outcome in &scanned {
                self.resolve(outcome);
            }
        } else {
            for outcome in &scanned {
                self.resolve(outcome);
                self.register_exports(outcome);
            }
        }

        tracing::info!(
            files = paths.len(),
            errors = paths.len() - scanned.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "batch scanned"
        );
    }

    fn read_and_scan(&self, path: &str) -> Result<ScanOutcome, ScanError> {
        let bytes = self.tree.read(path).map_err(|source| ScanError::Io {
            path: PathBuf::from(path),
            source,
        })?;

        let size = bytes.len() as u64;
        if size > self.options.max_file_size {
            return Err(ScanError::FileTooLarge {
                path: PathBuf::from(path),
                size,
                max: self.options.max_file_size,
            });
        }

        let text = String::from_utf8(bytes).map_err(|_| ScanError::InvalidUtf8 {
            path: PathBuf::from(path),
        })?;

        Ok(scan_source(path, &text, &self.options))
    }

    fn record_scan_error(&mut self, err: ScanError) {
        let path = err.path().display().to_string();
        tracing::debug!(file = %path, code = err.error_code(), "scan failed");
        self.stats.record_error(&path, err);
    }

    fn count(&mut self, outcome: &ScanOutcome) {
        self.stats.imports_found += outcome.imports_found;
        self.stats.includes_found += outcome.includes_found;
    }

    fn resolve(&mut self, outcome: &ScanOutcome) {
        let unit = &outcome.unit;
        if unit.has_no_dependencies() {
            return;
        }

        let resolver = Resolver::new(&self.tree, &self.mapper, &self.options);
        let target = self.mapper.map(unit.path());

        for name in unit.imports() {
            if let Some(dependency) = resolver.resolve_module(name, &self.registry) {
                self.graph.add_edge(&target, strip_dot_slash(&dependency));
                self.module_imports
                    .entry(unit.path().to_string())
                    .or_default()
                    .insert(name.clone());
            }
        }

        if self.options.process_includes {
            for name in unit.includes() {
                if let Some(header) = resolver.resolve_include(name, unit.path()) {
                    let header = strip_dot_slash(&header).to_string();
                    self.graph.add_edge(&target, &header);
                    self.include_dependencies
                        .entry(unit.path().to_string())
                        .or_default()
                        .insert(header);
                }
            }
        }
    }

    fn register_exports(&mut self, outcome: &ScanOutcome) {
        for name in outcome.unit.exports() {
            self.registry.register(name, outcome.unit.path());
            self.stats.modules_found += 1;
            tracing::debug!(module = %name, file = outcome.unit.path(), "registered export");
        }
    }

    /// Whether any module was exported, or any import resolved.
    pub fn has_modules(&self) -> bool {
        !self.registry.is_empty() || !self.module_imports.is_empty()
    }

    /// Run the correction pass and freeze the results.
    pub fn finish(self) -> AnalysisSnapshot {
        let sources = self.tree.source_files();
        let correction = correct_targets(&self.graph, &sources, &self.tree, &self.mapper);
        let objects: BTreeSet<String> = sources.iter().map(|s| self.mapper.map(s)).collect();
        let has_modules = self.has_modules();

        tracing::info!(
            files = self.stats.files_processed,
            modules = self.stats.modules_found,
            targets = correction.graph.len(),
            rewritten = correction.corrections.iter().filter(|c| c.is_rewrite()).count(),
            "analysis finished"
        );

        AnalysisSnapshot {
            options: self.options,
            registry: self.registry,
            raw_graph: self.graph,
            graph: correction.graph,
            corrections: correction.corrections,
            module_imports: self.module_imports,
            include_dependencies: self.include_dependencies,
            sources,
            objects,
            stats: self.stats,
            has_modules,
        }
    }
}
