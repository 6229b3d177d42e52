//! cxxdeps-analysis: C++ module dependency engine
//!
//! Turns `import`, `export module`, and `#include` statements into make rules:
//! - Source: line classification and per-file extraction
//! - Paths: source path to object path mapping
//! - Resolver: module and header name resolution
//! - Graph: export registry, dependency graph, correction pass, stats
//! - Pipeline: the scan accumulator and its immutable snapshot
//! - Emit: dependency fragment, full makefile, report, JSON
//! - Scanner / Tree: file inventory and file-system access

pub mod emit;
pub mod graph;
pub mod options;
pub mod paths;
pub mod pipeline;
pub mod resolver;
pub mod scanner;
pub mod source;
pub mod tree;

// Re-exports for convenience
pub use graph::{
    CorrectionRule, DependencyGraph, ExportRegistry, Stats, TargetCorrection,
};
pub use options::AnalysisOptions;
pub use paths::PathMapper;
pub use pipeline::{AnalysisSnapshot, DependencyAnalyzer};
pub use resolver::Resolver;
pub use scanner::{IgnorePatterns, SourceWalker, WalkOptions};
pub use source::{classify_line, scan_source, LineKind, ScanOutcome, SourceUnit};
pub use tree::{DiskTree, MemoryTree, SourceTree};
