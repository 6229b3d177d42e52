//! Graph module - registry, dependency graph, correction pass, and stats
//!
//! The registry and the raw graph grow while files are scanned. Once the
//! scan is over, `correction` rewrites every target key to its canonical
//! form against the source inventory.

mod correction;
mod dependency_graph;
mod registry;
mod stats;

pub use correction::{correct_targets, CorrectionRule, CorrectionResult, TargetCorrection};
pub use dependency_graph::DependencyGraph;
pub use registry::ExportRegistry;
pub use stats::Stats;
