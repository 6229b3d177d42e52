//! Post-scan target correction.
//!
//! Targets are computed from whatever spelling a file was scanned under,
//! before the full inventory is known. This pass re-derives each key from
//! the source file that really produces it:
//!
//! 1. exact match: some inventory file maps to the key verbatim;
//! 2. reverse mapping: the key sits under the source or object root, so the
//!    extension is stripped, the path re-rooted under the source root and
//!    normalized, and each known source extension is probed in order;
//! 3. otherwise the key is kept as is.
//!
//! Keys that collapse onto the same corrected target have their
//! prerequisites unioned.

use std::collections::HashMap;

use serde::Serialize;

use cxxdeps_core::constants::SOURCE_EXTENSIONS;

use super::DependencyGraph;
use crate::paths::{normalize_lexically, strip_extension, PathMapper};
use crate::tree::SourceTree;

/// How a target key was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionRule {
    ExactMatch,
    ReverseMapped,
    Kept,
}

impl CorrectionRule {
    pub fn as_str(self) -> &'static str {
        match self {
            CorrectionRule::ExactMatch => "exact match",
            CorrectionRule::ReverseMapped => "reverse mapped",
            CorrectionRule::Kept => "kept",
        }
    }
}

/// One decision of the correction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetCorrection {
    pub original: String,
    pub corrected: String,
    /// Source file the corrected key was derived from.
    pub source: Option<String>,
    pub rule: CorrectionRule,
}

impl TargetCorrection {
    /// The key changed.
    pub fn is_rewrite(&self) -> bool {
        self.original != self.corrected
    }
}

/// Output of [`correct_targets`].
#[derive(Debug, Clone, Default)]
pub struct CorrectionResult {
    pub graph: DependencyGraph,
    pub corrections: Vec<TargetCorrection>,
}

/// Rewrite every key of `raw` to its canonical target.
///
/// `inventory` is the full list of source files on disk.
pub fn correct_targets<T: SourceTree + ?Sized>(
    raw: &DependencyGraph,
    inventory: &[String],
    tree: &T,
    mapper: &PathMapper,
) -> CorrectionResult {
    // First inventory file wins when two sources map to one object.
    let mut by_target: HashMap<String, &str> = HashMap::with_capacity(inventory.len());
    for source in inventory {
        by_target.entry(mapper.map(source)).or_insert(source.as_str());
    }

    let mut result = CorrectionResult::default();

    for (target, prerequisites) in raw.iter() {
        let correction = correct_one(target, &by_target, tree, mapper);
        match correction.rule {
            CorrectionRule::Kept => {
                tracing::debug!(key = target, "kept target (no source found)");
            }
            rule => {
                tracing::debug!(
                    key = target,
                    corrected = %correction.corrected,
                    source = correction.source.as_deref().unwrap_or_default(),
                    rule = rule.as_str(),
                    "fixed target"
                );
            }
        }
        result.graph.merge(&correction.corrected, prerequisites);
        result.corrections.push(correction);
    }

    result
}

fn correct_one<T: SourceTree + ?Sized>(
    target: &str,
    by_target: &HashMap<String, &str>,
    tree: &T,
    mapper: &PathMapper,
) -> TargetCorrection {
    if let Some(source) = by_target.get(target) {
        return TargetCorrection {
            original: target.to_string(),
            corrected: mapper.map(source),
            source: Some((*source).to_string()),
            rule: CorrectionRule::ExactMatch,
        };
    }

    if let Some(source) = reverse_map(target, tree, mapper) {
        return TargetCorrection {
            original: target.to_string(),
            corrected: mapper.map(&source),
            source: Some(source),
            rule: CorrectionRule::ReverseMapped,
        };
    }

    TargetCorrection {
        original: target.to_string(),
        corrected: target.to_string(),
        source: None,
        rule: CorrectionRule::Kept,
    }
}

/// Guess the source behind an object path and confirm it exists.
///
/// Ties between extensions go to the first in [`SOURCE_EXTENSIONS`].
fn reverse_map<T: SourceTree + ?Sized>(
    target: &str,
    tree: &T,
    mapper: &PathMapper,
) -> Option<String> {
    let stem = strip_extension(target);
    let source_stem = if mapper.relative_to_source_root(stem).is_some() {
        stem.to_string()
    } else {
        let relative = mapper.relative_to_object_root(stem)?;
        format!("{}/{}", mapper.source_root(), relative)
    };
    let source_stem = normalize_lexically(&source_stem);

    SOURCE_EXTENSIONS.iter().find_map(|ext| {
        let candidate = format!("{source_stem}{ext}");
        tracing::trace!(candidate = %candidate, "probing reverse-mapped source");
        tree.exists(&candidate).then_some(candidate)
    })
}
