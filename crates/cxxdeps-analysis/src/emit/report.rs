//! Human-readable analysis report.

use crate::pipeline::AnalysisSnapshot;

/// Render the report: statistics, exports, dependencies, rewritten
/// targets, and errors. Sections with nothing to say are left out.
pub fn render(snapshot: &AnalysisSnapshot) -> String {
    let stats = snapshot.stats();
    let mut out = vec![
        "=== C++ Module Dependency Analysis Report ===".to_string(),
        String::new(),
        "Statistics:".to_string(),
        format!("  Files processed: {}", stats.files_processed),
        format!("  Modules found: {}", stats.modules_found),
        format!("  Imports found: {}", stats.imports_found),
        format!("  Includes found: {}", stats.includes_found),
        format!("  Errors: {}", stats.error_count()),
        String::new(),
    ];

    if !snapshot.registry().is_empty() {
        out.push("Module Exports:".to_string());
        for (module, path) in snapshot.registry().iter() {
            out.push(format!("  {module} -> {path}"));
        }
        out.push(String::new());
    }

    if !snapshot.graph().is_empty() {
        out.push("Dependencies:".to_string());
        for (target, prerequisites) in snapshot.graph().iter() {
            out.push(format!("  {target}:"));
            for dep in prerequisites {
                out.push(format!("    {dep}"));
            }
        }
        out.push(String::new());
    }

    let rewrites: Vec<_> = snapshot
        .corrections()
        .iter()
        .filter(|c| c.is_rewrite())
        .collect();
    if !rewrites.is_empty() {
        out.push("Corrections:".to_string());
        for correction in rewrites {
            out.push(format!(
                "  {} -> {} ({})",
                correction.original,
                correction.corrected,
                correction.rule.as_str()
            ));
        }
        out.push(String::new());
    }

    if !stats.errors.is_empty() {
        out.push("Errors:".to_string());
        for error in &stats.errors {
            out.push(format!("  {error}"));
        }
        out.push(String::new());
    }

    out.join("\n")
}
