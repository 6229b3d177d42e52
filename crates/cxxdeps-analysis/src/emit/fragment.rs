//! Dependency fragment: `target: prerequisites` lines for `include` in a Makefile.

use cxxdeps_core::constants::MODULE_FLAGS;

use super::{push_list, GENERATED_BY};
use crate::pipeline::AnalysisSnapshot;

/// `OBJECTS` stays on one line up to this many entries.
const INLINE_OBJECTS: usize = 5;

/// Render the fragment. Empty when no dependency was recorded at all.
///
/// Only prerequisites carrying the object extension are listed; header
/// dependencies live in the full Makefile and the report.
pub fn render(snapshot: &AnalysisSnapshot) -> String {
    if snapshot.raw_graph().is_empty() {
        return String::new();
    }

    let options = snapshot.options();
    let mut out = vec![
        GENERATED_BY.to_string(),
        format!(
            "# Sources in {}/, objects in {}/",
            options.source_root, options.object_root
        ),
        String::new(),
    ];

    if !snapshot.objects().is_empty() {
        out.push("# Object files".to_string());
        push_list(
            &mut out,
            "OBJECTS",
            snapshot.objects().iter().map(String::as_str),
            INLINE_OBJECTS,
        );
        out.push(String::new());
    }

    out.push("# Dependencies".to_string());
    for (target, prerequisites) in snapshot.graph().iter() {
        let objects: Vec<&str> = prerequisites
            .iter()
            .map(String::as_str)
            .filter(|dep| dep.ends_with(&options.object_extension))
            .collect();
        if objects.is_empty() {
            continue;
        }
        out.push(format!("{target}: {}", objects.join(" ")));
    }
    out.push(String::new());

    if snapshot.has_modules() {
        out.push("# Module compilation flags".to_string());
        out.push(format!("MODULE_FLAGS = {MODULE_FLAGS}"));
        out.push(String::new());
    }

    out.join("\n")
}
