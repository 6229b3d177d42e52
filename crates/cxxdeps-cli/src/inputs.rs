//! Command line paths -> list of source files to scan.

use std::path::Path;

use cxxdeps_analysis::paths::normalize_lexically;
use cxxdeps_analysis::SourceWalker;

/// Expand each argument: directories are walked, files are taken as given.
///
/// Relative paths are spelled as typed; the correction pass reconciles
/// spellings later. Absolute and `..` paths that land inside the project
/// are rewritten relative to its root first. No arguments means the
/// project root, walked as `.`.
pub fn collect_inputs(args: &[String], walker: &SourceWalker) -> Vec<String> {
    if args.is_empty() {
        tracing::info!("parsing current directory");
        return walker.collect_under(".");
    }

    let mut files = Vec::new();
    for arg in args {
        let arg = &project_relative(arg, walker.root());
        let path = walker.root().join(arg);
        if path.is_dir() {
            let found = walker.collect_under(arg);
            tracing::info!(dir = %arg, count = found.len(), "parsing directory");
            files.extend(found);
        } else if path.is_file() {
            tracing::info!(file = %arg, "parsing file");
            files.push(arg.clone());
        } else {
            tracing::warn!("{arg} is not a valid file or directory");
        }
    }
    files
}

/// `arg` relative to `root` when it is absolute or climbs with `..`.
///
/// Arguments outside the project keep their spelling.
fn project_relative(arg: &str, root: &Path) -> String {
    if !arg.starts_with('/') && !arg.split('/').any(|part| part == "..") {
        return arg.to_string();
    }

    let root = normalize_lexically(&root.to_string_lossy());
    let full = if arg.starts_with('/') {
        normalize_lexically(arg)
    } else {
        normalize_lexically(&format!("{root}/{arg}"))
    };
    if full == root {
        return ".".to_string();
    }

    let prefix = if root.ends_with('/') { root } else { format!("{root}/") };
    match full.strip_prefix(&prefix) {
        Some(relative) => {
            tracing::debug!(arg, relative, "argument rewritten relative to project root");
            relative.to_string()
        }
        None => arg.to_string(),
    }
}
