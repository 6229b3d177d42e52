//! Module name -> object target.

use cxxdeps_core::constants::{
    MODULE_SEARCH_DIRS, MODULE_SEARCH_FALLBACK_EXTENSIONS, STD_MODULE_PREFIX,
};

use super::Resolver;
use crate::graph::ExportRegistry;
use crate::tree::SourceTree;

impl<T: SourceTree + ?Sized> Resolver<'_, T> {
    /// Resolve `name` to the object target of the file that provides it.
    ///
    /// The registry is authoritative. Standard-library names fail fast
    /// unless standard modules are enabled. Otherwise the file system is
    /// searched in [`module_candidates`] order.
    pub fn resolve_module(&self, name: &str, registry: &ExportRegistry) -> Option<String> {
        if let Some(path) = registry.lookup(name) {
            let target = self.mapper.map(path);
            tracing::trace!(module = name, exporter = path, target = %target, "resolved from registry");
            return Some(target);
        }

        if name.starts_with(STD_MODULE_PREFIX) && !self.options.include_standard_modules {
            tracing::trace!(module = name, "skipping standard module");
            return None;
        }

        let candidates = module_candidates(
            name,
            &self.options.module_extension,
            &self.options.source_root,
        );
        for candidate in candidates {
            tracing::trace!(module = name, candidate = %candidate, "checking");
            if self.tree.exists(&candidate) {
                let target = self.mapper.map(&candidate);
                tracing::debug!(module = name, found = %candidate, target = %target, "resolved from search path");
                return Some(target);
            }
        }

        tracing::debug!(module = name, "module not found");
        None
    }
}

/// Every file path a module search probes, in order.
///
/// Name spelling varies slowest (`a.b`, `a/b`, `a_b`), then extension
/// (module extension first), then directory (source root, `include`,
/// `lib`, current directory).
pub fn module_candidates(name: &str, module_extension: &str, source_root: &str) -> Vec<String> {
    let spellings = [name.to_string(), name.replace('.', "/"), name.replace('.', "_")];
    let extensions: Vec<&str> = std::iter::once(module_extension)
        .chain(MODULE_SEARCH_FALLBACK_EXTENSIONS.iter().copied())
        .collect();
    let dirs: Vec<&str> = std::iter::once(source_root)
        .chain(MODULE_SEARCH_DIRS.iter().copied())
        .collect();

    let mut candidates = Vec::with_capacity(spellings.len() * extensions.len() * dirs.len());
    for spelling in &spellings {
        for ext in &extensions {
            for dir in &dirs {
                if *dir == "." {
                    candidates.push(format!("{spelling}{ext}"));
                } else {
                    candidates.push(format!("{dir}/{spelling}{ext}"));
                }
            }
        }
    }
    candidates
}
