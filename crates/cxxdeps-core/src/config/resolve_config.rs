//! Dependency resolution configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MODULE_EXTENSION, DEFAULT_OBJECT_EXTENSION, DEFAULT_OBJECT_ROOT,
    DEFAULT_SOURCE_ROOT,
};

/// Options that drive scanning, path mapping, and module resolution.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResolveConfig {
    /// Keep `import <...>;` names and resolve `std*` modules. Default: false.
    pub include_standard_modules: Option<bool>,
    /// Collect `#include` dependencies. Default: true.
    pub process_includes: Option<bool>,
    /// Extension of module interface units. Default: `.cppm`.
    pub module_extension: Option<String>,
    /// Root of the source tree. Default: `src`.
    pub source_root: Option<String>,
    /// Root of the object tree. Default: `obj`.
    pub object_root: Option<String>,
    /// Extension of object files. Default: `.o`.
    pub object_extension: Option<String>,
    /// Register every export before resolving any import. Default: false.
    pub two_pass: Option<bool>,
}

impl ResolveConfig {
    /// Returns the effective standard module setting, defaulting to false.
    pub fn effective_include_standard_modules(&self) -> bool {
        self.include_standard_modules.unwrap_or(false)
    }

    /// Returns the effective include processing setting, defaulting to true.
    pub fn effective_process_includes(&self) -> bool {
        self.process_includes.unwrap_or(true)
    }

    /// Returns the module extension with a leading dot, defaulting to `.cppm`.
    pub fn effective_module_extension(&self) -> String {
        match self.module_extension.as_deref() {
            Some(ext) if ext.starts_with('.') => ext.to_string(),
            Some(ext) => format!(".{ext}"),
            None => DEFAULT_MODULE_EXTENSION.to_string(),
        }
    }

    /// Returns the source root without trailing slashes, defaulting to `src`.
    pub fn effective_source_root(&self) -> String {
        trim_root(self.source_root.as_deref().unwrap_or(DEFAULT_SOURCE_ROOT))
    }

    /// Returns the object root without trailing slashes, defaulting to `obj`.
    pub fn effective_object_root(&self) -> String {
        trim_root(self.object_root.as_deref().unwrap_or(DEFAULT_OBJECT_ROOT))
    }

    /// Returns the object extension, defaulting to `.o`.
    pub fn effective_object_extension(&self) -> String {
        self.object_extension
            .clone()
            .unwrap_or_else(|| DEFAULT_OBJECT_EXTENSION.to_string())
    }

    /// Returns the effective resolution mode, defaulting to single-pass.
    pub fn effective_two_pass(&self) -> bool {
        self.two_pass.unwrap_or(false)
    }
}

/// `"src/"` and `"src"` name the same root; `"/"` stays as is.
fn trim_root(root: &str) -> String {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        root.to_string()
    } else {
        trimmed.to_string()
    }
}
