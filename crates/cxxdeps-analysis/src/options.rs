//! Flat, fully-resolved options consumed by the engine.

use serde::{Deserialize, Serialize};

use cxxdeps_core::config::CxxdepsConfig;
use cxxdeps_core::constants::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MODULE_EXTENSION, DEFAULT_OBJECT_EXTENSION,
    DEFAULT_OBJECT_ROOT, DEFAULT_SOURCE_ROOT, DEFAULT_THREADS,
};

/// Every knob the scanner, resolver, and graph read, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub include_standard_modules: bool,
    pub process_includes: bool,
    pub module_extension: String,
    pub source_root: String,
    pub object_root: String,
    pub object_extension: String,
    pub two_pass: bool,
    pub max_file_size: u64,
    pub threads: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_standard_modules: false,
            process_includes: true,
            module_extension: DEFAULT_MODULE_EXTENSION.to_string(),
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            object_root: DEFAULT_OBJECT_ROOT.to_string(),
            object_extension: DEFAULT_OBJECT_EXTENSION.to_string(),
            two_pass: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            threads: DEFAULT_THREADS,
        }
    }
}

impl AnalysisOptions {
    /// Build options from a resolved configuration.
    pub fn from_config(config: &CxxdepsConfig) -> Self {
        let resolve = &config.resolve;
        Self {
            include_standard_modules: resolve.effective_include_standard_modules(),
            process_includes: resolve.effective_process_includes(),
            module_extension: resolve.effective_module_extension(),
            source_root: resolve.effective_source_root(),
            object_root: resolve.effective_object_root(),
            object_extension: resolve.effective_object_extension(),
            two_pass: resolve.effective_two_pass(),
            max_file_size: config.scan.effective_max_file_size(),
            threads: config.scan.effective_threads(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_default_config() {
        assert_eq!(
            AnalysisOptions::from_config(&CxxdepsConfig::default()),
            AnalysisOptions::default()
        );
    }

    #[test]
    fn test_from_config_normalizes() {
        let config = CxxdepsConfig::from_toml(
            r#"
[resolve]
module_extension = "ixx"
source_root = "source/"
two_pass = true
"#,
        )
        .unwrap();
        let options = AnalysisOptions::from_config(&config);
        assert_eq!(options.module_extension, ".ixx");
        assert_eq!(options.source_root, "source");
        assert!(options.two_pass);
    }
}
