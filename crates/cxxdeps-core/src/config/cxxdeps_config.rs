//! Top-level cxxdeps configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ResolveConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CXXDEPS_*`)
/// 3. Project config (`cxxdeps.toml` in project root, or an explicit file)
/// 4. User config (`~/.cxxdeps/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CxxdepsConfig {
    pub scan: ScanConfig,
    pub resolve: ResolveConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub include_standard_modules: Option<bool>,
    pub process_includes: Option<bool>,
    pub module_extension: Option<String>,
    pub source_root: Option<String>,
    pub object_root: Option<String>,
    pub two_pass: Option<bool>,
    pub threads: Option<usize>,
    /// Replaces `<root>/cxxdeps.toml` as the project layer.
    pub config_file: Option<PathBuf>,
}

impl CxxdepsConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config, or the file named on the command line
        let explicit = cli_overrides.and_then(|cli| cli.config_file.clone());
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, &path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CxxdepsConfig) -> Result<(), ConfigError> {
        let resolve = &config.resolve;
        if matches!(resolve.source_root.as_deref(), Some(root) if root.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "resolve.source_root".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if matches!(resolve.object_root.as_deref(), Some(root) if root.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "resolve.object_root".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if matches!(resolve.module_extension.as_deref(), Some(ext) if ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "resolve.module_extension".to_string(),
                message: "must name an extension".to_string(),
            });
        }
        if let Some(ref ext) = resolve.object_extension {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "resolve.object_extension".to_string(),
                    message: "must start with '.' and name an extension".to_string(),
                });
            }
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.cxxdeps/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CxxdepsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CxxdepsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CxxdepsConfig, other: &CxxdepsConfig) {
        // Scan
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.use_gitignore.is_some() {
            base.scan.use_gitignore = other.scan.use_gitignore;
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }

        // Resolve
        if other.resolve.include_standard_modules.is_some() {
            base.resolve.include_standard_modules = other.resolve.include_standard_modules;
        }
        if other.resolve.process_includes.is_some() {
            base.resolve.process_includes = other.resolve.process_includes;
        }
        if other.resolve.module_extension.is_some() {
            base.resolve.module_extension = other.resolve.module_extension.clone();
        }
        if other.resolve.source_root.is_some() {
            base.resolve.source_root = other.resolve.source_root.clone();
        }
        if other.resolve.object_root.is_some() {
            base.resolve.object_root = other.resolve.object_root.clone();
        }
        if other.resolve.object_extension.is_some() {
            base.resolve.object_extension = other.resolve.object_extension.clone();
        }
        if other.resolve.two_pass.is_some() {
            base.resolve.two_pass = other.resolve.two_pass;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CXXDEPS_RESOLVE_SOURCE_ROOT`, `CXXDEPS_SCAN_THREADS`, etc.
    fn apply_env_overrides(config: &mut CxxdepsConfig) {
        if let Some(v) = env_parse::<bool>("CXXDEPS_RESOLVE_INCLUDE_STD") {
            config.resolve.include_standard_modules = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CXXDEPS_RESOLVE_PROCESS_INCLUDES") {
            config.resolve.process_includes = Some(v);
        }
        if let Ok(val) = std::env::var("CXXDEPS_RESOLVE_MODULE_EXT") {
            config.resolve.module_extension = Some(val);
        }
        if let Ok(val) = std::env::var("CXXDEPS_RESOLVE_SOURCE_ROOT") {
            config.resolve.source_root = Some(val);
        }
        if let Ok(val) = std::env::var("CXXDEPS_RESOLVE_OBJECT_ROOT") {
            config.resolve.object_root = Some(val);
        }
        if let Some(v) = env_parse::<bool>("CXXDEPS_RESOLVE_TWO_PASS") {
            config.resolve.two_pass = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CXXDEPS_SCAN_THREADS") {
            config.scan.threads = Some(v);
        }
        if let Some(v) = env_parse::<u64>("CXXDEPS_SCAN_MAX_FILE_SIZE") {
            config.scan.max_file_size = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CxxdepsConfig, cli: &CliOverrides) {
        if let Some(v) = cli.include_standard_modules {
            config.resolve.include_standard_modules = Some(v);
        }
        if let Some(v) = cli.process_includes {
            config.resolve.process_includes = Some(v);
        }
        if let Some(ref v) = cli.module_extension {
            config.resolve.module_extension = Some(v.clone());
        }
        if let Some(ref v) = cli.source_root {
            config.resolve.source_root = Some(v.clone());
        }
        if let Some(ref v) = cli.object_root {
            config.resolve.object_root = Some(v.clone());
        }
        if let Some(v) = cli.two_pass {
            config.resolve.two_pass = Some(v);
        }
        if let Some(v) = cli.threads {
            config.scan.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable, ignoring unparseable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

/// Returns the user-level config directory: `~/.cxxdeps/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".cxxdeps"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
