//! Shared constants for the cxxdeps dependency generator.

/// Every extension recognized as a C++ translation unit, in tie-break order.
///
/// The correction pass probes these in order when reconstructing a source
/// path from an object path; the first one that exists wins.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".cpp", ".cc", ".cxx", ".c++", ".cppm", ".ccm", ".cxxm", ".c++m",
];

/// Extensions of module interface units.
pub const MODULE_SOURCE_EXTENSIONS: &[&str] = &[".cppm", ".ccm", ".cxxm", ".c++m"];

/// Extensions of conventional (non-module) translation units.
pub const CONVENTIONAL_SOURCE_EXTENSIONS: &[&str] = &[".cpp", ".cc", ".cxx", ".c++"];

/// Extensions tried after the configured module extension during module search.
pub const MODULE_SEARCH_FALLBACK_EXTENSIONS: &[&str] = &[".cpp", ".cc", ".cxx"];

/// Directories searched for a module source, after the configured source root.
pub const MODULE_SEARCH_DIRS: &[&str] = &["include", "lib", "."];

/// Glob matching every source file the inventory walker picks up.
pub const SOURCE_GLOB: &str = "**/*.{cpp,cc,cxx,c++,cppm,ccm,cxxm,c++m}";

/// Prefix of standard-library module names (`std`, `std.compat`).
pub const STD_MODULE_PREFIX: &str = "std";

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "cxxdeps.toml";

/// Per-project ignore file, gitignore syntax.
pub const IGNORE_FILE: &str = ".cxxdepsignore";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CXXDEPS_LOG";

// ---- Defaults ----

/// Default module interface extension.
pub const DEFAULT_MODULE_EXTENSION: &str = ".cppm";

/// Default source root.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Default object root.
pub const DEFAULT_OBJECT_ROOT: &str = "obj";

/// Default object file extension.
pub const DEFAULT_OBJECT_EXTENSION: &str = ".o";

/// Maximum file size in bytes for scanning (default: 4MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Default number of threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Module flag line emitted when any module was observed.
pub const MODULE_FLAGS: &str = "-fmodules-ts";

/// GCC module cache directory.
pub const MODULE_CACHE_DIR: &str = "gcm.cache";
