//! Tests for the cxxdeps configuration system.

use std::sync::Mutex;

use cxxdeps_core::config::{CliOverrides, CxxdepsConfig};
use cxxdeps_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CXXDEPS_ env vars and point HOME at an empty directory so the
/// developer's own user config cannot leak into a test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "CXXDEPS_RESOLVE_INCLUDE_STD",
        "CXXDEPS_RESOLVE_PROCESS_INCLUDES",
        "CXXDEPS_RESOLVE_MODULE_EXT",
        "CXXDEPS_RESOLVE_SOURCE_ROOT",
        "CXXDEPS_RESOLVE_OBJECT_ROOT",
        "CXXDEPS_RESOLVE_TWO_PASS",
        "CXXDEPS_SCAN_THREADS",
        "CXXDEPS_SCAN_MAX_FILE_SIZE",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".cxxdeps")).unwrap();
    std::fs::write(
        home.path().join(".cxxdeps/config.toml"),
        r#"
[resolve]
module_extension = ".ixx"
object_root = "user-obj"
source_root = "user-src"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cxxdeps.toml"),
        r#"
[resolve]
object_root = "build"
source_root = "source"
"#,
    )
    .unwrap();

    std::env::set_var("CXXDEPS_RESOLVE_SOURCE_ROOT", "lib");

    let cli = CliOverrides {
        two_pass: Some(true),
        ..Default::default()
    };
    let config = CxxdepsConfig::load(dir.path(), Some(&cli)).unwrap();

    // User layer survives where nothing overrides it
    assert_eq!(config.resolve.effective_module_extension(), ".ixx");
    // Project overrides user
    assert_eq!(config.resolve.effective_object_root(), "build");
    // Env overrides project
    assert_eq!(config.resolve.effective_source_root(), "lib");
    // CLI on top
    assert!(config.resolve.effective_two_pass());

    isolate_env(home.path());
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = CxxdepsConfig::load(dir.path(), None).unwrap();

    assert_eq!(config, CxxdepsConfig::default());
    assert_eq!(config.resolve.effective_source_root(), "src");
    assert_eq!(config.resolve.effective_object_root(), "obj");
    assert_eq!(config.scan.effective_max_file_size(), 4 * 1024 * 1024);
    assert!(config.scan.effective_use_gitignore());
}

#[test]
fn test_env_bool_and_garbage() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("CXXDEPS_RESOLVE_INCLUDE_STD", "true");
    std::env::set_var("CXXDEPS_SCAN_THREADS", "not-a-number");

    let dir = tempdir();
    let config = CxxdepsConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.resolve.include_standard_modules, Some(true));
    assert_eq!(config.scan.threads, None);

    isolate_env(home.path());
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("cxxdeps.toml"), "this is not valid toml {{{{").unwrap();

    match CxxdepsConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cxxdeps.toml"),
        r#"
[resolve]
object_extension = "o"
"#,
    )
    .unwrap();

    match CxxdepsConfig::load(dir.path(), None) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "resolve.object_extension");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_explicit_config_file_replaces_project_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("cxxdeps.toml"), "[resolve]\nobject_root = \"ignored\"\n").unwrap();
    let explicit = dir.path().join("alt.toml");
    std::fs::write(&explicit, "[resolve]\nprocess_includes = false\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(explicit),
        ..Default::default()
    };
    let config = CxxdepsConfig::load(dir.path(), Some(&cli)).unwrap();
    assert!(!config.resolve.effective_process_includes());
    assert_eq!(config.resolve.effective_object_root(), "obj");

    let missing = CliOverrides {
        config_file: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };
    assert!(matches!(
        CxxdepsConfig::load(dir.path(), Some(&missing)),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn test_unknown_keys_ignored_and_round_trip() {
    let config = CxxdepsConfig::from_toml(
        r#"
[scan]
extra_ignore = ["third_party/**"]
future_option = 1

[resolve]
source_root = "src"
"#,
    )
    .unwrap();
    assert_eq!(config.scan.extra_ignore, vec!["third_party/**".to_string()]);

    let text = config.to_toml().unwrap();
    let reparsed = CxxdepsConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed, config);
}
