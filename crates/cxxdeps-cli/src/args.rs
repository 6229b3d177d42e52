//! Command line definition.

use std::path::PathBuf;

use clap::Parser;

use cxxdeps_core::config::CliOverrides;
use cxxdeps_core::tracing::Verbosity;

#[derive(Debug, Parser)]
#[command(
    name = "cxxdeps",
    version,
    about = "Generate make dependency rules from C++ module imports and #include directives",
    after_help = "Examples:\n  \
        cxxdeps                                  Scan the current directory\n  \
        cxxdeps -o deps.mk src/                  Write a dependency fragment\n  \
        cxxdeps -m Makefile src/                 Write a complete Makefile\n  \
        cxxdeps --src-dir source --obj-dir build Custom source and object roots\n  \
        cxxdeps -v -r report.txt src/            Verbose, with a report file"
)]
pub struct Cli {
    /// Files or directories to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Write the dependency fragment to FILE
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write a complete Makefile to FILE (takes precedence over --output)
    #[arg(short = 'm', long, value_name = "FILE")]
    pub makefile: Option<PathBuf>,

    /// Write the analysis report to FILE
    #[arg(short = 'r', long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Write the full analysis snapshot as JSON to FILE
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug output (implies --verbose)
    #[arg(long)]
    pub debug: bool,

    /// Resolve standard library modules too
    #[arg(long)]
    pub include_std: bool,

    /// Ignore #include directives
    #[arg(long)]
    pub no_headers: bool,

    /// Module interface extension (default: .cppm)
    #[arg(long, value_name = "EXT")]
    pub module_ext: Option<String>,

    /// Source root (default: src)
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<String>,

    /// Object root (default: obj)
    #[arg(long, value_name = "DIR")]
    pub obj_dir: Option<String>,

    /// Register every export before resolving any import
    #[arg(long)]
    pub two_pass: bool,

    /// Worker threads for reading and scanning (0 = auto)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Use FILE instead of ./cxxdeps.toml as the project config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    /// Flags that were given, as the top config layer.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            include_standard_modules: self.include_std.then_some(true),
            process_includes: self.no_headers.then_some(false),
            module_extension: self.module_ext.clone(),
            source_root: self.src_dir.clone(),
            object_root: self.obj_dir.clone(),
            two_pass: self.two_pass.then_some(true),
            threads: self.threads,
            config_file: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_override_nothing() {
        let cli = Cli::try_parse_from(["cxxdeps"]).unwrap();
        let overrides = cli.overrides();
        assert!(cli.paths.is_empty());
        assert_eq!(overrides.include_standard_modules, None);
        assert_eq!(overrides.process_includes, None);
        assert_eq!(overrides.two_pass, None);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "cxxdeps", "--include-std", "--no-headers", "--module-ext", "ixx", "--src-dir",
            "source", "--obj-dir", "build", "--two-pass", "--threads", "4", "-m", "Makefile",
            "src/", "lib/x.cpp",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.include_standard_modules, Some(true));
        assert_eq!(overrides.process_includes, Some(false));
        assert_eq!(overrides.module_extension.as_deref(), Some("ixx"));
        assert_eq!(overrides.source_root.as_deref(), Some("source"));
        assert_eq!(overrides.object_root.as_deref(), Some("build"));
        assert_eq!(overrides.two_pass, Some(true));
        assert_eq!(overrides.threads, Some(4));
        assert_eq!(cli.makefile, Some(PathBuf::from("Makefile")));
        assert_eq!(cli.paths, vec!["src/".to_string(), "lib/x.cpp".to_string()]);
    }

    #[test]
    fn test_debug_implies_verbose() {
        let cli = Cli::try_parse_from(["cxxdeps", "--debug"]).unwrap();
        assert!(cli.is_verbose());
        assert_eq!(cli.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["cxxdeps", "--frobnicate"]).is_err());
    }
}
