//! cxxdeps - make dependency rules for C++ module projects
//!
//! Scans the given files and directories (default: the current directory),
//! resolves `import` and `#include` statements, and writes a dependency
//! fragment, a complete Makefile, a report, or a JSON snapshot.

mod args;
mod inputs;
mod output;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cxxdeps_analysis::emit::{fragment, json, makefile, report};
use cxxdeps_analysis::{AnalysisOptions, AnalysisSnapshot, DependencyAnalyzer, DiskTree, WalkOptions};
use cxxdeps_core::errors::{CxxdepsErrorCode, OutputError};
use cxxdeps_core::tracing::init_tracing;
use cxxdeps_core::CxxdepsConfig;

use crate::args::Cli;
use crate::inputs::collect_inputs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity());

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let root = std::env::current_dir().context("cannot determine the current directory")?;
    let config = CxxdepsConfig::load(&root, Some(&cli.overrides()))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    let options = AnalysisOptions::from_config(&config);
    tracing::debug!(?options, "resolved options");

    let tree = DiskTree::new(&root, &WalkOptions::from_config(&config.scan));
    let files = collect_inputs(&cli.paths, tree.walker());
    tracing::info!(count = files.len(), "files to scan");

    let mut analyzer = DependencyAnalyzer::new(options, tree);
    analyzer.parse_files(&files);
    let snapshot = analyzer.finish();

    let failures = write_outputs(cli, &snapshot);

    let stats = snapshot.stats();
    eprintln!(
        "Summary: {} files, {} modules, {} imports",
        stats.files_processed, stats.modules_found, stats.imports_found
    );
    if stats.error_count() > 0 {
        eprintln!("Errors: {}", stats.error_count());
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Write every requested output. Returns how many failed.
///
/// A failure is reported and the remaining outputs are still attempted.
fn write_outputs(cli: &Cli, snapshot: &AnalysisSnapshot) -> usize {
    let mut failures = 0;
    let mut check = |what: &str, result: Result<(), OutputError>| {
        if let Err(err) = result {
            tracing::debug!(output = what, code = err.error_code(), "output failed");
            eprintln!("Error: {err}");
            failures += 1;
        }
    };

    if let Some(path) = &cli.makefile {
        check("makefile", write_announced("Complete Makefile", path, &makefile::render(snapshot)));
    } else if let Some(path) = &cli.output {
        check("fragment", write_announced("Makefile fragment", path, &fragment::render(snapshot)));
    } else {
        check("fragment", output::write_stdout(&fragment::render(snapshot)));
    }

    if let Some(path) = &cli.report {
        check("report", write_announced("Detailed report", path, &report::render(snapshot)));
    } else if cli.is_verbose() {
        eprintln!();
        eprintln!("{}", report::render(snapshot));
    }

    if let Some(path) = &cli.json {
        let result = json::render(snapshot).and_then(|text| write_announced("JSON snapshot", path, &text));
        check("json", result);
    }

    failures
}

fn write_announced(what: &str, path: &Path, content: &str) -> Result<(), OutputError> {
    output::write_file(path, content)?;
    eprintln!("{what} written to {}", path.display());
    Ok(())
}
