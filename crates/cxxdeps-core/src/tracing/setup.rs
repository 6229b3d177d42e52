//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// How chatty the default filter is when `CXXDEPS_LOG` is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default filter directive for this verbosity.
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "cxxdeps=warn",
            Verbosity::Verbose => "cxxdeps=info",
            Verbosity::Debug => "cxxdeps=trace",
        }
    }
}

/// Initialize the cxxdeps tracing/logging system.
///
/// Reads `CXXDEPS_LOG` for per-module log levels.
/// Format: `CXXDEPS_LOG=cxxdeps_analysis::resolver=trace,cxxdeps=info`
///
/// Falls back to the directive for `verbosity` if `CXXDEPS_LOG` is not set
/// or is invalid. Events go to stderr; stdout is reserved for the fragment.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_tracing(verbosity: Verbosity) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity == Verbosity::Debug),
            )
            .with(filter)
            .init();
    });
}
