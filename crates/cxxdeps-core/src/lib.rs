//! cxxdeps-core: configuration, errors, tracing, and shared constants.
//!
//! Nothing in this crate knows about C++ source text. The analysis engine
//! lives in `cxxdeps-analysis`; the binary lives in `cxxdeps-cli`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{CliOverrides, CxxdepsConfig, ResolveConfig, ScanConfig};
pub use errors::{ConfigError, CxxdepsErrorCode, OutputError, ScanError};
