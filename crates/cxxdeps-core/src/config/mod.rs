//! Configuration system for cxxdeps.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod cxxdeps_config;
pub mod resolve_config;
pub mod scan_config;

pub use cxxdeps_config::{CliOverrides, CxxdepsConfig};
pub use resolve_config::ResolveConfig;
pub use scan_config::ScanConfig;
