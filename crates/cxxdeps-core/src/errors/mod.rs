//! Error handling for cxxdeps.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod output_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::CxxdepsErrorCode;
pub use output_error::OutputError;
pub use scan_error::ScanError;
