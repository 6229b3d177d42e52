//! Output writing errors.

use std::path::PathBuf;

use super::error_code::{self, CxxdepsErrorCode};

/// Errors writing one requested output. Fatal for that output only.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Error creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error serializing snapshot: {message}")]
    Serialize { message: String },
}

impl CxxdepsErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
