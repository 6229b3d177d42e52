//! Per-file scan errors.

use std::path::PathBuf;

use super::error_code::{self, CxxdepsErrorCode};

/// Errors raised while reading one source file.
///
/// None of these abort a run: the pipeline records the message and moves
/// on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file too large ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("invalid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

impl ScanError {
    /// Path of the file that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::FileTooLarge { path, .. } | Self::InvalidUtf8 { path } => {
                path
            }
        }
    }
}

impl CxxdepsErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileTooLarge { .. } => error_code::FILE_TOO_LARGE,
            _ => error_code::SCAN_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_path() {
        let err = ScanError::FileTooLarge {
            path: PathBuf::from("src/huge.cpp"),
            size: 10,
            max: 5,
        };
        assert_eq!(err.error_code(), "FILE_TOO_LARGE");
        assert_eq!(err.path(), &PathBuf::from("src/huge.cpp"));

        let err = ScanError::InvalidUtf8 {
            path: PathBuf::from("src/bad.cpp"),
        };
        assert_eq!(err.coded_string(), "[SCAN_ERROR] invalid UTF-8");
    }
}
