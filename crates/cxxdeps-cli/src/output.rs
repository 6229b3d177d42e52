//! Writing rendered outputs.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use cxxdeps_core::errors::OutputError;

/// Write `content` to `path`, creating parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to stdout, newline-terminated.
pub fn write_stdout(content: &str) -> Result<(), OutputError> {
    let mut stdout = std::io::stdout().lock();
    let result = if content.ends_with('\n') {
        stdout.write_all(content.as_bytes())
    } else {
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
    };
    result
        .and_then(|()| stdout.flush())
        .map_err(|source| OutputError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
