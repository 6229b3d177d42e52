//! Scanner module - Source file inventory with gitignore-style pattern matching
//!
//! Enumerates every C++ translation unit under a directory using:
//! - `globset` for the source extension glob
//! - `ignore` for default, configured, and file-based ignore patterns

mod ignores;
mod walker;

pub use ignores::{IgnorePatterns, DEFAULT_IGNORE_DIRS};
pub use walker::{path_to_slash, SourceWalker, WalkOptions};
