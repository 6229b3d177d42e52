//! Ignore patterns for source discovery
//!
//! C++ trees rarely carry the package-manager clutter other ecosystems do,
//! so the defaults are limited to VCS metadata and compiler caches. Projects
//! add their own through config, `.cxxdepsignore`, or `.gitignore`.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use cxxdeps_core::constants::IGNORE_FILE;

/// Default directories to always ignore
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Version control
    ".git/",
    ".svn/",
    ".hg/",
    ".bzr/",
    // Compiler module caches
    "gcm.cache/",
    ".cache/",
    // IDE/Editor
    ".idea/",
    ".vscode/",
    ".vs/",
];

/// Patterns for the ignore crate
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Create ignore patterns from defaults + custom patterns.
    ///
    /// With `use_ignore_files`, `.cxxdepsignore` and `.gitignore` at `root`
    /// are loaded too.
    pub fn new(root: &Path, extra_patterns: &[String], use_ignore_files: bool) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }

        for pattern in extra_patterns {
            if let Err(err) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %err, "skipping invalid ignore pattern");
            }
        }

        if use_ignore_files {
            for name in [IGNORE_FILE, ".gitignore"] {
                let file = root.join(name);
                if file.exists() {
                    if let Some(err) = builder.add(&file) {
                        tracing::warn!(file = %file.display(), error = %err, "partially read ignore file");
                    }
                }
            }
        }

        let gitignore = builder.build().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignore patterns rejected, nothing will be ignored");
            Gitignore::empty()
        });

        Self { gitignore }
    }

    /// Check if a path (relative to the root) should be ignored
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
