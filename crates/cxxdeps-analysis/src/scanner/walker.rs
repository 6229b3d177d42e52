//! Source file walker using ignore + globset
//!
//! Walks a directory tree single-threaded (the inventory order must be
//! deterministic) and returns every file matching the source glob.

use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use cxxdeps_core::config::ScanConfig;
use cxxdeps_core::constants::SOURCE_GLOB;

use super::ignores::IgnorePatterns;

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Glob patterns to include
    pub patterns: Vec<String>,
    /// Additional patterns to ignore (beyond defaults)
    pub extra_ignores: Vec<String>,
    /// Load `.cxxdepsignore` and `.gitignore` from the root
    pub use_ignore_files: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            patterns: vec![SOURCE_GLOB.to_string()],
            extra_ignores: vec![],
            use_ignore_files: true,
        }
    }
}

impl WalkOptions {
    /// Build walker options from the `[scan]` config section.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            extra_ignores: config.extra_ignore.clone(),
            use_ignore_files: config.effective_use_gitignore(),
            ..Default::default()
        }
    }
}

/// Source file enumerator rooted at a project directory
pub struct SourceWalker {
    root: PathBuf,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl SourceWalker {
    /// Create a new walker with the given configuration
    pub fn new(root: impl Into<PathBuf>, options: &WalkOptions) -> Self {
        let root = root.into();
        let ignores = IgnorePatterns::new(&root, &options.extra_ignores, options.use_ignore_files);

        let mut builder = GlobSetBuilder::new();
        for pattern in &options.patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => tracing::warn!(pattern = %pattern, error = %err, "skipping invalid glob"),
            }
        }
        let include_globs = builder.build().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "include globs rejected, matching every file");
            GlobSet::empty()
        });

        Self {
            root,
            ignores,
            include_globs,
        }
    }

    /// Root directory this walker enumerates.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every source file under the root, as sorted root-relative paths.
    pub fn collect(&self) -> Vec<String> {
        let mut files = Vec::new();
        self.walk_dir(&self.root, &mut files);
        let mut files: Vec<String> = files
            .iter()
            .map(|path| path_to_slash(path.strip_prefix(&self.root).unwrap_or(path)))
            .collect();
        files.sort();
        files
    }

    /// Every source file under `dir`, spelled as `dir` joined with the
    /// file's path inside it. `dir` is interpreted relative to the root.
    ///
    /// `"."` yields `./src/a.cpp`-style spellings; the path mapper strips
    /// the leading `./` again.
    pub fn collect_under(&self, dir: &str) -> Vec<String> {
        let base = self.root.join(dir);
        let mut files = Vec::new();
        self.walk_dir(&base, &mut files);

        let prefix = dir.trim_end_matches('/');
        let mut files: Vec<String> = files
            .iter()
            .map(|path| {
                let inner = path_to_slash(path.strip_prefix(&base).unwrap_or(path));
                if prefix.is_empty() {
                    inner
                } else {
                    format!("{prefix}/{inner}")
                }
            })
            .collect();
        files.sort();
        files
    }

    /// Recursively walk a directory
    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "cannot read directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);

            if path.is_dir() {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file()
                && !self.ignores.is_ignored(relative, false)
                && (self.include_globs.is_empty() || self.include_globs.is_match(relative))
            {
                files.push(path);
            }
        }
    }
}

/// Render a relative path with `/` separators, dropping `.` components.
pub fn path_to_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => None,
            Component::RootDir | Component::Prefix(_) => Some(String::new()),
        })
        .collect();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collect_matches_source_extensions_only() {
        let dir = tempfile::TempDir::new().unwrap();
        for rel in [
            "src/main.cpp",
            "src/core.cppm",
            "src/util/str.c++",
            "src/util/str.hpp",
            "lib/legacy.cc",
            "README.md",
            ".git/hooks/x.cpp",
        ] {
            touch(dir.path(), rel);
        }

        let walker = SourceWalker::new(dir.path(), &WalkOptions::default());
        assert_eq!(
            walker.collect(),
            vec![
                "lib/legacy.cc".to_string(),
                "src/core.cppm".to_string(),
                "src/main.cpp".to_string(),
                "src/util/str.c++".to_string(),
            ]
        );
    }

    #[test]
    fn test_gitignore_respected_unless_disabled() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "src/a.cpp");
        touch(dir.path(), "generated/g.cpp");
        fs::write(dir.path().join(".gitignore"), "generated/\n").unwrap();

        let walker = SourceWalker::new(dir.path(), &WalkOptions::default());
        assert_eq!(walker.collect(), vec!["src/a.cpp".to_string()]);

        let options = WalkOptions {
            use_ignore_files: false,
            ..Default::default()
        };
        let walker = SourceWalker::new(dir.path(), &options);
        assert_eq!(walker.collect().len(), 2);
    }

    #[test]
    fn test_collect_under_keeps_spelling() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "src/a.cpp");
        touch(dir.path(), "src/sub/b.cppm");

        let walker = SourceWalker::new(dir.path(), &WalkOptions::default());
        assert_eq!(
            walker.collect_under("src/"),
            vec!["src/a.cpp".to_string(), "src/sub/b.cppm".to_string()]
        );
        assert_eq!(
            walker.collect_under("."),
            vec!["./src/a.cpp".to_string(), "./src/sub/b.cppm".to_string()]
        );
    }

    #[test]
    fn test_path_to_slash() {
        assert_eq!(path_to_slash(Path::new("./src/a.cpp")), "src/a.cpp");
        assert_eq!(path_to_slash(Path::new("src/../lib/b.cc")), "src/../lib/b.cc");
    }
}
