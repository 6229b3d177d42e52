//! Source path to object path mapping.
//!
//! Paths here are build-file strings with `/` separators, never touched on
//! disk. A file under the source root lands at the same relative place under
//! the object root; anything outside the source root keeps its directory and
//! only swaps its extension, so stray generated or vendored sources are never
//! relocated into the object tree.

use crate::options::AnalysisOptions;

/// Maps source files to the object files a build would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    source_root: String,
    object_root: String,
    object_extension: String,
}

impl PathMapper {
    pub fn new(
        source_root: impl Into<String>,
        object_root: impl Into<String>,
        object_extension: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            object_root: object_root.into(),
            object_extension: object_extension.into(),
        }
    }

    pub fn from_options(options: &AnalysisOptions) -> Self {
        Self::new(
            options.source_root.clone(),
            options.object_root.clone(),
            options.object_extension.clone(),
        )
    }

    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    pub fn object_root(&self) -> &str {
        &self.object_root
    }

    pub fn object_extension(&self) -> &str {
        &self.object_extension
    }

    /// `src/sub/x.cpp` -> `obj/sub/x.o`; `tools/gen.cc` -> `tools/gen.o`.
    pub fn map(&self, source_path: &str) -> String {
        let clean = strip_dot_slash(source_path);
        let mapped = match self.relative_to_source_root(clean) {
            Some(relative) => {
                replace_extension(&format!("{}/{}", self.object_root, relative), &self.object_extension)
            }
            None => replace_extension(clean, &self.object_extension),
        };
        tracing::trace!(source = source_path, object = %mapped, "mapped source to object");
        mapped
    }

    /// The part of `path` below `<source_root>/`, if it is there.
    pub fn relative_to_source_root<'a>(&self, path: &'a str) -> Option<&'a str> {
        under_root(path, &self.source_root)
    }

    /// The part of `path` below `<object_root>/`, if it is there.
    pub fn relative_to_object_root<'a>(&self, path: &'a str) -> Option<&'a str> {
        under_root(path, &self.object_root)
    }
}

fn under_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    path.strip_prefix(root)?.strip_prefix('/')
}

/// Drop a single leading `./`.
pub fn strip_dot_slash(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Extension of the last path component, including the dot.
///
/// A leading dot (`.clang-format`) does not start an extension.
pub fn extension(path: &str) -> Option<&str> {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    let name = &path[name_start..];
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some(&name[dot..]),
    }
}

/// `path` with its extension removed.
pub fn strip_extension(path: &str) -> &str {
    match extension(path) {
        Some(ext) => &path[..path.len() - ext.len()],
        None => path,
    }
}

/// `path` with its extension replaced by `new_extension` (appended when absent).
pub fn replace_extension(path: &str, new_extension: &str) -> String {
    format!("{}{}", strip_extension(path), new_extension)
}

/// Collapse `.` components and `dir/..` pairs without touching the disk.
///
/// Leading `..` components that have nothing to cancel are kept.
pub fn normalize_lexically(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
