//! Header name -> header path.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Resolver;
use crate::tree::SourceTree;

/// Bare lowercase names (`vector`, `cstdio`) are standard headers.
static STANDARD_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z_]+$").unwrap());

impl<T: SourceTree + ?Sized> Resolver<'_, T> {
    /// Resolve a header named in `from_file`.
    ///
    /// Standard headers yield `None`. Anything else is looked up next to
    /// the including file, then from the project root. A header found in
    /// neither place still comes back under its literal name.
    pub fn resolve_include(&self, name: &str, from_file: &str) -> Option<String> {
        if STANDARD_HEADER.is_match(name) {
            tracing::trace!(header = name, "skipping standard header");
            return None;
        }

        let beside = format!("{}/{}", parent_dir(from_file), name);
        if self.tree.exists(&beside) {
            tracing::trace!(header = name, found = %beside, "resolved next to includer");
            return Some(beside);
        }

        if self.tree.exists(name) {
            tracing::trace!(header = name, "resolved from project root");
        } else {
            tracing::trace!(header = name, "header not found, keeping literal name");
        }
        Some(name.to_string())
    }
}

/// Directory part of a `/`-separated path; `.` when there is none.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "",
        Some(i) => &path[..i],
        None => ".",
    }
}
