//! Ordered classification of comment-free lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// What a single cleaned line declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `import foo.bar;`
    Import(String),
    /// `import <iostream>;`
    SystemImport(String),
    /// `import "foo";`
    LocalImport(String),
    /// `export module foo;`
    Export(String),
    /// `module foo;` (implementation unit)
    ModuleImpl(String),
    /// `#include <vector>`
    SystemInclude(String),
    /// `#include "foo.h"`
    LocalInclude(String),
    /// Anything else.
    Other,
}

struct LineMatcher {
    regex: Regex,
    build: fn(String) -> LineKind,
}

impl LineMatcher {
    fn new(pattern: &str, build: fn(String) -> LineKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("line pattern must compile"),
            build,
        }
    }
}

/// Matchers in priority order. The first hit wins; a line never yields two kinds.
static LINE_MATCHERS: Lazy<Vec<LineMatcher>> = Lazy::new(|| {
    vec![
        LineMatcher::new(r"^\s*import\s+([a-zA-Z_][a-zA-Z0-9_.:]*)\s*;", LineKind::Import),
        LineMatcher::new(r"^\s*import\s+<([^>]+)>\s*;", LineKind::SystemImport),
        LineMatcher::new(r#"^\s*import\s+"([^"]+)"\s*;"#, LineKind::LocalImport),
        LineMatcher::new(r"^\s*export\s+module\s+([a-zA-Z_][a-zA-Z0-9_.:]*)\s*;", LineKind::Export),
        LineMatcher::new(r"^\s*module\s+([a-zA-Z_][a-zA-Z0-9_.:]*)\s*;", LineKind::ModuleImpl),
        LineMatcher::new(r"^\s*#include\s+<([^>]+)>", LineKind::SystemInclude),
        LineMatcher::new(r#"^\s*#include\s+"([^"]+)""#, LineKind::LocalInclude),
    ]
});

/// Classify a line that has already had its comments removed.
pub fn classify_line(line: &str) -> LineKind {
    LINE_MATCHERS
        .iter()
        .find_map(|matcher| {
            matcher
                .regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|name| (matcher.build)(name.as_str().to_string()))
        })
        .unwrap_or(LineKind::Other)
}
