//! Renderers for a finished [`AnalysisSnapshot`](crate::AnalysisSnapshot).
//!
//! - `fragment`: terse object-to-object rules for inclusion in a Makefile
//! - `makefile`: a complete Makefile with variables, pattern rules, utility targets
//! - `report`: human-readable statistics and listings
//! - `json`: the snapshot itself, for tooling

pub mod fragment;
pub mod json;
pub mod makefile;
pub mod report;

/// First line of every generated build file.
pub const GENERATED_BY: &str = "# Generated by cxxdeps";

/// Append `NAME = a b c`, or one item per continued line past `inline_max`.
fn push_list<'a>(
    out: &mut Vec<String>,
    name: &str,
    items: impl IntoIterator<Item = &'a str>,
    inline_max: usize,
) {
    let items: Vec<&str> = items.into_iter().collect();
    if items.len() <= inline_max {
        out.push(format!("{name} = {}", items.join(" ")));
        return;
    }
    out.push(format!("{name} = \\"));
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        if i == last {
            out.push(format!("    {item}"));
        } else {
            out.push(format!("    {item} \\"));
        }
    }
}
