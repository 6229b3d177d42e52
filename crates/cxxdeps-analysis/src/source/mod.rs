//! Source scanner - per-file extraction of module and include names
//!
//! Text goes through three stages per line:
//! 1. `comments` removes `//` and `/* */` comments, carrying block state
//! 2. `line` classifies what is left against an ordered matcher list
//! 3. `unit` folds the classified lines into a `SourceUnit`

mod comments;
mod line;
mod unit;

pub use comments::CommentStripper;
pub use line::{classify_line, LineKind};
pub use unit::{scan_source, ScanOutcome, SourceUnit};
