//! Comment stripping with block-comment state carried across lines.

/// Removes comments one line at a time.
///
/// The only state is whether the previous line ended inside `/* ... */`.
#[derive(Debug, Default, Clone)]
pub struct CommentStripper {
    in_block: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last line left a block comment open.
    pub fn in_block_comment(&self) -> bool {
        self.in_block
    }

    /// The code portion of `line`, trimmed. Empty when nothing is left.
    ///
    /// Block comments are handled before `//`, so a `/*` that follows a
    /// `//` on the same line still opens a block. Closed block comments are
    /// deleted outright, not replaced by whitespace.
    pub fn strip(&mut self, line: &str) -> String {
        let mut rest = line;
        let mut code = String::with_capacity(line.len());

        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(end) => {
                        rest = &rest[end + 2..];
                        self.in_block = false;
                    }
                    None => break,
                }
            }

            match rest.find("/*") {
                Some(start) => {
                    code.push_str(&rest[..start]);
                    rest = &rest[start + 2..];
                    self.in_block = true;
                }
                None => {
                    code.push_str(rest);
                    break;
                }
            }
        }

        if let Some(start) = code.find("//") {
            code.truncate(start);
        }
        code.trim().to_string()
    }
}
