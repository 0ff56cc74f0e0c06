//! The `SourceLines` iterator: the lines of a reader that carry data, each
//! tagged with its position in the file.
use bstr::io::{BufReadExt, ByteLines};
use std::io::{self, BufRead};

/// A line worth parsing: not blank, not a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based position in the file, counting blank and comment lines too
    pub number: usize,
    /// The line as written, minus its line terminator
    pub raw: String,
}

impl SourceLine {
    /// The line without surrounding whitespace
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

/// Is `line` ignorable? Blank lines and lines whose first non-blank character
/// is `#` are.
#[must_use]
pub fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Lazily yields the data lines of `reader`. Lines may end in `\n` or `\r\n`;
/// bytes that aren't UTF-8 are replaced with U+FFFD. The iterator makes a
/// single pass over `reader`.
pub struct SourceLines<R: BufRead> {
    lines: ByteLines<R>,
    number: usize,
}

impl<R: BufRead> SourceLines<R> {
    /// Wrap `reader`
    pub fn new(reader: R) -> Self {
        SourceLines { lines: reader.byte_lines(), number: 0 }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e)),
            };
            self.number += 1;
            let raw = String::from_utf8_lossy(&bytes).into_owned();
            if !is_skipped(&raw) {
                return Some(Ok(SourceLine { number: self.number, raw }));
            }
        }
    }
}
