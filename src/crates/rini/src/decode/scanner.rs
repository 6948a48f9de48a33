//! Line scanner for INI input

use crate::constants::{CARRIAGE_RETURN, NEWLINE};

/// A single line of input with its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub line_number: usize,
    pub content: &'a str,
}

/// Split `source` on line feeds.
///
/// With `normalize_line_endings`, one trailing carriage return is removed from
/// each line so `\r\n` documents classify the same as `\n` ones.
pub fn scan_lines(
    source: &str,
    normalize_line_endings: bool,
) -> impl Iterator<Item = RawLine<'_>> {
    source.split(NEWLINE).enumerate().map(move |(i, raw)| {
        let content = if normalize_line_endings {
            raw.strip_suffix(CARRIAGE_RETURN).unwrap_or(raw)
        } else {
            raw
        };
        RawLine {
            line_number: i + 1,
            content,
        }
    })
}
