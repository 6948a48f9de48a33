//! Line classification

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{COMMENT_PREFIX, EQUALS};

static SECTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[A-Za-z0-9_]+\]$").expect("section header pattern is valid")
});

static PROPERTY_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\x0C\r ]*[A-Za-z0-9_]+[\t\n\x0C\r ]*=")
        .expect("property prefix pattern is valid")
});

/// What a single line of input declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// `[name]`, carrying the name between the brackets
    Section(&'a str),
    /// `key = value`, carrying both sides trimmed but not yet decoded
    Property { key: &'a str, value: &'a str },
    Malformed,
}

/// Checks if a line is exactly `[` word characters `]`
pub fn is_section_header(line: &str) -> bool {
    SECTION_HEADER_REGEX.is_match(line)
}

/// Checks if a line starts with a word-character key followed by `=`
pub fn is_property(line: &str) -> bool {
    PROPERTY_PREFIX_REGEX.is_match(line)
}

/// Classify a line; earlier kinds take priority over later ones
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return LineKind::Comment;
    }
    if is_section_header(line) {
        return LineKind::Section(&line[1..line.len() - 1]);
    }
    if is_property(line) {
        if let Some((key, value)) = line.split_once(EQUALS) {
            return LineKind::Property {
                key: key.trim(),
                value: value.trim(),
            };
        }
    }
    LineKind::Malformed
}
