//! Core types for the INI parser

use std::collections::HashMap;

use crate::value::Value;

/// Name of a section; the empty string is the implicit section
pub type SectionName = String;

/// Key within a section
pub type Key = String;

/// Key/value mapping owned by a single section
pub type Properties = HashMap<Key, Value>;

/// Options for parsing INI documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Strip a trailing carriage return from every line before classifying it
    /// (default: true). When false, `\r\n` documents keep the `\r` in line content.
    pub normalize_line_endings: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
        }
    }
}

/// Result type alias for INI operations
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur while parsing an INI document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IniError {
    /// The line is neither blank, a comment, a section header nor a property
    #[error("format error at line {line}, {content}")]
    Format { line: usize, content: String },
}

impl IniError {
    pub fn format(line: usize, content: impl Into<String>) -> Self {
        IniError::Format {
            line,
            content: content.into(),
        }
    }

    /// 1-based number of the offending line
    pub fn line_number(&self) -> usize {
        match self {
            IniError::Format { line, .. } => *line,
        }
    }

    /// Raw text of the offending line
    pub fn content(&self) -> &str {
        match self {
            IniError::Format { content, .. } => content,
        }
    }
}
