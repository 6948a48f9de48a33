//! Constants used throughout the INI parser

// Line markers
pub const COMMENT_PREFIX: char = ';';
pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';
pub const EQUALS: char = '=';

// Quoting
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';

// Escape characters
pub const BACKSLASH: char = '\\';
pub const NUL: char = '\0';
pub const BELL: char = '\u{07}';
pub const BACKSPACE: char = '\u{08}';
pub const TAB: char = '\t';
pub const CARRIAGE_RETURN: char = '\r';
pub const NEWLINE: char = '\n';

/// Name of the implicit section holding properties declared before any header
pub const GLOBAL_SECTION: &str = "";

/// Literals that read as `true`; everything else is `false`
pub const TRUE_LITERALS: [&str; 7] = ["Y", "y", "Yes", "yes", "1", "true", "True"];
