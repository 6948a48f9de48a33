//! String manipulation utilities

use crate::constants::{
    BACKSLASH, BACKSPACE, BELL, CARRIAGE_RETURN, DOUBLE_QUOTE, NEWLINE, NUL, SINGLE_QUOTE, TAB,
};

/// Removes one layer of matching double or single quotes around a value
pub fn strip_quotes(value: &str) -> &str {
    for quote in [DOUBLE_QUOTE, SINGLE_QUOTE] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Resolves backslash escapes in a single left-to-right pass.
///
/// `\0 \a \b \t \r \n` decode to their control characters; any other escaped
/// character is kept literally and a trailing lone backslash is dropped.
pub fn unescape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != BACKSLASH {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => result.push(NUL),
            Some('a') => result.push(BELL),
            Some('b') => result.push(BACKSPACE),
            Some('t') => result.push(TAB),
            Some('r') => result.push(CARRIAGE_RETURN),
            Some('n') => result.push(NEWLINE),
            Some(other) => result.push(other),
            None => {}
        }
    }

    result
}

/// Quote stripping followed by escape decoding
pub fn decode_value(raw: &str) -> String {
    unescape_value(strip_quotes(raw))
}
