//! rini - INI configuration parser
//!
//! Parses an INI-style document into sections of key/value properties and
//! exposes lenient typed views over each decoded value.
//!
//! # Format
//!
//! - Blank lines and lines starting with `;` are ignored
//! - `[name]` starts a section; `name` is letters, digits and underscores
//! - `key = value` sets a property in the current section
//! - Values may be wrapped in one pair of `"` or `'` quotes
//! - `\0 \a \b \t \r \n` escapes are decoded; any other `\x` yields `x`
//!
//! Properties declared before the first header belong to the implicit section
//! named `""`, which is always present.
//!
//! # Example
//!
//! ```rust
//! use rini::parse;
//!
//! let config = parse("debug = yes\n[server]\nport = 8080\nname = \"edge 1\"").unwrap();
//!
//! assert!(config.get("", "debug").unwrap().as_bool());
//! assert_eq!(config.get("server", "port").unwrap().as_f64(), 8080.0);
//! assert_eq!(config.get("server", "name").unwrap().as_str(), "edge 1");
//! ```

pub mod config;
pub mod constants;
pub mod decode;
pub mod shared;
pub mod types;
pub mod value;

pub use config::Config;
pub use constants::GLOBAL_SECTION;
pub use types::{IniError, IniResult, Key, ParseOptions, Properties, SectionName};
pub use value::Value;

use decode::parse_document;

/// Parse an INI document with default options
///
/// # Example
///
/// ```rust
/// use rini::parse;
///
/// let err = parse("not a valid line!!").unwrap_err();
/// assert_eq!(err.line_number(), 1);
/// ```
pub fn parse(input: &str) -> IniResult<Config> {
    parse_with_options(input, None)
}

/// Parse an INI document
///
/// # Arguments
///
/// * `input` - The whole document text
/// * `options` - Optional parsing configuration
///
/// # Returns
///
/// The parsed configuration, or a format error naming the first line that is
/// neither blank, a comment, a section header nor a property
pub fn parse_with_options(input: &str, options: Option<ParseOptions>) -> IniResult<Config> {
    let resolved_options = options.unwrap_or_default();
    parse_document(input, &resolved_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_parse_simple_document() {
        let config = parse("; comment\nname = Alice\n\n[db]\nport = 5432").unwrap();
        assert_eq!(config.get("", "name").unwrap(), "Alice");
        assert_eq!(config.get("db", "port").unwrap().as_f64(), 5432.0);
    }

    #[test]
    fn test_from_str() {
        let config: Config = "[a]\nb = c".parse().unwrap();
        assert_eq!(config.get("a", "b").unwrap(), "c");
    }

    #[test]
    fn test_options_reach_parser() {
        let options = ParseOptions {
            normalize_line_endings: false,
        };
        assert!(parse_with_options("[a]\r\n", Some(options)).is_err());
        assert!(parse_with_options("[a]\r\n", None).is_ok());
    }
}
