//! INI parsing: a single left fold over classified lines

use tracing::{debug, trace};

use crate::config::Config;
use crate::constants::GLOBAL_SECTION;
use crate::decode::classify::{classify_line, LineKind};
use crate::decode::scanner::{scan_lines, RawLine};
use crate::shared::decode_value;
use crate::types::{IniError, IniResult, ParseOptions};
use crate::value::Value;

/// Accumulator threaded through the fold
struct ParseState {
    config: Config,
    current_section: String,
}

impl ParseState {
    fn new() -> Self {
        Self {
            config: Config::new(),
            current_section: GLOBAL_SECTION.to_string(),
        }
    }

    fn apply(mut self, line: RawLine<'_>) -> IniResult<Self> {
        let kind = classify_line(line.content);
        trace!(line = line.line_number, ?kind, "classified line");

        match kind {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Section(name) => {
                debug!(line = line.line_number, section = name, "entering section");
                self.config.reset_section(name);
                self.current_section = name.to_string();
            }
            LineKind::Property { key, value } => {
                self.config.set(
                    &self.current_section,
                    key.to_string(),
                    Value::from(decode_value(value)),
                );
            }
            LineKind::Malformed => {
                debug!(line = line.line_number, content = line.content, "malformed line");
                return Err(IniError::format(line.line_number, line.content));
            }
        }

        Ok(self)
    }
}

/// Parse a whole document into a [`Config`], stopping at the first malformed line
pub fn parse_document(source: &str, options: &ParseOptions) -> IniResult<Config> {
    let state = scan_lines(source, options.normalize_line_endings)
        .try_fold(ParseState::new(), ParseState::apply)?;

    debug!(sections = state.config.len(), "parsed INI document");
    Ok(state.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(source: &str) -> IniResult<Config> {
        parse_document(source, &ParseOptions::default())
    }

    #[test]
    fn test_properties_before_header_are_global() {
        let config = parse_default("a = 1\nb = two\n[s]\nc = 3").unwrap();
        assert_eq!(config.global().len(), 2);
        assert_eq!(config.get("", "b").unwrap(), "two");
        assert_eq!(config.get("s", "c").unwrap(), "3");
        assert!(config.get("", "c").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let config = parse_default("k = 1\nk = 2").unwrap();
        assert_eq!(config.get("", "k").unwrap(), "2");
    }

    #[test]
    fn test_redeclared_section_is_reset() {
        let config = parse_default("[foo]\nbar = 1\n[foo]\nbaz = 2").unwrap();
        let foo = config.section("foo").unwrap();
        assert_eq!(foo.len(), 1);
        assert!(foo.get("bar").is_none());
        assert_eq!(foo.get("baz").unwrap(), "2");
    }

    #[test]
    fn test_stops_at_first_malformed_line() {
        let err = parse_default("a = 1\n\nbad line\nalso bad").unwrap_err();
        assert_eq!(err, IniError::format(3, "bad line"));
    }

    #[test]
    fn test_crlf_document() {
        let config = parse_default("[s]\r\nk = v\r\n").unwrap();
        assert_eq!(config.get("s", "k").unwrap(), "v");
    }

    #[test]
    fn test_crlf_without_normalization() {
        let options = ParseOptions {
            normalize_line_endings: false,
        };
        let config = parse_document("k = v\r\n", &options).unwrap();
        assert_eq!(config.get("", "k").unwrap(), "v");

        let err = parse_document("[s]\r\nk = v", &options).unwrap_err();
        assert_eq!(err.line_number(), 1);
        assert_eq!(err.content(), "[s]\r");
    }

    #[test]
    fn test_trailing_carriage_return_trimmed_from_value() {
        let options = ParseOptions {
            normalize_line_endings: false,
        };
        // trim removes the \r before quote stripping
        let config = parse_document("k = \"v\"\r", &options).unwrap();
        assert_eq!(config.get("", "k").unwrap(), "v");
    }
}
