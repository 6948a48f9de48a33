//! Property-based tests for the parser

use proptest::prelude::*;
use rini::parse;

fn comment_or_blank() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[^\n]*".prop_map(|text| format!(";{text}"))]
}

fn property_line() -> impl Strategy<Value = (String, String)> {
    ("[A-Za-z0-9_]{1,8}", "[A-Za-z0-9 .]{0,12}")
}

proptest! {
    #[test]
    fn comments_and_blanks_yield_empty_global(lines in prop::collection::vec(comment_or_blank(), 0..20)) {
        let config = parse(&lines.join("\n")).unwrap();
        prop_assert_eq!(config.len(), 1);
        prop_assert!(config.global().is_empty());
    }

    #[test]
    fn properties_before_header_are_global(pairs in prop::collection::vec(property_line(), 1..10)) {
        let document: Vec<String> = pairs
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect();
        let config = parse(&document.join("\n")).unwrap();

        prop_assert_eq!(config.len(), 1);
        let (last_key, last_value) = pairs.last().unwrap();
        prop_assert_eq!(config.get("", last_key).unwrap().as_str(), last_value.trim());
    }

    #[test]
    fn parsing_is_deterministic(document in "[\\[\\]a-z =;'\"\\\\\n]{0,80}") {
        let first = parse(&document);
        let second = parse(&document);
        prop_assert_eq!(first, second);
    }
}
