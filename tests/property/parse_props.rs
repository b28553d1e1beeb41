//! Parse output properties.
//!
//! - Round-trip: decoding reproduces the queried range exactly
//! - Phrases are in bounds: positive distances, lengths >= 1, no overrun
//! - Sources respect the scope floor
//! - All-distinct texts produce only literals

use super::common::{assert_roundtrip, parse_range, scope_strategy, text_and_range};
use proptest::prelude::*;
use rightmost_lz::verify::validate_parse;
use rightmost_lz::{Phrase, SourceScope};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_roundtrips(
        (text, start, len) in text_and_range(),
        scope in scope_strategy(),
    ) {
        let parse = parse_range(&text, start, len, scope);
        assert_roundtrip(&text, &parse);
        prop_assert_eq!(parse.covered_len(), len);
        prop_assert!(validate_parse(&text, &parse, len).is_ok());
    }

    #[test]
    fn prop_phrases_in_bounds(
        (text, start, len) in text_and_range(),
        scope in scope_strategy(),
    ) {
        let parse = parse_range(&text, start, len, scope);
        let floor = scope.floor(start);
        for (position, phrase) in parse.positioned() {
            prop_assert!(position + phrase.len() <= start + len);
            if let Phrase::Copy { distance, length } = *phrase {
                prop_assert!(distance >= 1);
                prop_assert!(length >= 1);
                prop_assert!(position - distance >= floor);
            }
        }
    }

    #[test]
    fn prop_literal_only_when_symbol_is_new(
        (text, start, len) in text_and_range(),
        scope in scope_strategy(),
    ) {
        let parse = parse_range(&text, start, len, scope);
        let floor = scope.floor(start);
        for (position, phrase) in parse.positioned() {
            let seen_before = text[floor..position].contains(&text[position]);
            prop_assert_eq!(phrase.is_copy(), seen_before);
        }
    }

    #[test]
    fn prop_distinct_symbols_are_literals(n in 1usize..26) {
        let text: Vec<char> = ('a'..='z').take(n).collect();
        let parse = parse_range(&text, 0, n, SourceScope::Text);
        prop_assert_eq!(parse.literal_count(), n);
        prop_assert_eq!(parse.copy_count(), 0);
    }
}
