//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use rightmost_lz::{
    decode_in, ClosedRepeatIndex, Parse, RightmostParser, SourceScope, SuffixIndex,
};

// Re-export canonical oracles from rightmost_lz::testing
#[allow(unused_imports)]
pub use rightmost_lz::testing::{
    naive_lcp, naive_right_closed_repeats, naive_rightmost_lz77, naive_suffix_array,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Texts with known structure: periodic, nested, all-distinct, unary.
pub const FIXTURES: &[&str] = &[
    "abracadabra",
    "mississippi",
    "banana",
    "aaaaaaaa",
    "abcdefgh",
    "abababab",
    "cabbagecabbage",
    "a",
    "xyxxyxyxxyxxy",
];

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// ============================================================================
// BUILD HELPERS
// ============================================================================

/// Build every index for `text` and hand the parser to `f`.
pub fn with_parser<T, R>(text: &[T], f: impl FnOnce(&RightmostParser<'_, T>) -> R) -> R
where
    T: Ord + Copy,
{
    let suffixes = SuffixIndex::build(text).expect("non-empty text");
    let repeats = ClosedRepeatIndex::build(&suffixes);
    let parser = RightmostParser::new(&repeats, text).expect("matching text");
    f(&parser)
}

pub fn parse_range<T: Ord + Copy>(text: &[T], start: usize, len: usize, scope: SourceScope) -> Parse<T> {
    with_parser(text, |parser| {
        parser
            .parse_with(start, len, scope)
            .expect("valid range")
    })
}

/// The parse decodes to exactly `text[start..start + len]`.
pub fn assert_roundtrip<T: Copy + Eq + std::fmt::Debug>(text: &[T], parse: &Parse<T>) {
    let start = parse.start();
    let decoded = decode_in(text, start, parse.phrases()).expect("decodable parse");
    assert_eq!(decoded.as_slice(), &text[start..parse.end()]);
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets so that long repeats are common.
pub fn text_strategy() -> impl Strategy<Value = Vec<char>> {
    prop_oneof![
        prop::string::string_regex("[ab]{1,40}").unwrap(),
        prop::string::string_regex("[abc]{1,40}").unwrap(),
        prop::string::string_regex("[a-z]{1,30}").unwrap(),
        prop::string::string_regex("(ab|ba|aab){1,12}").unwrap(),
    ]
    .prop_map(|s| chars(&s))
}

/// A text together with a valid range `(start, len)` into it.
pub fn text_and_range() -> impl Strategy<Value = (Vec<char>, usize, usize)> {
    text_strategy().prop_flat_map(|text| {
        let n = text.len();
        (Just(text), 0..n).prop_flat_map(move |(text, start)| {
            (Just(text), Just(start), 0..=n - start)
        })
    })
}

pub fn scope_strategy() -> impl Strategy<Value = SourceScope> {
    prop_oneof![Just(SourceScope::Text), Just(SourceScope::Substring)]
}
