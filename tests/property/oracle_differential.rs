//! Differential tests against the exhaustive rightmost LZ77 oracle.
//!
//! The oracle tries every earlier source at every step and keeps the last
//! one among the longest, so agreement checks both greedy lengths and the
//! rightmost tie-break.

use super::common::{
    chars, naive_rightmost_lz77, parse_range, scope_strategy, text_and_range, with_parser,
    FIXTURES,
};
use proptest::prelude::*;
use rightmost_lz::{QueryRange, SourceScope};

#[test]
fn fixtures_every_range() {
    for &fixture in FIXTURES {
        let text = chars(fixture);
        let n = text.len();
        with_parser(&text, |parser| {
            for start in 0..n {
                for len in 0..=n - start {
                    for scope in [SourceScope::Text, SourceScope::Substring] {
                        let parse = parser.parse_with(start, len, scope).unwrap();
                        assert_eq!(
                            parse.phrases(),
                            naive_rightmost_lz77(&text, start, len, scope).as_slice(),
                            "{} [{}, {}) {:?}",
                            fixture,
                            start,
                            start + len,
                            scope
                        );
                    }
                }
            }
        });
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_matches_oracle(
        (text, start, len) in text_and_range(),
        scope in scope_strategy(),
    ) {
        let parse = parse_range(&text, start, len, scope);
        let expected = naive_rightmost_lz77(&text, start, len, scope);
        prop_assert_eq!(parse.phrases(), expected.as_slice());
    }

    #[test]
    fn prop_batch_matches_oracle(
        (text, start, len) in text_and_range(),
    ) {
        let queries = vec![
            QueryRange::new(start, len),
            QueryRange::new(0, text.len()),
            QueryRange::new(start, 0),
        ];
        with_parser(&text, |parser| {
            for (query, result) in queries.iter().zip(parser.parse_batch(&queries)) {
                let expected = naive_rightmost_lz77(&text, query.start, query.len, SourceScope::Text);
                assert_eq!(result.unwrap().phrases(), expected.as_slice());
            }
        });
    }
}
