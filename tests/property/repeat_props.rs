//! Right closed repeat properties.
//!
//! - Exactly the repeats found by exhaustive substring enumeration
//! - Every repeat is shared by its members and cannot extend to the right
//! - Longest match equals the longest previous factor, with the closest source

use super::common::{naive_right_closed_repeats, text_strategy};
use proptest::prelude::*;
use rightmost_lz::testing::naive_longest_match;
use rightmost_lz::verify::validate_repeats;
use rightmost_lz::{ClosedRepeatIndex, SuffixIndex};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_repeats_match_enumeration(text in text_strategy()) {
        let suffixes = SuffixIndex::build(&text).unwrap();
        let repeats = ClosedRepeatIndex::build(&suffixes);
        let mut found: Vec<(usize, Vec<usize>)> = repeats
            .repeats()
            .map(|r| (r.length(), r.sorted_positions(&suffixes)))
            .collect();
        found.sort();
        prop_assert_eq!(found, naive_right_closed_repeats(&text));
    }

    #[test]
    fn prop_repeats_are_right_closed(text in text_strategy()) {
        let suffixes = SuffixIndex::build(&text).unwrap();
        let repeats = ClosedRepeatIndex::build(&suffixes);
        prop_assert!(validate_repeats(&text, &repeats).is_ok());
        for repeat in repeats.repeats() {
            prop_assert!(repeat.occurrences() >= 2);
            prop_assert!(repeat.length() >= 1);
        }
    }

    #[test]
    fn prop_longest_match_is_longest_previous_factor(
        text in text_strategy(),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let n = text.len();
        let position = a % n;
        let floor = b % (position + 1);
        let suffixes = SuffixIndex::build(&text).unwrap();
        let repeats = ClosedRepeatIndex::build(&suffixes);

        let found = repeats
            .longest_match(position, floor)
            .map(|m| (m.length(), m.source()));
        prop_assert_eq!(found, naive_longest_match(&text, position, n, floor));
    }

    #[test]
    fn prop_rightmost_source_for_every_length(
        text in text_strategy(),
        a in 0usize..64,
        len in 1usize..8,
    ) {
        let n = text.len();
        let position = a % n;
        let suffixes = SuffixIndex::build(&text).unwrap();
        let repeats = ClosedRepeatIndex::build(&suffixes);

        let expected = (0..position)
            .rev()
            .find(|&q| q + len <= n && position + len <= n && text[q..q + len] == text[position..position + len]);
        prop_assert_eq!(repeats.rightmost_source(position, len, 0), expected);
    }
}
