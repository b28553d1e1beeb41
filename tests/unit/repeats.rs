//! Right closed repeat enumeration and the longest-match queries built on it.

use super::common::{chars, naive_right_closed_repeats, FIXTURES};
use rightmost_lz::verify::validate_repeats;
use rightmost_lz::{ClosedRepeatIndex, SuffixIndex};

fn sorted_repeats(text: &[char]) -> Vec<(usize, Vec<usize>)> {
    let suffixes = SuffixIndex::build(text).unwrap();
    let repeats = ClosedRepeatIndex::build(&suffixes);
    let mut all: Vec<(usize, Vec<usize>)> = repeats
        .repeats()
        .map(|repeat| (repeat.length(), repeat.sorted_positions(&suffixes)))
        .collect();
    all.sort();
    all
}

#[test]
fn fixtures_match_exhaustive_enumeration() {
    for &fixture in FIXTURES {
        let text = chars(fixture);
        assert_eq!(sorted_repeats(&text), naive_right_closed_repeats(&text), "{}", fixture);
    }
}

#[test]
fn fixtures_pass_validation() {
    for &fixture in FIXTURES {
        let text = chars(fixture);
        let suffixes = SuffixIndex::build(&text).unwrap();
        let repeats = ClosedRepeatIndex::build(&suffixes);
        assert!(validate_repeats(&text, &repeats).is_ok(), "{}", fixture);
    }
}

#[test]
fn banana_repeats() {
    assert_eq!(
        sorted_repeats(&chars("banana")),
        vec![(1, vec![1, 3, 5]), (2, vec![2, 4]), (3, vec![1, 3])]
    );
}

#[test]
fn mississippi_longest_matches() {
    let text = chars("mississippi");
    let suffixes = SuffixIndex::build(&text).unwrap();
    let repeats = ClosedRepeatIndex::build(&suffixes);

    let found = repeats.longest_match(4, 0).unwrap();
    assert_eq!((found.length(), found.source()), (4, 1));

    let found = repeats.longest_match(5, 0).unwrap();
    assert_eq!((found.length(), found.source()), (3, 2));

    let found = repeats.longest_match(6, 0).unwrap();
    assert_eq!((found.length(), found.source(), found.distance()), (2, 3, 3));

    // Only 's' symbols lie in [2, 4).
    assert!(repeats.longest_match(4, 2).is_none());
}

#[test]
fn earlier_positions_are_ascending_and_admissible() {
    let text = chars("mississippi");
    let suffixes = SuffixIndex::build(&text).unwrap();
    let repeats = ClosedRepeatIndex::build(&suffixes);

    // "i" at 10 has earlier members 1, 4, 7.
    assert_eq!(repeats.earlier_positions(10, 0), vec![1, 4, 7]);
    assert_eq!(repeats.earlier_positions(10, 2), vec![4, 7]);
    assert!(repeats.earlier_positions(0, 0).is_empty());
}

#[test]
fn nested_repeats_longest_first() {
    let text = chars("aaaa");
    let suffixes = SuffixIndex::build(&text).unwrap();
    let repeats = ClosedRepeatIndex::build(&suffixes);
    let lengths: Vec<usize> = repeats.repeats_at(0).iter().map(|r| r.length()).collect();
    assert_eq!(lengths, vec![3, 2, 1]);
}

#[test]
fn rightmost_source_respects_floor_and_length() {
    let text = chars("abcabxabc");
    let suffixes = SuffixIndex::build(&text).unwrap();
    let repeats = ClosedRepeatIndex::build(&suffixes);
    assert_eq!(repeats.rightmost_source(6, 3, 0), Some(0));
    assert_eq!(repeats.rightmost_source(6, 2, 0), Some(3));
    assert_eq!(repeats.rightmost_source(6, 2, 4), None);
    assert_eq!(repeats.rightmost_source(6, 4, 0), None);
}
