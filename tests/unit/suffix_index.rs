//! Suffix array, rank and LCP construction against sorting-based oracles.

use super::common::{chars, naive_lcp, naive_suffix_array, FIXTURES};
use rightmost_lz::verify::validate_suffix_index;
use rightmost_lz::{Error, IndexConfig, SuffixAlgorithm, SuffixIndex};

fn config(algorithm: SuffixAlgorithm) -> IndexConfig {
    IndexConfig::default()
        .with_algorithm(algorithm)
        .with_contracts(true)
}

#[test]
fn fixtures_match_naive_construction() {
    for &fixture in FIXTURES {
        let text = chars(fixture);
        let expected_sa = naive_suffix_array(&text);
        let expected_lcp = naive_lcp(&text, &expected_sa);

        for algorithm in [SuffixAlgorithm::InducedSorting, SuffixAlgorithm::PrefixDoubling] {
            let index = SuffixIndex::build_with(&text, &config(algorithm)).unwrap();
            assert_eq!(index.suffix_array(), expected_sa.as_slice(), "{} {:?}", fixture, algorithm);
            assert_eq!(index.lcp(), expected_lcp.as_slice(), "{} {:?}", fixture, algorithm);
            assert!(validate_suffix_index(&text, &index).is_ok());
        }
    }
}

#[test]
fn mississippi_tables() {
    let index = SuffixIndex::build(b"mississippi").unwrap();
    assert_eq!(index.suffix_array(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    assert_eq!(index.lcp(), &[0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]);
}

#[test]
fn rank_inverts_suffix_array() {
    let text = chars("cabbagecabbage");
    let index = SuffixIndex::build(&text).unwrap();
    for position in 0..text.len() {
        assert_eq!(index.position_at(index.row_of(position)), position);
    }
}

#[test]
fn integer_tokens_use_their_own_order() {
    // Large, sparse token values are ranked densely before construction.
    let text: Vec<u32> = vec![900, 5, 900, 5, 70_000, 5];
    let index = SuffixIndex::build(&text).unwrap();
    assert_eq!(index.suffix_array(), naive_suffix_array(&text).as_slice());
}

#[test]
fn unicode_symbols_are_single_positions() {
    let text = chars("héllo héllo");
    let index = SuffixIndex::build(&text).unwrap();
    assert_eq!(index.len(), 11);
    assert_eq!(index.suffix_array(), naive_suffix_array(&text).as_slice());
}

#[test]
fn empty_text_is_rejected_by_both_algorithms() {
    let empty: Vec<char> = Vec::new();
    for algorithm in [SuffixAlgorithm::InducedSorting, SuffixAlgorithm::PrefixDoubling] {
        assert_eq!(
            SuffixIndex::build_with(&empty, &config(algorithm)),
            Err(Error::EmptyInput)
        );
    }
}
