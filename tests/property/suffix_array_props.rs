//! Suffix array property tests.
//!
//! - Permutation: every position appears exactly once
//! - Sortedness: adjacent suffixes are in lexicographic order
//! - LCP correctness: values equal direct comparison
//! - Algorithm agreement: SA-IS and prefix doubling build the same index

use super::common::{naive_lcp, naive_suffix_array, text_strategy};
use proptest::prelude::*;
use rightmost_lz::verify::validate_suffix_index;
use rightmost_lz::{IndexConfig, SuffixAlgorithm, SuffixIndex};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sais_matches_naive(text in text_strategy()) {
        let index = SuffixIndex::build(&text).unwrap();
        let sa = naive_suffix_array(&text);
        let lcp = naive_lcp(&text, &sa);
        prop_assert_eq!(index.suffix_array(), sa.as_slice());
        prop_assert_eq!(index.lcp(), lcp.as_slice());
    }

    #[test]
    fn prop_algorithms_agree(text in text_strategy()) {
        let sais = SuffixIndex::build_with(
            &text,
            &IndexConfig::default().with_algorithm(SuffixAlgorithm::InducedSorting),
        ).unwrap();
        let doubling = SuffixIndex::build_with(
            &text,
            &IndexConfig::default().with_algorithm(SuffixAlgorithm::PrefixDoubling),
        ).unwrap();
        prop_assert_eq!(sais, doubling);
    }

    #[test]
    fn prop_index_validates(text in text_strategy()) {
        let index = SuffixIndex::build(&text).unwrap();
        prop_assert!(validate_suffix_index(&text, &index).is_ok());
    }

    #[test]
    fn prop_byte_alphabet(text in prop::collection::vec(any::<u8>(), 1..64)) {
        let index = SuffixIndex::build(&text).unwrap();
        let sa = naive_suffix_array(&text);
        prop_assert_eq!(index.suffix_array(), sa.as_slice());
    }
}
