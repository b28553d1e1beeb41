// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index construction and range parsing.
//!
//! Arbitrary bytes go through both suffix array algorithms, the repeat index
//! and the parser. Every parse must decode back to its range, validate, and
//! agree with the exhaustive oracle on small inputs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rightmost_lz::testing::naive_rightmost_lz77;
use rightmost_lz::verify::{validate_parse, validate_repeats};
use rightmost_lz::{
    decode_in, ClosedRepeatIndex, Error, IndexConfig, RightmostParser, SourceScope,
    SuffixAlgorithm, SuffixIndex,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    start: u16,
    len: u16,
    substring: bool,
    doubling: bool,
}

/// The oracle is cubic; keep it to inputs it finishes quickly.
const ORACLE_LIMIT: usize = 256;

fuzz_target!(|input: Input| {
    let algorithm = if input.doubling {
        SuffixAlgorithm::PrefixDoubling
    } else {
        SuffixAlgorithm::InducedSorting
    };
    let config = IndexConfig::default()
        .with_algorithm(algorithm)
        .with_contracts(true);

    let suffixes = match SuffixIndex::build_with(&input.text, &config) {
        Ok(suffixes) => suffixes,
        Err(Error::EmptyInput) => {
            assert!(input.text.is_empty());
            return;
        }
        Err(e) => panic!("build failed on {} bytes: {}", input.text.len(), e),
    };
    let repeats = ClosedRepeatIndex::build(&suffixes);
    validate_repeats(&input.text, &repeats).expect("repeats must validate");

    let scope = if input.substring {
        SourceScope::Substring
    } else {
        SourceScope::Text
    };
    let parser = RightmostParser::new(&repeats, &input.text).expect("same text");

    let (start, len) = (input.start as usize, input.len as usize);
    let parse = match parser.parse_with(start, len, scope) {
        Ok(parse) => parse,
        Err(Error::Range(_)) => {
            assert!(start >= input.text.len() || start + len > input.text.len());
            return;
        }
        Err(e) => panic!("parse failed: {}", e),
    };

    validate_parse(&input.text, &parse, len).expect("parse must validate");
    let decoded = decode_in(&input.text, start, parse.phrases()).expect("parse must decode");
    assert_eq!(decoded.as_slice(), &input.text[start..start + len]);

    if input.text.len() <= ORACLE_LIMIT {
        let expected = naive_rightmost_lz77(&input.text, start, len, scope);
        assert_eq!(parse.phrases(), expected.as_slice());
    }
});
