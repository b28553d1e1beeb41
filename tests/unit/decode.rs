//! Decoding phrase sequences, including parses that copy from before the range.

use super::common::{chars, parse_range, FIXTURES};
use rightmost_lz::{decode, decode_in, Error, InvariantError, Phrase, SourceScope};

#[test]
fn substring_parses_decode_standalone() {
    for &fixture in FIXTURES {
        let text = chars(fixture);
        for start in 0..text.len() {
            let len = text.len() - start;
            let parse = parse_range(&text, start, len, SourceScope::Substring);
            assert_eq!(decode(parse.phrases()).unwrap(), &text[start..], "{} @{}", fixture, start);
        }
    }
}

#[test]
fn text_parses_need_history() {
    let text = chars("abracadabra");
    let parse = parse_range(&text, 7, 4, SourceScope::Text);
    assert_eq!(decode_in(&text, 7, parse.phrases()).unwrap(), chars("abra"));
    assert_eq!(
        decode(parse.phrases()),
        Err(Error::InternalConsistency(InvariantError::DanglingCopy {
            position: 0,
            distance: 7
        }))
    );
}

#[test]
fn zero_length_copy_is_rejected() {
    let phrases = vec![Phrase::Literal('a'), Phrase::Copy { distance: 1, length: 0 }];
    assert_eq!(
        decode(&phrases),
        Err(Error::InternalConsistency(InvariantError::ZeroLengthCopy { position: 1 }))
    );
}
