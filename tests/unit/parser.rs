//! Greedy rightmost parsing over concrete texts.

use super::common::{assert_roundtrip, chars, parse_range, with_parser};
use rightmost_lz::{
    rightmost_lz77, Error, Phrase, QueryRange, RangeError, SourceScope,
};

fn lit(c: char) -> Phrase<char> {
    Phrase::Literal(c)
}

fn copy(distance: usize, length: usize) -> Phrase<char> {
    Phrase::Copy { distance, length }
}

#[test]
fn abracadabra_worked_example() {
    let text = chars("abracadabra");
    let parse = parse_range(&text, 0, 11, SourceScope::Text);
    assert_eq!(
        parse.phrases(),
        &[
            lit('a'),
            lit('b'),
            lit('r'),
            copy(3, 1),
            lit('c'),
            copy(2, 1),
            lit('d'),
            copy(7, 4),
        ]
    );
    let sources: Vec<Option<usize>> = parse
        .positioned()
        .filter(|(_, phrase)| phrase.is_copy())
        .map(|(position, phrase)| phrase.source(position))
        .collect();
    assert_eq!(sources, vec![Some(0), Some(3), Some(0)]);
}

#[test]
fn mississippi_whole_text() {
    let text = chars("mississippi");
    let parse = parse_range(&text, 0, 11, SourceScope::Text);
    assert_eq!(
        parse.phrases(),
        &[
            lit('m'),
            lit('i'),
            lit('s'),
            copy(1, 1),
            copy(3, 4),
            lit('p'),
            copy(1, 1),
            copy(3, 1),
        ]
    );
    assert_roundtrip(&text, &parse);
}

#[test]
fn text_scope_copies_from_before_the_range() {
    let text = chars("mississippi");
    let parse = parse_range(&text, 4, 7, SourceScope::Text);
    assert_eq!(
        parse.phrases(),
        &[copy(3, 4), lit('p'), copy(1, 1), copy(3, 1)]
    );
    assert_roundtrip(&text, &parse);
}

#[test]
fn substring_scope_parses_standalone() {
    let text = chars("mississippi");
    let parse = parse_range(&text, 4, 7, SourceScope::Substring);
    assert_eq!(
        parse.phrases(),
        &[
            lit('i'),
            lit('s'),
            copy(1, 1),
            copy(3, 1),
            lit('p'),
            copy(1, 1),
            copy(3, 1),
        ]
    );
    assert_roundtrip(&text, &parse);
}

#[test]
fn clipped_periodic_copy() {
    let text = chars("abababab");
    assert_eq!(parse_range(&text, 2, 5, SourceScope::Text).phrases(), &[copy(2, 5)]);
    assert_eq!(
        parse_range(&text, 2, 5, SourceScope::Substring).phrases(),
        &[lit('a'), lit('b'), copy(2, 3)]
    );
}

#[test]
fn self_overlapping_copies() {
    let text = chars("xyxxyxyxxyxxy");
    let parse = parse_range(&text, 0, 13, SourceScope::Text);
    assert_eq!(
        parse.phrases(),
        &[lit('x'), lit('y'), copy(2, 1), copy(3, 3), copy(5, 5), copy(3, 2)]
    );
    assert_roundtrip(&text, &parse);
}

#[test]
fn unicode_text() {
    let text = chars("héllo wörld héllo");
    let parse = parse_range(&text, 0, text.len(), SourceScope::Text);
    assert_eq!(parse.phrases().last(), Some(&copy(12, 5)));
    assert_eq!(parse.literal_count(), 9);
    assert_eq!(parse.copy_count(), 4);
    assert_roundtrip(&text, &parse);
}

#[test]
fn length_one_text() {
    let parse = rightmost_lz77(&['q'], 0, 1).unwrap();
    assert_eq!(parse.phrases(), &[lit('q')]);
}

#[test]
fn empty_range_at_last_position() {
    let text = chars("abc");
    let parse = parse_range(&text, 2, 0, SourceScope::Text);
    assert!(parse.is_empty());
    assert_eq!(parse.covered_len(), 0);
    assert_eq!(parse.end(), 2);
}

#[test]
fn range_errors() {
    let text = chars("abracadabra");
    assert!(matches!(
        rightmost_lz77(&text, 11, 0),
        Err(Error::Range(RangeError::StartOutOfBounds { start: 11, text_len: 11 }))
    ));
    assert!(matches!(
        rightmost_lz77(&text, 5, 7),
        Err(Error::Range(RangeError::EndOutOfBounds { .. }))
    ));
    assert_eq!(
        QueryRange::from_signed(-1, 3),
        Err(Error::Range(RangeError::NegativeStart(-1)))
    );
    assert_eq!(
        QueryRange::from_signed(0, -3),
        Err(Error::Range(RangeError::NegativeLength(-3)))
    );
}

#[test]
fn batch_matches_individual_parses() {
    let text = chars("cabbagecabbage");
    let queries: Vec<QueryRange> = (0..text.len())
        .map(|start| QueryRange::new(start, text.len() - start))
        .collect();
    with_parser(&text, |parser| {
        let batch = parser.parse_batch(&queries);
        for (query, result) in queries.iter().zip(batch) {
            assert_eq!(result, parser.parse(query.start, query.len));
        }
    });
}

#[test]
fn parser_scope_default_applies() {
    let text = chars("abababab");
    with_parser(&text, |parser| {
        let parser = parser.with_scope(SourceScope::Substring);
        assert_eq!(parser.parse(2, 5).unwrap().phrases().len(), 3);
        assert_eq!(parser.parse_all().unwrap().len(), 3);
    });
}

#[test]
fn json_shape() {
    let parse = rightmost_lz77(&chars("aa"), 0, 2).unwrap();
    let json = serde_json::to_value(&parse).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "start": 0,
            "scope": "text",
            "phrases": [
                { "literal": "a" },
                { "copy": { "distance": 1, "length": 1 } }
            ]
        })
    );
}
