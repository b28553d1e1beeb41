// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy rightmost LZ77 over a query range.
//!
//! At each position `cur` of `[start, end)`:
//!
//! 1. Ask the repeat index for the longest right closed repeat at `cur` with
//!    an admissible earlier member. Its length `L` is the longest previous
//!    factor, its greatest earlier member the rightmost source.
//! 2. If `L` runs past `end`, clip to `m = end - cur` and look the source up
//!    again for length `m`: a shorter prefix may occur closer to `cur`.
//! 3. Emit `Copy { distance: cur - source, length }`, or `Literal` when no
//!    earlier occurrence of even one symbol exists.
//!
//! ```text
//! text  a b r a c a d a b r a     query [7, 11) with sources from [0, 7)
//!                     ^
//!       longest match "abra", members {0, 7}  ->  Copy { distance: 7, length: 4 }
//!
//! query [7, 9): "ab" has members {0, 7} but clipped to "ab" the rightmost
//! source is still 0  ->  Copy { distance: 7, length: 2 }
//! query [5, 6): "a" at 5, members {0, 3}      ->  Copy { distance: 2, length: 1 }
//! ```
//!
//! Any single-symbol earlier occurrence wins over a literal.

use crate::config::IndexConfig;
use crate::error::Error;
use crate::repeats::ClosedRepeatIndex;
use crate::suffix_index::SuffixIndex;
use crate::types::{Parse, Phrase, QueryRange, SourceScope};
use crate::verify::{contracts, InvariantError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only parser over a prebuilt repeat index.
///
/// Holds no mutable state, so one parser can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct RightmostParser<'a, T> {
    repeats: &'a ClosedRepeatIndex<'a>,
    text: &'a [T],
    scope: SourceScope,
}

impl<'a, T: Copy + Eq> RightmostParser<'a, T> {
    /// `text` must be the text `repeats` was built from.
    pub fn new(repeats: &'a ClosedRepeatIndex<'a>, text: &'a [T]) -> Result<Self, Error> {
        if text.len() != repeats.len() {
            return Err(InvariantError::LengthMismatch {
                what: "text",
                expected: repeats.len(),
                actual: text.len(),
            }
            .into());
        }
        Ok(Self {
            repeats,
            text,
            scope: SourceScope::default(),
        })
    }

    /// Scope used by [`parse`](Self::parse) and [`parse_batch`](Self::parse_batch).
    pub fn with_scope(mut self, scope: SourceScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn scope(&self) -> SourceScope {
        self.scope
    }

    pub fn text(&self) -> &'a [T] {
        self.text
    }

    pub fn parse(&self, start: usize, len: usize) -> Result<Parse<T>, Error> {
        self.parse_with(start, len, self.scope)
    }

    /// Parse the whole text.
    pub fn parse_all(&self) -> Result<Parse<T>, Error> {
        self.parse(0, self.text.len())
    }

    /// Parse `[start, start + len)` taking sources from `scope`.
    ///
    /// The range is checked before any work: `start` must be a text position
    /// (even for `len == 0`) and the range must end within the text.
    pub fn parse_with(&self, start: usize, len: usize, scope: SourceScope) -> Result<Parse<T>, Error> {
        let range = QueryRange::new(start, len).resolve(self.text.len())?;
        let floor = scope.floor(range.start);

        let mut phrases = Vec::new();
        let mut cur = range.start;
        while cur < range.end {
            let phrase = self.next_phrase(cur, range.end, floor);
            contracts::check_phrase_valid(self.text, cur, &phrase, range.end);
            cur += phrase.len();
            phrases.push(phrase);
        }

        Ok(Parse::new(range.start, scope, phrases))
    }

    /// Parse many ranges; results come back in query order.
    #[cfg(feature = "parallel")]
    pub fn parse_batch(&self, queries: &[QueryRange]) -> Vec<Result<Parse<T>, Error>>
    where
        T: Send + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.parse(query.start, query.len))
            .collect()
    }

    /// Sequential version for builds without `parallel`.
    #[cfg(not(feature = "parallel"))]
    pub fn parse_batch(&self, queries: &[QueryRange]) -> Vec<Result<Parse<T>, Error>> {
        queries
            .iter()
            .map(|query| self.parse(query.start, query.len))
            .collect()
    }

    fn next_phrase(&self, cur: usize, end: usize, floor: usize) -> Phrase<T> {
        let Some(found) = self.repeats.longest_match(cur, floor) else {
            return Phrase::Literal(self.text[cur]);
        };

        let remaining = end - cur;
        let (length, source) = if found.length() <= remaining {
            (found.length(), found.source())
        } else {
            // `found.source()` qualifies for the shorter length too, so the
            // lookup can only move the source closer.
            let source = self
                .repeats
                .rightmost_source(cur, remaining, floor)
                .unwrap_or(found.source());
            (remaining, source)
        };

        contracts::check_source_rightmost(self.text, cur, source, length);
        Phrase::Copy {
            distance: cur - source,
            length,
        }
    }
}

/// Build every index for `text` and parse one range with default settings.
///
/// For repeated queries over the same text, build a [`SuffixIndex`],
/// [`ClosedRepeatIndex`] and [`RightmostParser`] once instead.
pub fn rightmost_lz77<T: Ord + Copy>(text: &[T], start: usize, len: usize) -> Result<Parse<T>, Error> {
    parse_with_config(text, start, len, &IndexConfig::default())
}

/// Like [`rightmost_lz77`], with construction and scope taken from `config`.
pub fn parse_with_config<T: Ord + Copy>(
    text: &[T],
    start: usize,
    len: usize,
    config: &IndexConfig,
) -> Result<Parse<T>, Error> {
    // Reject bad ranges before paying for construction. An empty text fails
    // here too, but as EmptyInput.
    if !text.is_empty() {
        QueryRange::new(start, len).resolve(text.len())?;
    }
    let suffixes = SuffixIndex::build_with(text, config)?;
    let repeats = ClosedRepeatIndex::build(&suffixes);
    if config.check_contracts {
        crate::verify::validate_repeats(text, &repeats)?;
    }
    let parser = RightmostParser::new(&repeats, text)?.with_scope(config.scope);
    let parse = parser.parse(start, len)?;
    if config.check_contracts {
        crate::verify::validate_parse(text, &parse, len)?;
    }
    Ok(parse)
}
