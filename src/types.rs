// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value types produced by the parser.
//!
//! A parse is a flat list of [`Phrase`]s. Each phrase either carries a symbol
//! verbatim or points back at an earlier occurrence by `(distance, length)`.
//! Distances are measured from the phrase's own start, so a phrase never has to
//! know where the query range began.
//!
//! ```text
//! text:    a b r a c a d a b r a
//!          0 1 2 3 4 5 6 7 8 9 10
//!
//! parse:   a  b  r  (3,1)  c  (2,1)  d  (7,4)
//!                    │         │          │
//!                    └─ src 0  └─ src 3   └─ src 0, "abra"
//! ```

use crate::error::{Error, RangeError};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One output unit of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phrase<T> {
    /// A symbol with no admissible earlier occurrence.
    Literal(T),
    /// Repeat `length` symbols starting `distance` positions back.
    ///
    /// `distance >= 1` and `length >= 1`. The source may overlap the phrase
    /// itself (`distance < length`), in which case decoding copies one symbol
    /// at a time.
    Copy { distance: usize, length: usize },
}

impl<T> Phrase<T> {
    /// Number of text symbols this phrase stands for.
    pub fn len(&self) -> usize {
        match self {
            Phrase::Literal(_) => 1,
            Phrase::Copy { length, .. } => *length,
        }
    }

    /// Phrases always cover at least one symbol.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Phrase::Literal(_))
    }

    pub fn is_copy(&self) -> bool {
        matches!(self, Phrase::Copy { .. })
    }

    /// Absolute source position when this phrase starts at `position`.
    pub fn source(&self, position: usize) -> Option<usize> {
        match self {
            Phrase::Literal(_) => None,
            Phrase::Copy { distance, .. } => position.checked_sub(*distance),
        }
    }
}

/// Where a copy is allowed to take its source from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceScope {
    /// Any earlier position of the whole text, including positions before the
    /// query range.
    #[default]
    Text,
    /// Only earlier positions inside the query range. The result is the
    /// standalone LZ77 parse of the substring.
    Substring,
}

impl SourceScope {
    /// Smallest admissible source position for a query starting at `start`.
    #[inline]
    pub fn floor(self, start: usize) -> usize {
        match self {
            SourceScope::Text => 0,
            SourceScope::Substring => start,
        }
    }
}

/// A requested substring `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryRange {
    pub start: usize,
    pub len: usize,
}

impl QueryRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Build a range from signed user input, rejecting negative values.
    pub fn from_signed(start: i64, len: i64) -> Result<Self, Error> {
        let start = usize::try_from(start).map_err(|_| RangeError::NegativeStart(start))?;
        let len = usize::try_from(len).map_err(|_| RangeError::NegativeLength(len))?;
        Ok(Self { start, len })
    }

    /// Check the range against a text of `text_len` symbols.
    ///
    /// `start` must name an existing position even when `len == 0`.
    pub fn resolve(&self, text_len: usize) -> Result<Range<usize>, Error> {
        if self.start >= text_len {
            return Err(RangeError::StartOutOfBounds {
                start: self.start,
                text_len,
            }
            .into());
        }
        match self.start.checked_add(self.len) {
            Some(end) if end <= text_len => Ok(self.start..end),
            _ => Err(RangeError::EndOutOfBounds {
                start: self.start,
                len: self.len,
                text_len,
            }
            .into()),
        }
    }
}

/// The phrase sequence for one query range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parse<T> {
    start: usize,
    scope: SourceScope,
    phrases: Vec<Phrase<T>>,
}

impl<T> Parse<T> {
    pub(crate) fn new(start: usize, scope: SourceScope, phrases: Vec<Phrase<T>>) -> Self {
        Self {
            start,
            scope,
            phrases,
        }
    }

    /// First text position covered by the parse.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last covered text position.
    pub fn end(&self) -> usize {
        self.start + self.covered_len()
    }

    pub fn scope(&self) -> SourceScope {
        self.scope
    }

    pub fn phrases(&self) -> &[Phrase<T>] {
        &self.phrases
    }

    pub fn into_phrases(self) -> Vec<Phrase<T>> {
        self.phrases
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of text symbols the phrases reproduce.
    pub fn covered_len(&self) -> usize {
        self.phrases.iter().map(Phrase::len).sum()
    }

    pub fn literal_count(&self) -> usize {
        self.phrases.iter().filter(|p| p.is_literal()).count()
    }

    pub fn copy_count(&self) -> usize {
        self.phrases.iter().filter(|p| p.is_copy()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phrase<T>> {
        self.phrases.iter()
    }

    /// Phrases paired with the text position each one starts at.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Phrase<T>)> + '_ {
        self.phrases.iter().scan(self.start, |position, phrase| {
            let at = *position;
            *position += phrase.len();
            Some((at, phrase))
        })
    }
}

impl<'a, T> IntoIterator for &'a Parse<T> {
    type Item = &'a Phrase<T>;
    type IntoIter = std::slice::Iter<'a, Phrase<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.iter()
    }
}
