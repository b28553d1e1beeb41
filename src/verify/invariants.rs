// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full invariant checks that return errors instead of panicking.
//!
//! These run after construction when `IndexConfig::check_contracts` is on, and
//! from the CLI's `inspect --verify`. They are brute force on purpose: every
//! LCP value is recomputed by direct comparison, so the cost is the sum of the
//! LCP values rather than linear.
//!
//! | Check                    | Property                                       |
//! |--------------------------|------------------------------------------------|
//! | `validate_permutation`   | SA is a bijection on `0..n`                     |
//! | `validate_rank`          | `rank[sa[k]] == k`                              |
//! | `validate_sorted_lcp`    | adjacent suffixes ordered, `lcp[k]` exact       |
//! | `validate_repeats`       | every repeat is shared and right closed         |
//! | `validate_parse`         | phrases in bounds and reproduce the substring   |

use crate::repeats::ClosedRepeatIndex;
use crate::suffix_index::SuffixIndex;
use crate::types::{Parse, Phrase};
use std::fmt;

/// A broken structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Two arrays that must be parallel have different lengths.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// `sa[row]` is out of range or repeats an earlier value.
    NotPermutation { row: usize, position: usize },
    /// `rank` is not the inverse of `sa` at this position.
    RankMismatch { position: usize },
    /// `suffix(sa[row - 1]) > suffix(sa[row])`.
    UnsortedSuffixArray { row: usize },
    /// `lcp[row]` disagrees with the direct comparison.
    IncorrectLcp {
        row: usize,
        claimed: usize,
        actual: usize,
    },
    /// A repeat's members do not all share its prefix.
    RepeatMismatch { length: usize, position: usize },
    /// A repeat could be extended one symbol to the right.
    NotRightClosed { length: usize, first_row: usize },
    /// A copy points before the available history.
    DanglingCopy { position: usize, distance: usize },
    ZeroLengthCopy { position: usize },
    /// A phrase runs past the end of the query range.
    PhraseOverrun {
        position: usize,
        length: usize,
        end: usize,
    },
    /// A literal does not hold the text symbol at its position.
    LiteralMismatch { position: usize },
    /// A copy's source does not hold the same symbols as its target.
    CopyMismatch { position: usize, source: usize },
    /// Phrases cover a different number of symbols than requested.
    CoverageMismatch { expected: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{} has length {}, expected {}", what, actual, expected),
            InvariantError::NotPermutation { row, position } => {
                write!(f, "suffix array is not a permutation: sa[{}] = {}", row, position)
            }
            InvariantError::RankMismatch { position } => {
                write!(f, "rank[{}] is not the inverse of the suffix array", position)
            }
            InvariantError::UnsortedSuffixArray { row } => {
                write!(f, "suffix array not sorted at row {}", row)
            }
            InvariantError::IncorrectLcp {
                row,
                claimed,
                actual,
            } => write!(f, "lcp[{}] = {} but suffixes share {}", row, claimed, actual),
            InvariantError::RepeatMismatch { length, position } => write!(
                f,
                "repeat of length {} does not occur at position {}",
                length, position
            ),
            InvariantError::NotRightClosed { length, first_row } => write!(
                f,
                "repeat of length {} at row {} extends to the right",
                length, first_row
            ),
            InvariantError::DanglingCopy { position, distance } => write!(
                f,
                "copy at {} reaches back {} symbols past the available history",
                position, distance
            ),
            InvariantError::ZeroLengthCopy { position } => {
                write!(f, "copy at {} has zero length", position)
            }
            InvariantError::PhraseOverrun {
                position,
                length,
                end,
            } => write!(
                f,
                "phrase at {} of length {} runs past range end {}",
                position, length, end
            ),
            InvariantError::LiteralMismatch { position } => {
                write!(f, "literal at {} differs from the text", position)
            }
            InvariantError::CopyMismatch { position, source } => {
                write!(f, "copy at {} differs from its source at {}", position, source)
            }
            InvariantError::CoverageMismatch { expected, actual } => {
                write!(f, "phrases cover {} symbols, expected {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `sa` is a bijection on `0..sa.len()`.
pub fn validate_permutation(sa: &[usize]) -> Result<(), InvariantError> {
    let mut seen = vec![false; sa.len()];
    for (row, &position) in sa.iter().enumerate() {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(InvariantError::NotPermutation { row, position }),
        }
    }
    Ok(())
}

/// Check that `rank` inverts `sa`.
pub fn validate_rank(sa: &[usize], rank: &[usize]) -> Result<(), InvariantError> {
    if rank.len() != sa.len() {
        return Err(InvariantError::LengthMismatch {
            what: "rank",
            expected: sa.len(),
            actual: rank.len(),
        });
    }
    for (row, &position) in sa.iter().enumerate() {
        if rank.get(position) != Some(&row) {
            return Err(InvariantError::RankMismatch { position });
        }
    }
    Ok(())
}

/// Check suffix order and LCP values against direct comparison.
///
/// Assumes `sa` already passed [`validate_permutation`].
pub fn validate_sorted_lcp<T: Ord>(
    text: &[T],
    sa: &[usize],
    lcp: &[usize],
) -> Result<(), InvariantError> {
    let n = text.len();
    if sa.len() != n {
        return Err(InvariantError::LengthMismatch {
            what: "suffix array",
            expected: n,
            actual: sa.len(),
        });
    }
    if lcp.len() != n {
        return Err(InvariantError::LengthMismatch {
            what: "lcp",
            expected: n,
            actual: lcp.len(),
        });
    }
    if n > 0 && lcp[0] != 0 {
        return Err(InvariantError::IncorrectLcp {
            row: 0,
            claimed: lcp[0],
            actual: 0,
        });
    }

    for row in 1..n {
        let (a, b) = (sa[row - 1], sa[row]);
        let actual = common_prefix_len(&text[a..], &text[b..]);
        if lcp[row] != actual {
            return Err(InvariantError::IncorrectLcp {
                row,
                claimed: lcp[row],
                actual,
            });
        }
        // The shorter suffix sorts first when one is a prefix of the other.
        let ordered = match (text.get(a + actual), text.get(b + actual)) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(x), Some(y)) => x < y,
        };
        if !ordered {
            return Err(InvariantError::UnsortedSuffixArray { row });
        }
    }
    Ok(())
}

/// Run every suffix-array level check on a built index.
pub fn validate_suffix_index<T: Ord>(text: &[T], index: &SuffixIndex) -> Result<(), InvariantError> {
    if index.len() != text.len() {
        return Err(InvariantError::LengthMismatch {
            what: "suffix array",
            expected: text.len(),
            actual: index.len(),
        });
    }
    validate_permutation(index.suffix_array())?;
    validate_rank(index.suffix_array(), index.rank())?;
    validate_sorted_lcp(text, index.suffix_array(), index.lcp())
}

/// Check that every reported repeat is shared by all members and right closed.
pub fn validate_repeats<T: Eq>(
    text: &[T],
    repeats: &ClosedRepeatIndex<'_>,
) -> Result<(), InvariantError> {
    let n = text.len();
    for repeat in repeats.repeats() {
        let length = repeat.length();
        let positions = repeat.positions(repeats.suffix_index());
        let Some(&first) = positions.first() else {
            continue;
        };

        for &position in positions {
            if position + length > n || text[position..position + length] != text[first..first + length] {
                return Err(InvariantError::RepeatMismatch { length, position });
            }
        }

        // Right closed: some member hits the end, or two followers differ.
        let mut followers = positions.iter().map(|&p| text.get(p + length));
        let closed = match followers.next().flatten() {
            None => true,
            Some(head) => followers.any(|next| next != Some(head)),
        };
        if !closed {
            return Err(InvariantError::NotRightClosed {
                length,
                first_row: repeat.rows().start,
            });
        }
    }
    Ok(())
}

/// Check that a parse reproduces `text[parse.start()..parse.start() + len]`.
///
/// Sources are checked against the text itself, so this holds for both source
/// scopes; for [`crate::SourceScope::Substring`] sources must also lie inside
/// the range.
pub fn validate_parse<T: Eq>(text: &[T], parse: &Parse<T>, len: usize) -> Result<(), InvariantError> {
    let start = parse.start();
    let end = start + len;
    let floor = parse.scope().floor(start);

    let covered = parse.covered_len();
    if covered != len {
        return Err(InvariantError::CoverageMismatch {
            expected: len,
            actual: covered,
        });
    }

    for (position, phrase) in parse.positioned() {
        if position + phrase.len() > end {
            return Err(InvariantError::PhraseOverrun {
                position,
                length: phrase.len(),
                end,
            });
        }
        match *phrase {
            Phrase::Literal(ref symbol) => {
                if text.get(position) != Some(symbol) {
                    return Err(InvariantError::LiteralMismatch { position });
                }
            }
            Phrase::Copy { distance, length } => {
                if length == 0 {
                    return Err(InvariantError::ZeroLengthCopy { position });
                }
                let source = match position.checked_sub(distance) {
                    Some(source) if distance > 0 && source >= floor => source,
                    _ => return Err(InvariantError::DanglingCopy { position, distance }),
                };
                if text[source..source + length] != text[position..position + length] {
                    return Err(InvariantError::CopyMismatch { position, source });
                }
            }
        }
    }
    Ok(())
}

/// Longest common prefix of two slices.
pub fn common_prefix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
