// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts checked at the point where each value is produced.
//!
//! These are **zero-cost in release builds** (`debug_assert!`, or bodies gated
//! on `debug_assertions`). They complement the `validate_*` checks: those look
//! at a finished structure, these look at one step.
//!
//! | Contract                     | Checked where                        |
//! |------------------------------|--------------------------------------|
//! | `check_lcp_bounds`           | after Kasai                          |
//! | `check_interval_closed`      | for each interval popped at build    |
//! | `check_phrase_valid`         | for each phrase the parser emits     |
//! | `check_source_rightmost`     | for each copy the parser emits       |

use crate::types::Phrase;
use std::ops::Range;

/// `lcp[k] <= n - max(sa[k - 1], sa[k])` for every row.
#[inline]
pub fn check_lcp_bounds(sa: &[usize], lcp: &[usize]) {
    let n = sa.len();
    debug_assert_eq!(lcp.len(), n, "Contract violation: lcp.len() != sa.len()");
    for row in 1..n {
        let limit = n - sa[row - 1].max(sa[row]);
        debug_assert!(
            lcp[row] <= limit,
            "Contract violation: lcp[{}] = {} exceeds remaining length {}",
            row,
            lcp[row],
            limit
        );
    }
}

/// An LCP interval must be bounded by smaller LCP values and reach its own
/// LCP somewhere inside. The first makes it maximal; the second means two
/// members disagree right after the shared prefix (or one runs off the end).
#[inline]
pub fn check_interval_closed(lcp: &[usize], rows: Range<usize>, length: usize) {
    #[cfg(debug_assertions)]
    {
        let inner = lcp[rows.start + 1..rows.end].iter().copied().min();
        debug_assert!(
            inner == Some(length),
            "Contract violation: rows {:?} share {:?} symbols, not {}, so the repeat is not right closed",
            rows,
            inner,
            length
        );
        let left = lcp[rows.start];
        let right = lcp.get(rows.end).copied().unwrap_or(0);
        debug_assert!(
            left < length && right < length,
            "Contract violation: rows {:?} with lcp {} are not a maximal interval",
            rows,
            length
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (lcp, rows, length);
    }
}

/// A phrase emitted at `position` must fit before `end` and match its source.
#[inline]
pub fn check_phrase_valid<T: Eq>(text: &[T], position: usize, phrase: &Phrase<T>, end: usize) {
    debug_assert!(
        position + phrase.len() <= end,
        "Contract violation: phrase at {} of length {} overruns range end {}",
        position,
        phrase.len(),
        end
    );
    match *phrase {
        Phrase::Literal(ref symbol) => {
            debug_assert!(
                text.get(position) == Some(symbol),
                "Contract violation: literal at {} does not match the text",
                position
            );
        }
        Phrase::Copy { distance, length } => {
            debug_assert!(
                distance >= 1 && distance <= position,
                "Contract violation: copy at {} has distance {}",
                position,
                distance
            );
            debug_assert!(length >= 1, "Contract violation: empty copy at {}", position);
            #[cfg(debug_assertions)]
            if distance >= 1 && distance <= position && position + length <= text.len() {
                let source = position - distance;
                debug_assert!(
                    text[source..source + length] == text[position..position + length],
                    "Contract violation: copy at {} differs from source {}",
                    position,
                    source
                );
            }
        }
    }
}

/// No admissible position after `source` may share `length` symbols with `position`.
///
/// Brute force over `source + 1..position`, so only worth running in tests.
#[inline]
pub fn check_source_rightmost<T: Eq>(text: &[T], position: usize, source: usize, length: usize) {
    #[cfg(debug_assertions)]
    {
        let target = &text[position..position + length];
        let closer = (source + 1..position).find(|&q| text[q..].starts_with(target));
        debug_assert!(
            closer.is_none(),
            "Contract violation: copy at {} uses source {} but {:?} is closer",
            position,
            source,
            closer
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (text, position, source, length);
    }
}
