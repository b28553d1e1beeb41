// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force oracles shared across unit, integration and fuzz tests.
//!
//! This module is always compiled but hidden from documentation. Everything
//! here is quadratic or worse and exists only to cross-check the real thing.

#![doc(hidden)]

use crate::types::{Phrase, SourceScope};

pub use crate::verify::common_prefix_len;

/// Suffix array by sorting the suffixes themselves.
pub fn naive_suffix_array<T: Ord>(text: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// LCP array by comparing adjacent suffixes symbol by symbol.
pub fn naive_lcp<T: Eq>(text: &[T], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for row in 1..sa.len() {
        lcp[row] = common_prefix_len(&text[sa[row - 1]..], &text[sa[row]..]);
    }
    lcp
}

/// Longest match at `cur` within `[cur, end)` and its rightmost source in
/// `[floor, cur)`, by trying every source.
pub fn naive_longest_match<T: Eq>(text: &[T], cur: usize, end: usize, floor: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for q in floor..cur {
        let length = common_prefix_len(&text[q..], &text[cur..end]);
        // `>=` so that later sources win ties.
        if length > 0 && best.is_none_or(|(best_len, _)| length >= best_len) {
            best = Some((length, q));
        }
    }
    best
}

/// Rightmost LZ77 of `text[start..start + len]` by exhaustive search.
///
/// Panics on an invalid range.
pub fn naive_rightmost_lz77<T: Copy + Eq>(
    text: &[T],
    start: usize,
    len: usize,
    scope: SourceScope,
) -> Vec<Phrase<T>> {
    let end = start + len;
    let floor = scope.floor(start);
    let mut phrases = Vec::new();
    let mut cur = start;
    while cur < end {
        match naive_longest_match(text, cur, end, floor) {
            Some((length, source)) => {
                phrases.push(Phrase::Copy {
                    distance: cur - source,
                    length,
                });
                cur += length;
            }
            None => {
                phrases.push(Phrase::Literal(text[cur]));
                cur += 1;
            }
        }
    }
    phrases
}

/// Every right closed repeat as `(length, ascending positions)`, sorted.
///
/// Enumerates each distinct substring and keeps those that occur at least
/// twice and cannot be extended by one symbol on the right.
pub fn naive_right_closed_repeats<T: Ord>(text: &[T]) -> Vec<(usize, Vec<usize>)> {
    let n = text.len();
    let mut found: Vec<(usize, Vec<usize>)> = Vec::new();
    for length in 1..n {
        let mut seen: Vec<&[T]> = Vec::new();
        for p in 0..=n - length {
            let pattern = &text[p..p + length];
            if seen.contains(&pattern) {
                continue;
            }
            seen.push(pattern);
            let positions: Vec<usize> = (0..=n - length)
                .filter(|&q| &text[q..q + length] == pattern)
                .collect();
            if positions.len() < 2 {
                continue;
            }
            let mut followers = positions.iter().map(|&q| text.get(q + length));
            let closed = match followers.next().flatten() {
                None => true,
                Some(head) => followers.any(|next| next != Some(head)),
            };
            if closed {
                found.push((length, positions));
            }
        }
    }
    found.sort();
    found
}
