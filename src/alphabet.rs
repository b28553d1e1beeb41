// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense re-ranking of arbitrary ordered symbols.
//!
//! Suffix sorting works on small integers. Any `Ord` symbol type is mapped to
//! `1..=sigma` preserving order, leaving `0` free for the sentinel that SA-IS
//! appends.

/// Order-preserving symbol ranks for one text.
#[derive(Debug, Clone)]
pub(crate) struct RankedText {
    /// `ranks[i]` is the rank of `text[i]`, starting at 1.
    pub ranks: Vec<usize>,
    /// Number of distinct symbols plus one for the sentinel.
    pub alphabet_size: usize,
}

/// Map each symbol to its rank among the distinct symbols of `text`.
pub(crate) fn rank_symbols<T: Ord + Copy>(text: &[T]) -> RankedText {
    let mut distinct: Vec<T> = text.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let ranks = text
        .iter()
        .map(|symbol| match distinct.binary_search(symbol) {
            Ok(i) | Err(i) => i + 1,
        })
        .collect();

    RankedText {
        ranks,
        alphabet_size: distinct.len() + 1,
    }
}
