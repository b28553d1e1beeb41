// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array, rank array and LCP array of one text.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SA_PERMUTATION**: `sa` is a bijection on `0..n`
//! 2. **SA_SORTED**: `suffix(sa[k]) < suffix(sa[k + 1])` for every `k`
//! 3. **RANK_INVERSE**: `rank[sa[k]] == k`
//! 4. **LCP_CORRECT**: `lcp[0] == 0` and `lcp[k]` is the common prefix length of
//!    `suffix(sa[k - 1])` and `suffix(sa[k])`
//!
//! ```text
//! text = "abracadabra"
//!
//!  row  sa  lcp  suffix
//!   0   10   0   a
//!   1    7   1   abra
//!   2    0   4   abracadabra
//!   3    3   1   acadabra
//!   4    5   1   adabra
//!   5    8   0   bra
//!   6    1   3   bracadabra
//!   7    4   0   cadabra
//!   8    6   0   dabra
//!   9    9   0   ra
//!  10    2   2   racadabra
//! ```

use crate::alphabet::rank_symbols;
use crate::config::{IndexConfig, SuffixAlgorithm};
use crate::error::Error;
use crate::verify::{self, contracts};
use crate::{doubling, sais};

/// Immutable suffix structures for a fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixIndex {
    sa: Vec<usize>,
    rank: Vec<usize>,
    lcp: Vec<usize>,
}

impl SuffixIndex {
    /// Build with the default configuration.
    pub fn build<T: Ord + Copy>(text: &[T]) -> Result<Self, Error> {
        Self::build_with(text, &IndexConfig::default())
    }

    pub fn build_with<T: Ord + Copy>(text: &[T], config: &IndexConfig) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let ranked = rank_symbols(text);
        let sa = match config.algorithm {
            SuffixAlgorithm::InducedSorting => sais::suffix_array(&ranked),
            SuffixAlgorithm::PrefixDoubling => doubling::suffix_array(&ranked),
        };

        // A broken permutation would make the inverse below index out of range.
        if config.check_contracts {
            verify::validate_permutation(&sa)?;
        }

        let rank = inverse(&sa);
        let lcp = kasai(text, &sa, &rank);
        contracts::check_lcp_bounds(&sa, &lcp);

        let index = Self { sa, rank, lcp };
        if config.check_contracts {
            verify::validate_suffix_index(text, &index)?;
        }
        Ok(index)
    }

    /// Number of suffixes (the text length).
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Row of the suffix starting at `position`.
    #[inline]
    pub fn row_of(&self, position: usize) -> usize {
        self.rank[position]
    }

    /// Starting position of the suffix at `row`.
    #[inline]
    pub fn position_at(&self, row: usize) -> usize {
        self.sa[row]
    }

    /// The suffix at `row`, sliced out of `text`.
    pub fn suffix<'t, T>(&self, text: &'t [T], row: usize) -> &'t [T] {
        &text[self.sa[row]..]
    }
}

/// `rank[sa[k]] = k`.
fn inverse(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; sa.len()];
    for (row, &position) in sa.iter().enumerate() {
        rank[position] = row;
    }
    rank
}

/// Kasai et al. (2001): LCP in O(n) by walking positions in text order.
///
/// Going from position `i` to `i + 1` drops at most one symbol of the common
/// prefix, so `h` only ever shrinks by one between iterations.
fn kasai<T: Eq>(text: &[T], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0; n];
    let mut h = 0usize;

    for i in 0..n {
        let row = rank[i];
        if row == 0 {
            h = 0;
            continue;
        }
        let j = sa[row - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[row] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
