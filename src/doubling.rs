// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix doubling suffix array construction.
//!
//! Sort suffixes by their first `k` symbols, then by the first `2k` using the
//! pair `(rank[i], rank[i + k])`, until every rank is distinct. A suffix that
//! runs out of symbols gets `0` for its second key, which sorts it before any
//! longer suffix with the same prefix.
//!
//! O(n log² n) with a comparison sort. Slower than SA-IS but short enough to
//! check by eye, which makes it a useful second opinion.

use crate::alphabet::RankedText;

pub(crate) fn suffix_array(ranked: &RankedText) -> Vec<usize> {
    let n = ranked.ranks.len();
    if n == 0 {
        return Vec::new();
    }

    let mut rank = ranked.ranks.clone();
    let mut next = vec![0usize; n];
    let mut sa: Vec<usize> = (0..n).collect();
    let mut k = 1;

    loop {
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

        sa.sort_unstable_by_key(|&i| key(i));

        next[sa[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(sa[w - 1]) != key(sa[w]));
            next[sa[w]] = next[sa[w - 1]] + bump;
        }

        std::mem::swap(&mut rank, &mut next);
        if rank[sa[n - 1]] == n - 1 {
            break;
        }
        k <<= 1;
    }

    sa
}
