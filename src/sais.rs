// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana" (ranked: b=2, a=1, n=3)
//!
//! Step 1: Append sentinel (0) and classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, rank 0)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) suffixes
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3, 6
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings not unique, recurse on reduced problem
//!
//! Step 5: Use sorted LMS order to induce final suffix array
//!
//! Output: [5, 3, 1, 0, 4, 2]   (sentinel row dropped)
//! ```
//!
//! Every level works on a `usize` alphabet whose last symbol is a unique
//! minimum. The top level gets that from the appended sentinel; a reduced
//! string inherits it because the sentinel's LMS substring is always named 0.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

use crate::alphabet::RankedText;

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Sentinel rank (symbols are ranked from 1).
const SENTINEL: usize = 0;

/// Unfilled suffix array slot.
const EMPTY: usize = usize::MAX;

/// Build the suffix array of a ranked text in O(n) time.
///
/// `sa[k]` is the starting position of the k-th smallest suffix.
pub(crate) fn suffix_array(ranked: &RankedText) -> Vec<usize> {
    let n = ranked.ranks.len();
    if n == 0 {
        return Vec::new();
    }

    let mut text = Vec::with_capacity(n + 1);
    text.extend_from_slice(&ranked.ranks);
    text.push(SENTINEL);

    let sa = sais_inner(&text, ranked.alphabet_size);

    // The sentinel suffix always sorts first; drop its row.
    sa.into_iter().filter(|&pos| pos < n).collect()
}

/// Core SA-IS over a sentinel-terminated integer text.
fn sais_inner(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 1 {
        return vec![0];
    }

    // Step 1: Classify suffixes
    let types = classify_suffixes(text);

    // Step 2: Find LMS positions (the sentinel is always one of them)
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    // Step 3: Bucket sort setup
    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // Step 4: First induced sort, LMS seeded in text order
    let mut sa = vec![EMPTY; n];
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Step 5: Name LMS substrings in sorted order
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![EMPTY; n];

    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;

    // Step 6: Reduced string of LMS names (in text order)
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    // Step 7: Recursively sort if not all unique
    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais_inner(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order = vec![0usize; reduced.len()];
        for (i, &lms_name) in reduced.iter().enumerate() {
            order[lms_name] = i;
        }
        order
    };

    // Step 8: Final induced sort with correctly ordered LMS suffixes
    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    sa.fill(EMPTY);
    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Seed `lms` (in the given order) at bucket tails, then induce L and S types.
fn induce(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();

    // Place LMS suffixes, last first, so the given order survives
    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    // Induce L-type
    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    // Induce S-type
    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    // Last position is always S-type (sentinel)
    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

/// Check if position i is an LMS position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings for equality (symbols and types up to the next LMS).
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }

        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        // After first character, check if both reached next LMS
        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
