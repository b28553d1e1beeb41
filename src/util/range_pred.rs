// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range predecessor queries over a fixed array (merge sort tree).
//!
//! Answers "largest value `< bound` among `values[lo..hi]`" in O(log² n).
//! Level `k` stores the array with every aligned block of `2^k` entries
//! sorted, so a query range splits into O(log n) aligned blocks, each searched
//! with one binary search.
//!
//! ```text
//! values   7 2 9 4 0 5 1 8
//! level 0  7|2|9|4|0|5|1|8
//! level 1  2 7|4 9|0 5|1 8
//! level 2  2 4 7 9|0 1 5 8
//! level 3  0 1 2 4 5 7 8 9
//! ```
//!
//! Space is O(n log n). Over a suffix array this finds the rightmost earlier
//! occurrence among a contiguous run of suffix rows.

use std::ops::Range;

#[derive(Debug, Clone)]
pub struct RangePredecessor {
    /// `levels[k]` has each block `[b * 2^k, (b + 1) * 2^k)` sorted ascending.
    levels: Vec<Vec<usize>>,
}

impl RangePredecessor {
    pub fn new(values: &[usize]) -> Self {
        let n = values.len();
        let mut levels = vec![values.to_vec()];
        let mut width = 1;

        while width < n {
            let prev = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(n);
            for block in prev.chunks(2 * width) {
                let (left, right) = block.split_at(width.min(block.len()));
                merge_into(left, right, &mut next);
            }
            levels.push(next);
            width <<= 1;
        }

        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    /// Largest `values[i]` with `i` in `rows` and `floor <= values[i] < bound`.
    pub fn predecessor(&self, rows: Range<usize>, bound: usize, floor: usize) -> Option<usize> {
        let (mut lo, mut hi) = (rows.start, rows.end.min(self.len()));
        let mut level = 0;
        let mut best: Option<usize> = None;

        while lo < hi {
            if lo & 1 == 1 {
                best = best.max(self.block_predecessor(level, lo, bound));
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                best = best.max(self.block_predecessor(level, hi, bound));
            }
            lo >>= 1;
            hi >>= 1;
            level += 1;
        }

        best.filter(|&value| value >= floor)
    }

    /// Largest value `< bound` in aligned block `block` of `level`.
    fn block_predecessor(&self, level: usize, block: usize, bound: usize) -> Option<usize> {
        let values = &self.levels[level];
        let start = block << level;
        let end = (start + (1 << level)).min(values.len());
        let sorted = &values[start..end];
        let below = sorted.partition_point(|&value| value < bound);
        below.checked_sub(1).map(|i| sorted[i])
    }
}

fn merge_into(left: &[usize], right: &[usize], out: &mut Vec<usize>) {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
