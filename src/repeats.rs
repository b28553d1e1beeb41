// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Right closed repeats, organized for "longest match with rightmost source".
//!
//! A right closed repeat is a maximal run of suffix array rows `[lb, rb)` whose
//! suffixes all share a prefix of length `L`, with `L` the minimum LCP inside
//! the run and strictly larger than the LCP on either border (an LCP interval).
//! Since the run is maximal and `L` is attained inside it, at least two members
//! disagree on symbol `L + 1` or run off the end: the repeat cannot be extended
//! to the right.
//!
//! The intervals nest into a tree. Every row has a deepest enclosing interval,
//! and walking to the parent shortens the shared prefix:
//!
//! ```text
//! text = "abracadabra"
//!
//!  row  sa  lcp
//!   0   10   0  ┐
//!   1    7   1  │ ┐ L=4 "abra"  {7, 0}
//!   2    0   4  │ ┘
//!   3    3   1  │   L=1 "a"     {10, 7, 0, 3, 5}
//!   4    5   1  ┘
//!   5    8   0  ┐   L=3 "bra"   {8, 1}
//!   6    1   3  ┘
//!   7    4   0
//!   8    6   0
//!   9    9   0  ┐   L=2 "ra"    {9, 2}
//!  10    2   2  ┘
//! ```
//!
//! # Query strategy
//!
//! "Does interval I have a member `q` with `floor <= q < p`?" is answered by a
//! range predecessor over the SA values of I's rows. Walking up from the row
//! of `p`, the answer goes from "no" to "yes" exactly once (ancestors contain
//! their children), so binary lifting over parent links finds the deepest
//! "yes" in O(log n) predecessor queries. That interval's `L` is the longest
//! previous factor at `p`, and the predecessor itself is the rightmost source.

use crate::suffix_index::SuffixIndex;
use crate::util::range_pred::RangePredecessor;
use crate::verify::contracts;
use std::ops::Range;

/// One LCP interval of the suffix array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    lcp: usize,
    lb: usize,
    /// Exclusive.
    rb: usize,
    parent: usize,
}

/// A repeated substring that cannot be extended one symbol to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RightClosedRepeat {
    length: usize,
    rows: Range<usize>,
}

impl RightClosedRepeat {
    /// Length of the shared prefix.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Suffix array rows of the members.
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Number of occurrences (always at least two).
    pub fn occurrences(&self) -> usize {
        self.rows.len()
    }

    /// Starting positions of the members, in suffix order.
    pub fn positions<'s>(&self, suffixes: &'s SuffixIndex) -> &'s [usize] {
        &suffixes.suffix_array()[self.rows.clone()]
    }

    /// Starting positions of the members, ascending.
    pub fn sorted_positions(&self, suffixes: &SuffixIndex) -> Vec<usize> {
        let mut positions = self.positions(suffixes).to_vec();
        positions.sort_unstable();
        positions
    }
}

/// The longest right closed repeat at a position that has an admissible
/// earlier member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatMatch {
    repeat: RightClosedRepeat,
    position: usize,
    source: usize,
    floor: usize,
}

impl RepeatMatch {
    /// Length of the match (the longest previous factor at `position`).
    pub fn length(&self) -> usize {
        self.repeat.length
    }

    /// Greatest admissible earlier member.
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distance(&self) -> usize {
        self.position - self.source
    }

    pub fn repeat(&self) -> &RightClosedRepeat {
        &self.repeat
    }

    /// All admissible earlier members, ascending. The last one is `source()`.
    pub fn earlier_positions(&self, suffixes: &SuffixIndex) -> Vec<usize> {
        self.repeat
            .sorted_positions(suffixes)
            .into_iter()
            .filter(|&q| q >= self.floor && q < self.position)
            .collect()
    }
}

/// Queryable set of right closed repeats over a [`SuffixIndex`].
#[derive(Debug, Clone)]
pub struct ClosedRepeatIndex<'a> {
    suffixes: &'a SuffixIndex,
    /// Children before parents; the root (`lcp == 0`, all rows) is last.
    intervals: Vec<Interval>,
    /// Deepest interval containing each suffix array row.
    deepest: Vec<usize>,
    /// `jumps[k][i]` is the `2^k`-th ancestor of interval `i` (the root is its
    /// own parent).
    jumps: Vec<Vec<usize>>,
    sources: RangePredecessor,
}

/// An interval still open on the construction stack.
struct OpenInterval {
    lcp: usize,
    lb: usize,
    children: Vec<usize>,
}

impl<'a> ClosedRepeatIndex<'a> {
    /// Enumerate all LCP intervals bottom-up in one pass over the LCP array.
    pub fn build(suffixes: &'a SuffixIndex) -> Self {
        let n = suffixes.len();
        let lcp = suffixes.lcp();

        let mut intervals: Vec<Interval> = Vec::new();
        let mut children: Vec<Vec<usize>> = Vec::new();
        let mut stack: Vec<OpenInterval> = Vec::new();
        let mut root_children: Vec<usize> = Vec::new();

        for i in 1..=n {
            // A virtual 0 after the last row closes every open interval.
            let h = if i < n { lcp[i] } else { 0 };
            let mut lb = i - 1;
            let mut last: Option<usize> = None;

            while stack.last().is_some_and(|top| top.lcp > h) {
                let Some(open) = stack.pop() else { break };
                let id = intervals.len();
                intervals.push(Interval {
                    lcp: open.lcp,
                    lb: open.lb,
                    rb: i,
                    parent: usize::MAX,
                });
                for &child in &open.children {
                    intervals[child].parent = id;
                }
                children.push(open.children);
                lb = open.lb;

                // Attach to the enclosing interval now unless `h` opens a new
                // one between them.
                last = match stack.last_mut() {
                    Some(top) if h <= top.lcp => {
                        top.children.push(id);
                        None
                    }
                    None if h == 0 => {
                        root_children.push(id);
                        None
                    }
                    _ => Some(id),
                };
            }

            let top_lcp = stack.last().map_or(0, |top| top.lcp);
            if h > top_lcp {
                stack.push(OpenInterval {
                    lcp: h,
                    lb,
                    children: last.into_iter().collect(),
                });
            }
        }

        let root = intervals.len();
        for &child in &root_children {
            intervals[child].parent = root;
        }
        intervals.push(Interval {
            lcp: 0,
            lb: 0,
            rb: n,
            parent: root,
        });
        children.push(root_children);

        let deepest = assign_rows(&intervals, &children, n);
        let jumps = jump_table(&intervals);
        let sources = RangePredecessor::new(suffixes.suffix_array());

        let index = Self {
            suffixes,
            intervals,
            deepest,
            jumps,
            sources,
        };
        index.check_repeats();
        index
    }

    pub fn suffix_index(&self) -> &'a SuffixIndex {
        self.suffixes
    }

    /// Text length.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Number of right closed repeats.
    pub fn repeat_count(&self) -> usize {
        self.intervals.len() - 1
    }

    /// All right closed repeats, innermost first.
    pub fn repeats(&self) -> impl Iterator<Item = RightClosedRepeat> + '_ {
        self.intervals
            .iter()
            .filter(|interval| interval.lcp > 0)
            .map(to_repeat)
    }

    /// Right closed repeats that contain `position`, longest first.
    pub fn repeats_at(&self, position: usize) -> Vec<RightClosedRepeat> {
        let mut chain = Vec::new();
        if position >= self.len() {
            return chain;
        }
        let mut id = self.deepest[self.suffixes.row_of(position)];
        while self.intervals[id].lcp > 0 {
            chain.push(to_repeat(&self.intervals[id]));
            id = self.intervals[id].parent;
        }
        chain
    }

    /// Longest right closed repeat containing `position` that also contains
    /// some member `q` with `floor <= q < position`, plus the greatest such `q`.
    pub fn longest_match(&self, position: usize, floor: usize) -> Option<RepeatMatch> {
        if position >= self.len() || floor >= position {
            return None;
        }
        let root = self.intervals.len() - 1;
        let mut id = self.deepest[self.suffixes.row_of(position)];

        if self.earlier_member(id, position, floor).is_none() {
            // Climb to the highest non-root ancestor that still has no
            // admissible member; its parent is the answer.
            for level in (0..self.jumps.len()).rev() {
                let up = self.jumps[level][id];
                if up != root && self.earlier_member(up, position, floor).is_none() {
                    id = up;
                }
            }
            id = self.intervals[id].parent;
        }

        let source = self.earlier_member(id, position, floor)?;
        Some(RepeatMatch {
            repeat: to_repeat(&self.intervals[id]),
            position,
            source,
            floor,
        })
    }

    /// Admissible earlier members of the longest match at `position`, ascending.
    pub fn earlier_positions(&self, position: usize, floor: usize) -> Vec<usize> {
        self.longest_match(position, floor)
            .map(|found| found.earlier_positions(self.suffixes))
            .unwrap_or_default()
    }

    /// Greatest `q` with `floor <= q < position` sharing at least `min_len`
    /// symbols with `position`.
    ///
    /// Used when a match is clipped by the end of the query: a shorter prefix
    /// may have a closer source than the full match does.
    pub fn rightmost_source(&self, position: usize, min_len: usize, floor: usize) -> Option<usize> {
        if position >= self.len() || floor >= position {
            return None;
        }
        let min_len = min_len.max(1);
        let mut id = self.deepest[self.suffixes.row_of(position)];
        if self.intervals[id].lcp < min_len {
            return None;
        }
        // Widest interval whose members all share min_len symbols with position.
        for level in (0..self.jumps.len()).rev() {
            let up = self.jumps[level][id];
            if self.intervals[up].lcp >= min_len {
                id = up;
            }
        }
        self.earlier_member(id, position, floor)
    }

    /// Greatest admissible member of a repeat interval; the root never counts.
    fn earlier_member(&self, id: usize, position: usize, floor: usize) -> Option<usize> {
        let interval = &self.intervals[id];
        if interval.lcp == 0 {
            return None;
        }
        self.sources
            .predecessor(interval.lb..interval.rb, position, floor)
    }

    fn check_repeats(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for interval in &self.intervals {
            if interval.lcp > 0 {
                contracts::check_interval_closed(
                    self.suffixes.lcp(),
                    interval.lb..interval.rb,
                    interval.lcp,
                );
            }
        }
    }
}

fn to_repeat(interval: &Interval) -> RightClosedRepeat {
    RightClosedRepeat {
        length: interval.lcp,
        rows: interval.lb..interval.rb,
    }
}

/// Deepest interval per row: rows an interval covers that none of its child
/// intervals cover.
fn assign_rows(intervals: &[Interval], children: &[Vec<usize>], n: usize) -> Vec<usize> {
    let mut deepest = vec![intervals.len() - 1; n];
    for (id, interval) in intervals.iter().enumerate() {
        let mut row = interval.lb;
        for &child in &children[id] {
            for slot in &mut deepest[row..intervals[child].lb] {
                *slot = id;
            }
            row = intervals[child].rb;
        }
        for slot in &mut deepest[row..interval.rb] {
            *slot = id;
        }
    }
    deepest
}

fn jump_table(intervals: &[Interval]) -> Vec<Vec<usize>> {
    let count = intervals.len();
    let levels = (usize::BITS - count.leading_zeros()).max(1) as usize;
    let mut jumps = Vec::with_capacity(levels);
    jumps.push(intervals.iter().map(|interval| interval.parent).collect::<Vec<_>>());
    for level in 1..levels {
        let prev = &jumps[level - 1];
        let next: Vec<usize> = (0..count).map(|i| prev[prev[i]]).collect();
        jumps.push(next);
    }
    jumps
}
