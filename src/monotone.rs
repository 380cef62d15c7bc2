//! Compressed non-increasing step function over `[0, N]`.
//!
//! The function is stored as a map from breakpoint to value: the value at
//! `idx` is the value of the largest breakpoint `<= idx`. Values strictly
//! decrease from one breakpoint to the next, so no two adjacent ranges share
//! a value and the map never holds a redundant breakpoint.
//!
//! Raising `f(idx)` to `v` forces every `f(p)` with `p <= idx` up to at least
//! `v`; on a non-increasing function this rewrites exactly one contiguous
//! range `[start, idx]`, which [`MonotoneSequence::set`] returns.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::ops::Range;

use crate::interval::Weight;

#[derive(Clone, Debug)]
pub struct MonotoneSequence {
    /// breakpoint -> value on `[breakpoint, next breakpoint)`
    breakpoints: BTreeMap<usize, Weight>,
    /// Last valid index `N`.
    last: usize,
}

impl MonotoneSequence {
    /// The zero function over `[0, last]`.
    pub fn new(last: usize) -> Self {
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(0, 0);
        Self { breakpoints, last }
    }

    /// Last valid index `N`.
    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of stored ranges.
    #[inline]
    pub fn num_breakpoints(&self) -> usize {
        self.breakpoints.len()
    }

    /// `f(idx)`.
    ///
    /// # Panics
    /// Panics if `idx > N`.
    #[inline]
    pub fn get(&self, idx: usize) -> Weight {
        assert!(idx <= self.last, "index {idx} outside [0, {}]", self.last);
        self.floor(idx).1
    }

    /// Smallest breakpoint strictly greater than `idx`, i.e. the first
    /// position right of `idx` where the value drops.
    #[inline]
    pub fn next_breakpoint(&self, idx: usize) -> Option<usize> {
        self.breakpoints
            .range((Excluded(idx), Unbounded))
            .next()
            .map(|(&k, _)| k)
    }

    /// Raise `f(idx)` to `value`, and with it every position left of `idx`
    /// that sat below `value`.
    ///
    /// Returns the range whose values changed, or `None` if `f(idx)` already
    /// equals `value`.
    ///
    /// # Panics
    /// Panics if `value < f(idx)`: values only ever grow.
    pub fn set(&mut self, idx: usize, value: Weight) -> Option<Range<usize>> {
        let current = self.get(idx);
        assert!(
            value >= current,
            "monotone sequence value at {idx} would drop from {current} to {value}"
        );
        if value == current {
            return None;
        }

        // Positions right of idx keep their old value.
        if idx < self.last {
            self.breakpoints.entry(idx + 1).or_insert(current);
        }

        // Every range touching [.., idx] that sits below `value` is absorbed.
        let absorbed: Vec<usize> = self
            .breakpoints
            .range((Unbounded, Included(idx)))
            .rev()
            .take_while(|&(_, &v)| v < value)
            .map(|(&k, _)| k)
            .collect();
        let start = *absorbed
            .last()
            .expect("the range holding idx sits below the new value");
        for key in &absorbed {
            self.breakpoints.remove(key);
        }

        // Merge into the left neighbour when it already holds `value`.
        let merges_left = start > 0 && self.floor(start - 1).1 == value;
        if !merges_left {
            self.breakpoints.insert(start, value);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(idx, value, start, breakpoints = self.breakpoints.len(), "raised range");

        Some(start..idx + 1)
    }

    /// Stored ranges as `(range, value)`, left to right.
    pub fn ranges(&self) -> impl Iterator<Item = (Range<usize>, Weight)> + '_ {
        let mut iter = self.breakpoints.iter().peekable();
        std::iter::from_fn(move || {
            let (&start, &value) = iter.next()?;
            let end = iter.peek().map_or(self.last + 1, |&(&k, _)| k);
            Some((start..end, value))
        })
    }

    /// Expand into a dense vector of length `N + 1`.
    pub fn to_vec(&self) -> Vec<Weight> {
        let mut out = Vec::with_capacity(self.last + 1);
        for (range, value) in self.ranges() {
            out.extend(range.map(|_| value));
        }
        out
    }

    #[inline]
    fn floor(&self, idx: usize) -> (usize, Weight) {
        self.breakpoints
            .range((Unbounded, Included(idx)))
            .next_back()
            .map(|(&k, &v)| (k, v))
            .expect("breakpoint 0 is always present")
    }
}
