//! Assorted utilities and helpers.

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;

/// Default abort bound for the output-sensitive engines: the model's density
/// scaled by its heaviest weight.
///
/// This is a work cap, not an upper bound on the optimum. When the optimum
/// exceeds it the engine aborts and [`Switching`](crate::switching::Switching)
/// falls back to the quadratic engine.
#[inline]
pub fn default_bound(model: &IntervalModel) -> Weight {
    (model.density() as Weight).saturating_mul(model.max_weight())
}

/// Sum of the weights of `intervals`.
#[inline]
pub fn total_weight(intervals: &[Interval]) -> Weight {
    intervals.iter().map(Interval::weight).sum()
}

/// True if no two of `intervals` cross.
///
/// Runs in O(k log k): after sorting by left endpoint, a laminar family can
/// be checked with a stack of still-open intervals.
pub fn is_independent(intervals: &[Interval]) -> bool {
    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_unstable_by_key(|iv| iv.left());

    let mut open: Vec<&Interval> = Vec::new();
    for iv in sorted {
        while open.last().is_some_and(|top| top.is_disjoint(iv)) {
            open.pop();
        }
        if open.last().is_some_and(|top| !top.contains(iv)) {
            return false;
        }
        open.push(iv);
    }
    true
}
