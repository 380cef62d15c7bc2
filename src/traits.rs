//! Core trait definitions shared by every MWIS engine.
//!
//! All engines implement the same left-to-right recurrence over endpoint
//! positions `p = 0 .. 2n`:
//! - `MIS[p]` is the best weight using only intervals inside `[p, 2n)`;
//! - `CMIS[i] = weight(i) + MIS[left(i) + 1]`, fixed when `right(i)` is
//!   scanned, is the best weight of `i` together with what nests inside it.
//!
//! They differ only in how changes to `MIS` are propagated.

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;

/// A maximum-weight independent set algorithm over interval models.
pub trait MisEngine {
    /// Short, stable name used in logs and benchmark labels.
    fn name(&self) -> &'static str;

    /// Compute an optimal independent set, sorted by left endpoint.
    ///
    /// Returns `None` iff some partial DP value would exceed
    /// `max_allowed_weight`. This is an early-abort signal for callers that
    /// want to bound work and retry elsewhere, not a failure. Engines without
    /// an abort path always return `Some`.
    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>>;
}

/// Caller-supplied trace sink for the array-based engine.
///
/// Invoked once per interval, after the propagation triggered by its right
/// endpoint has drained. `mis` is the full DP array at that moment.
pub trait ScanObserver {
    fn interval_completed(&mut self, interval: &Interval, mis: &[Weight]) {
        let _ = (interval, mis);
    }
}

/// No-op observer.
impl ScanObserver for () {}
