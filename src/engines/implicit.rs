//! Output-sensitive propagation over a [`MonotoneSequence`].
//!
//! Same recurrence as [`OutputSensitive`](super::OutputSensitive), but `MIS`
//! is never materialized. Raising `MIS[left(w)]` rewrites one compressed
//! range `[start, end)` in O(log n), instead of walking the raise leftwards
//! one position at a time. The only per-position work left is re-offering
//! the intervals whose chains continue inside the raised range, found by
//! walking predecessor queries right-to-left until they fall below it.
//!
//! No successor array is kept either: where `MIS` drops from one breakpoint
//! to the next, the interval starting just before the drop is the one that
//! earns the difference, so successors are read off the breakpoints.

use std::ops::Range;

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::monotone::MonotoneSequence;
use crate::traits::MisEngine;
use crate::witness::{expected_size, Successors, WitnessStore};

/// MonotoneSequence-based output-sensitive engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Implicit;

/// Successors derived from the breakpoints of `MIS`.
struct BreakpointSuccessors<'a> {
    mis: &'a MonotoneSequence,
}

impl Successors for BreakpointSuccessors<'_> {
    fn successor(&self, model: &IntervalModel, p: usize) -> Option<usize> {
        if p > self.mis.last() || self.mis.get(p) == 0 {
            return None;
        }
        let drop = self.mis.next_breakpoint(p)?;
        let earner = model
            .interval_by_left(drop - 1)
            .expect("MIS only drops right after a left endpoint");
        Some(earner.index())
    }
}

struct Scan<'m> {
    model: &'m IntervalModel,
    bound: Weight,
    mis: MonotoneSequence,
    cmis: Vec<Weight>,
    witness: WitnessStore,
    pending: Vec<Range<usize>>,
}

struct Exceeded;

impl<'m> Scan<'m> {
    fn new(model: &'m IntervalModel, bound: Weight) -> Self {
        Self {
            model,
            bound,
            mis: MonotoneSequence::new(model.num_endpoints()),
            cmis: vec![0; model.len()],
            witness: WitnessStore::new(model.len()),
            pending: Vec::new(),
        }
    }

    #[inline]
    fn offer(&mut self, interval: &Interval, candidate: Weight) -> Result<(), Exceeded> {
        if candidate > self.bound {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                position = interval.left(),
                candidate,
                bound = self.bound,
                "candidate exceeds bound; aborting"
            );
            return Err(Exceeded);
        }
        if candidate > self.mis.get(interval.left()) {
            if let Some(raised) = self.mis.set(interval.left(), candidate) {
                self.pending.push(raised);
            }
        }
        Ok(())
    }

    fn complete(&mut self, w: &Interval) -> Result<(), Exceeded> {
        let successors = BreakpointSuccessors { mis: &self.mis };
        self.witness
            .assemble_contained_independent_set(self.model, w, &successors);
        let cmis = w.weight() + self.mis.get(w.left() + 1);
        self.cmis[w.index()] = cmis;
        self.offer(w, cmis)?;

        while let Some(raised) = self.pending.pop() {
            // Intervals j with right(j) + 1 inside the raised range.
            let mut cursor = raised.end - 1;
            while let Some(j) = self.model.predecessor(cursor) {
                if j.right() + 1 < raised.start {
                    break;
                }
                let candidate = self.cmis[j.index()] + self.mis.get(j.right() + 1);
                self.offer(j, candidate)?;
                cursor = j.right();
            }
        }
        Ok(())
    }
}

impl Implicit {
    pub fn new() -> Self {
        Self
    }
}

impl MisEngine for Implicit {
    fn name(&self) -> &'static str {
        "implicit"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, model), fields(n = model.len()))
    )]
    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>> {
        let mut scan = Scan::new(model, max_allowed_weight);
        for t in 0..model.num_endpoints() {
            let Some(w) = model.interval_by_right(t) else {
                continue;
            };
            scan.complete(w).ok()?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(breakpoints = scan.mis.num_breakpoints(), "scan finished");

        let successors = BreakpointSuccessors { mis: &scan.mis };
        let optimum = scan.mis.get(0);
        let chosen = scan
            .witness
            .build_independent_set(model, &successors, expected_size(model, optimum));
        debug_assert_eq!(crate::utils::total_weight(&chosen), optimum);
        Some(chosen)
    }
}
