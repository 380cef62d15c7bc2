//! Output-sensitive propagation over a dense `MIS` array.
//!
//! Each completed interval raises `MIS` at its left endpoint at most once,
//! and every raise is pushed leftwards only while it actually improves a
//! position. Every push strictly increases an entry that is bounded by the
//! optimum `α`, so the whole scan performs O(n·α) pushes instead of the
//! Θ(n²) recomputation of the two-pass baseline.

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::traits::{MisEngine, ScanObserver};
use crate::witness::{expected_size, DenseSuccessors, WitnessStore};

/// Array-based output-sensitive engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputSensitive;

/// Per-call DP state.
struct Scan<'m> {
    model: &'m IntervalModel,
    bound: Weight,
    mis: Vec<Weight>,
    cmis: Vec<Weight>,
    successors: DenseSuccessors,
    witness: WitnessStore,
    worklist: Vec<usize>,
}

/// A partial DP value went over the bound.
struct Exceeded;

impl<'m> Scan<'m> {
    fn new(model: &'m IntervalModel, bound: Weight) -> Self {
        let positions = model.num_endpoints() + 1;
        Self {
            model,
            bound,
            mis: vec![0; positions],
            cmis: vec![0; model.len()],
            successors: DenseSuccessors::new(positions),
            witness: WitnessStore::new(model.len()),
            worklist: Vec::new(),
        }
    }

    /// Offer `candidate` as the value at `left(interval)`.
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
        let p = interval.left();
        if candidate > self.mis[p] {
            self.mis[p] = candidate;
            self.successors.set(p, Some(interval.index()));
            self.worklist.push(p);
        }
        Ok(())
    }

    fn complete(&mut self, w: &Interval) -> Result<(), Exceeded> {
        self.witness
            .assemble_contained_independent_set(self.model, w, &self.successors);
        let cmis = w.weight() + self.mis[w.left() + 1];
        self.cmis[w.index()] = cmis;
        // Nothing right of `w` has been scanned yet, so its chain ends here.
        self.offer(w, cmis)?;

        while let Some(q) = self.worklist.pop() {
            let Some(prev) = q.checked_sub(1) else {
                continue;
            };
            if self.mis[q] > self.mis[prev] {
                self.mis[prev] = self.mis[q];
                self.successors.inherit(prev, q);
                self.worklist.push(prev);
            }
            // An interval ending just before `q` can now be followed by a
            // better chain.
            if let Some(j) = self.model.interval_by_right(prev) {
                let candidate = self.cmis[j.index()] + self.mis[q];
                self.offer(j, candidate)?;
            }
        }
        Ok(())
    }
}

impl OutputSensitive {
    pub fn new() -> Self {
        Self
    }

    /// [`MisEngine::try_compute_mis`] with a trace sink that sees the full
    /// `MIS` array after every completed interval.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, model, observer), fields(n = model.len()))
    )]
    pub fn try_compute_mis_observed<O: ScanObserver>(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
        observer: &mut O,
    ) -> Option<Vec<Interval>> {
        let mut scan = Scan::new(model, max_allowed_weight);
        for t in 0..model.num_endpoints() {
            let Some(w) = model.interval_by_right(t) else {
                continue;
            };
            scan.complete(w).ok()?;
            observer.interval_completed(w, &scan.mis);
        }

        let chosen = scan.witness.build_independent_set(
            model,
            &scan.successors,
            expected_size(model, scan.mis[0]),
        );
        debug_assert_eq!(crate::utils::total_weight(&chosen), scan.mis[0]);
        Some(chosen)
    }
}

impl MisEngine for OutputSensitive {
    fn name(&self) -> &'static str {
        "output-sensitive"
    }

    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>> {
        self.try_compute_mis_observed(model, max_allowed_weight, &mut ())
    }
}
