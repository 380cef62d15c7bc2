//! Quadratic two-pass baseline.
//!
//! For every interval, in order of right endpoint, a leftward pass over its
//! interior computes the best packing nested inside it (`CMIS`); a final
//! leftward pass over `[0, 2n)` computes `MIS`. Each pass is O(n), giving
//! O(n²) overall regardless of the answer. There is no abort path, so this
//! engine is the unconditional fallback.

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::traits::MisEngine;
use crate::witness::{expected_size, DenseSuccessors, WitnessStore};

/// Valiente's two-pass engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Valiente;

impl Valiente {
    pub fn new() -> Self {
        Self
    }

    /// Compute an optimal independent set, sorted by left endpoint.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, model), fields(n = model.len()))
    )]
    pub fn compute_mis(&self, model: &IntervalModel) -> Vec<Interval> {
        let positions = model.num_endpoints();
        let mut mis: Vec<Weight> = vec![0; positions + 1];
        let mut cmis: Vec<Weight> = vec![0; model.len()];
        let mut successors = DenseSuccessors::new(positions + 1);
        let mut witness = WitnessStore::new(model.len());

        for t in 0..positions {
            let Some(w) = model.interval_by_right(t) else {
                continue;
            };
            fill_leftward(model, &cmis, &mut mis, &mut successors, w.left() + 1, t);
            witness.assemble_contained_independent_set(model, w, &successors);
            cmis[w.index()] = w.weight() + mis[w.left() + 1];
        }
        fill_leftward(model, &cmis, &mut mis, &mut successors, 0, positions);

        let chosen =
            witness.build_independent_set(model, &successors, expected_size(model, mis[0]));
        debug_assert_eq!(crate::utils::total_weight(&chosen), mis[0]);
        chosen
    }
}

/// Best packings of `[p, hi)` for every `p` in `[lo, hi)`, using only
/// intervals that end before `hi`.
fn fill_leftward(
    model: &IntervalModel,
    cmis: &[Weight],
    mis: &mut [Weight],
    successors: &mut DenseSuccessors,
    lo: usize,
    hi: usize,
) {
    mis[hi] = 0;
    successors.set(hi, None);
    for p in (lo..hi).rev() {
        mis[p] = mis[p + 1];
        successors.inherit(p, p + 1);
        let Some(j) = model.interval_by_left(p) else {
            continue;
        };
        if j.right() >= hi {
            continue;
        }
        let candidate = cmis[j.index()] + mis[j.right() + 1];
        if candidate > mis[p] {
            mis[p] = candidate;
            successors.set(p, Some(j.index()));
        }
    }
}

impl MisEngine for Valiente {
    fn name(&self) -> &'static str {
        "valiente"
    }

    /// Never aborts; the bound is ignored.
    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        _max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>> {
        Some(self.compute_mis(model))
    }
}
