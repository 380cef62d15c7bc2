//! Output-sensitive first, quadratic fallback second.
//!
//! The output-sensitive engines cost O(n·α), which only beats the O(n²)
//! baseline while the optimum `α` stays small. [`Switching`] caps the
//! primary engine with a weight bound; if the primary aborts, the answer is
//! recomputed by [`Valiente`]. The bound only steers work and never affects
//! the result.

use crate::engines::{Strategy, Valiente};
use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::traits::MisEngine;
use crate::utils::{default_bound, total_weight};

/// Switching MWIS solver.
///
/// Typical usage:
/// ```
/// use circle_mis::{IntervalModel, Switching};
///
/// let model = IntervalModel::unweighted(&[(0, 5), (1, 4), (2, 3)]).unwrap();
/// let (weight, chosen) = Switching::new().run(&model);
/// assert_eq!(weight, 3);
/// assert_eq!(chosen.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Switching {
    primary: Strategy,
    bound: Option<Weight>,
}

impl Switching {
    /// Output-sensitive primary with the density-derived bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit primary strategy and optional fixed bound.
    pub fn with_config(primary: Strategy, bound: Option<Weight>) -> Self {
        Self { primary, bound }
    }

    pub fn primary(&self) -> Strategy {
        self.primary
    }

    /// Fixed bound, or `None` when derived per model.
    pub fn bound(&self) -> Option<Weight> {
        self.bound
    }

    /// Bound applied to `model`.
    pub fn bound_for(&self, model: &IntervalModel) -> Weight {
        self.bound.unwrap_or_else(|| default_bound(model))
    }

    /// Compute an optimal independent set, sorted by left endpoint.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, model), fields(n = model.len(), primary = self.primary.name()))
    )]
    pub fn compute_mis(&self, model: &IntervalModel) -> Vec<Interval> {
        let bound = self.bound_for(model);
        if let Some(chosen) = self.primary.try_compute_mis(model, bound) {
            return chosen;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(bound, "primary engine exceeded bound; falling back to valiente");

        Valiente.compute_mis(model)
    }

    /// Run the solver, returning `(optimal_weight, chosen_intervals)`.
    pub fn run(&self, model: &IntervalModel) -> (Weight, Vec<Interval>) {
        let chosen = self.compute_mis(model);
        (total_weight(&chosen), chosen)
    }
}

impl MisEngine for Switching {
    fn name(&self) -> &'static str {
        "switching"
    }

    /// Never aborts: the supplied bound replaces the configured one for the
    /// primary engine, and exceeding it triggers the fallback.
    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>> {
        Some(Switching::with_config(self.primary, Some(max_allowed_weight)).compute_mis(model))
    }
}
