//! Maximum-weight independent sets in circle graphs (circle-mis)
//!
//! A circle graph is given implicitly by an *interval model*: each vertex is
//! a chord of a circle, cut open into an interval over `2n` distinct integer
//! endpoints, and two vertices are adjacent iff their chords cross. An
//! independent set is therefore a laminar family of intervals: any two are
//! disjoint or nested.
//!
//! ## Core idea
//! 1. Scan endpoint positions left to right, keeping `MIS[p]`, the best
//!    weight achievable inside `[p, 2n)` among the intervals seen so far.
//! 2. When an interval closes, raise `MIS` at its left endpoint and push the
//!    change leftwards *only as far as it improves anything*, so total work
//!    is bounded by the optimum `α` instead of by `n²`.
//! 3. Snapshot, per interval, the chosen intervals nested directly inside it,
//!    so the final answer is rebuilt in time proportional to its size.
//!
//! ## Quick start
//! ```
//! use circle_mis::{IntervalModel, Switching};
//!
//! // [0,5] ⊃ [1,4] ⊃ [2,3]: nested chords never cross
//! let model = IntervalModel::unweighted(&[(0, 5), (1, 4), (2, 3)]).unwrap();
//! let (weight, chosen) = Switching::new().run(&model);
//! assert_eq!(weight, 3);
//! assert_eq!(chosen.len(), 3);
//! ```
//!
//! ## Engines
//! The `engines` module holds three implementations of [`MisEngine`]:
//! - [`Valiente`]        : quadratic two-pass baseline, never aborts.
//! - [`OutputSensitive`] : dense array with worklist propagation.
//! - [`Implicit`]        : [`MonotoneSequence`]-backed range propagation.
//!
//! [`Switching`] runs an output-sensitive engine under a weight bound and
//! falls back to [`Valiente`] when the bound is exceeded.

pub mod builder;
pub mod engines;
pub mod errors;
pub mod interval;
pub mod model;
pub mod monotone;
pub mod switching;
pub mod traits;
pub mod utils;
pub mod witness;

pub use crate::builder::SwitchingBuilder;
pub use crate::engines::{Implicit, OutputSensitive, Strategy, Valiente};
pub use crate::errors::ValidationError;
pub use crate::interval::{Interval, Weight};
pub use crate::model::IntervalModel;
pub use crate::monotone::MonotoneSequence;
pub use crate::switching::Switching;
pub use crate::traits::{MisEngine, ScanObserver};

/// Output-sensitive MWIS under a weight bound.
///
/// Returns `None` iff some partial DP value would exceed
/// `max_allowed_weight`; retry with [`compute_mis`] or a larger bound.
///
/// ```
/// use circle_mis::{try_compute_mis, IntervalModel};
///
/// let model = IntervalModel::unweighted(&[(0, 1), (2, 3), (4, 5)]).unwrap();
/// assert!(try_compute_mis(&model, 2).is_none());
/// assert_eq!(try_compute_mis(&model, 3).map(|s| s.len()), Some(3));
/// ```
pub fn try_compute_mis(model: &IntervalModel, max_allowed_weight: Weight) -> Option<Vec<Interval>> {
    OutputSensitive.try_compute_mis(model, max_allowed_weight)
}

/// Unconditional MWIS via the quadratic baseline.
pub fn compute_mis(model: &IntervalModel) -> Vec<Interval> {
    Valiente.compute_mis(model)
}
