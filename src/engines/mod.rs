//! MWIS engines.
//!
//! All engines share the [`MisEngine`] contract and the same recurrence:
//! - [`valiente`]         : quadratic two-pass baseline, never aborts.
//! - [`output_sensitive`] : worklist propagation over a dense `MIS` array.
//! - [`implicit`]         : range propagation over a [`MonotoneSequence`](crate::monotone::MonotoneSequence).
//!
//! [`Strategy`] selects one of them at runtime.

pub mod implicit;
pub mod output_sensitive;
pub mod valiente;

pub use self::implicit::Implicit;
pub use self::output_sensitive::OutputSensitive;
pub use self::valiente::Valiente;

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::traits::MisEngine;

/// Runtime choice of engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Array-based output-sensitive propagation.
    #[default]
    OutputSensitive,
    /// MonotoneSequence-based output-sensitive propagation; pays off when
    /// the optimum is large relative to n.
    Implicit,
    /// Quadratic baseline.
    Valiente,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::OutputSensitive,
        Strategy::Implicit,
        Strategy::Valiente,
    ];
}

impl MisEngine for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::OutputSensitive => OutputSensitive.name(),
            Strategy::Implicit => Implicit.name(),
            Strategy::Valiente => Valiente.name(),
        }
    }

    fn try_compute_mis(
        &self,
        model: &IntervalModel,
        max_allowed_weight: Weight,
    ) -> Option<Vec<Interval>> {
        match self {
            Strategy::OutputSensitive => OutputSensitive.try_compute_mis(model, max_allowed_weight),
            Strategy::Implicit => Implicit.try_compute_mis(model, max_allowed_weight),
            Strategy::Valiente => Valiente.try_compute_mis(model, max_allowed_weight),
        }
    }
}
