//! Construction-time validation errors.
//!
//! Only malformed input is an error. Exceeding a weight bound during a scan
//! is reported as `None` by [`MisEngine::try_compute_mis`](crate::traits::MisEngine::try_compute_mis),
//! and broken internal invariants panic.

use thiserror::Error;

use crate::interval::Weight;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("interval {index} has left endpoint {left} not strictly below right endpoint {right}")]
    InvertedInterval {
        index: usize,
        left: usize,
        right: usize,
    },

    #[error("endpoint {endpoint} is outside [0, {limit})")]
    EndpointOutOfRange { endpoint: usize, limit: usize },

    #[error("endpoint {endpoint} is used more than once")]
    DuplicateEndpoint { endpoint: usize },

    #[error("interval index {index} is outside [0, {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("interval index {index} is used more than once")]
    DuplicateIndex { index: usize },

    #[error("total weight overflows {max}", max = Weight::MAX)]
    WeightOverflow,
}
