//! Interval model of a circle graph.
//!
//! A model over `n` intervals uses each endpoint position in `[0, 2n)` exactly
//! once, so every position is either the left or the right endpoint of a
//! single interval. Lookups by endpoint and by index are O(1); predecessor
//! queries over right endpoints are O(log n).

use crate::errors::ValidationError;
use crate::interval::{Interval, Weight};

/// Role of an endpoint position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Left endpoint of the interval with this index.
    Left(usize),
    /// Right endpoint of the interval with this index.
    Right(usize),
}

/// Validated, immutable interval model.
#[derive(Clone, Debug)]
pub struct IntervalModel {
    /// Intervals ordered by index.
    intervals: Vec<Interval>,
    /// `endpoints[p]` names the interval owning position `p`.
    endpoints: Vec<Endpoint>,
    /// Right endpoint positions, ascending.
    rights: Vec<usize>,
    total_weight: Weight,
}

impl IntervalModel {
    /// Build a model from intervals whose endpoints are a permutation of
    /// `[0, 2n)` and whose indices are a permutation of `[0, n)`.
    pub fn new(intervals: Vec<Interval>) -> Result<Self, ValidationError> {
        let n = intervals.len();
        let limit = 2 * n;

        let mut by_index: Vec<Option<Interval>> = vec![None; n];
        for interval in &intervals {
            let index = interval.index();
            let slot = by_index
                .get_mut(index)
                .ok_or(ValidationError::IndexOutOfRange { index, count: n })?;
            if slot.is_some() {
                return Err(ValidationError::DuplicateIndex { index });
            }
            *slot = Some(*interval);
        }

        let mut slots: Vec<Option<Endpoint>> = vec![None; limit];
        let mut total_weight: Weight = 0;
        for interval in &intervals {
            for (endpoint, role) in [
                (interval.left(), Endpoint::Left(interval.index())),
                (interval.right(), Endpoint::Right(interval.index())),
            ] {
                let slot = slots
                    .get_mut(endpoint)
                    .ok_or(ValidationError::EndpointOutOfRange { endpoint, limit })?;
                if slot.is_some() {
                    return Err(ValidationError::DuplicateEndpoint { endpoint });
                }
                *slot = Some(role);
            }
            total_weight = total_weight
                .checked_add(interval.weight())
                .ok_or(ValidationError::WeightOverflow)?;
        }

        // 2n distinct positions inside [0, 2n) leave no gaps, and n distinct
        // indices inside [0, n) leave no holes.
        let endpoints: Vec<Endpoint> = slots.into_iter().flatten().collect();
        let intervals: Vec<Interval> = by_index.into_iter().flatten().collect();
        debug_assert_eq!(endpoints.len(), limit);
        debug_assert_eq!(intervals.len(), n);

        let rights = endpoints
            .iter()
            .enumerate()
            .filter_map(|(p, e)| matches!(e, Endpoint::Right(_)).then_some(p))
            .collect();

        Ok(Self {
            intervals,
            endpoints,
            rights,
            total_weight,
        })
    }

    /// Build a model from `(left, right, weight)` triples, numbering the
    /// intervals in the order given.
    pub fn from_endpoints(triples: &[(usize, usize, Weight)]) -> Result<Self, ValidationError> {
        let intervals = triples
            .iter()
            .enumerate()
            .map(|(index, &(left, right, weight))| Interval::new(left, right, index, weight))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(intervals)
    }

    /// Like [`from_endpoints`](Self::from_endpoints) with every weight 1.
    pub fn unweighted(pairs: &[(usize, usize)]) -> Result<Self, ValidationError> {
        let triples: Vec<_> = pairs.iter().map(|&(l, r)| (l, r, 1)).collect();
        Self::from_endpoints(&triples)
    }

    /// Number of intervals `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of endpoint positions, `2n`.
    #[inline]
    pub fn num_endpoints(&self) -> usize {
        self.endpoints.len()
    }

    /// All intervals, ordered by index.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Interval by index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn interval(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }

    /// Role of position `p`, or `None` past the last endpoint.
    #[inline]
    pub fn endpoint(&self, p: usize) -> Option<Endpoint> {
        self.endpoints.get(p).copied()
    }

    /// Interval whose left endpoint is `p`.
    #[inline]
    pub fn interval_by_left(&self, p: usize) -> Option<&Interval> {
        match self.endpoint(p)? {
            Endpoint::Left(index) => Some(&self.intervals[index]),
            Endpoint::Right(_) => None,
        }
    }

    /// Interval whose right endpoint is `p`.
    #[inline]
    pub fn interval_by_right(&self, p: usize) -> Option<&Interval> {
        match self.endpoint(p)? {
            Endpoint::Right(index) => Some(&self.intervals[index]),
            Endpoint::Left(_) => None,
        }
    }

    /// Interval with the largest right endpoint strictly less than `x`.
    pub fn predecessor(&self, x: usize) -> Option<&Interval> {
        let below = self.rights.partition_point(|&r| r < x);
        let p = *self.rights.get(below.checked_sub(1)?)?;
        self.interval_by_right(p)
    }

    /// Maximum number of intervals open at once in a left-to-right sweep.
    pub fn density(&self) -> usize {
        let mut open = 0usize;
        let mut peak = 0usize;
        for endpoint in &self.endpoints {
            match endpoint {
                Endpoint::Left(_) => {
                    open += 1;
                    peak = peak.max(open);
                }
                Endpoint::Right(_) => open -= 1,
            }
        }
        peak
    }

    pub fn max_weight(&self) -> Weight {
        self.intervals.iter().map(Interval::weight).max().unwrap_or(0)
    }

    /// Sum of all weights; guaranteed not to overflow.
    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}
