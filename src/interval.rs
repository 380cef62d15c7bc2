//! Chords of a circle, cut open into intervals over integer endpoints.
//!
//! Two intervals are adjacent in the circle graph exactly when their chords
//! cross, i.e. when they overlap without one containing the other. Nested and
//! disjoint intervals are compatible.

use crate::errors::ValidationError;

/// Vertex weight and DP value type.
pub type Weight = u64;

/// An immutable interval `[left, right]` standing for one chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    left: usize,
    right: usize,
    index: usize,
    weight: Weight,
}

impl Interval {
    /// Create an interval; fails unless `left < right`.
    pub fn new(left: usize, right: usize, index: usize, weight: Weight) -> Result<Self, ValidationError> {
        if left >= right {
            return Err(ValidationError::InvertedInterval { index, left, right });
        }
        Ok(Self {
            left,
            right,
            index,
            weight,
        })
    }

    #[inline]
    pub fn left(&self) -> usize {
        self.left
    }

    #[inline]
    pub fn right(&self) -> usize {
        self.right
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// True if the chords cross: the intervals share some but not all of
    /// their span.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        (self.left < other.left && other.left < self.right && self.right < other.right)
            || (other.left < self.left && self.left < other.right && other.right < self.right)
    }

    /// True if `other` lies strictly inside `self`.
    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.left < other.left && other.right < self.right
    }

    #[inline]
    pub fn is_disjoint(&self, other: &Interval) -> bool {
        self.right < other.left || other.right < self.left
    }
}
