//! Tour representation.

use super::{PointId, PointSet};

/// An ordered visiting sequence over a point set.
///
/// The first and last elements are the pinned start and end points; the
/// search only ever permutes the interior. A valid tour visits every
/// identifier of its point set exactly once.
///
/// Candidate tours produced during the search are independent value copies
/// (`swapped`), never aliased views, so a rejected candidate cannot corrupt
/// the current tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour<I: PointId> {
    points: Vec<I>,
}

impl<I: PointId> Tour<I> {
    /// Creates a tour from an ordered sequence of identifiers.
    ///
    /// Membership against a point set is not checked here; the evaluator
    /// reports `TourError::UnknownPoint` for identifiers it cannot resolve.
    pub fn new(points: Vec<I>) -> Self {
        Self { points }
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pinned start point, if the tour is non-empty.
    pub fn first(&self) -> Option<&I> {
        self.points.first()
    }

    /// The pinned end point, if the tour is non-empty.
    pub fn last(&self) -> Option<&I> {
        self.points.last()
    }

    /// Number of interior positions (everything except the pinned ends).
    pub fn interior_len(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// The tour as a slice of identifiers.
    pub fn as_slice(&self) -> &[I] {
        &self.points
    }

    /// Consumes the tour, returning the identifier sequence.
    pub fn into_points(self) -> Vec<I> {
        self.points
    }

    /// Returns an independent copy with positions `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut points = self.points.clone();
        points.swap(i, j);
        Self { points }
    }

    /// Returns `true` if the tour visits every identifier of `set` exactly
    /// once.
    pub fn is_permutation_of(&self, set: &PointSet<I>) -> bool {
        if self.points.len() != set.len() {
            return false;
        }
        let mut sorted = self.points.clone();
        sorted.sort();
        sorted.windows(2).all(|w| w[0] != w[1]) && sorted.iter().all(|id| set.contains(id))
    }
}
