//! Closed-cycle tour cost.

use crate::distance::haversine_km;
use crate::model::{GeoPoint, PointId, PointSet, Tour, TourError};

/// Evaluates the total length of a tour over a point set.
///
/// The cost is the sum of great-circle distances over consecutive pairs
/// plus the closing edge from the last point back to the first. The
/// closing edge is always included, even when the caller frames the
/// problem as start-to-end: the tour is priced as a closed cycle.
///
/// # Examples
///
/// ```
/// use geotour::evaluation::TourEvaluator;
/// use geotour::model::{GeoPoint, PointSet, Tour};
///
/// let points: PointSet<&str> = [
///     ("A", GeoPoint::new(0.0, 0.0).unwrap()),
///     ("B", GeoPoint::new(0.0, 1.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let evaluator = TourEvaluator::new(&points);
/// let cost = evaluator.cost(&Tour::new(vec!["A", "B"])).unwrap();
/// // Out and back along the same edge.
/// assert!((cost - 2.0 * 111.195).abs() < 0.01);
/// ```
pub struct TourEvaluator<'a, I: PointId> {
    points: &'a PointSet<I>,
}

impl<'a, I: PointId> TourEvaluator<'a, I> {
    /// Creates an evaluator over the given point set.
    pub fn new(points: &'a PointSet<I>) -> Self {
        Self { points }
    }

    /// Total closed-cycle length of the tour, in kilometers.
    ///
    /// An empty or single-point tour costs zero. Fails with
    /// [`TourError::UnknownPoint`] on the first identifier that cannot be
    /// resolved in the point set.
    pub fn cost(&self, tour: &Tour<I>) -> Result<f64, TourError<I>> {
        let ids = tour.as_slice();
        let Some(first_id) = ids.first() else {
            return Ok(0.0);
        };

        let first = self.lookup(first_id)?;
        let mut total = 0.0;
        let mut prev = first;
        for id in &ids[1..] {
            let current = self.lookup(id)?;
            total += haversine_km(prev, current);
            prev = current;
        }
        // Close the cycle.
        total += haversine_km(prev, first);
        Ok(total)
    }

    fn lookup(&self, id: &I) -> Result<GeoPoint, TourError<I>> {
        self.points
            .get(id)
            .ok_or_else(|| TourError::UnknownPoint(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine_km;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid coordinate")
    }

    fn square() -> PointSet<&'static str> {
        [
            ("A", point(0.0, 0.0)),
            ("B", point(0.0, 1.0)),
            ("C", point(1.0, 1.0)),
            ("D", point(1.0, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_single_point_zero_cost() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let cost = evaluator.cost(&Tour::new(vec!["A"])).expect("valid tour");
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_empty_tour_zero_cost() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let cost = evaluator.cost(&Tour::new(vec![])).expect("valid tour");
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_two_point_tour_is_there_and_back() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let cost = evaluator
            .cost(&Tour::new(vec!["A", "B"]))
            .expect("valid tour");
        let edge = haversine_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!((cost - 2.0 * edge).abs() < 1e-9);
    }

    #[test]
    fn test_square_tour_cheaper_than_crossed() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let around = evaluator
            .cost(&Tour::new(vec!["A", "B", "C", "D"]))
            .expect("valid tour");
        let crossed = evaluator
            .cost(&Tour::new(vec!["A", "C", "B", "D"]))
            .expect("valid tour");
        assert!(around < crossed, "around {around} vs crossed {crossed}");
    }

    #[test]
    fn test_cost_includes_closing_edge() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let open_edges = haversine_km(point(0.0, 0.0), point(0.0, 1.0))
            + haversine_km(point(0.0, 1.0), point(1.0, 1.0));
        let closing = haversine_km(point(1.0, 1.0), point(0.0, 0.0));
        let cost = evaluator
            .cost(&Tour::new(vec!["A", "B", "C"]))
            .expect("valid tour");
        assert!((cost - (open_edges + closing)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_point_rejected() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let err = evaluator
            .cost(&Tour::new(vec!["A", "X", "B"]))
            .expect_err("unknown id");
        assert_eq!(err, TourError::UnknownPoint("X"));
    }

    #[test]
    fn test_cost_non_negative() {
        let points = square();
        let evaluator = TourEvaluator::new(&points);
        let cost = evaluator
            .cost(&Tour::new(vec!["D", "C", "B", "A"]))
            .expect("valid tour");
        assert!(cost >= 0.0);
    }
}
