//! Random initial tour construction.

use crate::model::{PointId, PointSet, Tour, TourError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a random initial tour with pinned endpoints.
///
/// The tour starts at `start`, ends at `end`, and visits every other
/// identifier of the point set exactly once in a uniformly shuffled order.
/// The caller supplies the random source, so seeded runs are reproducible.
///
/// # Errors
///
/// - [`TourError::TooFewPoints`] if the set has fewer than two points.
/// - [`TourError::MissingEndpoint`] if `start` or `end` is not in the set.
/// - [`TourError::EqualEndpoints`] if `start == end`.
///
/// # Examples
///
/// ```
/// use geotour::anneal::random_tour;
/// use geotour::model::{GeoPoint, PointSet};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points: PointSet<&str> = [
///     ("A", GeoPoint::new(0.0, 0.0).unwrap()),
///     ("B", GeoPoint::new(0.0, 1.0).unwrap()),
///     ("C", GeoPoint::new(1.0, 1.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tour = random_tour(&points, &"A", &"C", &mut rng).unwrap();
/// assert_eq!(tour.first(), Some(&"A"));
/// assert_eq!(tour.last(), Some(&"C"));
/// assert_eq!(tour.len(), 3);
/// ```
pub fn random_tour<I: PointId, R: Rng>(
    points: &PointSet<I>,
    start: &I,
    end: &I,
    rng: &mut R,
) -> Result<Tour<I>, TourError<I>> {
    if points.len() < 2 {
        return Err(TourError::TooFewPoints {
            needed: 2,
            got: points.len(),
        });
    }
    if !points.contains(start) {
        return Err(TourError::MissingEndpoint(start.clone()));
    }
    if !points.contains(end) {
        return Err(TourError::MissingEndpoint(end.clone()));
    }
    if start == end {
        return Err(TourError::EqualEndpoints);
    }

    let mut interior: Vec<I> = points
        .ids()
        .filter(|id| *id != start && *id != end)
        .cloned()
        .collect();
    interior.shuffle(rng);

    let mut sequence = Vec::with_capacity(points.len());
    sequence.push(start.clone());
    sequence.extend(interior);
    sequence.push(end.clone());
    Ok(Tour::new(sequence))
}
