//! Identifier-keyed point set.

use super::{GeoPoint, PointId};
use std::collections::BTreeMap;

/// A read-only mapping from point identifiers to coordinates.
///
/// Built once by the caller per optimization request; the search core never
/// mutates it. Iteration order follows identifier order, so building the
/// same set from the same entries always yields the same traversal —
/// a requirement for reproducible seeded runs.
///
/// # Examples
///
/// ```
/// use geotour::model::{GeoPoint, PointSet};
///
/// let points: PointSet<&str> = [
///     ("CDMX", GeoPoint::new(19.4327, -99.1332).unwrap()),
///     ("Jalisco", GeoPoint::new(20.6767, -103.3475).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(points.len(), 2);
/// assert!(points.contains(&"CDMX"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointSet<I: PointId> {
    points: BTreeMap<I, GeoPoint>,
}

impl<I: PointId> PointSet<I> {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Inserts a point, returning the previous coordinate for `id` if any.
    pub fn insert(&mut self, id: I, point: GeoPoint) -> Option<GeoPoint> {
        self.points.insert(id, point)
    }

    /// Returns the coordinate for `id`, if present.
    pub fn get(&self, id: &I) -> Option<GeoPoint> {
        self.points.get(id).copied()
    }

    /// Returns `true` if `id` is in the set.
    pub fn contains(&self, id: &I) -> bool {
        self.points.contains_key(id)
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over identifiers in identifier order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.points.keys()
    }

    /// Iterates over `(identifier, coordinate)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, GeoPoint)> {
        self.points.iter().map(|(id, p)| (id, *p))
    }
}

impl<I: PointId> FromIterator<(I, GeoPoint)> for PointSet<I> {
    fn from_iter<T: IntoIterator<Item = (I, GeoPoint)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid coordinate")
    }

    #[test]
    fn test_insert_get() {
        let mut set = PointSet::new();
        assert!(set.insert("A", point(0.0, 0.0)).is_none());
        assert!(set.insert("A", point(1.0, 1.0)).is_some());
        assert_eq!(set.get(&"A"), Some(point(1.0, 1.0)));
        assert_eq!(set.get(&"B"), None);
    }

    #[test]
    fn test_contains_len() {
        let set: PointSet<&str> = [("A", point(0.0, 0.0)), ("B", point(0.0, 1.0))]
            .into_iter()
            .collect();
        assert!(set.contains(&"A"));
        assert!(!set.contains(&"C"));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_ids_ordered() {
        let set: PointSet<&str> = [
            ("Veracruz", point(19.1738, -96.1342)),
            ("Colima", point(19.2452, -103.725)),
            ("Oaxaca", point(17.0732, -96.7266)),
        ]
        .into_iter()
        .collect();
        let ids: Vec<_> = set.ids().copied().collect();
        assert_eq!(ids, vec!["Colima", "Oaxaca", "Veracruz"]);
    }
}
