//! Haversine great-circle distance.

use crate::model::GeoPoint;

/// Earth radius in kilometers for the spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Uses the haversine formula in its `atan2` form, which stays numerically
/// stable near antipodal and coincident points where the `asin` form can
/// step outside its domain. The intermediate term is clamped to `[0, 1]`
/// before the square roots to absorb floating-point drift.
///
/// # Examples
///
/// ```
/// use geotour::distance::haversine_km;
/// use geotour::model::GeoPoint;
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator is about 111.2 km.
/// assert!((haversine_km(a, b) - 111.195).abs() < 0.01);
/// ```
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lon1 = from.longitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let lon2 = to.longitude().to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid coordinate")
    }

    #[test]
    fn test_identical_points_zero() {
        let p = point(19.4327, -99.1332);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_equatorial_degree() {
        // Arc length of one degree on a great circle: R * pi / 180.
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        let d = haversine_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
    }

    #[test]
    fn test_antipodal() {
        // Half the circumference: R * pi.
        let expected = EARTH_RADIUS_KM * PI;
        let d = haversine_km(point(0.0, 0.0), point(0.0, 180.0));
        assert!((d - expected).abs() < 1e-6, "got {d}, expected {expected}");

        let d = haversine_km(point(90.0, 0.0), point(-90.0, 0.0));
        assert!((d - expected).abs() < 1e-6, "got {d}, expected {expected}");
    }

    #[test]
    fn test_known_city_pair() {
        // CDMX to Guadalajara, roughly 460 km.
        let cdmx = point(19.4327, -99.1332);
        let gdl = point(20.6767, -103.3475);
        let d = haversine_km(cdmx, gdl);
        assert!((400.0..520.0).contains(&d), "got {d}");
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = point(lat1, lon1);
            let b = point(lat2, lon2);
            prop_assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        }

        #[test]
        fn prop_identity(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = point(lat, lon);
            prop_assert!(haversine_km(p, p).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_by_half_circumference(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let d = haversine_km(point(lat1, lon1), point(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * PI + 1e-9);
        }

        #[test]
        fn prop_triangle_inequality(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
            lat3 in -90.0f64..=90.0, lon3 in -180.0f64..=180.0,
        ) {
            let a = point(lat1, lon1);
            let b = point(lat2, lon2);
            let c = point(lat3, lon3);
            prop_assert!(haversine_km(a, b) <= haversine_km(a, c) + haversine_km(c, b) + 1e-6);
        }
    }
}
