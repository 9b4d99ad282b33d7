//! Geographic coordinate type.

/// A geographic point: latitude and longitude in degrees.
///
/// Coordinates are validated at construction: both components must be
/// finite, latitude in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use geotour::model::GeoPoint;
///
/// let cdmx = GeoPoint::new(19.4327, -99.1332).unwrap();
/// assert!((cdmx.latitude() - 19.4327).abs() < 1e-12);
/// assert!(GeoPoint::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// Returns `None` if either coordinate is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, in `[-90, 90]`.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, in `[-180, 180]`.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
