//! Great-circle distance computation.

mod haversine;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
