//! # geotour
//!
//! Geographic tour optimization library: computes a near-optimal visiting
//! order through a set of latitude/longitude points with a fixed start and
//! end, using simulated annealing over haversine distances.
//!
//! ## Modules
//!
//! - [`model`] — Domain types (`GeoPoint`, `PointSet`, `Tour`, `TourError`)
//! - [`distance`] — Haversine great-circle distance
//! - [`evaluation`] — Closed-cycle tour cost
//! - [`anneal`] — Random initial tours and the annealing search loop
//!
//! ## Example
//!
//! ```
//! use geotour::anneal::{AnnealConfig, AnnealRunner};
//! use geotour::model::{GeoPoint, PointSet};
//!
//! let points: PointSet<&str> = [
//!     ("CDMX", GeoPoint::new(19.4327, -99.1332).unwrap()),
//!     ("Jalisco", GeoPoint::new(20.6767, -103.3475).unwrap()),
//!     ("NuevoLeon", GeoPoint::new(25.6714, -100.309).unwrap()),
//!     ("Yucatan", GeoPoint::new(20.967, -89.6237).unwrap()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(2.0)
//!     .with_cooling_step(0.02)
//!     .with_seed(42);
//! let result = AnnealRunner::run(&points, &"CDMX", &"Yucatan", &config).unwrap();
//!
//! assert_eq!(result.tour.first(), Some(&"CDMX"));
//! assert_eq!(result.tour.last(), Some(&"Yucatan"));
//! assert!(result.tour.is_permutation_of(&points));
//! ```
//!
//! The core is single-threaded and holds no state across runs: every call
//! owns its random source and working tour, so hosting layers may serve
//! concurrent requests without locking.

pub mod anneal;
pub mod distance;
pub mod evaluation;
pub mod model;
