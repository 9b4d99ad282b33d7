//! Domain model types for geographic tour optimization.
//!
//! Provides the core abstractions: geographic points with validated
//! coordinates, an identifier-keyed point set, tours as ordered visiting
//! sequences with pinned endpoints, and the error taxonomy shared by the
//! evaluation and annealing layers.

mod error;
mod point;
mod set;
mod tour;

pub use error::TourError;
pub use point::GeoPoint;
pub use set::PointSet;
pub use tour::Tour;

use std::fmt;

/// Identifier for a point, unique within a point set.
///
/// Identifiers are opaque to the core: any ordered, clonable type works
/// (`&str`, `String`, `usize`, ...). The `Ord` bound gives point sets a
/// deterministic iteration order, which keeps seeded runs reproducible.
pub trait PointId: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> PointId for T {}
