//! Error taxonomy for tour construction, evaluation, and search.

use std::fmt;
use thiserror::Error;

/// Errors surfaced by the tour optimization core.
///
/// All variants are deterministic input-validation failures: the core does
/// no I/O, so there are no transient failure modes and nothing is retried.
/// No partial results accompany an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError<I: fmt::Debug> {
    /// A tour references an identifier absent from the point set.
    ///
    /// Cannot occur for tours built by [`crate::anneal::random_tour`];
    /// guards callers who assemble tours by hand.
    #[error("tour references unknown point {0:?}")]
    UnknownPoint(I),

    /// A requested start or end identifier is absent from the point set.
    #[error("endpoint {0:?} is not in the point set")]
    MissingEndpoint(I),

    /// Start and end must be distinct identifiers.
    #[error("start and end must be distinct points")]
    EqualEndpoints,

    /// The point set is too small for the requested operation.
    #[error("point set has {got} points, at least {needed} required")]
    TooFewPoints {
        /// Minimum number of points the operation requires.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// The annealing configuration failed validation.
    #[error("invalid annealing configuration: {0}")]
    Config(String),
}
