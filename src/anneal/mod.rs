//! Simulated annealing search over pinned-endpoint tours.
//!
//! A single-solution trajectory metaheuristic: candidate tours are produced
//! by swapping two interior positions, improving candidates are always
//! accepted, and worsening candidates are accepted with a probability that
//! shrinks as the temperature cools. The pinned start and end points never
//! move.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod initial;
mod runner;

pub use config::{Acceptance, AnnealConfig};
pub use initial::random_tour;
pub use runner::{AnnealResult, AnnealRunner};
