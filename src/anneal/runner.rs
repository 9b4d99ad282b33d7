//! Annealing execution loop.

use super::config::{Acceptance, AnnealConfig};
use super::initial::random_tour;
use crate::evaluation::TourEvaluator;
use crate::model::{PointId, PointSet, Tour, TourError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Below this temperature, non-improving candidates are never accepted.
/// Keeps `exp(delta / temperature)` away from division by zero.
const TEMPERATURE_EPSILON: f64 = 1e-12;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<I: PointId> {
    /// The tour held when the temperature reached its floor.
    pub tour: Tour<I>,

    /// Closed-cycle cost of `tour`, in kilometers.
    pub cost: f64,

    /// Total number of candidate evaluations.
    pub iterations: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of improving candidates.
    pub improving_moves: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,
}

/// Executes the simulated annealing search.
///
/// # Examples
///
/// ```
/// use geotour::anneal::{AnnealConfig, AnnealRunner};
/// use geotour::model::{GeoPoint, PointSet};
///
/// let points: PointSet<&str> = [
///     ("A", GeoPoint::new(0.0, 0.0).unwrap()),
///     ("B", GeoPoint::new(0.0, 1.0).unwrap()),
///     ("C", GeoPoint::new(1.0, 1.0).unwrap()),
///     ("D", GeoPoint::new(1.0, 0.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.0)
///     .with_cooling_step(0.02)
///     .with_seed(42);
/// let result = AnnealRunner::run(&points, &"A", &"D", &config).unwrap();
///
/// assert_eq!(result.tour.first(), Some(&"A"));
/// assert_eq!(result.tour.last(), Some(&"D"));
/// assert!(result.cost > 0.0);
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Builds a random initial tour and anneals it.
    ///
    /// The random source is seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn run<I: PointId>(
        points: &PointSet<I>,
        start: &I,
        end: &I,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<I>, TourError<I>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(points, start, end, config, &mut rng)
    }

    /// Like [`AnnealRunner::run`], with a caller-supplied random source.
    pub fn run_with_rng<I: PointId, R: Rng>(
        points: &PointSet<I>,
        start: &I,
        end: &I,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<I>, TourError<I>> {
        config.validate().map_err(TourError::Config)?;
        let tour = random_tour(points, start, end, rng)?;
        Self::anneal(points, tour, config, rng)
    }

    /// Anneals an existing tour.
    ///
    /// Each temperature level evaluates up to
    /// `config.iterations_per_temperature` candidates, each produced by
    /// swapping two distinct interior positions of the current tour. The
    /// level ends as soon as one candidate is accepted; the temperature
    /// then drops by `config.cooling_step`.
    ///
    /// Tours with fewer than two interior positions have no pairwise swap,
    /// so they are returned unchanged with zero iterations.
    pub fn anneal<I: PointId, R: Rng>(
        points: &PointSet<I>,
        tour: Tour<I>,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<I>, TourError<I>> {
        config.validate().map_err(TourError::Config)?;

        let evaluator = TourEvaluator::new(points);
        let mut current = tour;
        let mut current_cost = evaluator.cost(&current)?;

        if current.interior_len() < 2 {
            return Ok(AnnealResult {
                tour: current,
                cost: current_cost,
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: config.initial_temperature,
            });
        }

        let len = current.len();
        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let (i, j) = interior_pair(len, rng);
                let candidate = current.swapped(i, j);
                let candidate_cost = evaluator.cost(&candidate)?;
                iterations += 1;

                // Positive delta means the candidate is shorter.
                let delta = current_cost - candidate_cost;

                let accept = if candidate_cost < current_cost {
                    improving_moves += 1;
                    true
                } else {
                    match config.acceptance {
                        Acceptance::Greedy => false,
                        Acceptance::Metropolis => {
                            temperature > TEMPERATURE_EPSILON
                                && rng.random_range(0.0..1.0) < (delta / temperature).exp()
                        }
                    }
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;
                    break;
                }
            }

            temperature -= config.cooling_step;
        }

        Ok(AnnealResult {
            tour: current,
            cost: current_cost,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}

/// Picks two distinct interior positions, uniformly.
///
/// Positions 0 and `len - 1` are the pinned endpoints and never selected.
/// Requires `len >= 4` (at least two interior positions).
fn interior_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(len >= 4);
    let i = rng.random_range(1..len - 1);
    let mut j = rng.random_range(1..len - 2);
    if j >= i {
        j += 1;
    }
    (i, j)
}
