//! Annealing configuration.

/// Acceptance rule for non-improving candidates.
///
/// Improving candidates are always accepted under either rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Accept a non-improving candidate with probability
    /// `exp(delta / temperature)` where `delta <= 0`.
    #[default]
    Metropolis,

    /// Reject every non-improving candidate. Turns the search into a pure
    /// descent: the current cost is non-increasing across the run.
    Greedy,
}

/// Configuration for the annealing search.
///
/// The temperature starts at `initial_temperature`, drops by `cooling_step`
/// after each temperature level, and the search stops once it reaches
/// `min_temperature`. With the defaults that is 4000 levels of up to 100
/// candidate evaluations each.
///
/// # Examples
///
/// ```
/// use geotour::anneal::{Acceptance, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5.0)
///     .with_cooling_step(0.01)
///     .with_acceptance(Acceptance::Greedy)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The search stops when the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Amount subtracted from the temperature after each temperature level.
    pub cooling_step: f64,

    /// Maximum candidate evaluations per temperature level. A level ends
    /// early as soon as one candidate is accepted.
    pub iterations_per_temperature: usize,

    /// Acceptance rule for non-improving candidates.
    pub acceptance: Acceptance,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 20.0,
            min_temperature: 0.0,
            cooling_step: 0.005,
            iterations_per_temperature: 100,
            acceptance: Acceptance::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_step(mut self, step: f64) -> Self {
        self.cooling_step = step;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive and finite".into());
        }
        if !self.min_temperature.is_finite() || self.min_temperature < 0.0 {
            return Err("min_temperature must be non-negative and finite".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if !self.cooling_step.is_finite() || self.cooling_step <= 0.0 {
            return Err("cooling_step must be positive and finite".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        Ok(())
    }
}
