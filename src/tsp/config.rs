//! Experiment configuration.

use crate::ga::{EvolutionConfig, GaError};
use crate::ga::operators::MIN_GENES;

/// Parameters of a TSP experiment.
///
/// # Defaults
///
/// ```
/// use tour_evolve::tsp::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.city_count, 10);
/// assert_eq!(config.generations, 1000);
/// assert_eq!(config.individuals, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tour_evolve::tsp::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_city_count(25)
///     .with_individuals(100)
///     .with_offspring_ratio(0.3)
///     .with_mutation_rate(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Number of cities placed by [`Experiment::generate`](super::Experiment::generate).
    pub city_count: usize,

    /// Generation counter at which the run stops.
    pub generations: u64,

    /// Size of the initial population.
    pub individuals: usize,

    /// Offspring ratio, in `(0, 1)`.
    pub offspring_ratio: f64,

    /// Swaps per offspring.
    pub mutation_rate: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            city_count: 10,
            generations: 1000,
            individuals: 30,
            offspring_ratio: 0.5,
            mutation_rate: 1,
        }
    }
}

impl ExperimentConfig {
    /// Sets the number of cities to generate.
    pub fn with_city_count(mut self, n: usize) -> Self {
        self.city_count = n;
        self
    }

    /// Sets the generation at which the run stops.
    pub fn with_generations(mut self, n: u64) -> Self {
        self.generations = n;
        self
    }

    /// Sets the initial population size.
    pub fn with_individuals(mut self, n: usize) -> Self {
        self.individuals = n;
        self
    }

    /// Sets the offspring ratio.
    pub fn with_offspring_ratio(mut self, ratio: f64) -> Self {
        self.offspring_ratio = ratio;
        self
    }

    /// Sets the number of swaps per offspring.
    pub fn with_mutation_rate(mut self, rate: usize) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// GA parameters for the initial population, starting at generation 1.
    pub fn evolution(&self) -> EvolutionConfig {
        EvolutionConfig::default()
            .with_offspring_ratio(self.offspring_ratio)
            .with_mutation_rate(self.mutation_rate)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.city_count < MIN_GENES {
            return Err(GaError::InvalidConfig(format!(
                "city_count must be at least {MIN_GENES}, got {}",
                self.city_count
            )));
        }
        if self.individuals == 0 {
            return Err(GaError::InvalidConfig("individuals must be at least 1".into()));
        }
        if self.generations == 0 {
            return Err(GaError::InvalidConfig("generations must be at least 1".into()));
        }
        self.evolution().validate()
    }
}
