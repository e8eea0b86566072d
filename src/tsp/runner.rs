//! City generation, population seeding and experiment execution.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::config::ExperimentConfig;
use super::types::{tour_fitness, tour_length, City};
use crate::array::{range, shuffle};
use crate::ga::operators::MIN_GENES;
use crate::ga::{GaError, GaRunner, GenerationStats, Population};
use crate::random::RandomSource;

/// Places `count` distinct cities with integer coordinates in
/// `[0, width) × [0, height)`.
///
/// Duplicate positions are redrawn, so every city is a distinct gene.
///
/// # Errors
/// [`GaError::InvalidConfig`] if the area is empty or has fewer than
/// `count` grid points.
pub fn random_cities<R: RandomSource + ?Sized>(
    count: usize,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Vec<City>, GaError> {
    if width == 0 || height == 0 {
        return Err(GaError::InvalidConfig(format!(
            "area {width}x{height} has no room for cities"
        )));
    }
    if width.saturating_mul(height) < count {
        return Err(GaError::InvalidConfig(format!(
            "area {width}x{height} cannot hold {count} distinct cities"
        )));
    }

    let mut cities = Vec::with_capacity(count);
    while cities.len() < count {
        let city = City::new(
            rng.random_int(0, width) as f64,
            rng.random_int(0, height) as f64,
        );
        if !cities.contains(&city) {
            cities.push(city);
        }
    }
    Ok(cities)
}

/// Builds `size` individuals, each an independent shuffle of `cities`.
pub fn seed_population<R: RandomSource + ?Sized>(
    cities: &[City],
    size: usize,
    rng: &mut R,
) -> Vec<Vec<City>> {
    range(size)
        .into_iter()
        .map(|_| shuffle(cities, rng))
        .collect()
}

/// Outcome of an [`Experiment`].
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    /// Shortest tour found.
    pub best_tour: Vec<City>,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Generation counter when the run stopped.
    pub generations: u64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best tour length of each generation, oldest first.
    pub distance_history: Vec<f64>,
}

/// A TSP run over a fixed set of cities.
///
/// ```
/// use tour_evolve::random::RngSource;
/// use tour_evolve::tsp::{Experiment, ExperimentConfig};
///
/// let config = ExperimentConfig::default().with_generations(50);
/// let mut rng = RngSource::seeded(42);
/// let experiment = Experiment::generate(config, 800, 600, &mut rng)?;
/// let result = experiment.run(&mut rng)?;
///
/// assert_eq!(result.best_tour.len(), 10);
/// assert_eq!(result.distance_history.len(), 50);
/// # Ok::<(), tour_evolve::ga::GaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
    cities: Vec<City>,
}

impl Experiment {
    /// Creates an experiment over the given cities.
    ///
    /// `config.city_count` is replaced by `cities.len()`.
    pub fn new(config: ExperimentConfig, cities: Vec<City>) -> Result<Self, GaError> {
        let config = config.with_city_count(cities.len());
        config.validate()?;
        Ok(Self { config, cities })
    }

    /// Creates an experiment over `config.city_count` random cities.
    pub fn generate<R: RandomSource + ?Sized>(
        config: ExperimentConfig,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        config.validate()?;
        let cities = random_cities(config.city_count, width, height, rng)?;
        Ok(Self { config, cities })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Seeds a population and evolves it to `config.generations`.
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<ExperimentResult, GaError> {
        self.run_with_cancel(rng, None, |_| {})
    }

    /// Like [`run`](Self::run), with a cancellation flag and a
    /// per-generation observer.
    #[instrument(
        level = "debug",
        skip(self, rng, cancel, on_generation),
        fields(cities = self.cities.len(), individuals = self.config.individuals)
    )]
    pub fn run_with_cancel<R, F>(
        &self,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
        on_generation: F,
    ) -> Result<ExperimentResult, GaError>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&GenerationStats<'_, City>),
    {
        debug_assert!(self.cities.len() >= MIN_GENES);
        let individuals = seed_population(&self.cities, self.config.individuals, rng);
        let population = Population::new(individuals, tour_fitness, &self.config.evolution())?;
        debug!(size = population.len(), "population seeded");

        let result = GaRunner::run_with_cancel(
            population,
            self.config.generations,
            rng,
            cancel,
            on_generation,
        )?;

        Ok(ExperimentResult {
            best_distance: tour_length(&result.best),
            best_tour: result.best,
            generations: result.generations,
            cancelled: result.cancelled,
            distance_history: result.fitness_history.iter().map(|f| -f).collect(),
        })
    }
}
