//! Population data model.
//!
//! A [`Population`] is a snapshot of one generation: its individuals plus
//! the parameters needed to produce the next one. It is never mutated by
//! the engine; [`evolve`](super::evolve) returns a new value.

use std::fmt;
use std::sync::Arc;

use super::config::{validate_ratio, EvolutionConfig};
use super::error::GaError;
use super::operators::MIN_GENES;

/// Shared fitness function. Higher scores are fitter.
///
/// The function must be pure: the engine calls it once per individual per
/// ranking and assumes repeated calls agree.
pub type Fitness<T> = Arc<dyn Fn(&[T]) -> f64 + Send + Sync>;

/// One generation of candidate permutations.
///
/// # Examples
///
/// ```
/// use tour_evolve::ga::{EvolutionConfig, Population};
///
/// let individuals = vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0]];
/// let population = Population::new(
///     individuals,
///     |genes: &[i32]| genes[0] as f64,
///     &EvolutionConfig::default(),
/// )?;
/// assert_eq!(population.generation(), 1);
/// assert_eq!(population.len(), 2);
/// # Ok::<(), tour_evolve::ga::GaError>(())
/// ```
#[derive(Clone)]
pub struct Population<T> {
    generation: u64,
    individuals: Vec<Vec<T>>,
    offspring_ratio: f64,
    fitness: Fitness<T>,
    mutation_rate: usize,
}

impl<T> Population<T> {
    /// Builds and validates an initial population.
    ///
    /// # Errors
    /// See [`validate`](Self::validate).
    pub fn new<F>(
        individuals: Vec<Vec<T>>,
        fitness: F,
        config: &EvolutionConfig,
    ) -> Result<Self, GaError>
    where
        F: Fn(&[T]) -> f64 + Send + Sync + 'static,
    {
        Self::with_fitness(individuals, Arc::new(fitness), config)
    }

    /// Like [`new`](Self::new), with an already shared fitness function.
    pub fn with_fitness(
        individuals: Vec<Vec<T>>,
        fitness: Fitness<T>,
        config: &EvolutionConfig,
    ) -> Result<Self, GaError> {
        let population = Self {
            generation: config.initial_generation,
            individuals,
            offspring_ratio: config.offspring_ratio,
            fitness,
            mutation_rate: config.mutation_rate,
        };
        population.validate()?;
        Ok(population)
    }

    /// Checks the structural preconditions of [`evolve`](super::evolve).
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] with no individuals
    /// - [`GaError::OffspringRatioOutOfRange`] unless the ratio is in `(0, 1)`
    /// - [`GaError::IndividualTooShort`] below [`MIN_GENES`] genes
    /// - [`GaError::MixedLengths`] if lengths differ
    pub fn validate(&self) -> Result<(), GaError> {
        let first = self.individuals.first().ok_or(GaError::EmptyPopulation)?;
        validate_ratio(self.offspring_ratio)?;

        let expected = first.len();
        if expected < MIN_GENES {
            return Err(GaError::IndividualTooShort {
                len: expected,
                min: MIN_GENES,
            });
        }
        if let Some((index, found)) = self
            .individuals
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GaError::MixedLengths {
                index,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Generation counter of this snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Individuals in insertion order.
    pub fn individuals(&self) -> &[Vec<T>] {
        &self.individuals
    }

    /// Consumes the population, returning its individuals.
    pub fn into_individuals(self) -> Vec<Vec<T>> {
        self.individuals
    }

    /// Offspring ratio carried to every generation.
    pub fn offspring_ratio(&self) -> f64 {
        self.offspring_ratio
    }

    /// Swaps applied to each offspring.
    pub fn mutation_rate(&self) -> usize {
        self.mutation_rate
    }

    /// The shared fitness function.
    pub fn fitness(&self) -> &Fitness<T> {
        &self.fitness
    }

    /// Scores a single individual with this population's fitness function.
    pub fn score(&self, individual: &[T]) -> f64 {
        (self.fitness)(individual)
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Scalar parameters of this population, with `initial_generation`
    /// set to the current generation.
    pub fn config(&self) -> EvolutionConfig {
        EvolutionConfig {
            offspring_ratio: self.offspring_ratio,
            mutation_rate: self.mutation_rate,
            initial_generation: self.generation,
        }
    }

    /// Next snapshot: same parameters, new individuals, generation + 1.
    pub(crate) fn successor(&self, individuals: Vec<Vec<T>>) -> Self {
        Self {
            generation: self.generation + 1,
            individuals,
            offspring_ratio: self.offspring_ratio,
            fitness: Arc::clone(&self.fitness),
            mutation_rate: self.mutation_rate,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Population<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("generation", &self.generation)
            .field("individuals", &self.individuals)
            .field("offspring_ratio", &self.offspring_ratio)
            .field("mutation_rate", &self.mutation_rate)
            .finish_non_exhaustive()
    }
}
