//! GA generation loop.
//!
//! [`GaRunner`] drives a [`Population`] forward:
//! best → report → evolve → repeat, until the target generation is reached
//! or the run is cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, instrument};

use super::error::GaError;
use super::evolve::{best, evolve};
use super::types::Population;
use crate::random::RandomSource;

/// Upper bound on the fitness history reserved before the loop starts.
const HISTORY_PREALLOC_LIMIT: usize = 1024;

/// Per-generation snapshot passed to the observer of
/// [`GaRunner::run_with_cancel`].
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats<'a, T> {
    /// Generation the snapshot was taken at.
    pub generation: u64,

    /// Fittest individual of this generation.
    pub best: &'a [T],

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of individuals in this generation.
    pub population_size: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<T> {
    /// The best individual seen during the entire run.
    pub best: Vec<T>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Generation counter of the final population.
    pub generations: u64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each observed generation, oldest first.
    pub fitness_history: Vec<f64>,

    /// The final population.
    pub population: Population<T>,
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use tour_evolve::ga::{EvolutionConfig, GaRunner, Population};
/// use tour_evolve::random::RngSource;
///
/// let individuals = vec![vec![3, 2, 1, 0], vec![1, 0, 3, 2]];
/// let ordered = |genes: &[u32]| {
///     genes.windows(2).filter(|w| w[0] < w[1]).count() as f64
/// };
/// let population = Population::new(individuals, ordered, &EvolutionConfig::default())?;
///
/// let result = GaRunner::run(population, 50, &mut RngSource::seeded(42))?;
/// assert_eq!(result.generations, 50);
/// assert_eq!(result.fitness_history.len(), 50);
/// # Ok::<(), tour_evolve::ga::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Evolves `population` until its generation counter reaches
    /// `max_generations`.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if `max_generations` is behind the
    /// population's current generation, or any error from
    /// [`evolve`]/[`best`].
    pub fn run<T, R>(
        population: Population<T>,
        max_generations: u64,
        rng: &mut R,
    ) -> Result<GaResult<T>, GaError>
    where
        T: Clone + PartialEq,
        R: RandomSource + ?Sized,
    {
        Self::run_with_cancel(population, max_generations, rng, None, |_| {})
    }

    /// Runs the loop with an optional cancellation flag and an observer.
    ///
    /// `on_generation` sees every generation from the initial one up to and
    /// including `max_generations`. If `cancel` is set, the runner stops
    /// after reporting the current generation and returns what it has.
    #[instrument(
        level = "debug",
        skip(population, rng, cancel, on_generation),
        fields(start = population.generation())
    )]
    pub fn run_with_cancel<T, R, F>(
        population: Population<T>,
        max_generations: u64,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> Result<GaResult<T>, GaError>
    where
        T: Clone + PartialEq,
        R: RandomSource + ?Sized,
        F: FnMut(&GenerationStats<'_, T>),
    {
        if max_generations < population.generation() {
            return Err(GaError::InvalidConfig(format!(
                "max_generations {max_generations} is before the starting generation {}",
                population.generation()
            )));
        }
        population.validate()?;
        info!(
            start = population.generation(),
            max_generations,
            size = population.len(),
            "starting evolution"
        );

        // max_generations may be effectively unbounded when the run is
        // meant to stop through `cancel`.
        let span = usize::try_from(max_generations - population.generation())
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(HISTORY_PREALLOC_LIMIT);
        let mut fitness_history = Vec::with_capacity(span);
        let mut overall: Option<(Vec<T>, f64)> = None;
        let mut cancelled = false;
        let mut current = population;

        loop {
            let gen_best = best(&current)?;
            let gen_fitness = current.score(gen_best);
            on_generation(&GenerationStats {
                generation: current.generation(),
                best: gen_best,
                best_fitness: gen_fitness,
                population_size: current.len(),
            });
            fitness_history.push(gen_fitness);

            let improved = match &overall {
                Some((_, fitness)) => gen_fitness > *fitness,
                None => true,
            };
            if improved {
                overall = Some((gen_best.to_vec(), gen_fitness));
            }

            if current.generation() >= max_generations {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            current = evolve(&current, rng)?;
        }

        let (best, best_fitness) = overall.ok_or(GaError::EmptyPopulation)?;
        info!(
            generations = current.generation(),
            best_fitness, cancelled, "evolution finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: current.generation(),
            cancelled,
            fitness_history,
            population: current,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
