//! Fitness ranking and elitist parent selection.
//!
//! Ranking is descending by fitness (higher is fitter) and stable, so
//! individuals with equal scores keep their relative input order. Each
//! individual is scored exactly once per ranking; the scores are cached in
//! the returned [`Ranked`] entries instead of being recomputed inside the
//! sort comparator.

use std::cmp::Ordering;

use super::error::GaError;
use super::types::Population;
use crate::random::RandomSource;

/// Position of an individual in the fitness ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    /// Index into [`Population::individuals`].
    pub index: usize,
    /// Cached fitness score.
    pub score: f64,
}

/// Ranks every individual of `population`, fittest first.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] with no individuals
/// - [`GaError::NanFitness`] if the fitness function returns NaN
pub fn rank<T>(population: &Population<T>) -> Result<Vec<Ranked>, GaError> {
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }

    let mut ranking = population
        .individuals()
        .iter()
        .enumerate()
        .map(|(index, individual)| {
            let score = population.score(individual);
            if score.is_nan() {
                Err(GaError::NanFitness { index })
            } else {
                Ok(Ranked { index, score })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    // stable; NaN was rejected above
    ranking.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(ranking)
}

/// Clones the top `size` ranked individuals, fittest first.
pub(crate) fn selection_pool<T: Clone>(
    population: &Population<T>,
    ranking: &[Ranked],
    size: usize,
) -> Vec<Vec<T>> {
    ranking
        .iter()
        .take(size)
        .map(|ranked| population.individuals()[ranked.index].clone())
        .collect()
}

/// Draws a parent uniformly from `pool`, with replacement.
///
/// # Panics
/// Panics if `pool` is empty.
pub(crate) fn draw_parent<'a, T, R: RandomSource + ?Sized>(
    pool: &'a [Vec<T>],
    rng: &mut R,
) -> &'a [T] {
    assert!(!pool.is_empty(), "cannot draw from an empty selection pool");
    &pool[rng.random_int(0, pool.len())]
}
