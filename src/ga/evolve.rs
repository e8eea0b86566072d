//! Generational transition and best-individual lookup.

use tracing::{debug, instrument, trace};

use super::error::GaError;
use super::operators::{crossover_point, prefix_order_crossover, swap_mutation};
use super::selection::{draw_parent, rank, selection_pool};
use super::types::Population;
use crate::array::range;
use crate::random::RandomSource;

/// Produces the next generation of `population`.
///
/// With `n` individuals, `cutoff = floor(n * offspring_ratio)` and
/// `offspring_count = n - cutoff`:
///
/// 1. Rank all individuals by fitness, descending and stable.
/// 2. Keep the top `offspring_count` as the selection pool.
/// 3. Breed `offspring_count` children. Each draws parents `a` and `b` from
///    the pool with replacement, takes `a`'s prefix up to a point in
///    `[1, len - 2)`, fills from `b` in order, then applies
///    `mutation_rate` random swaps.
/// 4. The next generation is the pool followed by the children, so it
///    holds `2 * offspring_count` individuals. This is not necessarily `n`.
///
/// The input is left untouched. Fitness is evaluated once per individual.
///
/// # Errors
/// Any [`Population::validate`] failure, [`GaError::NanFitness`], or
/// [`GaError::EmptySelectionPool`] if the cutoff rounds up to `n`.
#[instrument(
    level = "debug",
    skip(population, rng),
    fields(generation = population.generation(), size = population.len())
)]
pub fn evolve<T, R>(population: &Population<T>, rng: &mut R) -> Result<Population<T>, GaError>
where
    T: Clone + PartialEq,
    R: RandomSource + ?Sized,
{
    population.validate()?;

    let size = population.len();
    let cutoff = (size as f64 * population.offspring_ratio()).floor() as usize;
    let offspring_count = size.saturating_sub(cutoff);
    if offspring_count == 0 {
        return Err(GaError::EmptySelectionPool {
            size,
            offspring_ratio: population.offspring_ratio(),
        });
    }

    let ranking = rank(population)?;
    // Pool is bounded by offspring_count, not cutoff.
    let pool = selection_pool(population, &ranking, offspring_count);
    debug!(
        cutoff,
        offspring_count,
        best_score = ranking[0].score,
        "selection pool ranked"
    );

    let offspring = range(offspring_count)
        .into_iter()
        .map(|_| breed(&pool, population.mutation_rate(), rng))
        .collect::<Result<Vec<_>, _>>()?;

    let mut next = pool;
    next.extend(offspring);
    debug!(next_size = next.len(), "generation bred");

    Ok(population.successor(next))
}

/// Breeds one child from the selection pool.
fn breed<T, R>(pool: &[Vec<T>], mutation_rate: usize, rng: &mut R) -> Result<Vec<T>, GaError>
where
    T: Clone + PartialEq,
    R: RandomSource + ?Sized,
{
    let a = draw_parent(pool, rng);
    let b = draw_parent(pool, rng);
    let point = crossover_point(a.len(), rng);
    trace!(point, "crossover");

    let child = prefix_order_crossover(a, b, point);
    Ok(swap_mutation(child, mutation_rate, rng)?)
}

/// Returns the fittest individual of `population`.
///
/// Uses the same ranking as [`evolve`]; among equal scores the earliest
/// individual wins.
///
/// # Errors
/// [`GaError::EmptyPopulation`] or [`GaError::NanFitness`].
#[instrument(level = "debug", skip(population), fields(generation = population.generation()))]
pub fn best<T>(population: &Population<T>) -> Result<&[T], GaError> {
    let ranking = rank(population)?;
    Ok(&population.individuals()[ranking[0].index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::EvolutionConfig;
    use crate::random::{RngSource, SequenceSource};
    use proptest::prelude::*;

    const A: char = 'A';
    const B: char = 'B';
    const C: char = 'C';
    const D: char = 'D';

    /// Scores a permutation of A..D by how many genes sit at their home index.
    fn in_place(genes: &[char]) -> f64 {
        genes
            .iter()
            .zip([A, B, C, D])
            .filter(|(g, home)| **g == *home)
            .count() as f64
    }

    fn abcd_population(mutation_rate: usize) -> Population<char> {
        let config = EvolutionConfig::default()
            .with_offspring_ratio(0.5)
            .with_mutation_rate(mutation_rate);
        Population::new(
            vec![
                vec![D, C, B, A], // 0
                vec![A, B, D, C], // 2
                vec![B, A, C, D], // 2
                vec![A, B, C, D], // 4
            ],
            in_place,
            &config,
        )
        .unwrap()
    }

    fn sorted(v: &[char]) -> Vec<char> {
        let mut v = v.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_hand_computed_generation() {
        let population = abcd_population(0);

        // cutoff = 2, offspring_count = 2
        // pool (stable): [A B C D], [A B D C]
        // child 1: a = pool[1], b = pool[0], point 1 -> A + (B C D)
        // child 2: a = pool[0], b = pool[1], point 1 -> A + (B D C)
        let mut rng = SequenceSource::new(vec![1, 0, 1, 0, 1, 1]);
        let next = evolve(&population, &mut rng).unwrap();

        assert_eq!(next.generation(), 2);
        assert_eq!(
            next.individuals(),
            &[
                vec![A, B, C, D],
                vec![A, B, D, C],
                vec![A, B, C, D],
                vec![A, B, D, C],
            ]
        );
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_hand_computed_crossover_mixes_parents() {
        let config = EvolutionConfig::default().with_mutation_rate(0);
        let population = Population::new(
            vec![
                vec![B, A, D, C], // 0
                vec![A, C, B, D], // 2
                vec![D, B, C, A], // 2
                vec![C, D, A, B], // 0
            ],
            in_place,
            &config,
        )
        .unwrap();

        // pool: [A C B D], [D B C A]
        // a = [D B C A], b = [A C B D], point 1 -> D + (A C B)
        let mut rng = SequenceSource::new(vec![1, 0, 1, 0, 0, 1]);
        let next = evolve(&population, &mut rng).unwrap();

        assert_eq!(next.individuals()[2], vec![D, A, C, B]);
        assert_eq!(next.individuals()[3], vec![A, C, B, D]);
    }

    #[test]
    fn test_mutation_applied_after_crossover() {
        let population = abcd_population(1);

        // child 1: a = pool[0], b = pool[0], point 1, swap(0, 3)
        // child 2: a = pool[1], b = pool[1], point 1, swap(2, 2)
        let mut rng = SequenceSource::new(vec![0, 0, 1, 0, 3, 1, 1, 1, 2, 2]);
        let next = evolve(&population, &mut rng).unwrap();

        assert_eq!(next.individuals()[2], vec![D, B, C, A]);
        assert_eq!(next.individuals()[3], vec![A, B, D, C]);
        assert_eq!(rng.draws(), 10);
    }

    #[test]
    fn test_population_size_drifts() {
        // n = 10, ratio 0.3: cutoff 3, offspring 7, next size 14
        let config = EvolutionConfig::default().with_offspring_ratio(0.3);
        let individuals = vec![vec![A, B, C, D]; 10];
        let population = Population::new(individuals, in_place, &config).unwrap();
        let mut rng = RngSource::seeded(42);

        let next = evolve(&population, &mut rng).unwrap();
        assert_eq!(next.len(), 14);

        // 14 -> cutoff 4, offspring 10, next size 20
        let next = evolve(&next, &mut rng).unwrap();
        assert_eq!(next.len(), 20);
    }

    #[test]
    fn test_evolve_copies_parameters() {
        let config = EvolutionConfig::default()
            .with_offspring_ratio(0.4)
            .with_mutation_rate(3)
            .with_initial_generation(41);
        let population = Population::new(vec![vec![A, B, C, D]; 5], in_place, &config).unwrap();
        let next = evolve(&population, &mut RngSource::seeded(1)).unwrap();

        assert_eq!(next.generation(), 42);
        assert!((next.offspring_ratio() - 0.4).abs() < 1e-12);
        assert_eq!(next.mutation_rate(), 3);
    }

    #[test]
    fn test_single_individual_population() {
        // cutoff 0, offspring 1: pool of 1 plus one child
        let config = EvolutionConfig::default().with_offspring_ratio(0.9);
        let population = Population::new(vec![vec![A, B, C, D]], in_place, &config).unwrap();
        let next = evolve(&population, &mut RngSource::seeded(3)).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next.individuals()[0], vec![A, B, C, D]);
    }

    #[test]
    fn test_evolve_rejects_nan_fitness() {
        let population = Population::new(
            vec![vec![A, B, C, D]; 3],
            |_: &[char]| f64::NAN,
            &EvolutionConfig::default(),
        )
        .unwrap();
        let result = evolve(&population, &mut RngSource::seeded(0));
        assert_eq!(result.unwrap_err(), GaError::NanFitness { index: 0 });
    }

    #[test]
    fn test_best_returns_fittest() {
        let population = abcd_population(0);
        assert_eq!(best(&population).unwrap(), &[A, B, C, D]);
    }

    #[test]
    fn test_best_tie_returns_earliest() {
        let population = Population::new(
            vec![vec![B, A, C, D], vec![A, B, D, C], vec![D, C, B, A]],
            in_place,
            &EvolutionConfig::default(),
        )
        .unwrap();
        assert_eq!(best(&population).unwrap(), &[B, A, C, D]);
    }

    #[test]
    fn test_evolve_and_best_do_not_mutate_input() {
        let population = abcd_population(2);
        let before = population.individuals().to_vec();

        let _ = best(&population).unwrap();
        let _ = evolve(&population, &mut RngSource::seeded(5)).unwrap();

        assert_eq!(population.individuals(), before.as_slice());
        assert_eq!(population.generation(), 1);
    }

    #[test]
    fn test_best_never_regresses_across_generations() {
        let population = Population::new(
            (0..8)
                .map(|i| if i % 2 == 0 { vec![D, C, B, A] } else { vec![B, A, D, C] })
                .collect(),
            in_place,
            &EvolutionConfig::default().with_mutation_rate(2),
        )
        .unwrap();
        let mut rng = RngSource::seeded(11);

        let mut current = population;
        let mut last = in_place(best(&current).unwrap());
        for _ in 0..20 {
            current = evolve(&current, &mut rng).unwrap();
            let score = in_place(best(&current).unwrap());
            assert!(score >= last, "best regressed from {last} to {score}");
            last = score;
        }
    }

    fn individual_strategy() -> impl Strategy<Value = Vec<u8>> {
        Just((0u8..8).collect::<Vec<_>>()).prop_shuffle()
    }

    fn weighted(genes: &[u8]) -> f64 {
        genes
            .iter()
            .enumerate()
            .map(|(i, &g)| (i as f64) * (g as f64))
            .sum()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_evolve_laws(
            individuals in proptest::collection::vec(individual_strategy(), 1..24),
            ratio in 0.05f64..0.95,
            mutation_rate in 0usize..6,
            seed in any::<u64>(),
        ) {
            let config = EvolutionConfig::default()
                .with_offspring_ratio(ratio)
                .with_mutation_rate(mutation_rate);
            let population = Population::new(individuals.clone(), weighted, &config).unwrap();
            let next = evolve(&population, &mut RngSource::seeded(seed)).unwrap();

            let n = individuals.len();
            let offspring_count = n - (n as f64 * ratio).floor() as usize;
            prop_assert_eq!(next.len(), 2 * offspring_count);
            prop_assert_eq!(next.generation(), population.generation() + 1);
            prop_assert_eq!(population.individuals(), individuals.as_slice());

            let genes: Vec<u8> = (0..8).collect();
            for child in next.individuals() {
                let mut sorted_child = child.clone();
                sorted_child.sort_unstable();
                prop_assert_eq!(&sorted_child, &genes);
            }
        }

        #[test]
        fn prop_best_is_maximal(
            individuals in proptest::collection::vec(individual_strategy(), 1..24),
        ) {
            let population =
                Population::new(individuals, weighted, &EvolutionConfig::default()).unwrap();
            let top = weighted(best(&population).unwrap());
            for individual in population.individuals() {
                prop_assert!(top >= weighted(individual));
            }
        }
    }

    #[test]
    fn test_children_are_permutations_with_seeded_rng() {
        let population = abcd_population(3);
        let mut rng = RngSource::seeded(2024);
        let mut current = population;
        for _ in 0..10 {
            current = evolve(&current, &mut rng).unwrap();
            for individual in current.individuals() {
                assert_eq!(sorted(individual), vec![A, B, C, D]);
            }
        }
    }
}
