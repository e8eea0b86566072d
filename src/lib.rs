//! Generational genetic algorithm over permutations.
//!
//! Evolves a population of candidate orderings toward higher fitness,
//! generation over generation, under a pluggable fitness function:
//!
//! - **Array utilities** ([`array`]): non-destructive `range`, `swap` and
//!   `shuffle` helpers.
//! - **Random source** ([`random`]): the bounded integer generator every
//!   random decision goes through; seedable or fully scripted.
//! - **GA engine** ([`ga`]): the immutable `Population` snapshot,
//!   `evolve`/`best`, permutation-preserving operators, and a runner that
//!   drives the loop with cancellation.
//! - **TSP** ([`tsp`]): cities, closed-tour length, random instances and
//!   an experiment wrapper.
//!
//! # Example
//!
//! ```
//! use tour_evolve::ga::{best, evolve, EvolutionConfig, Population};
//! use tour_evolve::random::RngSource;
//! use tour_evolve::tsp::{random_cities, seed_population, tour_fitness};
//!
//! let mut rng = RngSource::seeded(7);
//! let cities = random_cities(12, 640, 480, &mut rng)?;
//! let individuals = seed_population(&cities, 30, &mut rng);
//!
//! let mut population = Population::new(individuals, tour_fitness, &EvolutionConfig::default())?;
//! for _ in 0..100 {
//!     population = evolve(&population, &mut rng)?;
//! }
//! assert_eq!(population.generation(), 101);
//! assert_eq!(best(&population)?.len(), 12);
//! # Ok::<(), tour_evolve::ga::GaError>(())
//! ```
//!
//! # Architecture
//!
//! The engine is synchronous and holds no global state. Each `evolve` call
//! borrows one snapshot and allocates the next, so independent lineages can
//! run on separate threads while a single lineage is strictly sequential.
//! Diagnostics go through `tracing`; no subscriber is installed here.

pub mod array;
pub mod ga;
pub mod random;
pub mod tsp;
