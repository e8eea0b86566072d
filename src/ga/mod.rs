//! Generational genetic algorithm over permutations.
//!
//! A [`Population`] is an immutable snapshot of one generation. [`evolve`]
//! turns it into the next one and [`best`] picks its fittest individual.
//! Randomness comes from an injected [`RandomSource`](crate::random::RandomSource)
//! and fitness from a caller-supplied [`Fitness`] function, so every
//! transition can be replayed deterministically.
//!
//! # Key Types
//!
//! - [`Population`]: individuals plus the parameters that carry over
//! - [`EvolutionConfig`]: offspring ratio, mutation rate, starting generation
//! - [`GaRunner`]: drives `evolve` for a number of generations
//! - [`GaError`]: every precondition the engine checks
//!
//! # Submodules
//!
//! - [`operators`]: prefix order crossover and swap mutation
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod error;
mod evolve;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::EvolutionConfig;
pub use error::GaError;
pub use evolve::{best, evolve};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{rank, Ranked};
pub use types::{Fitness, Population};
