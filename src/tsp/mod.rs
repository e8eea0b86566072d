//! Traveling Salesman Problem on top of the GA engine.
//!
//! Individuals are orderings of [`City`] values and fitness is the negated
//! closed-tour length, so [`best`](crate::ga::best) returns the shortest
//! tour of a generation.
//!
//! - [`tour_length`] / [`tour_fitness`]: scoring
//! - [`random_cities`] / [`seed_population`]: initial state
//! - [`Experiment`]: seeds a population and runs [`GaRunner`](crate::ga::GaRunner)

mod config;
mod runner;
mod types;

pub use config::ExperimentConfig;
pub use runner::{random_cities, seed_population, Experiment, ExperimentResult};
pub use types::{tour_fitness, tour_length, City};
