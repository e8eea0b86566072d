//! # TSP Tour Example
//!
//! Places random cities on an 800×600 board and evolves a population of
//! tours toward the shortest closed route, logging progress with `tracing`.
//!
//! ```text
//! cargo run --example tsp_tour -- [seed]
//! RUST_LOG=tour_evolve=debug cargo run --example tsp_tour
//! ```

use tour_evolve::ga::GaError;
use tour_evolve::random::RngSource;
use tour_evolve::tsp::{tour_length, Experiment, ExperimentConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 800;
const HEIGHT: usize = 600;
const REPORT_EVERY: u64 = 100;

fn main() -> Result<(), GaError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    let mut rng = RngSource::seeded(seed);

    let config = ExperimentConfig::default()
        .with_city_count(20)
        .with_generations(1000)
        .with_individuals(60)
        .with_offspring_ratio(0.5)
        .with_mutation_rate(1);
    let experiment = Experiment::generate(config, WIDTH, HEIGHT, &mut rng)?;
    info!(seed, cities = experiment.cities().len(), "cities placed");

    let result = experiment.run_with_cancel(&mut rng, None, |stats| {
        if stats.generation % REPORT_EVERY == 0 || stats.generation == 1 {
            info!(
                generation = stats.generation,
                distance = tour_length(stats.best),
                population = stats.population_size,
                "generation"
            );
        }
    })?;

    info!(
        generations = result.generations,
        distance = result.best_distance,
        "best tour found"
    );
    for (i, city) in result.best_tour.iter().enumerate() {
        println!("{i:>3}: ({:>5.0}, {:>5.0})", city.x, city.y);
    }
    Ok(())
}
