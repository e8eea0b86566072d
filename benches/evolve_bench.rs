//! Criterion benchmarks for the GA engine.
//!
//! Uses random TSP instances to measure a single generational step,
//! crossover alone, and a full runner loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tour_evolve::ga::operators::prefix_order_crossover;
use tour_evolve::ga::{evolve, EvolutionConfig, GaRunner, Population};
use tour_evolve::random::RngSource;
use tour_evolve::tsp::{random_cities, seed_population, tour_fitness, City};

fn tsp_population(cities: usize, individuals: usize) -> Population<City> {
    let mut rng = RngSource::seeded(42);
    let cities = random_cities(cities, 1000, 1000, &mut rng).expect("area fits cities");
    let individuals = seed_population(&cities, individuals, &mut rng);
    Population::new(individuals, tour_fitness, &EvolutionConfig::default())
        .expect("valid population")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evolve_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_step");
    group.sample_size(20);

    for (cities, individuals) in [(10usize, 30usize), (50, 100), (200, 200)] {
        let population = tsp_population(cities, individuals);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}", cities, individuals), cities),
            &population,
            |b, p| {
                let mut rng = RngSource::seeded(7);
                b.iter(|| {
                    let next = evolve(black_box(p), &mut rng);
                    black_box(next)
                })
            },
        );
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_order_crossover");

    for &n in &[10usize, 100, 500] {
        let a: Vec<usize> = (0..n).collect();
        let b: Vec<usize> = (0..n).rev().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(prefix_order_crossover(black_box(a), black_box(b), n / 2)))
        });
    }
    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_runner_tsp");
    group.sample_size(10);

    for &generations in &[50u64, 200] {
        let population = tsp_population(20, 50);
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &population,
            |b, p| {
                b.iter(|| {
                    let result =
                        GaRunner::run(p.clone(), black_box(generations), &mut RngSource::seeded(42));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evolve_step, bench_crossover, bench_runner);
criterion_main!(benches);
