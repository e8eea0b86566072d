//! Permutation-preserving genetic operators.
//!
//! These work on any gene type with value equality, so points with `f64`
//! coordinates can be used directly without a `Hash`/`Eq` bound.
//!
//! # Crossover
//!
//! - [`prefix_order_crossover`]: keep a prefix of one parent, fill the rest
//!   in the other parent's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: apply a fixed number of random two-position swaps

use crate::array::{swap, IndexOutOfRange};
use crate::random::RandomSource;

/// Minimum individual length.
///
/// The crossover point is drawn from `[1, len - 2)`, which is empty below
/// four genes.
pub const MIN_GENES: usize = 4;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws a crossover point for individuals of length `len`.
///
/// Returns a value in `[1, len - 2)`.
///
/// # Panics
/// Panics if `len < MIN_GENES`, where the range is empty.
pub fn crossover_point<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> usize {
    assert!(
        len >= MIN_GENES,
        "crossover needs at least {MIN_GENES} genes, got {len}"
    );
    rng.random_int(1, len - 2)
}

/// Order-preserving prefix crossover.
///
/// The child starts with `a[..point]`. Then `b`'s genes are appended in
/// `b`'s order, skipping each gene that matches one already taken from the
/// prefix. Each prefix gene absorbs at most one equal gene of `b`, so when
/// `b` is a permutation of `a` the child is too, even with repeated genes.
///
/// ```
/// use tour_evolve::ga::operators::prefix_order_crossover;
///
/// let child = prefix_order_crossover(&['A', 'B', 'C', 'D'], &['D', 'C', 'B', 'A'], 1);
/// assert_eq!(child, vec!['A', 'D', 'C', 'B']);
/// ```
///
/// # Complexity
/// O(n · point) comparisons, O(n) space
///
/// # Panics
/// Panics if `point > a.len()`.
pub fn prefix_order_crossover<T: Clone + PartialEq>(a: &[T], b: &[T], point: usize) -> Vec<T> {
    assert!(
        point <= a.len(),
        "crossover point {point} exceeds parent length {}",
        a.len()
    );

    let prefix = &a[..point];
    let mut matched = vec![false; prefix.len()];
    let mut child = Vec::with_capacity(a.len().max(b.len()));
    child.extend_from_slice(prefix);

    for gene in b {
        let duplicate = prefix
            .iter()
            .zip(matched.iter_mut())
            .find(|(taken, used)| !**used && *taken == gene);
        match duplicate {
            Some((_, used)) => *used = true,
            None => child.push(gene.clone()),
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Applies `rate` successive random swaps to `individual`.
///
/// Each swap draws two indices independently over the full length, with
/// replacement; equal indices make that swap a no-op. Swaps compound: each
/// one is applied to the result of the previous one.
///
/// # Errors
/// Returns [`IndexOutOfRange`] only if `rng` violates its `[low, high)`
/// contract.
pub fn swap_mutation<T: Clone, R: RandomSource + ?Sized>(
    individual: Vec<T>,
    rate: usize,
    rng: &mut R,
) -> Result<Vec<T>, IndexOutOfRange> {
    let n = individual.len();
    if n == 0 {
        return Ok(individual);
    }

    let mut mutated = individual;
    for _ in 0..rate {
        let x = rng.random_int(0, n);
        let y = rng.random_int(0, n);
        mutated = swap(&mutated, x, y)?;
    }
    Ok(mutated)
}

// ============================================================================
// Tests
// ============================================================================
