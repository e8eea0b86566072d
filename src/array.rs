//! Small sequence helpers used by the GA engine.
//!
//! All functions here are non-destructive: they borrow their input and
//! return a freshly allocated `Vec`.
//!
//! - [`range`]: index sequence `[0, size)`
//! - [`swap`]: copy with two positions exchanged
//! - [`shuffle`]: copy in randomized order

use crate::random::RandomSource;

/// Error returned by [`swap`] when an index falls outside the sequence.
///
/// ```
/// use tour_evolve::array::{swap, IndexOutOfRange};
///
/// let err = swap(&[1, 2, 3], 0, 3).unwrap_err();
/// assert_eq!(err, IndexOutOfRange { index: 3, len: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for a sequence of length {len}")]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// Length of the sequence that was indexed.
    pub len: usize,
}

/// Returns the index sequence `[0, 1, …, size - 1]`.
///
/// `size` is unsigned, so a negative size cannot be requested;
/// `range(0)` is empty.
///
/// ```
/// use tour_evolve::array::range;
///
/// assert_eq!(range(5), vec![0, 1, 2, 3, 4]);
/// assert!(range(0).is_empty());
/// ```
pub fn range(size: usize) -> Vec<usize> {
    (0..size).collect()
}

/// Returns a copy of `seq` with the elements at `x` and `y` exchanged.
///
/// # Errors
/// Returns [`IndexOutOfRange`] if either index is `>= seq.len()`.
pub fn swap<T: Clone>(seq: &[T], x: usize, y: usize) -> Result<Vec<T>, IndexOutOfRange> {
    let len = seq.len();
    for index in [x, y] {
        if index >= len {
            return Err(IndexOutOfRange { index, len });
        }
    }

    let mut copy = seq.to_vec();
    copy.swap(x, y);
    Ok(copy)
}

/// Returns the elements of `seq` in a randomized order.
///
/// Each element is tagged with a random sort key and the tagged elements
/// are stable-sorted by key. Duplicate keys keep their input order, so the
/// result is not perfectly uniform; it only needs to be diverse enough for
/// seeding an initial population.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut keyed: Vec<(usize, &T)> = seq
        .iter()
        .map(|value| (rng.random_int(0, usize::MAX), value))
        .collect();
    keyed.sort_by_key(|&(key, _)| key);
    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}
