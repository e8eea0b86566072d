//! Cities and closed-tour length.

/// A city on the plane.
///
/// Cities are compared by coordinate value, which is what the crossover
/// operator uses to recognize genes it has already placed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Length of the closed tour visiting `tour` in order and returning to
/// the first city.
///
/// Tours with fewer than two cities have length 0.
///
/// ```
/// use tour_evolve::tsp::{tour_length, City};
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// assert!((tour_length(&square) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_length(tour: &[City]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    tour.iter()
        .zip(tour.iter().cycle().skip(1))
        .map(|(from, to)| from.distance(to))
        .sum()
}

/// Fitness of a tour: its negated length, so shorter tours rank higher.
pub fn tour_fitness(tour: &[City]) -> f64 {
    -tour_length(tour)
}
