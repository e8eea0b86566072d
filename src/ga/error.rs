use crate::array::IndexOutOfRange;

/// Errors surfaced by the GA engine, runner and TSP helpers.
///
/// Every precondition violation is reported to the immediate caller; the
/// engine never repairs a population or substitutes a default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// The population holds no individuals.
    #[error("population must contain at least one individual")]
    EmptyPopulation,

    /// The offspring ratio is not strictly between 0 and 1.
    #[error("offspring ratio must be in the open interval (0, 1), got {0}")]
    OffspringRatioOutOfRange(f64),

    /// Individuals are too short to pick a crossover point.
    #[error("individuals need at least {min} genes, got {len}")]
    IndividualTooShort { len: usize, min: usize },

    /// Individuals within one population differ in length.
    #[error("individual {index} has {found} genes, expected {expected}")]
    MixedLengths {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// `size * offspring_ratio` rounded to the full population size, which
    /// would leave nothing to select from.
    #[error("offspring ratio {offspring_ratio} leaves an empty selection pool for {size} individuals")]
    EmptySelectionPool { size: usize, offspring_ratio: f64 },

    /// The fitness function returned NaN, which has no rank.
    #[error("fitness of individual {index} is NaN")]
    NanFitness { index: usize },

    /// A runner or experiment parameter is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
}
