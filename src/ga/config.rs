//! GA configuration.
//!
//! [`EvolutionConfig`] holds the scalar parameters a [`Population`](super::Population)
//! carries from one generation to the next.

use super::error::GaError;

/// Scalar parameters of the generational GA.
///
/// # Defaults
///
/// ```
/// use tour_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.offspring_ratio, 0.5);
/// assert_eq!(config.mutation_rate, 1);
/// assert_eq!(config.initial_generation, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tour_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_offspring_ratio(0.3)
///     .with_mutation_rate(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Fraction of the population used to compute the cutoff, in `(0, 1)`.
    ///
    /// Each generation keeps the top `n - floor(n * offspring_ratio)`
    /// individuals and breeds the same number of offspring from them.
    pub offspring_ratio: f64,

    /// Number of random swaps applied to each offspring.
    ///
    /// `0` disables mutation entirely.
    pub mutation_rate: usize,

    /// Generation counter of the initial population.
    pub initial_generation: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            offspring_ratio: 0.5,
            mutation_rate: 1,
            initial_generation: 1,
        }
    }
}

impl EvolutionConfig {
    /// Sets the offspring ratio.
    ///
    /// Not clamped; out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_offspring_ratio(mut self, ratio: f64) -> Self {
        self.offspring_ratio = ratio;
        self
    }

    /// Sets the number of swaps per offspring.
    pub fn with_mutation_rate(mut self, rate: usize) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation counter of the initial population.
    pub fn with_initial_generation(mut self, generation: u64) -> Self {
        self.initial_generation = generation;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::OffspringRatioOutOfRange`] unless `0 < offspring_ratio < 1`.
    pub fn validate(&self) -> Result<(), GaError> {
        validate_ratio(self.offspring_ratio)
    }
}

pub(crate) fn validate_ratio(ratio: f64) -> Result<(), GaError> {
    // NaN fails both comparisons
    if ratio > 0.0 && ratio < 1.0 {
        Ok(())
    } else {
        Err(GaError::OffspringRatioOutOfRange(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert!((config.offspring_ratio - 0.5).abs() < 1e-12);
        assert_eq!(config.mutation_rate, 1);
        assert_eq!(config.initial_generation, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_offspring_ratio(0.25)
            .with_mutation_rate(0)
            .with_initial_generation(10);

        assert!((config.offspring_ratio - 0.25).abs() < 1e-12);
        assert_eq!(config.mutation_rate, 0);
        assert_eq!(config.initial_generation, 10);
    }

    #[test]
    fn test_validate_ratio_bounds() {
        for ratio in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = EvolutionConfig::default().with_offspring_ratio(ratio);
            assert!(
                matches!(
                    config.validate(),
                    Err(GaError::OffspringRatioOutOfRange(_))
                ),
                "ratio {ratio} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_ratio_interior() {
        for ratio in [0.1, 0.5, 0.9, 1e-9, 1.0 - 1e-9] {
            let config = EvolutionConfig::default().with_offspring_ratio(ratio);
            assert!(config.validate().is_ok(), "ratio {ratio} should pass");
        }
    }
}
