//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the generation loop.

use crate::error::ConfigError;

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 350);
/// assert_eq!(config.generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(100)
///     .with_generations(2_000)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Number of tours in the population. Constant for the whole run.
    pub population_size: usize,

    /// Number of generations to evolve. Zero returns the best initial tour.
    pub generations: usize,

    /// Probability that one random non-best tour gets a random swap
    /// at the end of a generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to compute population lengths in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled. Results are
    /// identical to the sequential path.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 350,
            generations: 10_000,
            mutation_rate: 0.20,
            seed: None,
            parallel: false,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random-swap mutation rate.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel length computation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The classic parameter set: population 350, 10 000 generations,
    /// mutation rate 0.20. Same as [`Default`].
    pub fn classic() -> Self {
        Self::default()
    }

    /// Preset for small instances and interactive use.
    ///
    /// - Population: 50, Generations: 500
    pub fn quick() -> Self {
        Self {
            population_size: 50,
            generations: 500,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 350);
        assert_eq!(config.generations, 10_000);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert_eq!(config, EvolutionConfig::classic());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_generations(300)
            .with_mutation_rate(0.5)
            .with_seed(42)
            .with_parallel(true);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 300);
        assert!((config.mutation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
        assert!(EvolutionConfig::quick().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EvolutionConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPopulation));
    }

    #[test]
    fn test_validate_zero_generations_allowed() {
        let config = EvolutionConfig::default().with_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(EvolutionConfig::default()
            .with_mutation_rate(0.0)
            .validate()
            .is_ok());
        assert!(EvolutionConfig::default()
            .with_mutation_rate(1.0)
            .validate()
            .is_ok());
        assert_eq!(
            EvolutionConfig::default().with_mutation_rate(1.5).validate(),
            Err(ConfigError::MutationRateOutOfRange(1.5))
        );
        assert!(EvolutionConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(EvolutionConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_chainable() {
        let config = EvolutionConfig::quick().with_seed(7);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 500);
        assert_eq!(config.seed, Some(7));
    }
}
