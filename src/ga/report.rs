//! Per-generation progress reporting.
//!
//! The engine performs no output of its own. Once per generation it hands a
//! [`GenerationReport`] to a [`Reporter`], which may log, collect statistics,
//! or render the current best tour.

use tracing::info;

use super::population::{diversity_histogram, Population};
use crate::geometry::City;

/// Snapshot handed to a [`Reporter`] before each generation runs.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// Zero-based index of the generation about to run.
    pub generation: usize,

    /// Shortest tour length seen so far.
    pub best_so_far: f64,

    /// Current population, sorted ascending by length.
    pub population: &'a Population,

    /// The city list tours index into.
    pub cities: &'a [City],
}

/// Observer invoked once per generation.
///
/// Implemented for closures taking `&GenerationReport<'_>`:
///
/// ```
/// use u_tsp::ga::{EvolutionConfig, EvolutionEngine, GenerationReport};
/// use u_tsp::geometry::City;
/// use u_tsp::random::create_rng;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_generations(50);
/// let mut engine = EvolutionEngine::new(cities, config, create_rng(42)).unwrap();
///
/// let mut history = Vec::new();
/// let result = engine.run(|r: &GenerationReport<'_>| history.push(r.best_so_far));
/// assert_eq!(history.len(), 50);
/// assert!((result.best_length - 4.0).abs() < 1e-10);
/// ```
pub trait Reporter {
    /// Called before generation `report.generation` runs.
    fn on_generation(&mut self, report: &GenerationReport<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&GenerationReport<'_>),
{
    fn on_generation(&mut self, report: &GenerationReport<'_>) {
        self(report)
    }
}

/// Reporter that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) {}
}

/// Logs progress through `tracing` at `INFO` level.
///
/// - the generation number every `generation_interval` generations
/// - the population diversity histogram every `histogram_interval` generations
/// - every strict improvement of the current best tour
///
/// An interval of 0 disables that line.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    generation_interval: usize,
    histogram_interval: usize,
    best: f64,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self {
            generation_interval: 100,
            histogram_interval: 1000,
            best: f64::INFINITY,
        }
    }
}

impl ProgressReporter {
    /// Creates a reporter with the default intervals (100 and 1000).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how often the generation number is logged.
    pub fn with_generation_interval(mut self, every: usize) -> Self {
        self.generation_interval = every;
        self
    }

    /// Sets how often the diversity histogram is logged.
    pub fn with_histogram_interval(mut self, every: usize) -> Self {
        self.histogram_interval = every;
        self
    }

    /// Best length this reporter has logged so far.
    pub fn best(&self) -> f64 {
        self.best
    }
}

impl Reporter for ProgressReporter {
    fn on_generation(&mut self, report: &GenerationReport<'_>) {
        let g = report.generation;

        if self.generation_interval > 0 && g % self.generation_interval == 0 {
            info!(generation = g, "generation");
        }

        if self.histogram_interval > 0 && g % self.histogram_interval == 0 {
            info!(generation = g, "population diversity");
            for (length, count) in diversity_histogram(report.population, report.cities) {
                info!("{length:.4} : {}", "*".repeat(count));
            }
        }

        let current = report.population.best().length(report.cities);
        if current < self.best {
            info!(generation = g, best_length = current, "new best tour");
            self.best = current;
        }
    }
}
