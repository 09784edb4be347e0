//! Evolution loop execution.
//!
//! [`EvolutionEngine`] drives the whole run:
//! initialization → sort → (report → generation → sort) × N → best tour.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, instrument};

use super::config::EvolutionConfig;
use super::generation::{next_generation, GenerationOutcome};
use super::population::Population;
use super::report::{GenerationReport, NoopReporter, Reporter};
use crate::error::{Error, Result};
use crate::geometry::City;
use crate::random::create_rng;
use crate::tour::Tour;

/// Lifecycle of an [`EvolutionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Population built and sorted; no generation has run yet.
    Initialized,
    /// At least one generation has run.
    Evolving,
    /// The generation budget is exhausted.
    Terminated,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// Best tour in the final population.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-so-far length before the first generation and after each one.
    ///
    /// Non-increasing; `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// Genetic algorithm engine for one TSP instance.
///
/// Owns the city list, the population, and the random source. Runs are
/// reproducible: the same cities, configuration, and seeded generator always
/// produce the same sequence of populations.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{EvolutionConfig, EvolutionEngine, NoopReporter};
/// use u_tsp::geometry::City;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let config = EvolutionConfig::quick().with_seed(42);
/// let mut engine = EvolutionEngine::from_config(cities, config).unwrap();
/// let result = engine.run(NoopReporter);
/// assert!((result.best_length - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct EvolutionEngine<R> {
    cities: Vec<City>,
    config: EvolutionConfig,
    rng: R,
    population: Population,
    state: EngineState,
    generation: usize,
    best_so_far: f64,
    fitness_history: Vec<f64>,
}

impl EvolutionEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when it is `None`.
    pub fn from_config(cities: Vec<City>, config: EvolutionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::new(cities, config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Validates the inputs, builds the initial population, and sorts it.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `config` fails [`EvolutionConfig::validate`]
    /// - [`Error::TooFewCities`] if fewer than 2 cities are given
    pub fn new(cities: Vec<City>, config: EvolutionConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        if cities.len() < 2 {
            return Err(Error::TooFewCities {
                count: cities.len(),
            });
        }

        let mut population = Population::random(cities.len(), config.population_size, &mut rng);
        population.sort_by_length(&cities, config.parallel);
        let best_so_far = population.best().length(&cities);
        let fitness_history = vec![best_so_far];

        Ok(Self {
            cities,
            config,
            rng,
            population,
            state: EngineState::Initialized,
            generation: 0,
            best_so_far,
            fitness_history,
        })
    }

    /// Runs the remaining generations, reporting before each one.
    ///
    /// Termination is purely count-based. Calling `run` again on a
    /// terminated engine returns the same result without evolving further.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            cities = self.cities.len(),
            population = self.config.population_size,
            generations = self.config.generations
        )
    )]
    pub fn run<P: Reporter>(&mut self, mut reporter: P) -> EvolutionResult {
        info!(best_length = self.best_so_far, "evolution started");

        while self.generation < self.config.generations {
            reporter.on_generation(&GenerationReport {
                generation: self.generation,
                best_so_far: self.best_so_far,
                population: &self.population,
                cities: &self.cities,
            });
            self.step();
        }

        self.state = EngineState::Terminated;
        let result = self.result();
        info!(
            generations = result.generations,
            best_length = result.best_length,
            "evolution finished"
        );
        result
    }

    /// Runs exactly one generation and re-sorts the population.
    ///
    /// Moves the engine from `Initialized` to `Evolving`. Does not consult
    /// the generation budget; [`run`](Self::run) does.
    pub fn step(&mut self) -> GenerationOutcome {
        if self.state == EngineState::Initialized {
            self.state = EngineState::Evolving;
        }

        let outcome = next_generation(
            &mut self.population,
            &self.cities,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.population
            .sort_by_length(&self.cities, self.config.parallel);
        self.generation += 1;

        let current = self.population.best().length(&self.cities);
        if current < self.best_so_far {
            debug!(
                generation = self.generation,
                best_length = current,
                "best so far improved"
            );
            self.best_so_far = current;
        }
        self.fitness_history.push(self.best_so_far);

        outcome
    }

    /// Snapshot of the current best tour and statistics.
    pub fn result(&self) -> EvolutionResult {
        let best = self.population.best().clone();
        EvolutionResult {
            best_length: best.length(&self.cities),
            best,
            generations: self.generation,
            fitness_history: self.fitness_history.clone(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Shortest tour length seen so far.
    pub fn best_so_far(&self) -> f64 {
        self.best_so_far
    }

    /// Current population, sorted ascending by length.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The city list.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}

/// Builds an engine from `config` and runs it to completion without reporting.
///
/// # Errors
/// See [`EvolutionEngine::new`].
pub fn solve(cities: Vec<City>, config: EvolutionConfig) -> Result<EvolutionResult> {
    let mut engine = EvolutionEngine::from_config(cities, config)?;
    Ok(engine.run(NoopReporter))
}

// ============================================================================
// Tests
// ============================================================================
