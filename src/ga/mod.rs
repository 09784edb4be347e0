//! Genetic algorithm for the TSP.
//!
//! A steady-state GA over permutation-encoded tours. Every generation
//! produces two children by segment best-insertion crossover, polishes them
//! with greedy relocation, and lets them replace the two worst tours only
//! when strictly shorter.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Population size, generation budget, mutation rate, seed
//! - [`EvolutionEngine`]: Executes the generation loop
//! - [`EvolutionResult`]: Best tour and best-so-far history
//! - [`Population`]: Fixed-size, length-sorted collection of tours
//! - [`Reporter`]: Per-generation observer hook
//!
//! # Submodules
//!
//! - [`crossover`]: Segment best-insertion crossover
//! - [`mutation`]: Greedy relocation and random swap
//! - [`generation`]: One selection → crossover → mutation → replacement step
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod crossover;
mod engine;
pub mod generation;
pub mod mutation;
mod population;
mod report;

pub use config::EvolutionConfig;
pub use engine::{solve, EngineState, EvolutionEngine, EvolutionResult};
pub use generation::{next_generation, GenerationOutcome};
pub use population::{diversity_histogram, Population};
pub use report::{GenerationReport, NoopReporter, ProgressReporter, Reporter};
