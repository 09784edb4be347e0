//! Genetic algorithm for the planar Traveling Salesman Problem.
//!
//! Searches for a short closed tour through a fixed set of points with a
//! steady-state evolutionary loop:
//!
//! - **Segment best-insertion crossover**: a donor segment is re-inserted
//!   into the recipient's remaining order at its best position.
//! - **Greedy relocation**: one city moves to the first position that
//!   shortens the tour.
//! - **Random swap**: occasional unconditional swap for diversity.
//! - **Elitist replacement**: children only displace the two worst tours,
//!   and only when strictly shorter.
//!
//! # Modules
//!
//! - [`geometry`]: [`City`](geometry::City) and the Euclidean metric
//! - [`tour`]: [`Tour`](tour::Tour) and tour length evaluation
//! - [`ga`]: Population, operators, and the [`EvolutionEngine`](ga::EvolutionEngine)
//! - [`io`]: Coordinate file loader and SVG renderer
//! - [`random`]: Seedable random sources
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::{solve, EvolutionConfig};
//! use u_tsp::geometry::City;
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 1.0),
//!     City::new(1.0, 1.0),
//!     City::new(1.0, 0.0),
//! ];
//! let config = EvolutionConfig::quick().with_seed(7);
//! let result = solve(cities, config).unwrap();
//! assert!((result.best_length - 4.0).abs() < 1e-10);
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod io;
pub mod random;
pub mod tour;

pub use error::{Error, Result};
