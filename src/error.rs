//! Error types.
//!
//! Errors only surface at the boundary: configuration validation, input
//! parsing, and engine construction. Once an engine exists every operation
//! is infallible.

/// Invalid [`EvolutionConfig`](crate::ga::EvolutionConfig) values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    ZeroPopulation,
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
}

/// Malformed coordinate text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputFormatError {
    #[error("missing width/height header line")]
    MissingHeader,
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("input format error: {0}")]
    Input(#[from] InputFormatError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
