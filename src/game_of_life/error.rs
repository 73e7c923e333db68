//! Error type shared by the engine and the pattern library

use thiserror::Error;

/// Errors raised by grid and pattern operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("invalid pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
