// src/error.rs

use thiserror::Error;

/// Errors raised while building grids or loading a simulation configuration.
///
/// The generators themselves never fail; everything here is caught before a
/// pass runs.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cellular radius {radius} is too large for the neighbour window")]
    InvalidRadius { radius: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("`{name}` must be a finite, non-negative number (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("agent start ({x}, {y}) lies outside a {height}x{width} grid")]
    AgentOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
