//! Typed errors for grid access, configuration and driver input

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("invalid input event '{0}'")]
    InvalidEvent(String),
}
