//! Error types for game configuration
use thiserror::Error;

/// Errors raised when a game is configured with unusable parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Board side shorter than the widest piece
    #[error("invalid board size {width}x{height}: each side must be at least {min}")]
    BoardTooSmall { width: u8, height: u8, min: u8 },

    /// Interval that is zero, negative or not a number
    #[error("invalid drop interval `{name}`: {value}")]
    InvalidInterval { name: &'static str, value: f64 },

    /// Floor above the starting interval
    #[error("minimum drop interval {min} exceeds base interval {base}")]
    IntervalFloorAboveBase { min: f64, base: f64 },
}

impl ConfigError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::BoardTooSmall { .. } => "board_too_small",
            ConfigError::InvalidInterval { .. } => "invalid_interval",
            ConfigError::IntervalFloorAboveBase { .. } => "interval_floor_above_base",
        }
    }
}
