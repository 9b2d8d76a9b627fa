//! Configuration for a game

use crate::error::ConfigError;
use crate::types::{
    BASE_DROP_INTERVAL_SECS, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
    DROP_INTERVAL_DECREMENT_SECS, MIN_BOARD_SIDE, MIN_DROP_INTERVAL_SECS,
};

/// Board dimensions and gravity tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Board width in cells
    pub width: u8,

    /// Board height in cells
    pub height: u8,

    /// Seconds per gravity step with no rows cleared
    pub base_drop_interval: f64,

    /// Seconds removed from the interval per cleared row
    pub drop_interval_decrement: f64,

    /// Fastest allowed interval
    pub min_drop_interval: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            base_drop_interval: BASE_DROP_INTERVAL_SECS,
            drop_interval_decrement: DROP_INTERVAL_DECREMENT_SECS,
            min_drop_interval: MIN_DROP_INTERVAL_SECS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the starting drop interval in seconds
    pub fn with_base_drop_interval(mut self, secs: f64) -> Self {
        self.base_drop_interval = secs;
        self
    }

    /// Set the per-row speed-up in seconds
    pub fn with_drop_interval_decrement(mut self, secs: f64) -> Self {
        self.drop_interval_decrement = secs;
        self
    }

    /// Set the interval floor in seconds
    pub fn with_min_drop_interval(mut self, secs: f64) -> Self {
        self.min_drop_interval = secs;
        self
    }

    /// Check that the configuration can drive a game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_SIDE || self.height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_SIDE,
            });
        }
        for (name, value) in [
            ("base_drop_interval", self.base_drop_interval),
            ("min_drop_interval", self.min_drop_interval),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidInterval { name, value });
            }
        }
        if !self.drop_interval_decrement.is_finite() || self.drop_interval_decrement < 0.0 {
            return Err(ConfigError::InvalidInterval {
                name: "drop_interval_decrement",
                value: self.drop_interval_decrement,
            });
        }
        if self.min_drop_interval > self.base_drop_interval {
            return Err(ConfigError::IntervalFloorAboveBase {
                min: self.min_drop_interval,
                base: self.base_drop_interval,
            });
        }
        Ok(())
    }

    /// Drop interval after `rows` cleared rows
    pub fn drop_interval_for_rows(&self, rows: u32) -> f64 {
        (self.base_drop_interval - self.drop_interval_decrement * rows as f64)
            .max(self.min_drop_interval)
    }
}
