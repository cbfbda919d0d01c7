//! Configuration errors
//!
//! The simulation itself cannot fail once constructed. Everything that can go
//! wrong is caught while validating a `Tuning`, before a run exists.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("obstacle distance range is empty: min {min} > max {max}")]
    SpacingRange { min: f32, max: f32 },

    #[error("spawn interval floor {min} exceeds initial interval {initial}")]
    SpawnIntervalRange { min: f32, initial: f32 },

    #[error("air lane at {air} overlaps the ground lane at {ground}")]
    LaneOrder { air: f32, ground: f32 },

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
}
