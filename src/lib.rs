//! Gravity Runner - a two-lane obstacle-avoidance runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player lanes, obstacles, spawning, difficulty)
//! - `tuning`: Data-driven game balance, validated before a run can start
//! - `control`: Control-signal sources and the difficulty-predictor hook
//! - `error`: Configuration errors

pub mod control;
pub mod error;
pub mod sim;
pub mod tuning;

pub use control::{Autopilot, Baseline, ControlSource, DifficultyPredictor, HeldButton, Performance};
pub use error::ConfigError;
pub use tuning::Tuning;

/// Game configuration constants
///
/// Screen-space units: x grows to the right, y grows downward.
pub mod consts {
    /// Simulation rate the per-tick constants are calibrated for
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ground baseline (bottom edge of anything standing on the ground)
    pub const GROUND_Y: f32 = 350.0;
    /// Top edge of anything in the air lane
    pub const AIR_Y: f32 = 150.0;

    /// Player box, fixed horizontal position
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Max vertical travel per tick when switching lanes
    pub const TRANSITION_STEP: f32 = 15.0;

    /// Obstacle box
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;

    /// Scroll speed (pixels per tick)
    pub const SPEED_INITIAL: f32 = 5.0;
    pub const SPEED_INCREMENT_BASE: f32 = 0.004;
    /// Score at which the per-tick speed increment has doubled
    pub const SPEED_SCALE_DIVISOR: f32 = 500.0;

    /// Spawn interval (milliseconds of simulated time)
    pub const SPAWN_INTERVAL_INITIAL: f32 = 1000.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 500.0;
    /// Milliseconds removed from the interval per point of score
    pub const SPAWN_DECAY_RATE: f32 = 2.0;

    /// Horizontal distance between consecutive obstacles at spawn time
    pub const OBSTACLE_DISTANCE_MIN: f32 = 300.0;
    pub const OBSTACLE_DISTANCE_MAX: f32 = 600.0;

    /// Score gained per surviving tick
    pub const SCORE_INCREMENT: f32 = 0.05;
}
