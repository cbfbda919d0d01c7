//! Game balance and geometry
//!
//! Every constant the simulation reads lives in one `Tuning` value so a run
//! can be rebalanced from JSON without recompiling. Defaults mirror `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub ground_y: f32,
    pub air_y: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Max vertical travel per tick between lanes
    pub transition_step: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    /// Disable to run without any obstacles (tests, warm-up)
    pub spawning_enabled: bool,

    // === Difficulty ===
    pub speed_initial: f32,
    pub speed_increment_base: f32,
    pub speed_scale_divisor: f32,
    /// Spawn interval values are milliseconds of simulated time
    pub spawn_interval_initial: f32,
    pub spawn_interval_min: f32,
    pub spawn_decay_rate: f32,

    // === Scoring / timing ===
    pub score_increment: f32,
    pub tick_rate_hz: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,
            air_y: AIR_Y,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            transition_step: TRANSITION_STEP,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            distance_min: OBSTACLE_DISTANCE_MIN,
            distance_max: OBSTACLE_DISTANCE_MAX,
            spawning_enabled: true,

            speed_initial: SPEED_INITIAL,
            speed_increment_base: SPEED_INCREMENT_BASE,
            speed_scale_divisor: SPEED_SCALE_DIVISOR,
            spawn_interval_initial: SPAWN_INTERVAL_INITIAL,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_decay_rate: SPAWN_DECAY_RATE,

            score_increment: SCORE_INCREMENT,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document (missing keys use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Simulated milliseconds that elapse per tick
    pub fn tick_ms(&self) -> f32 {
        1000.0 / self.tick_rate_hz
    }

    /// Top edge of a box of `height` standing on the ground baseline
    pub fn ground_top(&self, height: f32) -> f32 {
        self.ground_y - height
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("field_width", self.field_width),
            ("ground_y", self.ground_y),
            ("air_y", self.air_y),
            ("player_x", self.player_x),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("transition_step", self.transition_step),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("distance_min", self.distance_min),
            ("distance_max", self.distance_max),
            ("speed_initial", self.speed_initial),
            ("speed_increment_base", self.speed_increment_base),
            ("speed_scale_divisor", self.speed_scale_divisor),
            ("spawn_interval_initial", self.spawn_interval_initial),
            ("spawn_interval_min", self.spawn_interval_min),
            ("spawn_decay_rate", self.spawn_decay_rate),
            ("score_increment", self.score_increment),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("transition_step", self.transition_step),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("distance_min", self.distance_min),
            ("speed_scale_divisor", self.speed_scale_divisor),
            ("spawn_interval_min", self.spawn_interval_min),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("speed_initial", self.speed_initial),
            ("speed_increment_base", self.speed_increment_base),
            ("spawn_decay_rate", self.spawn_decay_rate),
            ("score_increment", self.score_increment),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.distance_min > self.distance_max {
            return Err(ConfigError::SpacingRange {
                min: self.distance_min,
                max: self.distance_max,
            });
        }

        if self.spawn_interval_min > self.spawn_interval_initial {
            return Err(ConfigError::SpawnIntervalRange {
                min: self.spawn_interval_min,
                initial: self.spawn_interval_initial,
            });
        }

        // An air box must clear a ground box and vice versa, or no lane is safe
        let air_bottom = self.air_y + self.player_height.max(self.obstacle_height);
        let ground_top = self.ground_y - self.player_height.max(self.obstacle_height);
        if air_bottom > ground_top {
            return Err(ConfigError::LaneOrder {
                air: self.air_y,
                ground: self.ground_y,
            });
        }

        Ok(())
    }
}
