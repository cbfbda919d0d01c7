//! Difficulty curve coupling score to scroll speed and spawn cadence
//!
//! Speed grows by an increment that itself grows with score, so speed is
//! convex in elapsed ticks. The spawn interval shrinks linearly with score
//! until it hits its floor.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Output of one curve evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyStep {
    /// Speed to add this tick
    pub speed_increment: f32,
    /// Spawn interval the curve prescribes at this score (ms)
    pub spawn_interval: f32,
}

/// Pure score -> difficulty mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyScheduler {
    increment_base: f32,
    scale_divisor: f32,
    interval_initial: f32,
    interval_min: f32,
    decay_rate: f32,
}

impl DifficultyScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            increment_base: tuning.speed_increment_base,
            scale_divisor: tuning.speed_scale_divisor,
            interval_initial: tuning.spawn_interval_initial,
            interval_min: tuning.spawn_interval_min,
            decay_rate: tuning.spawn_decay_rate,
        }
    }

    /// Evaluate the curve at `score`.
    ///
    /// `multiplier` scales both the speed increment and the interval decay
    /// (1.0 is baseline). Negative or non-finite values count as 0.0.
    pub fn evaluate(&self, score: f32, multiplier: f32) -> DifficultyStep {
        let multiplier = sanitize_multiplier(multiplier);
        let speed_increment =
            self.increment_base * (1.0 + score / self.scale_divisor) * multiplier;
        let spawn_interval = (self.interval_initial - score * self.decay_rate * multiplier)
            .max(self.interval_min);
        DifficultyStep {
            speed_increment,
            spawn_interval,
        }
    }
}

fn sanitize_multiplier(multiplier: f32) -> f32 {
    if multiplier.is_finite() { multiplier.max(0.0) } else { 0.0 }
}

/// Live difficulty of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Scroll speed (pixels per tick)
    pub speed: f32,
    /// Time between spawns (ms)
    pub spawn_interval: f32,
}

impl Difficulty {
    pub fn initial(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.speed_initial,
            spawn_interval: tuning.spawn_interval_initial,
        }
    }

    /// Apply a curve step. Speed never drops and the interval never grows.
    pub fn apply(&mut self, step: DifficultyStep) {
        self.speed += step.speed_increment.max(0.0);
        self.spawn_interval = self.spawn_interval.min(step.spawn_interval);
    }
}
