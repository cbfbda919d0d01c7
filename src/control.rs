//! Control signals and difficulty hooks
//!
//! The simulation only ever sees one boolean per tick ("air requested?").
//! Where it comes from is up to the host: a held key, a scripted tape, a
//! biosignal classifier, or the autopilot below. The same goes for the
//! difficulty multiplier: the default predictor is the flat baseline.

use serde::{Deserialize, Serialize};

use crate::sim::{Lane, ObstacleKind, Snapshot};

/// Anything that can produce the per-tick control signal
pub trait ControlSource {
    /// Sample the signal for the next tick
    fn air_requested(&mut self, view: &Snapshot) -> bool;
}

impl<F> ControlSource for F
where
    F: FnMut(&Snapshot) -> bool,
{
    fn air_requested(&mut self, view: &Snapshot) -> bool {
        self(view)
    }
}

/// Keyboard-style control: in the air while the button is held
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldButton {
    pub held: bool,
}

impl ControlSource for HeldButton {
    fn air_requested(&mut self, _view: &Snapshot) -> bool {
        self.held
    }
}

/// Demo AI: dodges the nearest obstacle that is about to reach the player
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// How many ticks ahead an obstacle counts as a threat
    pub lookahead_ticks: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        // A full lane switch takes 8 ticks at default tuning
        Self {
            lookahead_ticks: 12.0,
        }
    }
}

impl ControlSource for Autopilot {
    fn air_requested(&mut self, view: &Snapshot) -> bool {
        let player = view.player.rect;
        let horizon = view.speed * self.lookahead_ticks;

        // Obstacles are in ascending x order, so the first one not yet
        // behind the player is the nearest
        let threat = view
            .obstacles
            .iter()
            .find(|o| o.rect.right() > player.left())
            .filter(|o| o.rect.left() - player.right() <= horizon);

        match threat {
            Some(obstacle) => obstacle.kind == ObstacleKind::Ground,
            None => view.player.lane == Lane::Air,
        }
    }
}

/// How the player is doing, as seen by a difficulty predictor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub score: f32,
    pub ticks_survived: u64,
    pub lane_switches: u32,
    pub obstacles_cleared: u32,
}

/// Scales the difficulty curve (1.0 = baseline)
pub trait DifficultyPredictor: Send {
    fn multiplier(&self, performance: &Performance) -> f32;
}

impl<F> DifficultyPredictor for F
where
    F: Fn(&Performance) -> f32 + Send,
{
    fn multiplier(&self, performance: &Performance) -> f32 {
        self(performance)
    }
}

/// Flat baseline difficulty
#[derive(Debug, Clone, Copy, Default)]
pub struct Baseline;

impl DifficultyPredictor for Baseline {
    fn multiplier(&self, _performance: &Performance) -> f32 {
        1.0
    }
}
