//! The player: a two-lane state machine with smooth vertical motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Vertical lane the player occupies (or is heading toward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lane {
    #[default]
    Ground,
    Air,
}

impl Lane {
    pub fn from_signal(air_requested: bool) -> Self {
        if air_requested { Lane::Air } else { Lane::Ground }
    }
}

/// The player's box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Lane requested by the latest control signal
    pub lane: Lane,
    /// Top-left corner (x never changes)
    pub pos: Vec2,
    /// Altitude the player is moving toward
    pub target_y: f32,
    pub size: Vec2,
    /// Max vertical travel per tick
    step: f32,
    ground_top: f32,
    air_top: f32,
}

impl Player {
    /// Player standing on the ground baseline
    pub fn new(tuning: &Tuning) -> Self {
        let ground_top = tuning.ground_top(tuning.player_height);
        Self {
            lane: Lane::Ground,
            pos: Vec2::new(tuning.player_x, ground_top),
            target_y: ground_top,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            step: tuning.transition_step,
            ground_top,
            air_top: tuning.air_y,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Altitude for a lane
    pub fn lane_y(&self, lane: Lane) -> f32 {
        match lane {
            Lane::Ground => self.ground_top,
            Lane::Air => self.air_top,
        }
    }

    /// Apply this tick's control signal and move toward the lane altitude.
    ///
    /// Returns true if the requested lane changed.
    pub fn update(&mut self, air_requested: bool) -> bool {
        let lane = Lane::from_signal(air_requested);
        let changed = lane != self.lane;
        self.lane = lane;
        self.target_y = self.lane_y(lane);

        // Land exactly on the target once within one step, never past it
        let delta = self.target_y - self.pos.y;
        if delta.abs() <= self.step {
            self.pos.y = self.target_y;
        } else {
            self.pos.y += self.step.copysign(delta);
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_on_ground() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        assert_eq!(player.lane, Lane::Ground);
        assert_eq!(player.y(), 270.0);
        assert_eq!(player.rect(), Rect::new(100.0, 270.0, 30.0, 80.0));
        assert_eq!(player.y(), player.target_y);
    }

    #[test]
    fn test_reaches_air_in_steps() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        // 120 pixels at 15 per tick
        assert!(player.update(true));
        assert_eq!(player.y(), 255.0);
        for _ in 0..7 {
            assert!(!player.update(true));
        }
        assert_eq!(player.y(), 150.0);
        assert_eq!(player.y(), player.target_y);

        // Stays put once there
        player.update(true);
        assert_eq!(player.y(), 150.0);
    }

    #[test]
    fn test_does_not_overshoot() {
        let tuning = Tuning {
            transition_step: 50.0,
            ..Default::default()
        };
        let mut player = Player::new(&tuning);
        player.update(true);
        player.update(true);
        assert_eq!(player.y(), 170.0);
        player.update(true);
        assert_eq!(player.y(), 150.0);
    }

    #[test]
    fn test_reverses_mid_flight() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.update(true);
        player.update(true);
        assert_eq!(player.y(), 240.0);

        assert!(player.update(false));
        assert_eq!(player.lane, Lane::Ground);
        assert_eq!(player.y(), 255.0);
    }

    proptest! {
        #[test]
        fn prop_lane_continuity(signals in proptest::collection::vec(any::<bool>(), 1..300)) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);

            for air in signals {
                let before = player.y();
                player.update(air);
                let after = player.y();
                let target = player.target_y;

                prop_assert!((after - before).abs() <= tuning.transition_step + 1e-3);
                // Never strictly past the target in the direction of travel
                if target < before {
                    prop_assert!(after >= target);
                } else {
                    prop_assert!(after <= target);
                }
                prop_assert!(after >= tuning.air_y && after <= 270.0);
            }
        }
    }
}
