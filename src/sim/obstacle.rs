//! Obstacles scrolling in from the right edge

use serde::{Deserialize, Serialize};

use super::player::Lane;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground baseline; dodge by going up
    Ground,
    /// Hangs in the air lane; dodge by staying down
    Air,
}

impl ObstacleKind {
    /// Lane this obstacle blocks
    pub fn blocked_lane(&self) -> Lane {
        match self {
            ObstacleKind::Ground => Lane::Ground,
            ObstacleKind::Air => Lane::Air,
        }
    }
}

/// An obstacle entity. Only `x` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    shape: Shape,
    /// Left edge
    x: f32,
    /// Left edge at the moment of spawning
    spawn_x: f32,
    /// Scroll speed when spawned (informational; movement uses the live speed)
    spawn_speed: f32,
}

/// Fixed-at-creation shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Shape {
    kind: ObstacleKind,
    y: f32,
    width: f32,
    height: f32,
}

impl Obstacle {
    /// New obstacle at the right edge of the field
    pub fn new(id: u32, kind: ObstacleKind, speed: f32, tuning: &Tuning) -> Self {
        Self::at(id, kind, tuning.field_width, speed, tuning)
    }

    /// New obstacle with its left edge at `x`
    pub fn at(id: u32, kind: ObstacleKind, x: f32, speed: f32, tuning: &Tuning) -> Self {
        let y = match kind {
            ObstacleKind::Ground => tuning.ground_top(tuning.obstacle_height),
            ObstacleKind::Air => tuning.air_y,
        };
        Self {
            id,
            shape: Shape {
                kind,
                y,
                width: tuning.obstacle_width,
                height: tuning.obstacle_height,
            },
            x,
            spawn_x: x,
            spawn_speed: speed,
        }
    }

    #[inline]
    pub fn kind(&self) -> ObstacleKind {
        self.shape.kind
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.shape.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.shape.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.shape.height
    }

    pub fn spawn_x(&self) -> f32 {
        self.spawn_x
    }

    pub fn spawn_speed(&self) -> f32 {
        self.spawn_speed
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.shape.y, self.shape.width, self.shape.height)
    }

    /// Scroll left by the current field speed
    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.x + self.shape.width < 0.0
    }
}

/// Move every obstacle by `speed` and drop those that left the field.
///
/// Returns how many were removed. Spawn order is preserved.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.update(speed);
    }
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_by_kind() {
        let tuning = Tuning::default();
        let ground = Obstacle::new(1, ObstacleKind::Ground, 5.0, &tuning);
        let air = Obstacle::new(2, ObstacleKind::Air, 5.0, &tuning);

        assert_eq!(ground.rect(), Rect::new(800.0, 270.0, 30.0, 80.0));
        assert_eq!(air.rect(), Rect::new(800.0, 150.0, 30.0, 80.0));
        assert_eq!(ground.spawn_x(), 800.0);
    }

    #[test]
    fn test_update_uses_supplied_speed() {
        let tuning = Tuning::default();
        let mut obstacle = Obstacle::new(1, ObstacleKind::Ground, 5.0, &tuning);
        obstacle.update(5.0);
        obstacle.update(7.5);
        assert_eq!(obstacle.x(), 787.5);
        // Shape never changes
        assert_eq!(obstacle.y(), 270.0);
        assert_eq!(obstacle.spawn_speed(), 5.0);
    }

    #[test]
    fn test_off_screen_pruning() {
        let tuning = Tuning::default();
        let mut obstacles = vec![Obstacle::new(1, ObstacleKind::Air, 5.0, &tuning)];

        // x + 30 < 0 first holds once x < -30: 800 - 5 * 167 = -35
        let mut removed_at = None;
        for tick in 1..=167 {
            if advance_obstacles(&mut obstacles, 5.0) == 1 {
                removed_at = Some(tick);
                break;
            }
        }
        assert_eq!(removed_at, Some(167));
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_edge_exactly_at_zero_is_kept() {
        let tuning = Tuning::default();
        let mut obstacle = Obstacle::at(1, ObstacleKind::Ground, -25.0, 5.0, &tuning);
        assert!(!obstacle.is_off_screen());
        obstacle.update(5.0);
        // x + width == 0 is still touching the field
        assert!(!obstacle.is_off_screen());
        obstacle.update(0.5);
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_advance_preserves_order() {
        let tuning = Tuning::default();
        let mut obstacles = vec![
            Obstacle::at(1, ObstacleKind::Ground, -29.0, 5.0, &tuning),
            Obstacle::at(2, ObstacleKind::Air, 400.0, 5.0, &tuning),
            Obstacle::at(3, ObstacleKind::Ground, 800.0, 5.0, &tuning),
        ];
        assert_eq!(advance_obstacles(&mut obstacles, 5.0), 1);
        let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
