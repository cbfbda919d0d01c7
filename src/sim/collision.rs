//! Player vs obstacle collision detection
//!
//! Plain AABB overlap. There is no damage model: the first hit ends the run.

use super::obstacle::Obstacle;
use super::player::Player;

/// Find the first obstacle (in spawn order) overlapping the player
pub fn find_collision<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let player_rect = player.rect();
    obstacles.iter().find(|o| player_rect.overlaps(&o.rect()))
}
