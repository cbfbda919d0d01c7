//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FixedClock;
pub use collision::find_collision;
pub use difficulty::{Difficulty, DifficultyScheduler, DifficultyStep};
pub use obstacle::{Obstacle, ObstacleKind, advance_obstacles};
pub use player::{Lane, Player};
pub use rect::Rect;
pub use spawner::ObstacleSpawner;
pub use state::{
    ObstacleView, Phase, PlayerView, RunEvent, RunState, RunStats, Snapshot, TickResult,
};
pub use tick::tick;
