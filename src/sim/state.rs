//! Run state and core simulation types
//!
//! One `RunState` per session. It owns the player, the obstacle field, the
//! difficulty and the seeded RNG; nothing in here is shared or global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, DifficultyScheduler};
use super::obstacle::{Obstacle, ObstacleKind};
use super::player::{Lane, Player};
use super::rect::Rect;
use super::spawner::ObstacleSpawner;
use crate::control::{Baseline, DifficultyPredictor, Performance};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Coarse lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the start signal; ticks are ignored
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Collided; frozen until reset
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// First tick of an attempt
    Started { attempt: u32 },
    LaneChanged { lane: Lane },
    ObstacleSpawned { id: u32, kind: ObstacleKind, x: f32 },
    ObstaclesCleared { count: u32 },
    Collided { id: u32, kind: ObstacleKind },
}

/// Counters for the current attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub ticks: u64,
    pub lane_switches: u32,
    pub obstacles_spawned: u32,
    /// Obstacles that scrolled off the left edge
    pub obstacles_cleared: u32,
}

/// Renderable player state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub lane: Lane,
}

/// Renderable obstacle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub rect: Rect,
    pub kind: ObstacleKind,
}

/// Read-only copy of everything a renderer or control source needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: f32,
    pub speed: f32,
    pub spawn_interval: f32,
    pub player: PlayerView,
    /// Spawn order, which is also ascending x
    pub obstacles: Vec<ObstacleView>,
}

/// Outcome of one `tick`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    pub phase: Phase,
    pub score: f32,
    pub snapshot: Snapshot,
    pub events: Vec<RunEvent>,
}

/// Complete state of one session
pub struct RunState {
    pub(crate) tuning: Tuning,
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: Phase,
    pub(crate) player: Player,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) score: f32,
    /// Ticks survived this attempt; the score is derived from this
    pub(crate) scored_ticks: u64,
    pub(crate) difficulty: Difficulty,
    pub(crate) scheduler: DifficultyScheduler,
    pub(crate) spawner: ObstacleSpawner,
    pub(crate) predictor: Box<dyn DifficultyPredictor>,
    pub(crate) stats: RunStats,
    pub(crate) best_score: f32,
    pub(crate) attempts: u32,
    /// Set by `reset`, cleared by the next tick
    pub(crate) pending_started: bool,
}

impl std::fmt::Debug for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunState")
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("difficulty", &self.difficulty)
            .field("obstacles", &self.obstacles.len())
            .field("stats", &self.stats)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}

impl RunState {
    /// Validate `tuning` and build an idle run seeded with `seed`
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::NotStarted,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            score: 0.0,
            scored_ticks: 0,
            difficulty: Difficulty::initial(&tuning),
            scheduler: DifficultyScheduler::new(&tuning),
            spawner: ObstacleSpawner::new(&tuning),
            predictor: Box::new(Baseline),
            stats: RunStats::default(),
            best_score: 0.0,
            attempts: 0,
            pending_started: false,
            tuning,
        })
    }

    /// Replace the difficulty predictor
    pub fn with_predictor(mut self, predictor: impl DifficultyPredictor + 'static) -> Self {
        self.set_predictor(predictor);
        self
    }

    pub fn set_predictor(&mut self, predictor: impl DifficultyPredictor + 'static) {
        self.predictor = Box::new(predictor);
    }

    /// Enable or disable obstacle spawning (persists across resets)
    pub fn set_spawning(&mut self, enabled: bool) {
        self.spawner.set_enabled(enabled);
    }

    /// Begin a run if one isn't already going
    pub fn start(&mut self) {
        if self.phase != Phase::Running {
            self.reset();
        }
    }

    /// Discard the current attempt and start a fresh one. Safe from any phase.
    ///
    /// The abandoned attempt's score still counts toward the best score.
    pub fn reset(&mut self) {
        let spawning = self.spawner.enabled();
        self.record_best();

        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0.0;
        self.scored_ticks = 0;
        self.difficulty = Difficulty::initial(&self.tuning);
        self.spawner = ObstacleSpawner::new(&self.tuning);
        self.spawner.set_enabled(spawning);
        self.stats = RunStats::default();
        self.phase = Phase::Running;
        self.attempts += 1;
        self.pending_started = true;

        log::info!("Run #{} started (seed {})", self.attempts, self.seed);
    }

    pub(crate) fn record_best(&mut self) {
        self.best_score = self.best_score.max(self.score);
    }

    /// Advance one simulation step with this tick's control signal
    pub fn tick(&mut self, air_requested: bool) -> TickResult {
        super::tick::tick(self, air_requested)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Score as displayed to the player
    pub fn final_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Best score across attempts of this session
    pub fn best_score(&self) -> f32 {
        self.best_score
    }

    pub fn speed(&self) -> f32 {
        self.difficulty.speed
    }

    pub fn spawn_interval(&self) -> f32 {
        self.difficulty.spawn_interval
    }

    pub fn time_since_last_spawn(&self) -> f32 {
        self.spawner.time_since_last_spawn
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Inputs handed to the difficulty predictor
    pub fn performance(&self) -> Performance {
        Performance {
            score: self.score,
            ticks_survived: self.stats.ticks,
            lane_switches: self.stats.lane_switches,
            obstacles_cleared: self.stats.obstacles_cleared,
        }
    }

    /// Copy out the renderable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.stats.ticks,
            score: self.score,
            speed: self.difficulty.speed,
            spawn_interval: self.difficulty.spawn_interval,
            player: PlayerView {
                rect: self.player.rect(),
                lane: self.player.lane,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    rect: o.rect(),
                    kind: o.kind(),
                })
                .collect(),
        }
    }
}
