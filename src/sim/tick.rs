//! Fixed timestep simulation tick
//!
//! Pipeline order per tick: player, difficulty, spawner, obstacle movement and
//! pruning, collision, score.

use super::collision::find_collision;
use super::obstacle::advance_obstacles;
use super::state::{Phase, RunEvent, RunState, TickResult};

/// Advance the run by one tick
pub fn tick(state: &mut RunState, air_requested: bool) -> TickResult {
    let mut events = Vec::new();

    // Frozen unless running
    if state.phase != Phase::Running {
        return result(state, events);
    }

    state.stats.ticks += 1;

    if std::mem::take(&mut state.pending_started) {
        events.push(RunEvent::Started {
            attempt: state.attempts,
        });
    }

    if state.player.update(air_requested) {
        state.stats.lane_switches += 1;
        log::debug!("Lane -> {:?} at tick {}", state.player.lane, state.stats.ticks);
        events.push(RunEvent::LaneChanged {
            lane: state.player.lane,
        });
    }

    let multiplier = state.predictor.multiplier(&state.performance());
    let step = state.scheduler.evaluate(state.score, multiplier);
    state.difficulty.apply(step);
    let speed = state.difficulty.speed;

    if let Some(spawned) = state.spawner.maybe_spawn(
        &mut state.obstacles,
        speed,
        state.difficulty.spawn_interval,
        &mut state.rng,
        &state.tuning,
    ) {
        state.stats.obstacles_spawned += 1;
        events.push(RunEvent::ObstacleSpawned {
            id: spawned.id,
            kind: spawned.kind(),
            x: spawned.x(),
        });
    }

    let cleared = advance_obstacles(&mut state.obstacles, speed) as u32;
    if cleared > 0 {
        state.stats.obstacles_cleared += cleared;
        events.push(RunEvent::ObstaclesCleared { count: cleared });
    }

    if let Some((hit_id, hit_kind)) =
        find_collision(&state.player, &state.obstacles).map(|hit| (hit.id, hit.kind()))
    {
        events.push(RunEvent::Collided {
            id: hit_id,
            kind: hit_kind,
        });
        state.phase = Phase::GameOver;
        state.record_best();
        log::info!(
            "Game over: hit {:?} obstacle #{} after {} ticks, score {}",
            hit_kind,
            hit_id,
            state.stats.ticks,
            state.final_score()
        );
    } else {
        // Derived from the tick count so long runs do not drift
        state.scored_ticks += 1;
        state.score = state.scored_ticks as f32 * state.tuning.score_increment;
    }

    result(state, events)
}

fn result(state: &RunState, events: Vec<RunEvent>) -> TickResult {
    TickResult {
        phase: state.phase,
        score: state.score,
        snapshot: state.snapshot(),
        events,
    }
}
