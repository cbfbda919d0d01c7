//! Procedural obstacle generation
//!
//! Spawning is timer driven, but placement is distance driven: a new obstacle
//! never lands closer than a freshly drawn spacing to the previous one, no
//! matter how short the spawn interval gets. That keeps every pair of
//! consecutive obstacles navigable.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Spawn timer and placement rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Simulated ms since the last spawn
    pub time_since_last_spawn: f32,
    enabled: bool,
    tick_ms: f32,
    field_width: f32,
    distance_min: f32,
    distance_max: f32,
    next_id: u32,
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            time_since_last_spawn: 0.0,
            enabled: tuning.spawning_enabled,
            tick_ms: tuning.tick_ms(),
            field_width: tuning.field_width,
            distance_min: tuning.distance_min,
            distance_max: tuning.distance_max,
            next_id: 1,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Advance the timer by one tick and spawn if the interval has elapsed.
    ///
    /// The new obstacle is appended to `obstacles` and returned by reference.
    pub fn maybe_spawn<'a, R: Rng + ?Sized>(
        &mut self,
        obstacles: &'a mut Vec<Obstacle>,
        speed: f32,
        spawn_interval: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<&'a Obstacle> {
        if !self.enabled {
            return None;
        }

        self.time_since_last_spawn += self.tick_ms;
        if self.time_since_last_spawn <= spawn_interval {
            return None;
        }
        self.time_since_last_spawn = 0.0;

        let obstacle = self.generate(obstacles.last(), speed, rng, tuning);
        log::debug!(
            "Spawned {:?} obstacle #{} at x={:.1} (speed {:.3})",
            obstacle.kind(),
            obstacle.id,
            obstacle.x(),
            speed
        );
        obstacles.push(obstacle);
        obstacles.last()
    }

    /// Build the next obstacle relative to the most recently spawned one
    fn generate<R: Rng + ?Sized>(
        &mut self,
        previous: Option<&Obstacle>,
        speed: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Obstacle {
        // No anti-repeat rule: two of the same kind in a row is allowed
        let kind = if rng.random_bool(0.5) {
            ObstacleKind::Air
        } else {
            ObstacleKind::Ground
        };

        let x = match previous {
            Some(previous) => {
                let distance = rng.random_range(self.distance_min..=self.distance_max);
                self.field_width.max(previous.x() + distance)
            }
            None => self.field_width,
        };

        let id = self.next_id;
        self.next_id += 1;
        Obstacle::at(id, kind, x, speed, tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::sim::obstacle::advance_obstacles;

    fn tick_until_spawn(
        spawner: &mut ObstacleSpawner,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut Pcg32,
        tuning: &Tuning,
    ) -> u32 {
        for tick in 1..=1000 {
            if spawner
                .maybe_spawn(obstacles, 5.0, 1000.0, rng, tuning)
                .is_some()
            {
                return tick;
            }
        }
        panic!("spawner never fired");
    }

    #[test]
    fn test_spawns_after_interval() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);

        let first = tick_until_spawn(&mut spawner, &mut obstacles, &mut rng, &tuning);
        // 1000 ms at ~16.67 ms per tick
        assert!((60..=61).contains(&first), "spawned at tick {first}");
        assert_eq!(spawner.time_since_last_spawn, 0.0);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].x(), 800.0);
    }

    #[test]
    fn test_disabled_never_spawns() {
        let tuning = Tuning {
            spawning_enabled: false,
            ..Default::default()
        };
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(
                spawner
                    .maybe_spawn(&mut obstacles, 5.0, 0.0, &mut rng, &tuning)
                    .is_none()
            );
        }
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_close_predecessor_pushes_spawn_right() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = vec![Obstacle::at(99, ObstacleKind::Ground, 790.0, 5.0, &tuning)];
        let mut rng = Pcg32::seed_from_u64(7);

        // Interval of zero fires on the first tick
        let spawned = spawner
            .maybe_spawn(&mut obstacles, 5.0, 0.0, &mut rng, &tuning)
            .expect("spawn")
            .x();
        assert!(spawned >= 790.0 + 300.0 - 1e-3);
        assert!(spawned <= 790.0 + 600.0 + 1e-3);
    }

    #[test]
    fn test_distant_predecessor_spawns_at_edge() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = vec![Obstacle::at(99, ObstacleKind::Air, 100.0, 5.0, &tuning)];
        let mut rng = Pcg32::seed_from_u64(7);

        let spawned = spawner
            .maybe_spawn(&mut obstacles, 5.0, 0.0, &mut rng, &tuning)
            .expect("spawn")
            .x();
        assert_eq!(spawned, 800.0);
    }

    #[test]
    fn test_both_kinds_appear() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            spawner.maybe_spawn(&mut obstacles, 5.0, 0.0, &mut rng, &tuning);
        }
        assert!(obstacles.iter().any(|o| o.kind() == ObstacleKind::Air));
        assert!(obstacles.iter().any(|o| o.kind() == ObstacleKind::Ground));
    }

    #[test]
    fn test_ids_increase() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning);
        let mut obstacles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..5 {
            spawner.maybe_spawn(&mut obstacles, 5.0, 0.0, &mut rng, &tuning);
        }
        let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    proptest! {
        #[test]
        fn prop_spacing_invariant(
            seed in any::<u64>(),
            interval in 0.0f32..1200.0,
            speed in 0.0f32..40.0,
            ticks in 1usize..2000,
        ) {
            let tuning = Tuning::default();
            let mut spawner = ObstacleSpawner::new(&tuning);
            let mut obstacles: Vec<Obstacle> = Vec::new();
            let mut rng = Pcg32::seed_from_u64(seed);

            for _ in 0..ticks {
                let previous_x = obstacles.last().map(|o| o.x());
                if let Some(spawned) =
                    spawner.maybe_spawn(&mut obstacles, speed, interval, &mut rng, &tuning)
                {
                    if let Some(previous_x) = previous_x {
                        // Allow f32 rounding of the sum at large offsets
                        let slack = 1e-3 + spawned.x().abs() * f32::EPSILON;
                        prop_assert!(spawned.x() - previous_x >= tuning.distance_min - slack);
                    }
                }
                advance_obstacles(&mut obstacles, speed);
            }
        }
    }
}
