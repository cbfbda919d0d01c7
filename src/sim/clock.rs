//! Fixed-timestep pacing
//!
//! Converts variable frame deltas into a whole number of fixed simulation
//! ticks. All difficulty constants are per tick, so a stable tick rate keeps
//! the curve identical in wall-clock terms.

/// Longest frame delta honoured (seconds); anything longer is a stall
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    total_ticks: u64,
}

impl FixedClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            total_ticks: 0,
        }
    }

    /// Clock ticking at `hz`
    pub fn with_rate(hz: f32, max_substeps: u32) -> Self {
        Self::new(1.0 / hz, max_substeps)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Feed one frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop backlog we could not catch up on
        if self.accumulator >= self.step {
            log::warn!(
                "Simulation fell behind, dropping {:.1} ms",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        self.total_ticks += substeps as u64;
        substeps
    }
}
