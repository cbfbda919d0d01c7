//! Gravity Runner entry point
//!
//! Headless driver: runs the simulation at a fixed tick rate with the
//! autopilot supplying the control signal, and logs the outcome.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use gravity_runner::consts::MAX_SUBSTEPS;
use gravity_runner::sim::{FixedClock, Phase, RunState};
use gravity_runner::{Autopilot, ControlSource, Tuning};

/// Log progress every this many ticks
const REPORT_EVERY: u64 = 600;

#[derive(Parser)]
#[command(name = "gravity-runner")]
#[command(about = "Run the gravity runner headless with the autopilot at the controls")]
struct Args {
    /// Tuning file (JSON); built-in defaults when omitted
    tuning: Option<PathBuf>,

    /// RNG seed; derived from the system clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Tick as fast as possible instead of pacing to the tick rate
    #[arg(long)]
    fast: bool,
}

fn main() {
    env_logger::init();
    log::info!("Gravity Runner (headless) starting...");

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Invalid tuning: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut run = match RunState::new(tuning, seed) {
        Ok(run) => run,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            std::process::exit(1);
        }
    };

    let final_score = play(&mut run, args.fast);
    println!(
        "Game over! Score: {} (speed {:.2}, {} obstacles cleared)",
        final_score,
        run.speed(),
        run.stats().obstacles_cleared
    );
}

/// Run one attempt to game over and return the displayed score
fn play(run: &mut RunState, fast: bool) -> u32 {
    let mut pilot = Autopilot::default();
    let mut clock = FixedClock::with_rate(run.tuning().tick_rate_hz, MAX_SUBSTEPS);
    let frame = Duration::from_secs_f32(clock.step());

    run.start();
    let mut view = run.snapshot();
    let mut last_frame = Instant::now();

    loop {
        let ticks = if fast {
            1
        } else {
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            clock.advance(dt)
        };

        for _ in 0..ticks {
            let air = pilot.air_requested(&view);
            let result = run.tick(air);

            if result.snapshot.tick % REPORT_EVERY == 0 {
                log::info!(
                    "tick {} ({} clock ticks): score {:.0}, speed {:.2}, spawn every {:.0} ms",
                    result.snapshot.tick,
                    clock.total_ticks(),
                    result.score,
                    result.snapshot.speed,
                    result.snapshot.spawn_interval
                );
            }

            if result.phase == Phase::GameOver {
                return run.final_score();
            }
            view = result.snapshot;
        }

        if !fast {
            std::thread::sleep(frame);
        }
    }
}
