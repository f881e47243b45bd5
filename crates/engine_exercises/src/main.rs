//! Headless exercise runner.
//!
//! Loads an optional JSON config, applies command-line overrides, runs the
//! tick loop and logs the final state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_exercises::{Exercise, ExerciseConfig, TickLoop};

#[derive(Parser)]
#[command(
    name = "engine_exercises",
    about = "Replay the vector and quaternion exercises headlessly"
)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exercise to run (1 = single, 2 = chain, 3 = mirror)
    #[arg(short, long)]
    exercise: Option<u8>,

    /// Degrees rotated per tick
    #[arg(short, long, allow_negative_numbers = true)]
    angle: Option<f32>,

    /// Number of ticks to run (0 = until interrupted)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Target ticks per second (0 = unpaced)
    #[arg(long)]
    tick_rate: Option<f64>,
}

impl Args {
    fn into_config(self) -> Result<ExerciseConfig> {
        let mut config = match &self.config {
            Some(path) => ExerciseConfig::from_path(path)?,
            None => ExerciseConfig::default(),
        };
        if let Some(number) = self.exercise {
            let exercise = Exercise::try_from(number).context("invalid --exercise")?;
            config = config.with_exercise(exercise);
        }
        if let Some(angle) = self.angle {
            config = config.with_angle(angle);
        }
        if let Some(ticks) = self.ticks {
            config = config.with_ticks(ticks);
        }
        if let Some(tick_rate) = self.tick_rate {
            config = config.with_tick_rate(tick_rate);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("engine_exercises=info".parse()?),
        )
        .init();

    let config = Args::parse().into_config()?;
    info!(?config, "exercise runner starting");

    let mut tick_loop = TickLoop::new(config);
    let summary = tick_loop.run();

    for (name, v) in ["v1", "v2", "v3", "v4"].into_iter().zip(&summary.vectors) {
        info!(name, vector = %v, "final position");
    }
    info!(
        ticks = summary.ticks,
        planar = %summary.planar_point,
        orientation = %summary.orientation,
        euler = %summary.orientation.euler_angles(),
        "exercise runner finished"
    );
    let json = serde_json::to_string(&summary).context("failed to encode run summary")?;
    info!(summary = %json, "run summary");
    Ok(())
}
