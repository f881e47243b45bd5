//! Fixed-step tick loop.
//!
//! Each tick:
//!
//! 1. Step the [`ExerciseScene`] with the configured exercise and angle.
//! 2. Advance the planar point by one [`PlanarRotation`] step.
//! 3. Recompute the [`AxisRotation`] orientation.
//! 4. Advance the tick counter.

use std::time::{Duration, Instant};

use engine_math::{Quat, Vec3};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::axis::AxisRotation;
use crate::config::ExerciseConfig;
use crate::exercise::ExerciseScene;

/// State after a run, for logging or inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub vectors: [Vec3; 4],
    pub planar_point: Vec3,
    pub orientation: Quat,
}

/// Drives the exercise state machines at a fixed rate.
#[derive(Debug)]
pub struct TickLoop {
    tick_id: u64,
    config: ExerciseConfig,
    scene: ExerciseScene,
    planar_point: Vec3,
    orientation: Quat,
}

impl TickLoop {
    /// Create a new tick loop with the given configuration.
    #[must_use]
    pub fn new(config: ExerciseConfig) -> Self {
        Self {
            tick_id: 0,
            planar_point: config.planar_start,
            config,
            scene: ExerciseScene::new(),
            orientation: Quat::IDENTITY,
        }
    }

    /// Ticks run so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// The exercise scene being stepped.
    #[must_use]
    pub fn scene(&self) -> &ExerciseScene {
        &self.scene
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// Mutable access to the config; changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut ExerciseConfig {
        &mut self.config
    }

    /// Current position of the planar point.
    #[must_use]
    pub fn planar_point(&self) -> Vec3 {
        self.planar_point
    }

    /// Orientation computed on the last tick.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Run one tick.
    pub fn tick(&mut self) {
        self.tick_id += 1;

        self.scene.step(self.config.exercise, self.config.angle);
        self.planar_point = self.config.planar.step(self.planar_point);
        self.orientation = AxisRotation::new(self.config.axis_angles).orientation();

        debug!(
            tick_id = self.tick_id,
            exercise = %self.config.exercise,
            visible = self.scene.visible_segments().count(),
            "tick"
        );
        for segment in self.scene.visible_segments() {
            debug!(
                tick_id = self.tick_id,
                name = segment.name,
                from = %segment.from,
                to = %segment.to,
                "segment"
            );
        }
        debug!(tick_id = self.tick_id, point = %self.planar_point, "planar");
    }

    /// Run the configured number of ticks (forever when `ticks == 0`).
    ///
    /// Sleeps between ticks to hold `tick_rate`. A non-positive rate, or one
    /// so small that its tick period does not fit a [`Duration`], runs ticks
    /// back to back.
    pub fn run(&mut self) -> RunSummary {
        let tick_duration = self.tick_duration();
        let mut tick_count = 0u64;

        info!(
            exercise = %self.config.exercise,
            angle = self.config.angle,
            tick_rate = self.config.tick_rate,
            max_ticks = self.config.ticks,
            "starting tick loop"
        );

        loop {
            let start = Instant::now();
            self.tick();

            tick_count += 1;
            if self.config.ticks > 0 && tick_count >= self.config.ticks {
                info!(ticks = tick_count, "tick loop complete");
                break;
            }

            let Some(tick_duration) = tick_duration else {
                continue;
            };
            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else {
                warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }

        self.summary()
    }

    fn tick_duration(&self) -> Option<Duration> {
        let rate = self.config.tick_rate;
        if rate.is_nan() || rate <= 0.0 {
            return None;
        }
        match Duration::try_from_secs_f64(1.0 / rate) {
            Ok(duration) => Some(duration),
            Err(err) => {
                warn!(tick_rate = rate, %err, "tick period out of range, running unpaced");
                None
            }
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.tick_id,
            vectors: *self.scene.vectors(),
            planar_point: self.planar_point,
            orientation: self.orientation,
        }
    }
}
