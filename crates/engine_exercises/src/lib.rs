//! # engine_exercises
//!
//! Headless driver for the math exercises. Each tick it advances a small set
//! of numeric state machines built on [`engine_math`] and reports the result
//! through `tracing`. Nothing is drawn; the segment list in
//! [`ExerciseScene`] is what a renderer would consume.
//!
//! This crate provides:
//!
//! - [`Exercise`] / [`ExerciseScene`] — the rotating vector chains.
//! - [`PlanarRotation`] — 2D rotation step in the XY plane.
//! - [`AxisRotation`] — orientation composed from per-axis rotations.
//! - [`ExerciseConfig`] — run parameters, loadable from JSON.
//! - [`TickLoop`] — fixed-step loop that drives all of the above.

pub mod axis;
pub mod config;
pub mod error;
pub mod exercise;
pub mod planar;
pub mod tick;

pub use axis::AxisRotation;
pub use config::ExerciseConfig;
pub use error::ExerciseError;
pub use exercise::{Exercise, ExerciseScene, Segment};
pub use planar::{Orientation, PlanarRotation};
pub use tick::{RunSummary, TickLoop};
