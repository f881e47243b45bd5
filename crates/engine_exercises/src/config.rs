//! Driver configuration.

use std::path::Path;

use engine_math::Vec3;
use serde::Deserialize;

use crate::error::ExerciseError;
use crate::exercise::Exercise;
use crate::planar::PlanarRotation;

/// Parameters for one run of the exercise driver.
///
/// Missing fields in a JSON config take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    /// Which vector exercise to run.
    pub exercise: Exercise,
    /// Degrees rotated per tick by the exercise.
    pub angle: f32,
    /// Number of ticks to run (0 = until interrupted).
    pub ticks: u64,
    /// Target ticks per second. `<= 0` runs ticks back to back.
    pub tick_rate: f64,
    /// Planar rotation step and the point it starts from.
    pub planar: PlanarRotation,
    pub planar_start: Vec3,
    /// Per-axis angles for the composed orientation.
    pub axis_angles: Vec3,
}

impl ExerciseConfig {
    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::ReadConfig`] if the file cannot be read and
    /// [`ExerciseError::ParseConfig`] if it is not a valid config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExerciseError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ExerciseError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::ParseConfig`] on malformed JSON or an unknown
    /// exercise number.
    pub fn from_json(text: &str) -> Result<Self, ExerciseError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Override the exercise to run.
    #[must_use]
    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercise = exercise;
        self
    }

    /// Override the degrees rotated per tick.
    #[must_use]
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Override the number of ticks.
    #[must_use]
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Override the target ticks per second.
    #[must_use]
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Override the per-axis orientation angles.
    #[must_use]
    pub fn with_axis_angles(mut self, angles: Vec3) -> Self {
        self.axis_angles = angles;
        self
    }
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            exercise: Exercise::Single,
            angle: 1.0,
            ticks: 360,
            tick_rate: 50.0,
            planar: PlanarRotation::default(),
            planar_start: Vec3::RIGHT,
            axis_angles: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planar::Orientation;

    #[test]
    fn test_defaults() {
        let config = ExerciseConfig::default();
        assert_eq!(config.exercise, Exercise::Single);
        assert_eq!(config.ticks, 360);
        assert_eq!(config.planar_start, Vec3::RIGHT);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExerciseConfig::from_json(
            r#"{
                "exercise": 3,
                "angle": 2.5,
                "planar": { "orientation": "clockwise" },
                "axis_angles": { "x": 10.0, "y": 20.0, "z": 30.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.exercise, Exercise::Mirror);
        assert_eq!(config.angle, 2.5);
        assert_eq!(config.ticks, 360);
        assert_eq!(config.planar.angle, 2.0);
        assert_eq!(config.planar.orientation, Orientation::Clockwise);
        assert_eq!(config.axis_angles, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_unknown_exercise_is_rejected() {
        let err = ExerciseConfig::from_json(r#"{ "exercise": 7 }"#).unwrap_err();
        assert!(matches!(err, ExerciseError::ParseConfig(_)));
        assert!(err.to_string().contains("unknown exercise: 7"));
    }

    #[test]
    fn test_missing_file() {
        let err = ExerciseConfig::from_path("/nonexistent/exercises.json").unwrap_err();
        assert!(matches!(err, ExerciseError::ReadConfig { .. }));
    }

    #[test]
    fn test_builder() {
        let config = ExerciseConfig::default()
            .with_exercise(Exercise::Chain)
            .with_angle(3.0)
            .with_ticks(10)
            .with_tick_rate(0.0);
        assert_eq!(config.exercise, Exercise::Chain);
        assert_eq!((config.angle, config.ticks, config.tick_rate), (3.0, 10, 0.0));
    }
}
