//! 2D rotation in the XY plane.

use engine_math::{DEG_TO_RAD, Vec3};
use serde::{Deserialize, Serialize};

/// Direction of a [`PlanarRotation`] step, seen looking down `-Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    CounterClockwise,
    Clockwise,
}

/// Rotates a point about the origin by a fixed angle per step, using the
/// complex-multiplication form `(x·c − y·s, y·c + x·s)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanarRotation {
    /// Degrees per step.
    pub angle: f32,
    pub orientation: Orientation,
}

impl PlanarRotation {
    /// Create a planar rotation of `angle` degrees per step.
    #[must_use]
    pub fn new(angle: f32, orientation: Orientation) -> Self {
        Self { angle, orientation }
    }

    /// The `(cos, sin)` pair applied each step.
    #[must_use]
    pub fn rotor(&self) -> (f32, f32) {
        let (sin, cos) = (self.angle * DEG_TO_RAD).sin_cos();
        match self.orientation {
            Orientation::CounterClockwise => (cos, sin),
            Orientation::Clockwise => (cos, -sin),
        }
    }

    /// Rotate `point` one step. The result always has `z = 0`.
    #[must_use]
    pub fn step(&self, point: Vec3) -> Vec3 {
        let (c, s) = self.rotor();
        Vec3::from_xy(point.x * c - point.y * s, point.y * c + point.x * s)
    }
}

impl Default for PlanarRotation {
    fn default() -> Self {
        Self::new(2.0, Orientation::CounterClockwise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_clockwise_quarter_turn() {
        let rot = PlanarRotation::new(90.0, Orientation::CounterClockwise);
        assert!(rot.step(Vec3::RIGHT).approx_eq(Vec3::UP));
    }

    #[test]
    fn test_clockwise_quarter_turn() {
        let rot = PlanarRotation::new(90.0, Orientation::Clockwise);
        assert!(rot.step(Vec3::RIGHT).approx_eq(Vec3::DOWN));
    }

    #[test]
    fn test_full_circle_returns_home_and_flattens_z() {
        let rot = PlanarRotation::default();
        let start = Vec3::new(3.0, 4.0, 7.0);
        let mut p = start;
        for _ in 0..180 {
            p = rot.step(p);
        }
        assert!(p.approximately_equal(Vec3::from_xy(3.0, 4.0), 1e-3), "{p:?}");
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_orientation_parses_snake_case() {
        let rot: PlanarRotation =
            serde_json::from_str(r#"{"angle": 5.0, "orientation": "clockwise"}"#).unwrap();
        assert_eq!(rot, PlanarRotation::new(5.0, Orientation::Clockwise));
    }
}
