//! Orientation composed from independent per-axis rotations.

use engine_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Builds an orientation as `rx * ry * rz`, each factor a rotation about one
/// world axis by the matching component of `angles` (degrees).
///
/// Note the order differs from [`Quat::euler`], which composes `rz * ry * rx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRotation {
    pub angles: Vec3,
}

impl AxisRotation {
    /// Create a rotation from per-axis angles in degrees.
    #[must_use]
    pub fn new(angles: Vec3) -> Self {
        Self { angles }
    }

    /// The composed orientation `rx * ry * rz`.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        let rx = Quat::from_axis_angle(Vec3::RIGHT, self.angles.x);
        let ry = Quat::from_axis_angle(Vec3::UP, self.angles.y);
        let rz = Quat::from_axis_angle(Vec3::FORWARD, self.angles.z);
        rx * ry * rz
    }

    /// Rotate `point` by [`AxisRotation::orientation`].
    #[must_use]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.orientation() * point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angles_is_identity() {
        assert_eq!(AxisRotation::default().orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_single_axis_matches_euler() {
        let rot = AxisRotation::new(Vec3::new(0.0, 90.0, 0.0));
        assert!(rot.orientation().approx_eq(Quat::euler(0.0, 90.0, 0.0)));
        assert!(rot.apply(Vec3::RIGHT).approx_eq(Vec3::BACK));
    }

    #[test]
    fn test_applies_z_first() {
        let rot = AxisRotation::new(Vec3::new(90.0, 0.0, 90.0));
        // Z takes +X to +Y, then X takes +Y to +Z.
        assert!(rot.apply(Vec3::RIGHT).approx_eq(Vec3::FORWARD));
        assert!(!rot.orientation().approx_eq(Quat::euler(90.0, 0.0, 90.0)));
    }
}
