//! Position, rotation and scale bundled as one value.
//!
//! [`Transform3D`] is what a driver keeps per animated object; it turns into a
//! [`Matrix4x4`] through [`Matrix4x4::trs`].

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;
use crate::quat::Quat;
use crate::vec3::Vec3;

/// A 3D transform: scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform3D {
    /// World-space position.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Per-axis scale factor.
    pub scale: Vec3,
}

impl Transform3D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform with the given position and default rotation/scale.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a new transform with position and rotation.
    #[must_use]
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Self::IDENTITY
        }
    }

    /// The TRS matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4x4 {
        Matrix4x4::trs(self.position, self.rotation, self.scale)
    }

    /// Map a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let mut scaled = point;
        scaled.scale(self.scale);
        self.position + self.rotation * scaled
    }

    /// Translate the transform by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.position += offset;
        self
    }

    /// Apply `rotation` on top of the current one (world space).
    #[must_use]
    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = (rotation * self.rotation).normalized();
        self
    }

    /// Multiply every scale axis by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
