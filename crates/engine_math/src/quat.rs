//! Rotation quaternion.
//!
//! [`Quat`] stores `(x, y, z, w)` with `w` the scalar part. Quaternions used as
//! rotations are expected to be unit length; nothing enforces it, and the
//! rotation operators silently scale or skew their output otherwise.
//!
//! ## Conventions
//!
//! - `a * b` applies `b` first, then `a`.
//! - Euler angles are in degrees and compose as `Rz * Ry * Rx`: a vector is
//!   rotated about X first, then Y, then Z.
//! - Rotations are right-handed: `euler(0, 90, 0)` takes `+X` to `-Z`.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vec3::Vec3;
use crate::{DEG_TO_RAD, RAD_TO_DEG};

/// A quaternion `x·i + y·j + z·k + w`.
///
/// `==` compares components exactly. [`Quat::approx_eq`] is the rotation
/// comparison: the dot product of both operands must exceed
/// [`Quat::EQUALITY_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// The no-op rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Dot products above this count as the same rotation.
    pub const EQUALITY_THRESHOLD: f32 = 0.999_999;

    /// Below this `sin(theta)`, slerp falls back to a normalised lerp.
    const SLERP_EPSILON: f32 = 1e-6;

    /// Create a quaternion from raw components, without normalising.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Overwrite all four components in place.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    /// Rotation of `degrees` about `axis`. The axis is normalised first.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let axis = axis.normalized();
        let (s, c) = (degrees * DEG_TO_RAD * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation from Euler angles in degrees. See the module docs for order.
    #[must_use]
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_euler(Vec3::new(x, y, z))
    }

    /// Rotation from a vector of Euler angles in degrees.
    #[must_use]
    pub fn from_euler(degrees: Vec3) -> Self {
        let half = degrees * (DEG_TO_RAD * 0.5);
        let (sx, cx) = half.x.sin_cos();
        let (sy, cy) = half.y.sin_cos();
        let (sz, cz) = half.z.sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Euler angles in degrees, each in `[-180, 180]`.
    ///
    /// Near gimbal lock (`|sin(pitch)| >= 1`) the Y angle snaps to `±90`.
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        let Self { x, y, z, w } = *self;

        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = 2.0 * (w * y - z * x);
        let pitch = if sinp.abs() >= 1.0 {
            std::f32::consts::FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        Vec3::new(roll, pitch, yaw) * RAD_TO_DEG
    }

    /// Replace this rotation with one built from Euler angles in degrees.
    pub fn set_euler_angles(&mut self, degrees: Vec3) {
        *self = Self::from_euler(degrees);
    }

    /// Build a rotation from three orthonormal basis columns using
    /// Shepperd's method (branch on the largest of trace and diagonal).
    #[must_use]
    pub fn from_rotation_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        let (m00, m10, m20) = (x_axis.x, x_axis.y, x_axis.z);
        let (m01, m11, m21) = (y_axis.x, y_axis.y, y_axis.z);
        let (m02, m12, m22) = (z_axis.x, z_axis.y, z_axis.z);

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let k = 0.5 / s;
            Self::new((m21 - m12) * k, (m02 - m20) * k, (m10 - m01) * k, s * 0.5)
        } else if m00 >= m11 && m00 >= m22 {
            let s = ((1.0 + m00 - m11 - m22) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new(s, (m01 + m10) * k, (m02 + m20) * k, (m21 - m12) * k)
        } else if m11 >= m22 {
            let s = ((1.0 - m00 + m11 - m22) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new((m01 + m10) * k, s, (m12 + m21) * k, (m02 - m20) * k)
        } else {
            let s = ((1.0 - m00 - m11 + m22) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new((m02 + m20) * k, (m12 + m21) * k, s, (m10 - m01) * k)
        }
    }

    /// Rotation that maps `+Z` onto `forward` and keeps `+Y` as close to `up`
    /// as possible.
    ///
    /// The basis is orthonormalised (Gram-Schmidt). A zero `forward` yields
    /// [`Quat::IDENTITY`]; an `up` parallel to `forward` is replaced by a
    /// world axis that is not.
    #[must_use]
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let forward = forward.normalized();
        if forward == Vec3::ZERO {
            return Self::IDENTITY;
        }

        let mut right = up.cross(forward).normalized();
        if right == Vec3::ZERO {
            let fallback = if forward.x.abs() < 0.9 {
                Vec3::RIGHT
            } else {
                Vec3::UP
            };
            right = fallback.cross(forward).normalized();
        }
        let up = forward.cross(right);

        Self::from_rotation_axes(right, up, forward).normalized()
    }

    /// [`Quat::look_rotation`] with [`Vec3::UP`] as the up hint.
    #[must_use]
    pub fn look_rotation_forward(forward: Vec3) -> Self {
        Self::look_rotation(forward, Vec3::UP)
    }

    /// Four-component dot product.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Angle between two rotations in degrees, `0` when they compare equal.
    #[must_use]
    pub fn angle(a: Self, b: Self) -> f32 {
        let dot = a.dot(b);
        if dot > Self::EQUALITY_THRESHOLD {
            0.0
        } else {
            dot.abs().min(1.0).acos() * 2.0 * RAD_TO_DEG
        }
    }

    /// Unit-length copy, or [`Quat::IDENTITY`] when the norm is effectively zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let norm = self.dot(self).sqrt();
        if norm < f32::MIN_POSITIVE {
            return Self::IDENTITY;
        }
        Self::new(self.x / norm, self.y / norm, self.z / norm, self.w / norm)
    }

    /// Normalise in place. See [`Quat::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Conjugate. Equals the true inverse only for unit quaternions.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Spherical interpolation with `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        Self::slerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Spherical interpolation along the arc from `a` to `b`.
    ///
    /// The path is not flipped to the shorter arc. When `a` and `b` are
    /// (anti)parallel the sine weights are undefined and this falls back to
    /// [`Quat::lerp_unclamped`].
    #[must_use]
    pub fn slerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        let theta = a.dot(b).clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        if sin_theta < Self::SLERP_EPSILON {
            return Self::lerp_unclamped(a, b, t);
        }

        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        Self::blend(a, wa, b, wb).normalized()
    }

    /// Normalised linear interpolation with `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Normalised linear interpolation; approximates slerp for small angles.
    #[must_use]
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        Self::blend(a, 1.0 - t, b, t).normalized()
    }

    /// Step from `from` towards `to` by at most `max_degrees_delta`.
    #[must_use]
    pub fn rotate_towards(from: Self, to: Self, max_degrees_delta: f32) -> Self {
        let angle = Self::angle(from, to);
        if angle == 0.0 {
            return to;
        }
        Self::slerp_unclamped(from, to, (max_degrees_delta / angle).min(1.0))
    }

    /// Exact component equality. Same as `==`.
    #[must_use]
    pub fn equals(self, other: Self) -> bool {
        self == other
    }

    /// `true` when both quaternions describe (almost) the same rotation.
    ///
    /// `q` and `-q` are the same rotation but do not compare equal here.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.dot(other) > Self::EQUALITY_THRESHOLD
    }

    /// Component by index (`0..4` maps to `x, y, z, w`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::index("quaternion", index)),
        }
    }

    /// Overwrite a component by index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn set_index(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f32, MathError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            3 => Ok(&mut self.w),
            _ => Err(MathError::index("quaternion", index)),
        }
    }

    fn blend(a: Self, wa: f32, b: Self, wb: f32) -> Self {
        Self::new(
            wa * a.x + wb * b.x,
            wa * a.y + wb * b.y,
            wa * a.z + wb * b.z,
            wa * a.w + wb * b.w,
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotate a vector (expanded `q * v * q⁻¹`). Assumes `self` is unit length.
impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, point: Vec3) -> Vec3 {
        let x2 = self.x * 2.0;
        let y2 = self.y * 2.0;
        let z2 = self.z * 2.0;

        let xx = self.x * x2;
        let yy = self.y * y2;
        let zz = self.z * z2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yz = self.y * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Vec3::new(
            (1.0 - (yy + zz)) * point.x + (xy - wz) * point.y + (xz + wy) * point.z,
            (xy + wz) * point.x + (1.0 - (xx + zz)) * point.y + (yz - wx) * point.z,
            (xz - wy) * point.x + (yz + wx) * point.y + (1.0 - (xx + yy)) * point.z,
        )
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Index<usize> for Quat {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", MathError::index("quaternion", index)),
        }
    }
}

impl IndexMut<usize> for Quat {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.component_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X = {}   Y = {}   Z = {}   W = {}",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_rotations() -> Vec<Quat> {
        vec![
            Quat::IDENTITY,
            Quat::euler(10.0, 20.0, 30.0),
            Quat::euler(-45.0, 60.0, 120.0),
            Quat::euler(170.0, -80.0, 5.0),
            Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 180.0),
            Quat::from_axis_angle(Vec3::FORWARD, 179.0),
        ]
    }

    fn assert_vec_close(actual: Vec3, expected: Vec3, tolerance: f32) {
        assert!(
            actual.approximately_equal(expected, tolerance),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_euler_y90_rotates_x_to_negative_z() {
        let rotated = Quat::euler(0.0, 90.0, 0.0) * Vec3::new(10.0, 0.0, 0.0);
        assert_vec_close(rotated, Vec3::new(0.0, 0.0, -10.0), 1e-4);
    }

    #[test]
    fn test_euler_composes_x_then_y_then_z() {
        let (x, y, z) = (30.0, -50.0, 70.0);
        let composed = Quat::from_axis_angle(Vec3::FORWARD, z)
            * Quat::from_axis_angle(Vec3::UP, y)
            * Quat::from_axis_angle(Vec3::RIGHT, x);
        assert!(Quat::euler(x, y, z).approx_eq(composed));
    }

    #[test]
    fn test_product_applies_right_operand_first() {
        let a = Quat::euler(0.0, 90.0, 0.0);
        let b = Quat::euler(90.0, 0.0, 0.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec_close((a * b) * v, a * (b * v), 1e-5);
        assert!(!(a * b).approx_eq(b * a));
    }

    #[test]
    fn test_inverse_round_trip() {
        let v = Vec3::new(3.0, -1.0, 2.0);
        for q in sample_rotations() {
            assert_vec_close((q.inverse() * q) * v, v, 1e-4);
            assert_vec_close(q.inverse() * (q * v), v, 1e-4);
        }
    }

    #[test]
    fn test_euler_angles_round_trip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        for q in sample_rotations() {
            let rebuilt = Quat::from_euler(q.euler_angles());
            assert_vec_close(rebuilt * v, q * v, 1e-3);
        }
    }

    #[test]
    fn test_euler_angles_reads_back_inputs() {
        let angles = Quat::euler(10.0, 20.0, 30.0).euler_angles();
        assert_vec_close(angles, Vec3::new(10.0, 20.0, 30.0), 1e-3);
    }

    #[test]
    fn test_euler_angles_gimbal_guard() {
        // Not unit length: sin(pitch) evaluates above 1 and must snap to 90.
        let q = Quat::new(0.0, 0.8, 0.0, 0.8);
        assert_abs_diff_eq!(q.euler_angles().y, 90.0, epsilon = 1e-4);
        let q = Quat::new(0.0, -0.8, 0.0, 0.8);
        assert_abs_diff_eq!(q.euler_angles().y, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_set_euler_angles() {
        let mut q = Quat::IDENTITY;
        q.set_euler_angles(Vec3::new(0.0, 90.0, 0.0));
        assert!(q.approx_eq(Quat::euler(0.0, 90.0, 0.0)));
    }

    #[test]
    fn test_angle() {
        let a = Quat::IDENTITY;
        let b = Quat::euler(0.0, 90.0, 0.0);
        assert_abs_diff_eq!(Quat::angle(a, b), 90.0, epsilon = 1e-2);
        assert_eq!(Quat::angle(b, b), 0.0);
    }

    #[test]
    fn test_slerp_endpoints() {
        let rotations = sample_rotations();
        for pair in rotations.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(Quat::slerp(a, b, 0.0).approx_eq(a));
            assert!(Quat::slerp(a, b, 1.0).approx_eq(b));
        }
    }

    #[test]
    fn test_slerp_midpoint() {
        let mid = Quat::slerp(Quat::IDENTITY, Quat::euler(0.0, 90.0, 0.0), 0.5);
        assert!(mid.approx_eq(Quat::euler(0.0, 45.0, 0.0)));
    }

    #[test]
    fn test_slerp_clamps_t() {
        let a = Quat::IDENTITY;
        let b = Quat::euler(0.0, 90.0, 0.0);
        assert!(Quat::slerp(a, b, 3.0).approx_eq(b));
        assert!(Quat::slerp_unclamped(a, b, 2.0).approx_eq(Quat::euler(0.0, 180.0, 0.0)));
    }

    #[test]
    fn test_slerp_identical_inputs_falls_back_to_lerp() {
        let q = Quat::euler(15.0, 25.0, 35.0);
        let r = Quat::slerp(q, q, 0.3);
        assert!(!r.x.is_nan() && !r.w.is_nan());
        assert!(r.approx_eq(q));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Quat::euler(10.0, 0.0, 0.0);
        let b = Quat::euler(0.0, 40.0, 0.0);
        assert!(Quat::lerp(a, b, 0.0).approx_eq(a));
        assert!(Quat::lerp(a, b, 1.0).approx_eq(b));
        assert_abs_diff_eq!(Quat::lerp(a, b, 0.5).dot(Quat::lerp(a, b, 0.5)), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalized(), Quat::IDENTITY);

        let mut q = Quat::new(0.0, 0.0, 0.0, 2.0);
        q.normalize();
        assert_eq!(q, Quat::IDENTITY);

        let n = Quat::new(1.0, 2.0, 3.0, 4.0).normalized();
        assert_abs_diff_eq!(n.dot(n), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_towards() {
        let from = Quat::IDENTITY;
        let to = Quat::euler(0.0, 90.0, 0.0);
        let step = Quat::rotate_towards(from, to, 30.0);
        assert_abs_diff_eq!(Quat::angle(from, step), 30.0, epsilon = 0.05);
        assert!(Quat::rotate_towards(from, to, 500.0).approx_eq(to));
        assert_eq!(Quat::rotate_towards(to, to, 10.0), to);
    }

    #[test]
    fn test_look_rotation_default_basis_is_identity() {
        assert!(Quat::look_rotation(Vec3::FORWARD, Vec3::UP).approx_eq(Quat::IDENTITY));
        assert_eq!(Quat::look_rotation(Vec3::ZERO, Vec3::UP), Quat::IDENTITY);
    }

    #[test]
    fn test_look_rotation_maps_forward_and_keeps_up() {
        for (forward, up) in [
            (Vec3::RIGHT, Vec3::UP),
            (Vec3::new(1.0, 2.0, -3.0), Vec3::UP),
            (Vec3::new(-4.0, 0.5, 1.0), Vec3::new(0.3, 1.0, 0.2)),
            (Vec3::UP, Vec3::UP),
        ] {
            let q = Quat::look_rotation(forward, up);
            assert_vec_close(q * Vec3::FORWARD, forward.normalized(), 1e-4);

            let rotated_up = q * Vec3::UP;
            assert_abs_diff_eq!(rotated_up.magnitude(), 1.0, epsilon = 1e-4);
            assert_abs_diff_eq!(rotated_up.dot(forward.normalized()), 0.0, epsilon = 1e-4);
        }
        let q = Quat::look_rotation_forward(Vec3::new(1.0, 2.0, -3.0));
        assert!((q * Vec3::UP).dot(Vec3::UP) > 0.0);
    }

    #[test]
    fn test_from_rotation_axes_recovers_rotation() {
        for q in sample_rotations() {
            let recovered =
                Quat::from_rotation_axes(q * Vec3::RIGHT, q * Vec3::UP, q * Vec3::FORWARD);
            assert_abs_diff_eq!(recovered.dot(q).abs(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_approx_eq_is_not_sign_agnostic() {
        let q = Quat::euler(0.0, 30.0, 0.0);
        assert!(q.approx_eq(q));
        assert!(!q.approx_eq(-q));

        let nudged = Quat::new(q.x, q.y + 1e-4, q.z, q.w);
        assert!(!q.equals(nudged));
        assert!(q.approx_eq(nudged.normalized()));
    }

    #[test]
    fn test_indexing() {
        let mut q = Quat::IDENTITY;
        assert_eq!(q.get(3), Ok(1.0));
        assert_eq!(q.get(4), Err(MathError::index("quaternion", 4)));
        q[0] = 0.5;
        q.set_index(1, 0.25).unwrap();
        assert_eq!((q.x, q.y), (0.5, 0.25));
        assert!(q.set_index(9, 0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid quaternion index: 4")]
    fn test_index_out_of_range_panics() {
        let _ = Quat::IDENTITY[4];
    }

    #[test]
    fn test_set_and_display() {
        let mut q = Quat::IDENTITY;
        q.set(1.0, 0.0, 0.0, 0.0);
        assert_eq!(q.to_string(), "X = 1   Y = 0   Z = 0   W = 0");
    }
}
