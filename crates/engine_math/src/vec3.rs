//! 3-component vector.
//!
//! [`Vec3`] is the workhorse value of the math layer: positions, directions,
//! Euler angles and scale factors are all carried as `Vec3`.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vec4::Vec4;
use crate::RAD_TO_DEG;

/// A 3D vector of `f32` components.
///
/// `==` compares components exactly. Use [`Vec3::approx_eq`] for the
/// tolerance-based comparison (squared distance below [`Vec3::EPSILON`]²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Tolerance used by [`Vec3::approx_eq`] and [`Vec3::normalized`].
    pub const EPSILON: f32 = 1e-5;

    /// Below this, [`Vec3::angle`] treats one of its inputs as degenerate.
    const ANGLE_EPSILON: f32 = 1e-15;

    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit +Z.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// All components `+inf`.
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vector in the XY plane (`z = 0`).
    #[must_use]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Extend to a [`Vec4`] with the given `w`.
    #[must_use]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Overwrite all three components in place.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        *self = Self::new(x, y, z);
    }

    /// Multiply component-wise by `scale`, in place.
    pub fn scale(&mut self, scale: Self) {
        self.x *= scale.x;
        self.y *= scale.y;
        self.z *= scale.z;
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length; cheaper than [`Vec3::magnitude`] for comparisons.
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction, or [`Vec3::ZERO`] when the length is
    /// not above [`Vec3::EPSILON`].
    #[must_use]
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag > Self::EPSILON {
            self / mag
        } else {
            Self::ZERO
        }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unsigned angle between `from` and `to`, in degrees within `[0, 180]`.
    ///
    /// Returns `0` when either vector is (nearly) zero.
    #[must_use]
    pub fn angle(from: Self, to: Self) -> f32 {
        let denominator = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
        if denominator < Self::ANGLE_EPSILON {
            return 0.0;
        }
        let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
        cos.acos() * RAD_TO_DEG
    }

    /// Rescale to `max_length` if longer than it; otherwise return unchanged.
    #[must_use]
    pub fn clamp_magnitude(self, max_length: f32) -> Self {
        let sqr = self.sqr_magnitude();
        if sqr > max_length * max_length {
            self / sqr.sqrt() * max_length
        } else {
            self
        }
    }

    /// Euclidean distance between `a` and `b`.
    #[must_use]
    pub fn distance(a: Self, b: Self) -> f32 {
        (a - b).magnitude()
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation without clamping `t`; extrapolates outside `[0, 1]`.
    #[must_use]
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        Self::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(a: Self, b: Self) -> Self {
        Self::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(a: Self, b: Self) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    /// Projection of `self` onto `on_normal`.
    ///
    /// `on_normal` need not be unit length. Returns [`Vec3::ZERO`] only when
    /// its squared length is below [`f32::MIN_POSITIVE`].
    #[must_use]
    pub fn project(self, on_normal: Self) -> Self {
        let sqr = on_normal.dot(on_normal);
        if sqr < f32::MIN_POSITIVE {
            return Self::ZERO;
        }
        on_normal * (self.dot(on_normal) / sqr)
    }

    /// Reflect `in_direction` off the plane defined by `in_normal`.
    #[must_use]
    pub fn reflect(in_direction: Self, in_normal: Self) -> Self {
        in_direction - 2.0 * in_direction.project(in_normal)
    }

    /// Exact component equality. Same as `==`.
    #[must_use]
    pub fn equals(self, other: Self) -> bool {
        self == other
    }

    /// `true` when the squared distance to `other` is below [`Vec3::EPSILON`]².
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approximately_equal(other, Self::EPSILON)
    }

    /// `true` when the distance to `other` is below `tolerance`.
    #[must_use]
    pub fn approximately_equal(self, other: Self, tolerance: f32) -> bool {
        (self - other).sqr_magnitude() < tolerance * tolerance
    }

    /// Component by index (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::index("vector", index)),
        }
    }

    /// Overwrite a component by index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 2`.
    pub fn set_index(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f32, MathError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(MathError::index("vector", index)),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// No zero guard: dividing by `0.0` yields `inf`/`NaN` components.
impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", MathError::index("vector", index)),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.component_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {}   Y = {}   Z = {}", self.x, self.y, self.z)
    }
}
