//! Homogeneous 4-component vector.
//!
//! [`Vec4`] exists for the matrix layer: matrix columns and rows are `Vec4`s,
//! and `Matrix4x4 * Vec4` treats the vector as a homogeneous column.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vec3::Vec3;

/// A 4D vector of `f32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drop `w`.
    #[must_use]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Four-component dot product.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Squared length.
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// `true` when the squared distance to `other` is below [`Vec3::EPSILON`]².
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < Vec3::EPSILON * Vec3::EPSILON
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
            _ => Err(MathError::index("vector", index)),
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
            _ => Err(MathError::index("vector", index)),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", MathError::index("vector", index)),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.component_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Vec4 {
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

    #[test]
    fn test_truncate_and_extend() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(1.0).truncate(), v);
        assert_eq!(v.extend(0.5).w, 0.5);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(Vec4::new(1.0, 0.0, 0.0, 1.0)), 5.0);
    }

    #[test]
    fn test_indexing() {
        let mut v = Vec4::ZERO;
        v[3] = 2.0;
        assert_eq!(v.get(3), Ok(2.0));
        assert!(v.get(4).is_err());
    }

    #[test]
    fn test_set_index() {
        let mut v = Vec4::ZERO;
        v.set_index(0, 1.0).unwrap();
        v.set_index(3, 4.0).unwrap();
        assert_eq!(v, Vec4::new(1.0, 0.0, 0.0, 4.0));

        let err = v.set_index(4, 9.0).unwrap_err();
        assert_eq!(err, MathError::IndexOutOfRange { kind: "vector", index: 4 });
        assert_eq!(v, Vec4::new(1.0, 0.0, 0.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "invalid vector index")]
    fn test_index_out_of_range_panics() {
        let _ = Vec4::ZERO[4];
    }
}
