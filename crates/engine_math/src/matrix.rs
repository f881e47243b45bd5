//! 4×4 transform matrix.
//!
//! [`Matrix4x4`] is stored column-major. Fields are named `m{row}{col}` and
//! declared in storage order, so the flat index of `m{row}{col}` is
//! `row + col * 4`. Vectors are treated as columns: `M * v`.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// A column-major 4×4 matrix of `f32`.
///
/// `==` compares entries exactly; [`Matrix4x4::approx_eq`] compares columns
/// with [`Vec4::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Matrix4x4 {
    pub m00: f32,
    pub m10: f32,
    pub m20: f32,
    pub m30: f32,
    pub m01: f32,
    pub m11: f32,
    pub m21: f32,
    pub m31: f32,
    pub m02: f32,
    pub m12: f32,
    pub m22: f32,
    pub m32: f32,
    pub m03: f32,
    pub m13: f32,
    pub m23: f32,
    pub m33: f32,
}

impl Matrix4x4 {
    /// All entries zero.
    pub const ZERO: Self = Self::new(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// Build a matrix from four columns.
    #[must_use]
    pub const fn new(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            m00: c0.x,
            m10: c0.y,
            m20: c0.z,
            m30: c0.w,
            m01: c1.x,
            m11: c1.y,
            m21: c1.z,
            m31: c1.w,
            m02: c2.x,
            m12: c2.y,
            m22: c2.z,
            m32: c2.w,
            m03: c3.x,
            m13: c3.y,
            m23: c3.z,
            m33: c3.w,
        }
    }

    /// Build a matrix from 16 entries in column-major order.
    #[must_use]
    pub const fn from_cols_array(m: &[f32; 16]) -> Self {
        Self::new(
            Vec4::new(m[0], m[1], m[2], m[3]),
            Vec4::new(m[4], m[5], m[6], m[7]),
            Vec4::new(m[8], m[9], m[10], m[11]),
            Vec4::new(m[12], m[13], m[14], m[15]),
        )
    }

    /// The 16 entries in column-major order.
    #[must_use]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        [
            self.m00, self.m10, self.m20, self.m30, self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32, self.m03, self.m13, self.m23, self.m33,
        ]
    }

    /// Translation by `v`.
    #[must_use]
    pub const fn translate(v: Vec3) -> Self {
        Self::new(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(v.x, v.y, v.z, 1.0),
        )
    }

    /// Axis-aligned scale by `v`.
    #[must_use]
    pub const fn scale(v: Vec3) -> Self {
        Self::new(
            Vec4::new(v.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, v.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, v.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Rotation matrix of `q`. Assumes `q` is unit length.
    #[must_use]
    pub fn rotate(q: Quat) -> Self {
        let x2 = q.x * 2.0;
        let y2 = q.y * 2.0;
        let z2 = q.z * 2.0;
        let xx = q.x * x2;
        let yy = q.y * y2;
        let zz = q.z * z2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yz = q.y * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::new(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// `translate(pos) * rotate(rot) * scale(scale)`: scales, then rotates,
    /// then translates.
    #[must_use]
    pub fn trs(pos: Vec3, rot: Quat, scale: Vec3) -> Self {
        Self::translate(pos) * Self::rotate(rot) * Self::scale(scale)
    }

    /// Transpose of `m`.
    #[must_use]
    pub fn transpose(m: Self) -> Self {
        Self::new(m.row_unchecked(0), m.row_unchecked(1), m.row_unchecked(2), m.row_unchecked(3))
    }

    /// Transpose of `self`. Method form of [`Matrix4x4::transpose`].
    #[must_use]
    pub fn transposed(self) -> Self {
        Self::transpose(self)
    }

    /// Rotation part as a quaternion.
    ///
    /// The upper 3×3 block is column-normalised to strip positive scale, then
    /// converted with Shepperd's method. Shear and negative scale are not
    /// handled. A zero-scale axis yields [`Quat::IDENTITY`].
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let x_axis = self.col_unchecked(0).truncate().normalized();
        let y_axis = self.col_unchecked(1).truncate().normalized();
        let z_axis = self.col_unchecked(2).truncate().normalized();
        if x_axis == Vec3::ZERO || y_axis == Vec3::ZERO || z_axis == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_axes(x_axis, y_axis, z_axis).normalized()
    }

    /// The diagonal `(m00, m11, m22)`. Exact only without rotation or shear.
    #[must_use]
    pub fn lossy_scale(&self) -> Vec3 {
        Vec3::new(self.m00, self.m11, self.m22)
    }

    /// Transform a point (`w = 1`), dropping the resulting `w`.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (*self * point.extend(1.0)).truncate()
    }

    /// Transform a direction (`w = 0`); translation is ignored.
    #[must_use]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * vector.extend(0.0)).truncate()
    }

    /// Column `index` (`0..4`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn column(&self, index: usize) -> Result<Vec4, MathError> {
        if index > 3 {
            return Err(MathError::index("matrix column", index));
        }
        Ok(self.col_unchecked(index))
    }

    /// Row `index` (`0..4`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn row(&self, index: usize) -> Result<Vec4, MathError> {
        if index > 3 {
            return Err(MathError::index("matrix row", index));
        }
        Ok(self.row_unchecked(index))
    }

    /// Overwrite column `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn set_column(&mut self, index: usize, column: Vec4) -> Result<(), MathError> {
        if index > 3 {
            return Err(MathError::index("matrix column", index));
        }
        for row in 0..4 {
            *self.slot_mut(row + index * 4)? = column[row];
        }
        Ok(())
    }

    /// Overwrite row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn set_row(&mut self, index: usize, row: Vec4) -> Result<(), MathError> {
        if index > 3 {
            return Err(MathError::index("matrix row", index));
        }
        for col in 0..4 {
            *self.slot_mut(index + col * 4)? = row[col];
        }
        Ok(())
    }

    /// Entry at flat column-major `index` (`0..16`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 15`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.slot(index).copied()
    }

    /// Overwrite the entry at flat column-major `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when `index > 15`.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        *self.slot_mut(index)? = value;
        Ok(())
    }

    /// Entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is above 3.
    pub fn get_rc(&self, row: usize, col: usize) -> Result<f32, MathError> {
        self.slot(Self::flat_index(row, col)?).copied()
    }

    /// Overwrite the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] when either index is above 3.
    pub fn set_rc(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
        *self.slot_mut(Self::flat_index(row, col)?)? = value;
        Ok(())
    }

    /// Exact entry equality. Same as `==`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Column-wise tolerance comparison.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (0..4).all(|i| self.col_unchecked(i).approx_eq(other.col_unchecked(i)))
    }

    fn flat_index(row: usize, col: usize) -> Result<usize, MathError> {
        if row > 3 {
            return Err(MathError::index("matrix row", row));
        }
        if col > 3 {
            return Err(MathError::index("matrix column", col));
        }
        Ok(row + col * 4)
    }

    fn col_unchecked(&self, index: usize) -> Vec4 {
        let m = self.to_cols_array();
        let base = index * 4;
        Vec4::new(m[base], m[base + 1], m[base + 2], m[base + 3])
    }

    fn row_unchecked(&self, index: usize) -> Vec4 {
        let m = self.to_cols_array();
        Vec4::new(m[index], m[index + 4], m[index + 8], m[index + 12])
    }

    fn slot(&self, index: usize) -> Result<&f32, MathError> {
        Ok(match index {
            0 => &self.m00,
            1 => &self.m10,
            2 => &self.m20,
            3 => &self.m30,
            4 => &self.m01,
            5 => &self.m11,
            6 => &self.m21,
            7 => &self.m31,
            8 => &self.m02,
            9 => &self.m12,
            10 => &self.m22,
            11 => &self.m32,
            12 => &self.m03,
            13 => &self.m13,
            14 => &self.m23,
            15 => &self.m33,
            _ => return Err(MathError::index("matrix", index)),
        })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut f32, MathError> {
        Ok(match index {
            0 => &mut self.m00,
            1 => &mut self.m10,
            2 => &mut self.m20,
            3 => &mut self.m30,
            4 => &mut self.m01,
            5 => &mut self.m11,
            6 => &mut self.m21,
            7 => &mut self.m31,
            8 => &mut self.m02,
            9 => &mut self.m12,
            10 => &mut self.m22,
            11 => &mut self.m32,
            12 => &mut self.m03,
            13 => &mut self.m13,
            14 => &mut self.m23,
            15 => &mut self.m33,
            _ => return Err(MathError::index("matrix", index)),
        })
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = self.to_cols_array();
        let b = rhs.to_cols_array();
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row + col * 4] = (0..4).map(|k| a[row + k * 4] * b[k + col * 4]).sum();
            }
        }
        Self::from_cols_array(&out)
    }
}

impl Mul<Vec4> for Matrix4x4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z + self.m03 * v.w,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z + self.m13 * v.w,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z + self.m23 * v.w,
            self.m30 * v.x + self.m31 * v.y + self.m32 * v.z + self.m33 * v.w,
        )
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match self.slot(index) {
            Ok(entry) => entry,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<usize> for Matrix4x4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.slot_mut(index) {
            Ok(entry) => entry,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        match Self::flat_index(row, col).and_then(|i| self.slot(i)) {
            Ok(entry) => entry,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let index = match Self::flat_index(row, col) {
            Ok(index) => index,
            Err(e) => panic!("{e}"),
        };
        &mut self[index]
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let r = self.row_unchecked(row);
            writeln!(f, "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}
