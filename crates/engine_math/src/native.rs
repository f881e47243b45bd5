//! Explicit conversions to and from [`glam`].
//!
//! glam is the math library the rest of the engine (rendering, ECS storage)
//! speaks. Conversions are named `from_native` / `to_native` rather than
//! `From` impls so every crossing of the boundary is visible at the call site.
//! All conversions are lossless.

use crate::matrix::Matrix4x4;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

impl Vec3 {
    /// Convert from a [`glam::Vec3`].
    #[must_use]
    pub const fn from_native(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Convert to a [`glam::Vec3`].
    #[must_use]
    pub const fn to_native(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }
}

impl Vec4 {
    /// Convert from a [`glam::Vec4`].
    #[must_use]
    pub fn from_native(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Convert to a [`glam::Vec4`].
    #[must_use]
    pub const fn to_native(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl Quat {
    /// Convert from a [`glam::Quat`].
    #[must_use]
    pub fn from_native(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }

    /// Components are copied as-is; glam's own ops assume unit length.
    #[must_use]
    pub const fn to_native(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }
}

impl Matrix4x4 {
    /// Both layouts are column-major, so entries map one to one.
    #[must_use]
    pub fn from_native(m: glam::Mat4) -> Self {
        Self::from_cols_array(&m.to_cols_array())
    }

    /// Convert to a [`glam::Mat4`].
    #[must_use]
    pub fn to_native(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.to_cols_array())
    }
}
