//! # engine_math
//!
//! Value-type linear algebra for the engine.
//!
//! This crate provides:
//!
//! - [`Vec3`] — 3-component vector with projection, reflection and interpolation.
//! - [`Vec4`] — homogeneous 4-vector used for matrix columns, rows and products.
//! - [`Quat`] — rotation quaternion with Euler conversion and spherical interpolation.
//! - [`Matrix4x4`] — column-major transform matrix with TRS composition.
//! - [`Transform3D`] — position, rotation and scale bundled for drivers.
//! - [`native`] — explicit conversions to and from [`glam`] types.
//!
//! All types are `Copy` values. `==` is exact component equality; each type
//! also offers a named tolerance-based comparison (`approx_eq`).

pub mod error;
pub mod matrix;
pub mod native;
pub mod quat;
pub mod transform;
pub mod vec3;
pub mod vec4;

pub use error::MathError;
pub use matrix::Matrix4x4;
pub use quat::Quat;
pub use transform::Transform3D;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degrees to radians multiplier.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Radians to degrees multiplier.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;
