//!
//! Glmath is a fixed-dimension linear algebra library for 3D graphics pipelines.
//!
//! It provides 2/3/4-component vectors, all MxN matrix shapes for M,N in {2,3,4},
//! quaternions, and the usual camera helpers (orthographic/perspective projection,
//! LookAt view matrices, Project/UnProject) built on top of them.
//!
//! All types are plain stack-allocated values, generic over `f32` and `f64`
//! through the [`Scalar`] trait. Matrices are stored column-major, so their flat
//! layout can be handed to a graphics API as-is.
//!
//! A few deliberate contracts to be aware of:
//!
//! - Inverting a singular matrix returns the all-zero matrix rather than an
//!   error; check the determinant first if you care.
//! - Normalizing a zero-length vector propagates IEEE-754 non-finite values
//!   instead of substituting a zero vector.
//! - [`project::unproject`] is the only fallible operation; it reports a
//!   non-invertible modelview-projection instead of returning garbage.

pub mod matrix;
pub mod project;
pub mod quat;
pub mod scalar;
pub mod transform;
pub mod vector;

pub use matrix::{
    DMat2, DMat2x3, DMat2x4, DMat3, DMat3x2, DMat3x4, DMat4, DMat4x2, DMat4x3, Mat2, Mat2x3,
    Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3, Matrix,
};
pub use project::{
    ProjectionError, frustum, look_at, look_at_v, ortho, ortho_2d, perspective, project, unproject,
};
pub use quat::{DQuat, Quat, Quaternion, RotationOrder};
pub use scalar::{Scalar, approx_eq, approx_eq_func, approx_eq_threshold, clamp, is_clamped};
pub use transform::{
    homog_rotate_3d, homog_rotate_3d_x, homog_rotate_3d_y, homog_rotate_3d_z, rotate_2d,
    rotate_3d_x, rotate_3d_y, rotate_3d_z, scale_2d, scale_3d, translate_2d, translate_3d,
};
pub use vector::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4, Vector};
