//! Affine transformation matrix constructors.
//!
//! Rotation, scale and translation matrices in both the "bare" shapes (Mat2 /
//! Mat3 rotations) and the homogeneous 4x4 shapes that compose with the
//! projection and view matrices in [`crate::project`]. All angles are radians
//! and rotations are counter-clockwise about the axis when looking down it
//! toward the origin, matching the usual right-handed OpenGL conventions.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// A 2D counter-clockwise rotation by `angle` radians.
pub fn rotate_2d<T: Scalar>(angle: T) -> Matrix<T, 2, 2> {
    let (s, c) = angle.sin_cos();
    Matrix::from_col_arrays([[c, s], [-s, c]])
}

/// A 3D rotation about the X axis.
pub fn rotate_3d_x<T: Scalar>(angle: T) -> Matrix<T, 3, 3> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([[o, l, l], [l, c, s], [l, -s, c]])
}

/// A 3D rotation about the Y axis.
pub fn rotate_3d_y<T: Scalar>(angle: T) -> Matrix<T, 3, 3> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([[c, l, -s], [l, o, l], [s, l, c]])
}

/// A 3D rotation about the Z axis.
pub fn rotate_3d_z<T: Scalar>(angle: T) -> Matrix<T, 3, 3> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([[c, s, l], [-s, c, l], [l, l, o]])
}

/// A homogeneous 2D translation.
pub fn translate_2d<T: Scalar>(tx: T, ty: T) -> Matrix<T, 3, 3> {
    let mut m = Matrix::identity();
    m.set(0, 2, tx);
    m.set(1, 2, ty);
    m
}

/// A homogeneous 3D translation.
pub fn translate_3d<T: Scalar>(tx: T, ty: T, tz: T) -> Matrix<T, 4, 4> {
    let mut m = Matrix::identity();
    m.set(0, 3, tx);
    m.set(1, 3, ty);
    m.set(2, 3, tz);
    m
}

/// A homogeneous 2D scale.
pub fn scale_2d<T: Scalar>(sx: T, sy: T) -> Matrix<T, 3, 3> {
    Matrix::from_diagonal(Vector([sx, sy, T::one()]))
}

/// A homogeneous 3D scale.
pub fn scale_3d<T: Scalar>(sx: T, sy: T, sz: T) -> Matrix<T, 4, 4> {
    Matrix::from_diagonal(Vector([sx, sy, sz, T::one()]))
}

/// The homogeneous form of [`rotate_3d_x`].
pub fn homog_rotate_3d_x<T: Scalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([
        [o, l, l, l],
        [l, c, s, l],
        [l, -s, c, l],
        [l, l, l, o],
    ])
}

/// The homogeneous form of [`rotate_3d_y`].
pub fn homog_rotate_3d_y<T: Scalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([
        [c, l, -s, l],
        [l, o, l, l],
        [s, l, c, l],
        [l, l, l, o],
    ])
}

/// The homogeneous form of [`rotate_3d_z`].
pub fn homog_rotate_3d_z<T: Scalar>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([
        [c, s, l, l],
        [-s, c, l, l],
        [l, l, o, l],
        [l, l, l, o],
    ])
}

/// A homogeneous rotation of `angle` radians about an arbitrary `axis`
/// (Rodrigues form). The axis must be unit length.
pub fn homog_rotate_3d<T: Scalar>(angle: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let (x, y, z) = (axis.0[0], axis.0[1], axis.0[2]);
    let (s, c) = angle.sin_cos();
    let k = T::one() - c;
    let (o, l) = (T::one(), T::zero());
    Matrix::from_col_arrays([
        [x * x * k + c, x * y * k + z * s, x * z * k - y * s, l],
        [x * y * k - z * s, y * y * k + c, y * z * k + x * s, l],
        [x * z * k + y * s, y * z * k - x * s, z * z * k + c, l],
        [l, l, l, o],
    ])
}
