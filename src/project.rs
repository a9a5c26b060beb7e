//! Projection and view matrix helpers.
//!
//! Closed-form orthographic, perspective and frustum projection matrices, the
//! LookAt view matrix, and the Project/UnProject window-coordinate mappings,
//! all following the classic OpenGL conventions (right-handed eye space,
//! clip-space z in [-1, 1], column-major storage).

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::transform::translate_3d;
use crate::vector::Vector;

/// The error reported by [`unproject`] when the combined
/// projection-modelview matrix has no inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    NotInvertible,
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::NotInvertible => {
                write!(f, "projection times modelview is not invertible")
            }
        }
    }
}

impl Error for ProjectionError {}

/// An orthographic projection matrix for the given clipping planes.
pub fn ortho<T: Scalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let two = T::of(2.0);
    let (rml, tmb, fmn) = (right - left, top - bottom, far - near);
    let l = T::zero();

    Matrix::from_col_arrays([
        [two / rml, l, l, l],
        [l, two / tmb, l, l],
        [l, l, -two / fmn, l],
        [
            -(right + left) / rml,
            -(top + bottom) / tmb,
            -(far + near) / fmn,
            T::one(),
        ],
    ])
}

/// Equivalent to [`ortho`] with the near and far planes at -1 and 1.
pub fn ortho_2d<T: Scalar>(left: T, right: T, bottom: T, top: T) -> Matrix<T, 4, 4> {
    ortho(left, right, bottom, top, -T::one(), T::one())
}

/// A perspective projection matrix. `fovy` is the vertical field of view in
/// radians; no degree conversion happens here.
pub fn perspective<T: Scalar>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let two = T::of(2.0);
    let nmf = near - far;
    let f = T::one() / (fovy / two).tan();
    let l = T::zero();

    Matrix::from_col_arrays([
        [f / aspect, l, l, l],
        [l, f, l, l],
        [l, l, (near + far) / nmf, -T::one()],
        [l, l, (two * far * near) / nmf, l],
    ])
}

/// A general off-axis frustum projection matrix. [`perspective`] is the
/// symmetric special case.
pub fn frustum<T: Scalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let two = T::of(2.0);
    let (rml, tmb, fmn) = (right - left, top - bottom, far - near);
    let a = (right + left) / rml;
    let b = (top + bottom) / tmb;
    let c = -(far + near) / fmn;
    let d = -(two * far * near) / fmn;
    let l = T::zero();

    Matrix::from_col_arrays([
        [(two * near) / rml, l, l, l],
        [l, (two * near) / tmb, l, l],
        [a, b, c, -T::one()],
        [l, l, d, l],
    ])
}

/// A view matrix for a camera at `eye` looking toward `center`, given as flat
/// scalars. See [`look_at_v`] for the vector form.
#[allow(clippy::too_many_arguments)]
pub fn look_at<T: Scalar>(
    eye_x: T,
    eye_y: T,
    eye_z: T,
    center_x: T,
    center_y: T,
    center_z: T,
    up_x: T,
    up_y: T,
    up_z: T,
) -> Matrix<T, 4, 4> {
    look_at_v(
        Vector([eye_x, eye_y, eye_z]),
        Vector([center_x, center_y, center_z]),
        Vector([up_x, up_y, up_z]),
    )
}

/// A view matrix for a camera at `eye` looking toward `center` with the given
/// approximate `up` direction.
///
/// The camera basis is built Gram-Schmidt style: forward is
/// `normalize(center - eye)`, side is `normalize(forward x up)`, and the true
/// up is `side x forward`. The rotation is composed with a translation that
/// moves `eye` to the origin.
pub fn look_at_v<T: Scalar>(
    eye: Vector<T, 3>,
    center: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    let f = (center - eye).normalize();
    let s = f.cross(up.normalize()).normalize();
    let u = s.cross(f);
    let l = T::zero();

    let m = Matrix::from_col_arrays([
        [s.0[0], u.0[0], -f.0[0], l],
        [s.0[1], u.0[1], -f.0[1], l],
        [s.0[2], u.0[2], -f.0[2], l],
        [l, l, l, T::one()],
    ]);

    m * translate_3d(-eye.0[0], -eye.0[1], -eye.0[2])
}

/// Transforms a point from object space to window coordinates.
///
/// The point goes through the modelview-projection matrix, the perspective
/// divide, and the viewport mapping, yielding continuous pixel-space x and y
/// plus a depth in [0, 1]. Round to get discrete pixel locations.
pub fn project<T: Scalar>(
    obj: Vector<T, 3>,
    modelview: &Matrix<T, 4, 4>,
    projection: &Matrix<T, 4, 4>,
    initial_x: i32,
    initial_y: i32,
    width: i32,
    height: i32,
) -> Vector<T, 3> {
    let two = T::of(2.0);
    let vpp = *projection * *modelview * obj.extend(T::one());
    let ndc = vpp.truncate() * (T::one() / vpp.w());

    Vector([
        T::of(f64::from(initial_x)) + (T::of(f64::from(width)) * (ndc.x() + T::one())) / two,
        T::of(f64::from(initial_y)) + (T::of(f64::from(height)) * (ndc.y() + T::one())) / two,
        (ndc.z() + T::one()) / two,
    ])
}

/// Transforms window coordinates back to object space: the inverse of
/// [`project`].
///
/// This is the one fallible operation in the crate. If the combined
/// projection-modelview matrix is singular, its inverse comes back as the
/// all-zero matrix (the documented degenerate contract of `inv`), and rather
/// than silently propagating garbage through a user-facing coordinate
/// transform this reports [`ProjectionError::NotInvertible`].
pub fn unproject<T: Scalar>(
    win: Vector<T, 3>,
    modelview: &Matrix<T, 4, 4>,
    projection: &Matrix<T, 4, 4>,
    initial_x: i32,
    initial_y: i32,
    width: i32,
    height: i32,
) -> Result<Vector<T, 3>, ProjectionError> {
    let two = T::of(2.0);
    let inv = (*projection * *modelview).inv();
    if inv == Matrix::zero() {
        trace!("unproject: projection times modelview is singular");
        return Err(ProjectionError::NotInvertible);
    }

    let ndc = Vector([
        (two * (win.x() - T::of(f64::from(initial_x))) / T::of(f64::from(width))) - T::one(),
        (two * (win.y() - T::of(f64::from(initial_y))) / T::of(f64::from(height))) - T::one(),
        two * win.z() - T::one(),
    ]);
    let obj4 = inv * ndc.extend(T::one());

    Ok(obj4.truncate() * (T::one() / obj4.w()))
}
