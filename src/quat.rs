//! Quaternions and Euler-angle conversions.
//!
//! [`Quaternion`] represents a rotation as a scalar part `w` plus a 3-vector
//! part `v`. A valid rotation quaternion has unit norm; intermediate
//! arithmetic is free to wander off the unit sphere, which is why
//! [`Quaternion::normalize`] exists.
//!
//! Multiplication is the Hamilton product and is *not* commutative:
//! `q1 * q2` is generally not `q2 * q1`.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::matrix::Matrix;
use crate::scalar::{self, Scalar};
use crate::vector::Vector;

/// The order in which a triple of Euler angles is applied to its axes, for
/// [`Quaternion::from_euler_angles`].
///
/// The name is an axis descriptor: `Xzx` means the first angle rotates about
/// X, the second about Z, and the third about X again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationOrder {
    Xyx,
    Xyz,
    Xzx,
    Xzy,
    Yxy,
    Yxz,
    Yzy,
    Yzx,
    Zyz,
    Zyx,
    Zxz,
    Zxy,
}

/// A quaternion: a scalar component `w` and a 3D vector component `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Scalar + serde::Serialize",
        deserialize = "T: Scalar + serde::Deserialize<'de>"
    ))
)]
pub struct Quaternion<T> {
    pub w: T,
    pub v: Vector<T, 3>,
}

pub type Quat = Quaternion<f32>;
pub type DQuat = Quaternion<f64>;

impl<T: Scalar> Quaternion<T> {
    /// The identity rotation: `w = 1`, `v = (0, 0, 0)`. Multiplying any
    /// quaternion by this yields the quaternion you started with.
    pub fn identity() -> Self {
        Self {
            w: T::one(),
            v: Vector::zero(),
        }
    }

    /// The rotation of `angle` radians about `axis`.
    ///
    /// The axis should be unit length for the result to be a versor; no
    /// normalization or degree conversion happens here.
    pub fn from_axis_angle(angle: T, axis: Vector<T, 3>) -> Self {
        let (s, c) = (angle / T::of(2.0)).sin_cos();
        Self { w: c, v: axis * s }
    }

    /// A convenient alias for `v[0]`.
    pub fn x(self) -> T {
        self.v.0[0]
    }

    /// A convenient alias for `v[1]`.
    pub fn y(self) -> T {
        self.v.0[1]
    }

    /// A convenient alias for `v[2]`.
    pub fn z(self) -> T {
        self.v.0[2]
    }

    /// The conjugate: `v` negated, `w` kept.
    pub fn conjugate(self) -> Self {
        Self {
            w: self.w,
            v: -self.v,
        }
    }

    /// The length (norm) of the quaternion, treating it as a 4-vector.
    pub fn len(self) -> T {
        self.dot(self).sqrt()
    }

    /// An alias for [`Quaternion::len`]; both terms are common.
    pub fn norm(self) -> T {
        self.len()
    }

    /// Scales the quaternion to unit length, returning its versor.
    ///
    /// Returns `self` unchanged when the length already compares
    /// approximately equal to 1. The short-circuit is deliberate: it skips a
    /// division that would only smear rounding error around.
    pub fn normalize(self) -> Self {
        let length = self.len();
        if scalar::approx_eq(T::one(), length) {
            return self;
        }
        self * (T::one() / length)
    }

    /// The inverse rotation: the conjugate scaled by the reciprocal squared
    /// norm.
    ///
    /// The squared norm is taken directly from the self dot product rather
    /// than squaring [`Quaternion::len`], avoiding a pointless
    /// sqrt-then-square round trip and the precision it would cost.
    pub fn inverse(self) -> Self {
        self.conjugate() * (T::one() / self.dot(self))
    }

    /// The dot product of two quaternions treated as 4-vectors.
    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.v.dot(other.v)
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Strictly this is `q * (0, v) * q⁻¹` under the Hamilton product; the
    /// implementation uses the equivalent double-cross expansion
    /// `v + 2w(qv × v) + 2qv × (qv × v)`, which is cheaper.
    pub fn rotate(self, v: Vector<T, 3>) -> Vector<T, 3> {
        let cross = self.v.cross(v);
        v + cross * (T::of(2.0) * self.w) + (self.v * T::of(2.0)).cross(cross)
    }

    /// The homogeneous 4x4 rotation matrix for this quaternion. The last row
    /// and column are the translation-free identity edge.
    pub fn to_mat4(self) -> Matrix<T, 4, 4> {
        let two = T::of(2.0);
        let (w, x, y, z) = (self.w, self.x(), self.y(), self.z());
        Matrix::from_col_arrays([
            [
                T::one() - two * y * y - two * z * z,
                two * x * y + two * w * z,
                two * x * z - two * w * y,
                T::zero(),
            ],
            [
                two * x * y - two * w * z,
                T::one() - two * x * x - two * z * z,
                two * y * z + two * w * x,
                T::zero(),
            ],
            [
                two * x * z + two * w * y,
                two * y * z - two * w * x,
                T::one() - two * x * x - two * y * y,
                T::zero(),
            ],
            [T::zero(), T::zero(), T::zero(), T::one()],
        ])
    }

    /// Recovers the quaternion from a homogeneous rotation matrix (the
    /// inverse of [`Quaternion::to_mat4`]), branching on the largest diagonal
    /// element for numerical stability.
    ///
    /// The matrix must be a pure rotation; a quaternion and its negation
    /// encode the same rotation, so the round trip recovers the input only up
    /// to sign.
    pub fn from_mat4(m: &Matrix<T, 4, 4>) -> Self {
        let two = T::of(2.0);
        let quarter = T::of(0.25);
        let m = m.as_slice();
        let tr = m[0] + m[5] + m[10];
        if tr > T::zero() {
            let s = (T::one() + tr).sqrt() * two;
            Self {
                w: quarter * s,
                v: Vector([(m[6] - m[9]) / s, (m[8] - m[2]) / s, (m[1] - m[4]) / s]),
            }
        } else if m[0] > m[5] && m[0] > m[10] {
            let s = (T::one() + m[0] - m[5] - m[10]).sqrt() * two;
            Self {
                w: (m[6] - m[9]) / s,
                v: Vector([quarter * s, (m[4] + m[1]) / s, (m[8] + m[2]) / s]),
            }
        } else if m[5] > m[10] {
            let s = (T::one() + m[5] - m[0] - m[10]).sqrt() * two;
            Self {
                w: (m[8] - m[2]) / s,
                v: Vector([(m[4] + m[1]) / s, quarter * s, (m[9] + m[6]) / s]),
            }
        } else {
            let s = (T::one() + m[10] - m[0] - m[5]).sqrt() * two;
            Self {
                w: (m[1] - m[4]) / s,
                v: Vector([(m[8] + m[2]) / s, (m[9] + m[6]) / s, quarter * s]),
            }
        }
    }

    /// Spherical linear interpolation: the constant-angular-velocity path
    /// from `self` to `other`.
    ///
    /// Both inputs are normalized first, and their dot product is clamped to
    /// [-1, 1] before the inverse cosine so accumulated rounding error cannot
    /// push it out of the domain. Note that `q1.slerp(q2, t)` is generally
    /// not `q2.slerp(q1, t)`; if you need that symmetry (and can give up
    /// constant velocity), use [`Quaternion::nlerp`].
    pub fn slerp(self, other: Self, amount: T) -> Self {
        let q1 = self.normalize();
        let q2 = other.normalize();

        let dot = scalar::clamp(q1.dot(q2), -T::one(), T::one());
        let theta = dot.acos() * amount;
        let (s, c) = theta.sin_cos();
        let rel = (q2 - q1 * dot).normalize();

        q1 * c + rel * s
    }

    /// Linear interpolation between two quaternions, cheap and simple.
    pub fn lerp(self, other: Self, amount: T) -> Self {
        self + (other - self) * amount
    }

    /// Normalized linear interpolation: [`Quaternion::lerp`] followed by
    /// [`Quaternion::normalize`].
    ///
    /// Does not maintain constant angular velocity the way slerp does, but it
    /// is much cheaper and `q1.nlerp(q2, t)` equals `q2.nlerp(q1, 1 - t)`
    /// along the same path, so it is symmetric in its endpoints.
    pub fn nlerp(self, other: Self, amount: T) -> Self {
        self.lerp(other, amount).normalize()
    }

    /// Compares `w` via the scalar predicate and `v` element-wise; both must
    /// pass.
    pub fn approx_eq(&self, other: &Self) -> bool {
        scalar::approx_eq(self.w, other.w) && self.v.approx_eq(&other.v)
    }

    /// Like [`Quaternion::approx_eq`] with a caller-supplied tolerance.
    pub fn approx_eq_threshold(&self, other: &Self, epsilon: T) -> bool {
        scalar::approx_eq_threshold(self.w, other.w, epsilon)
            && self.v.approx_eq_threshold(&other.v, epsilon)
    }

    /// Like [`Quaternion::approx_eq`] with a caller-supplied predicate.
    pub fn approx_eq_func<F: Fn(T, T) -> bool>(&self, other: &Self, eq: F) -> bool {
        eq(self.w, other.w) && self.v.approx_eq_func(&other.v, eq)
    }

    /// Converts a triple of Euler angles (radians) into a quaternion, with
    /// `order` naming the axis each angle rotates about.
    ///
    /// The twelve closed forms follow the standard angle-to-quaternion
    /// tables. An invalid order cannot be expressed: [`RotationOrder`] is a
    /// closed enum, so the match below is exhaustive by construction.
    pub fn from_euler_angles(angle1: T, angle2: T, angle3: T, order: RotationOrder) -> Self {
        let two = T::of(2.0);
        let (s0, c0) = (angle1 / two).sin_cos();
        let (s1, c1) = (angle2 / two).sin_cos();
        let (s2, c2) = (angle3 / two).sin_cos();

        let (w, x, y, z) = match order {
            RotationOrder::Zyx => (
                c0 * c1 * c2 + s0 * s1 * s2,
                c0 * c1 * s2 - s0 * s1 * c2,
                c0 * s1 * c2 + s0 * c1 * s2,
                s0 * c1 * c2 - c0 * s1 * s2,
            ),
            RotationOrder::Zyz => (
                c0 * c1 * c2 - s0 * c1 * s2,
                c0 * s1 * s2 - s0 * s1 * c2,
                c0 * s1 * c2 + s0 * s1 * s2,
                s0 * c1 * c2 + c0 * c1 * s2,
            ),
            RotationOrder::Zxy => (
                c0 * c1 * c2 - s0 * s1 * s2,
                c0 * s1 * c2 - s0 * c1 * s2,
                c0 * c1 * s2 + s0 * s1 * c2,
                c0 * s1 * s2 + s0 * c1 * c2,
            ),
            RotationOrder::Zxz => (
                c0 * c1 * c2 - s0 * c1 * s2,
                c0 * s1 * c2 + s0 * s1 * s2,
                s0 * s1 * c2 - c0 * s1 * s2,
                c0 * c1 * s2 + s0 * c1 * c2,
            ),
            RotationOrder::Yxz => (
                c0 * c1 * c2 + s0 * s1 * s2,
                c0 * s1 * c2 + s0 * c1 * s2,
                s0 * c1 * c2 - c0 * s1 * s2,
                c0 * c1 * s2 - s0 * s1 * c2,
            ),
            RotationOrder::Yxy => (
                c0 * c1 * c2 - s0 * c1 * s2,
                c0 * s1 * c2 + s0 * s1 * s2,
                s0 * c1 * c2 + c0 * c1 * s2,
                c0 * s1 * s2 - s0 * s1 * c2,
            ),
            RotationOrder::Yzx => (
                c0 * c1 * c2 - s0 * s1 * s2,
                c0 * c1 * s2 + s0 * s1 * c2,
                c0 * s1 * s2 + s0 * c1 * c2,
                c0 * s1 * c2 - s0 * c1 * s2,
            ),
            RotationOrder::Yzy => (
                c0 * c1 * c2 - s0 * c1 * s2,
                s0 * s1 * c2 - c0 * s1 * s2,
                c0 * c1 * s2 + s0 * c1 * c2,
                c0 * s1 * c2 + s0 * s1 * s2,
            ),
            RotationOrder::Xyz => (
                c0 * c1 * c2 - s0 * s1 * s2,
                c0 * s1 * s2 + s0 * c1 * c2,
                c0 * s1 * c2 - s0 * c1 * s2,
                c0 * c1 * s2 + s0 * s1 * c2,
            ),
            RotationOrder::Xyx => (
                c0 * c1 * c2 - s0 * c1 * s2,
                c0 * c1 * s2 + s0 * c1 * c2,
                c0 * s1 * c2 + s0 * s1 * s2,
                s0 * s1 * c2 - c0 * s1 * s2,
            ),
            RotationOrder::Xzy => (
                c0 * c1 * c2 + s0 * s1 * s2,
                s0 * c1 * c2 - c0 * s1 * s2,
                c0 * c1 * s2 - s0 * s1 * c2,
                c0 * s1 * c2 + s0 * c1 * s2,
            ),
            RotationOrder::Xzx => (
                c0 * c1 * c2 - s0 * c1 * s2,
                c0 * c1 * s2 + s0 * c1 * c2,
                c0 * s1 * s2 - s0 * s1 * c2,
                c0 * s1 * c2 + s0 * s1 * s2,
            ),
        };

        Self {
            w,
            v: Vector([x, y, z]),
        }
    }
}

/// Adds two quaternions: no more than adding their `w` and `v` parts.
impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            v: self.v + other.v,
        }
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            w: self.w - other.w,
            v: self.v - other.v,
        }
    }
}

/// The Hamilton product, composing two rotations. Not commutative:
/// `q1 * q2` applies `q2` first, then `q1`, and generally differs from
/// `q2 * q1`.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            w: self.w * other.w - self.v.dot(other.v),
            v: self.v.cross(other.v) + other.v * self.w + self.v * other.w,
        }
    }
}

/// Scales every component by a constant factor.
impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            w: self.w * s,
            v: self.v * s,
        }
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.w, self.v)
    }
}
