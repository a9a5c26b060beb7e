//! Fixed-dimension vectors.
//!
//! [`Vector`] is generic over the element type and the dimension; the usual
//! graphics aliases ([`Vec2`], [`Vec3`], [`Vec4`] and their `f64` counterparts)
//! cover the 2/3/4-component cases. All operations return new values; nothing
//! here mutates in place.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::matrix::Matrix;
use crate::scalar::{self, Scalar};

/// An N-component vector, stored as a plain array.
///
/// The inner array is public so vectors can be built with literal syntax:
/// `Vector([1.0, 2.0, 3.0])`. Per-dimension `new` constructors and named
/// component accessors exist for the 2/3/4 cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize>(pub [T; N]);

pub type Vec2 = Vector<f32, 2>;
pub type Vec3 = Vector<f32, 3>;
pub type Vec4 = Vector<f32, 4>;
pub type DVec2 = Vector<f64, 2>;
pub type DVec3 = Vector<f64, 3>;
pub type DVec4 = Vector<f64, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The vector with all components zero.
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Returns the components as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// The dot product: the sum of the element-wise products.
    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// The Euclidean length of the vector.
    ///
    /// The 2D case goes through `hypot`, which avoids overflow and underflow
    /// of the intermediate squares.
    pub fn len(self) -> T {
        if N == 2 {
            self.0[0].hypot(self.0[1])
        } else {
            self.dot(self).sqrt()
        }
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector has no direction, and this deliberately does not
    /// special-case it: every component ends up non-finite through ordinary
    /// IEEE-754 propagation. Callers relying on branchless math downstream
    /// depend on that, so it must not be "fixed" into a zero vector.
    pub fn normalize(self) -> Self {
        self * (T::one() / self.len())
    }

    /// The outer product of two vectors, producing an NxO matrix with
    /// entry (r, c) equal to `self[r] * other[c]`.
    pub fn outer_product<const O: usize>(self, other: Vector<T, O>) -> Matrix<T, N, O> {
        let mut cols = [[T::zero(); N]; O];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = self.0[r] * other.0[c];
            }
        }
        Matrix::from_col_arrays(cols)
    }

    /// Element-wise approximate equality with the default tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_func(other, |a, b| scalar::approx_eq(a, b))
    }

    /// Element-wise approximate equality with a caller-supplied tolerance.
    pub fn approx_eq_threshold(&self, other: &Self, epsilon: T) -> bool {
        self.approx_eq_func(other, |a, b| scalar::approx_eq_threshold(a, b, epsilon))
    }

    /// Element-wise equality under a caller-supplied predicate. All components
    /// must pass.
    pub fn approx_eq_func<F: Fn(T, T) -> bool>(&self, other: &Self, eq: F) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(&a, &b)| eq(a, b))
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    pub fn x(self) -> T {
        self.0[0]
    }

    pub fn y(self) -> T {
        self.0[1]
    }

    /// Raises the vector to 3 dimensions, with the given z component.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], z])
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    pub fn x(self) -> T {
        self.0[0]
    }

    pub fn y(self) -> T {
        self.0[1]
    }

    pub fn z(self) -> T {
        self.0[2]
    }

    /// The 3D cross product. Anticommutative: `a.cross(b) == -b.cross(a)`.
    pub fn cross(self, other: Self) -> Self {
        let (a, b) = (self.0, other.0);
        Self([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    /// Raises the vector to 4 dimensions, with the given w component.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }

    /// Drops the trailing component.
    pub fn truncate(self) -> Vector<T, 2> {
        Vector([self.0[0], self.0[1]])
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    pub fn x(self) -> T {
        self.0[0]
    }

    pub fn y(self) -> T {
        self.0[1]
    }

    pub fn z(self) -> T {
        self.0[2]
    }

    pub fn w(self) -> T {
        self.0[3]
    }

    /// Drops the trailing component.
    pub fn truncate(self) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], self.0[2]])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = *a + *b;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = *a - *b;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for a in self.0.iter_mut() {
            *a = -*a;
        }
        self
    }
}

/// Scales every component by a constant factor.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, s: T) -> Self {
        for a in self.0.iter_mut() {
            *a = *a * s;
        }
        self
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(N)?;
        for c in &self.0 {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de>
    for Vector<T, N>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ComponentsVisitor<T, const N: usize>(std::marker::PhantomData<T>);

        impl<'de, T: Scalar + serde::Deserialize<'de>, const N: usize> serde::de::Visitor<'de>
            for ComponentsVisitor<T, N>
        {
            type Value = Vector<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a sequence of {N} numbers")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut components = [T::zero(); N];
                for (i, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector(components))
            }
        }

        deserializer.deserialize_tuple(N, ComponentsVisitor(std::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_sub() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(v1 - v2, Vec3::new(-3.0, -3.0, -3.0));
        assert!((v1 + v2 - v2).approx_eq(&v1));
    }

    #[test]
    fn test_scale_and_neg() {
        let v = Vec2::new(1.0, -2.0);
        assert_eq!(v * 2.0, Vec2::new(2.0, -4.0));
        assert_eq!(-v, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn test_dot() {
        let v1 = DVec4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = DVec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(v1.dot(v2), 70.0);
    }

    #[test]
    fn test_len() {
        assert_eq!(Vec2::new(3.0, 4.0).len(), 5.0);
        assert_eq!(DVec3::new(2.0, 3.0, 6.0).len(), 7.0);
        assert_eq!(DVec4::new(1.0, 1.0, 1.0, 1.0).len(), 2.0);
    }

    #[test]
    fn test_len_2d_avoids_overflow() {
        // naive x*x + y*y overflows f64 here, hypot must not
        let v = DVec2::new(1e300, 1e300);
        assert!(v.len().is_finite());
    }

    #[test]
    fn test_normalize() {
        let v = DVec3::new(1.0, 2.0, 3.0).normalize();
        assert!(crate::scalar::approx_eq(v.len(), 1.0));
    }

    #[test]
    fn test_normalize_zero_vector_is_non_finite() {
        let v = Vec3::zero().normalize();
        assert!(v.0.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn test_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));

        let v1 = DVec3::new(1.0, 2.0, 3.0);
        let v2 = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1.cross(v2), DVec3::new(-3.0, 6.0, -3.0));
        // anticommutative
        assert!(v1.cross(v2).approx_eq(&(v2.cross(v1) * -1.0)));
    }

    #[test]
    fn test_outer_product() {
        let v1 = DVec3::new(1.0, 2.0, 3.0);
        let v2 = DVec2::new(4.0, 5.0);
        let m = v1.outer_product(v2);
        for r in 0..3 {
            for c in 0..2 {
                assert_eq!(m.at(r, c), v1[r] * v2[c]);
            }
        }
    }

    #[test]
    fn test_extend_truncate() {
        let v2 = Vec2::new(1.0, 2.0);
        assert_eq!(v2.extend(3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v2.extend(3.0).extend(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).truncate(), v2);
    }

    #[test]
    fn test_named_accessors() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v[0], 1.0);
    }

    #[test]
    fn test_approx_eq_threshold() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(1.04, 2.04);
        assert!(v1.approx_eq_threshold(&v2, 0.1));
        assert!(!v1.approx_eq_threshold(&v2, 0.001));
        let eq = crate::scalar::approx_eq_func(0.1);
        assert!(v1.approx_eq_func(&v2, eq));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_string(), "1,2,3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let v = DVec3::new(1.0, -2.5, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,-2.5,3.0]");
        let back: DVec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
