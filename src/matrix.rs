//! Fixed-dimension matrices.
//!
//! [`Matrix`] covers every MxN shape for M,N in {2,3,4} through const generics;
//! the aliases ([`Mat2`], [`Mat3x4`], ...) name the combinations the way
//! graphics code expects. Storage is column-major: consecutive memory walks
//! down a column before moving to the next one, so element (row r, col c) sits
//! at flat index `c * M + r` and [`Matrix::as_slice`] can be uploaded to a
//! graphics API directly.
//!
//! Determinant and inverse are hard-coded cofactor/adjugate expansions for the
//! 2/3/4 square sizes, not a general elimination. Inverting a singular matrix
//! returns the all-zero matrix of the same shape; that is a documented result,
//! not an error, and callers who care should check the determinant first.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::scalar::{self, Scalar};
use crate::vector::Vector;

/// An MxN matrix (M rows, N columns) stored column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    cols: [[T; M]; N],
}

pub type Mat2 = Matrix<f32, 2, 2>;
pub type Mat2x3 = Matrix<f32, 2, 3>;
pub type Mat2x4 = Matrix<f32, 2, 4>;
pub type Mat3x2 = Matrix<f32, 3, 2>;
pub type Mat3 = Matrix<f32, 3, 3>;
pub type Mat3x4 = Matrix<f32, 3, 4>;
pub type Mat4x2 = Matrix<f32, 4, 2>;
pub type Mat4x3 = Matrix<f32, 4, 3>;
pub type Mat4 = Matrix<f32, 4, 4>;
pub type DMat2 = Matrix<f64, 2, 2>;
pub type DMat2x3 = Matrix<f64, 2, 3>;
pub type DMat2x4 = Matrix<f64, 2, 4>;
pub type DMat3x2 = Matrix<f64, 3, 2>;
pub type DMat3 = Matrix<f64, 3, 3>;
pub type DMat3x4 = Matrix<f64, 3, 4>;
pub type DMat4x2 = Matrix<f64, 4, 2>;
pub type DMat4x3 = Matrix<f64, 4, 3>;
pub type DMat4 = Matrix<f64, 4, 4>;

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// The matrix with all elements zero.
    pub fn zero() -> Self {
        Self {
            cols: [[T::zero(); M]; N],
        }
    }

    /// Builds a matrix from its columns as plain arrays.
    pub fn from_col_arrays(cols: [[T; M]; N]) -> Self {
        Self { cols }
    }

    /// Builds a matrix from N column vectors of dimension M.
    pub fn from_cols(cols: [Vector<T, M>; N]) -> Self {
        Self {
            cols: cols.map(|v| v.0),
        }
    }

    /// Builds a matrix from M row vectors of dimension N. The result is still
    /// stored column-major.
    pub fn from_rows(rows: [Vector<T, N>; M]) -> Self {
        Self {
            cols: std::array::from_fn(|c| std::array::from_fn(|r| rows[r].0[c])),
        }
    }

    /// Returns the element at the given row and column.
    ///
    /// Out-of-range indices get whatever Rust's array indexing naturally does
    /// (a panic); there is no validation layer on top of that.
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cols[col][row]
    }

    /// Sets the element at the given row and column in place. This is the one
    /// mutating operation on the type.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cols[col][row] = value;
    }

    /// The flat column-major index of the given row and column, for use with
    /// [`Matrix::as_slice`].
    pub const fn index(row: usize, col: usize) -> usize {
        col * M + row
    }

    /// The elements as a flat column-major slice, matching the layout a
    /// graphics API expects for an MxN matrix uniform.
    pub fn as_slice(&self) -> &[T] {
        self.cols.as_flattened()
    }

    /// The elements as a mutable flat column-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cols.as_flattened_mut()
    }

    /// Extracts the given row as a vector of dimension N.
    pub fn row(&self, row: usize) -> Vector<T, N> {
        Vector(std::array::from_fn(|c| self.cols[c][row]))
    }

    /// Extracts the given column as a vector of dimension M.
    pub fn col(&self, col: usize) -> Vector<T, M> {
        Vector(self.cols[col])
    }

    /// Decomposes the matrix into its rows, top to bottom.
    pub fn rows(&self) -> [Vector<T, N>; M] {
        std::array::from_fn(|r| self.row(r))
    }

    /// Decomposes the matrix into its columns, left to right.
    pub fn cols(&self) -> [Vector<T, M>; N] {
        std::array::from_fn(|c| self.col(c))
    }

    /// The transpose: element (r, c) of the result is element (c, r) of the
    /// input. A pure permutation, so it introduces no floating-point error and
    /// `m.transpose().transpose()` equals `m` exactly.
    pub fn transpose(&self) -> Matrix<T, N, M> {
        Matrix {
            cols: std::array::from_fn(|c| std::array::from_fn(|r| self.cols[r][c])),
        }
    }

    /// Element-wise approximate equality with the default tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_func(other, |a, b| scalar::approx_eq(a, b))
    }

    /// Element-wise approximate equality with a caller-supplied tolerance.
    pub fn approx_eq_threshold(&self, other: &Self, epsilon: T) -> bool {
        self.approx_eq_func(other, |a, b| scalar::approx_eq_threshold(a, b, epsilon))
    }

    /// Element-wise equality under a caller-supplied predicate. All elements
    /// must pass.
    pub fn approx_eq_func<F: Fn(T, T) -> bool>(&self, other: &Self, eq: F) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(&a, &b)| eq(a, b))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix: 1 on the main diagonal, 0 elsewhere.
    pub fn identity() -> Self {
        Self::from_diagonal(Vector([T::one(); N]))
    }

    /// A matrix with the given vector on the main diagonal and 0 elsewhere.
    /// The identity is the special case of an all-ones diagonal.
    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        let mut m = Self::zero();
        for (i, &d) in diagonal.0.iter().enumerate() {
            m.cols[i][i] = d;
        }
        m
    }

    /// The trace: the sum of the main-diagonal elements.
    pub fn trace(&self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.cols[i][i];
        }
        acc
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    /// The determinant, hard-coded from the cofactor expansion.
    pub fn det(&self) -> T {
        let m = self.as_slice();
        m[0] * m[3] - m[1] * m[2]
    }

    /// The inverse via the classical adjugate scaled by the reciprocal
    /// determinant.
    ///
    /// If the determinant compares approximately equal to zero this returns
    /// the all-zero matrix; see the module docs for the contract. A
    /// determinant that is merely *near* zero without tripping that check can
    /// still produce huge or infinite elements, which is accepted behavior.
    pub fn inv(&self) -> Self {
        let det = self.det();
        if scalar::approx_eq(det, T::zero()) {
            return Self::zero();
        }
        let m = self.as_slice();
        let adjugate = Self::from_col_arrays([[m[3], -m[1]], [-m[2], m[0]]]);
        adjugate * (T::one() / det)
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// The determinant, hard-coded from the cofactor expansion.
    pub fn det(&self) -> T {
        let m = self.as_slice();
        m[0] * m[4] * m[8] + m[3] * m[7] * m[2] + m[6] * m[1] * m[5]
            - m[6] * m[4] * m[2]
            - m[3] * m[1] * m[8]
            - m[0] * m[7] * m[5]
    }

    /// The inverse via the classical adjugate scaled by the reciprocal
    /// determinant. Singular input yields the all-zero matrix; see the module
    /// docs.
    pub fn inv(&self) -> Self {
        let det = self.det();
        if scalar::approx_eq(det, T::zero()) {
            return Self::zero();
        }
        let m = self.as_slice();
        let adjugate = Self::from_col_arrays([
            [
                m[4] * m[8] - m[5] * m[7],
                m[2] * m[7] - m[1] * m[8],
                m[1] * m[5] - m[2] * m[4],
            ],
            [
                m[5] * m[6] - m[3] * m[8],
                m[0] * m[8] - m[2] * m[6],
                m[2] * m[3] - m[0] * m[5],
            ],
            [
                m[3] * m[7] - m[4] * m[6],
                m[1] * m[6] - m[0] * m[7],
                m[0] * m[4] - m[1] * m[3],
            ],
        ]);
        adjugate * (T::one() / det)
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// The determinant: the full 24-term cofactor expansion, precomputed so no
    /// loops are involved.
    pub fn det(&self) -> T {
        let m = self.as_slice();
        m[0] * m[5] * m[10] * m[15] - m[0] * m[5] * m[11] * m[14] - m[0] * m[6] * m[9] * m[15]
            + m[0] * m[6] * m[11] * m[13]
            + m[0] * m[7] * m[9] * m[14]
            - m[0] * m[7] * m[10] * m[13]
            - m[1] * m[4] * m[10] * m[15]
            + m[1] * m[4] * m[11] * m[14]
            + m[1] * m[6] * m[8] * m[15]
            - m[1] * m[6] * m[11] * m[12]
            - m[1] * m[7] * m[8] * m[14]
            + m[1] * m[7] * m[10] * m[12]
            + m[2] * m[4] * m[9] * m[15]
            - m[2] * m[4] * m[11] * m[13]
            - m[2] * m[5] * m[8] * m[15]
            + m[2] * m[5] * m[11] * m[12]
            + m[2] * m[7] * m[8] * m[13]
            - m[2] * m[7] * m[9] * m[12]
            - m[3] * m[4] * m[9] * m[14]
            + m[3] * m[4] * m[10] * m[13]
            + m[3] * m[5] * m[8] * m[14]
            - m[3] * m[5] * m[10] * m[12]
            - m[3] * m[6] * m[8] * m[13]
            + m[3] * m[6] * m[9] * m[12]
    }

    /// The inverse via the classical adjugate scaled by the reciprocal
    /// determinant, with every cofactor written out. Singular input yields the
    /// all-zero matrix; see the module docs.
    pub fn inv(&self) -> Self {
        let det = self.det();
        if scalar::approx_eq(det, T::zero()) {
            return Self::zero();
        }
        let m = self.as_slice();
        let adjugate = Self::from_col_arrays([
            [
                -m[7] * m[10] * m[13] + m[6] * m[11] * m[13] + m[7] * m[9] * m[14]
                    - m[5] * m[11] * m[14]
                    - m[6] * m[9] * m[15]
                    + m[5] * m[10] * m[15],
                m[3] * m[10] * m[13] - m[2] * m[11] * m[13] - m[3] * m[9] * m[14]
                    + m[1] * m[11] * m[14]
                    + m[2] * m[9] * m[15]
                    - m[1] * m[10] * m[15],
                -m[3] * m[6] * m[13] + m[2] * m[7] * m[13] + m[3] * m[5] * m[14]
                    - m[1] * m[7] * m[14]
                    - m[2] * m[5] * m[15]
                    + m[1] * m[6] * m[15],
                m[3] * m[6] * m[9] - m[2] * m[7] * m[9] - m[3] * m[5] * m[10]
                    + m[1] * m[7] * m[10]
                    + m[2] * m[5] * m[11]
                    - m[1] * m[6] * m[11],
            ],
            [
                m[7] * m[10] * m[12] - m[6] * m[11] * m[12] - m[7] * m[8] * m[14]
                    + m[4] * m[11] * m[14]
                    + m[6] * m[8] * m[15]
                    - m[4] * m[10] * m[15],
                -m[3] * m[10] * m[12] + m[2] * m[11] * m[12] + m[3] * m[8] * m[14]
                    - m[0] * m[11] * m[14]
                    - m[2] * m[8] * m[15]
                    + m[0] * m[10] * m[15],
                m[3] * m[6] * m[12] - m[2] * m[7] * m[12] - m[3] * m[4] * m[14]
                    + m[0] * m[7] * m[14]
                    + m[2] * m[4] * m[15]
                    - m[0] * m[6] * m[15],
                -m[3] * m[6] * m[8] + m[2] * m[7] * m[8] + m[3] * m[4] * m[10]
                    - m[0] * m[7] * m[10]
                    - m[2] * m[4] * m[11]
                    + m[0] * m[6] * m[11],
            ],
            [
                -m[7] * m[9] * m[12] + m[5] * m[11] * m[12] + m[7] * m[8] * m[13]
                    - m[4] * m[11] * m[13]
                    - m[5] * m[8] * m[15]
                    + m[4] * m[9] * m[15],
                m[3] * m[9] * m[12] - m[1] * m[11] * m[12] - m[3] * m[8] * m[13]
                    + m[0] * m[11] * m[13]
                    + m[1] * m[8] * m[15]
                    - m[0] * m[9] * m[15],
                -m[3] * m[5] * m[12] + m[1] * m[7] * m[12] + m[3] * m[4] * m[13]
                    - m[0] * m[7] * m[13]
                    - m[1] * m[4] * m[15]
                    + m[0] * m[5] * m[15],
                m[3] * m[5] * m[8] - m[1] * m[7] * m[8] - m[3] * m[4] * m[9]
                    + m[0] * m[7] * m[9]
                    + m[1] * m[4] * m[11]
                    - m[0] * m[5] * m[11],
            ],
            [
                m[6] * m[9] * m[12] - m[5] * m[10] * m[12] - m[6] * m[8] * m[13]
                    + m[4] * m[10] * m[13]
                    + m[5] * m[8] * m[14]
                    - m[4] * m[9] * m[14],
                -m[2] * m[9] * m[12] + m[1] * m[10] * m[12] + m[2] * m[8] * m[13]
                    - m[0] * m[10] * m[13]
                    - m[1] * m[8] * m[14]
                    + m[0] * m[9] * m[14],
                m[2] * m[5] * m[12] - m[1] * m[6] * m[12] - m[2] * m[4] * m[13]
                    + m[0] * m[6] * m[13]
                    + m[1] * m[4] * m[14]
                    - m[0] * m[5] * m[14],
                -m[2] * m[5] * m[8] + m[1] * m[6] * m[8] + m[2] * m[4] * m[9]
                    - m[0] * m[6] * m[9]
                    - m[1] * m[4] * m[10]
                    + m[0] * m[5] * m[10],
            ],
        ]);
        adjugate * (T::one() / det)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice().iter()) {
            *a = *a + *b;
        }
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice().iter()) {
            *a = *a - *b;
        }
        self
    }
}

/// Scales every element by a constant factor.
impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(mut self, s: T) -> Self {
        for a in self.as_mut_slice().iter_mut() {
            *a = *a * s;
        }
        self
    }
}

/// The general matrix product: MxN times NxO yields MxO, with every
/// combination of M, N, O in {2,3,4} covered by the one implementation.
impl<T: Scalar, const M: usize, const N: usize, const O: usize> Mul<Matrix<T, N, O>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, O>;

    fn mul(self, other: Matrix<T, N, O>) -> Matrix<T, M, O> {
        let mut cols = [[T::zero(); M]; O];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                let mut acc = T::zero();
                for k in 0..N {
                    acc = acc + self.cols[k][r] * other.cols[c][k];
                }
                *cell = acc;
            }
        }
        Matrix { cols }
    }
}

/// The matrix-vector product, the O=1 case of the general product.
impl<T: Scalar, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn mul(self, v: Vector<T, N>) -> Vector<T, M> {
        Vector(std::array::from_fn(|r| {
            let mut acc = T::zero();
            for k in 0..N {
                acc = acc + self.cols[k][r] * v.0[k];
            }
            acc
        }))
    }
}

impl<T: Scalar, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..M {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for c in 0..N {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cols[c][r])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize, const M: usize, const N: usize> serde::Serialize
    for Matrix<T, M, N>
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(M * N)?;
        for e in self.as_slice() {
            tup.serialize_element(e)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>, const M: usize, const N: usize>
    serde::Deserialize<'de> for Matrix<T, M, N>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ElementsVisitor<T, const M: usize, const N: usize>(std::marker::PhantomData<T>);

        impl<'de, T: Scalar + serde::Deserialize<'de>, const M: usize, const N: usize>
            serde::de::Visitor<'de> for ElementsVisitor<T, M, N>
        {
            type Value = Matrix<T, M, N>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a column-major sequence of {} numbers", M * N)
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut m = Matrix::zero();
                for i in 0..M * N {
                    m.as_mut_slice()[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(M * N, ElementsVisitor(std::marker::PhantomData))
    }
}
