//! Approximate floating-point comparison utilities.
//!
//! Everything else in the crate compares floats through these functions, so the
//! tolerance rules live in exactly one place. The algorithm comes from the
//! classic floating-point-gui.de comparison recipe: exact equality first (which
//! also handles infinities), an absolute comparison against `epsilon * epsilon`
//! when one operand is zero, and a relative comparison otherwise.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// The floating-point element type for vectors, matrices and quaternions.
///
/// Implemented for `f32` and `f64`. The per-type default comparison tolerance
/// is an associated constant rather than process-wide mutable state, so there
/// is nothing to synchronize; pass an explicit epsilon to the `*_threshold`
/// variants when the default does not fit.
pub trait Scalar: Float + Debug + Display + Default + 'static {
    /// Default tolerance used by [`approx_eq`] and the `approx_eq` methods on
    /// vectors, matrices and quaternions.
    const DEFAULT_EPSILON: Self;

    /// Lossy conversion from `f64`, for numeric literals in generic code.
    fn of(v: f64) -> Self;
}

impl Scalar for f32 {
    const DEFAULT_EPSILON: f32 = 1e-6;

    #[inline]
    fn of(v: f64) -> f32 {
        v as f32
    }
}

impl Scalar for f64 {
    const DEFAULT_EPSILON: f64 = 1e-10;

    #[inline]
    fn of(v: f64) -> f64 {
        v
    }
}

/// Compares two floats for approximate equality using the default tolerance
/// for the scalar type.
#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    approx_eq_threshold(a, b, T::DEFAULT_EPSILON)
}

/// Compares two floats for approximate equality with a caller-supplied
/// tolerance.
///
/// Exact equality short-circuits first, which both handles infinities and
/// avoids a spurious subtraction when no error has accumulated. When one
/// operand is zero a relative comparison would be meaningless, so the absolute
/// difference is compared against `epsilon * epsilon` instead.
#[inline]
pub fn approx_eq_threshold<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    if a == b {
        return true;
    }
    if a * b == T::zero() {
        return (a - b).abs() < epsilon * epsilon;
    }
    (a - b).abs() / (a.abs() + b.abs()) < epsilon
}

/// Returns a reusable equality predicate bound to the given tolerance, for use
/// with the `approx_eq_func` methods on vectors, matrices and quaternions.
pub fn approx_eq_func<T: Scalar>(epsilon: T) -> impl Fn(T, T) -> bool {
    move |a, b| approx_eq_threshold(a, b, epsilon)
}

/// Clamps `a` to the inclusive range `[low, high]`.
#[inline]
pub fn clamp<T: Scalar>(a: T, low: T, high: T) -> T {
    if a < low {
        low
    } else if a > high {
        high
    } else {
        a
    }
}

/// Checks whether `a` already lies in `[low, high]`, as if [`clamp`] had been
/// called. Uses exact comparison, not [`approx_eq`]; clamping is usually about
/// fixing tiny overshoots, so fuzzy membership would defeat the point.
#[inline]
pub fn is_clamped<T: Scalar>(a: T, low: T, high: T) -> bool {
    a >= low && a <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality_shortcut() {
        assert!(approx_eq(1.0f64, 1.0f64));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_near_zero_uses_absolute_comparison() {
        // relative error of (0, tiny) is always 1, absolute kicks in instead
        assert!(approx_eq(0.0f64, 1e-21));
        assert!(approx_eq(1e-21, 0.0f64));
        assert!(!approx_eq(0.0f64, 1e-19));
    }

    #[test]
    fn test_relative_comparison() {
        assert!(approx_eq(1_000_000.0f64, 1_000_000.000_000_001));
        assert!(!approx_eq(1.0f64, 1.0001));
        assert!(!approx_eq(1.0f32, 1.1));
        assert!(approx_eq(1.0f32, 1.000_000_1));
    }

    #[test]
    fn test_threshold_variant() {
        assert!(approx_eq_threshold(1.0f64, 1.05, 0.1));
        assert!(!approx_eq_threshold(1.0f64, 1.05, 0.001));
    }

    #[test]
    fn test_func_variant() {
        let eq = approx_eq_func(0.1f32);
        assert!(eq(1.0, 1.05));
        assert!(!eq(1.0, 2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5f64, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-0.5f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5f64, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_is_clamped_is_exact() {
        assert!(is_clamped(0.0f64, 0.0, 1.0));
        assert!(is_clamped(1.0f64, 0.0, 1.0));
        assert!(!is_clamped(1.0 + 1e-15f64, 0.0, 1.0));
    }
}
