//! Algebraic matrix properties checked over randomly generated inputs.

use glmath::{DMat2, DMat3, DMat4, Matrix};
use rand::Rng;
use rand::rngs::ThreadRng;

const ITERATIONS: usize = 32;

fn random_matrix<const M: usize, const N: usize>(rng: &mut ThreadRng) -> Matrix<f64, M, N> {
    Matrix::from_col_arrays(std::array::from_fn(|_| {
        std::array::from_fn(|_| rng.random_range(-2.0..2.0))
    }))
}

/// Keeps drawing until the determinant is comfortably away from zero, so the
/// inverse stays well conditioned.
fn random_invertible_4(rng: &mut ThreadRng) -> DMat4 {
    loop {
        let m: DMat4 = random_matrix(rng);
        if m.det().abs() > 1e-2 {
            return m;
        }
    }
}

fn max_abs_deviation<const M: usize, const N: usize>(
    a: Matrix<f64, M, N>,
    b: Matrix<f64, M, N>,
) -> f64 {
    (a - b)
        .as_slice()
        .iter()
        .fold(0.0f64, |acc, e| acc.max(e.abs()))
}

#[test]
fn random_inverse_round_trips_to_identity() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let m2: DMat2 = random_matrix(&mut rng);
        if m2.det().abs() > 1e-2 {
            assert!(max_abs_deviation(m2 * m2.inv(), DMat2::identity()) < 1e-9);
            assert!(max_abs_deviation(m2.inv() * m2, DMat2::identity()) < 1e-9);
        }

        let m3: DMat3 = random_matrix(&mut rng);
        if m3.det().abs() > 1e-2 {
            assert!(max_abs_deviation(m3 * m3.inv(), DMat3::identity()) < 1e-9);
            assert!(max_abs_deviation(m3.inv() * m3, DMat3::identity()) < 1e-9);
        }

        let m4 = random_invertible_4(&mut rng);
        assert!(max_abs_deviation(m4 * m4.inv(), DMat4::identity()) < 1e-9);
        assert!(max_abs_deviation(m4.inv() * m4, DMat4::identity()) < 1e-9);
    }
}

#[test]
fn random_transpose_involution_is_exact() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let m: Matrix<f64, 3, 4> = random_matrix(&mut rng);
        assert_eq!(m.transpose().transpose(), m);

        let sq: DMat4 = random_matrix(&mut rng);
        assert_eq!(sq.transpose().transpose(), sq);
    }
}

#[test]
fn random_det_is_invariant_under_transpose() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let m = random_invertible_4(&mut rng);
        let (d, dt) = (m.det(), m.transpose().det());
        assert!((d - dt).abs() < 1e-9 * d.abs().max(1.0));
    }
}

#[test]
fn random_det_is_multiplicative() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let a = random_invertible_4(&mut rng);
        let b = random_invertible_4(&mut rng);
        let lhs = (a * b).det();
        let rhs = a.det() * b.det();
        assert!((lhs - rhs).abs() < 1e-9 * rhs.abs().max(1.0));
    }
}

#[test]
fn random_product_transpose_reverses_factors() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let a: Matrix<f64, 2, 3> = random_matrix(&mut rng);
        let b: Matrix<f64, 3, 4> = random_matrix(&mut rng);
        let lhs = (a * b).transpose();
        let rhs = b.transpose() * a.transpose();
        assert!(max_abs_deviation(lhs, rhs) < 1e-12);
    }
}

#[test]
fn random_rectangular_product_is_associative() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let a: Matrix<f64, 2, 3> = random_matrix(&mut rng);
        let b: Matrix<f64, 3, 4> = random_matrix(&mut rng);
        let c: Matrix<f64, 4, 2> = random_matrix(&mut rng);
        assert!(max_abs_deviation((a * b) * c, a * (b * c)) < 1e-12);
    }
}

#[test]
fn singular_inverse_contract_holds_for_random_rank_deficient_matrices() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        // build a rank-1 matrix: every column a multiple of the first
        let col: [f64; 3] = std::array::from_fn(|_| rng.random_range(-2.0..2.0));
        let m = DMat3::from_col_arrays([
            col,
            col.map(|e| e * 2.0),
            col.map(|e| e * -0.5),
        ]);
        assert_eq!(m.inv(), DMat3::zero());
    }
}
