//! Randomized property tests for the matrix, vector and quaternion algebra.

use std::f64::consts::FRAC_PI_4;

use zmath::*;

fn rand_cell() -> f64 {
    fastrand::f64() * 10.0 - 5.0
}

fn rand_matrix(width: usize, height: usize) -> Matrix<f64> {
    Matrix::from_fn(width, height, |_, _| rand_cell()).unwrap()
}

fn rand_shape() -> (usize, usize) {
    (fastrand::usize(1..=6), fastrand::usize(1..=6))
}

#[test]
fn transpose_is_an_involution() {
    fastrand::seed(1);
    for _ in 0..100 {
        let (w, h) = rand_shape();
        let mat = rand_matrix(w, h);
        assert_eq!(mat.transposed().transposed(), mat);
    }
}

#[test]
fn negation_is_an_involution() {
    fastrand::seed(2);
    for _ in 0..100 {
        let (w, h) = rand_shape();
        let mat = rand_matrix(w, h);
        assert_eq!(-(-mat.clone()), mat);
    }
}

#[test]
fn add_then_sub_roundtrips() {
    fastrand::seed(3);
    for _ in 0..100 {
        let (w, h) = rand_shape();
        let a = rand_matrix(w, h);
        let b = rand_matrix(w, h);
        let roundtripped = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
        assert_approx_eq!(roundtripped, a);
    }
}

#[test]
fn product_has_the_combined_shape() {
    fastrand::seed(4);
    for _ in 0..100 {
        let (m, k) = rand_shape();
        let n = fastrand::usize(1..=6);
        let a = rand_matrix(k, m);
        let b = rand_matrix(n, k);
        let product = a.checked_mul(&b).unwrap();
        assert_eq!(product.width(), n);
        assert_eq!(product.height(), m);
    }
}

#[test]
fn identity_is_neutral_and_has_determinant_one() {
    fastrand::seed(5);
    for n in 1..=6 {
        let id = Matrix::<f64>::identity(n).unwrap();
        assert_eq!(id.determinant(), Ok(1.0));

        let mat = rand_matrix(n, n);
        assert_approx_eq!(mat.checked_mul(&id).unwrap(), mat);
        assert_approx_eq!(id.checked_mul(&mat).unwrap(), mat);
    }
}

#[test]
fn duplicated_rows_have_determinant_zero() {
    fastrand::seed(6);
    for n in 2..=5 {
        let mut mat = rand_matrix(n, n);
        let src = mat.row(0).unwrap();
        mat.map_rows(|i, row| if i == n - 1 { src.clone() } else { row.clone() })
            .unwrap();
        assert_approx_eq!(mat.determinant().unwrap(), 0.0).abs(1e-6);
    }
}

#[test]
fn projection_and_rejection_decompose_the_vector() {
    fastrand::seed(7);
    for _ in 0..100 {
        let v = vec3(rand_cell(), rand_cell(), rand_cell());
        let onto = vec3(rand_cell(), rand_cell(), rand_cell());
        if onto.length() < 0.1 {
            continue;
        }
        assert_approx_eq!(v.projected(onto) + v.rejected(onto), v);
        // The rejection is perpendicular to the target.
        assert_approx_eq!(v.rejected(onto).dot(onto.normalized()), 0.0).abs(1e-6);
    }
}

#[test]
fn rotation_moves_the_unit_x_vector() {
    let rotated = Matrix::rotate2(FRAC_PI_4) * vec2(1.0, 0.0);
    let expected = vec2(FRAC_PI_4.cos(), FRAC_PI_4.sin());
    assert_approx_eq!(rotated, expected);
    assert_approx_eq!(rotated.angle(), FRAC_PI_4);

    // The clockwise variant undoes the counter-clockwise one.
    let back = Matrix::rotate2_cw(FRAC_PI_4) * rotated;
    assert_approx_eq!(back, vec2(1.0, 0.0));
}

#[test]
fn translation_moves_homogeneous_points() {
    let moved = Matrix::translate2(3.0, -2.0) * vec2(10.0, 20.0).to_column3(1.0).to_vec3().unwrap();
    assert_approx_eq!(moved, vec3(13.0, 18.0, 1.0));
}

#[test]
fn vector_matrix_roundtrips() {
    fastrand::seed(8);
    for _ in 0..50 {
        let v = vec4(rand_cell(), rand_cell(), rand_cell(), rand_cell());
        assert_eq!(v.to_row().to_vec4(), Ok(v));
        assert_eq!(v.to_column().to_vec4(), Ok(v));
        assert_eq!(v.to_row().transposed(), v.to_column());
    }
}

#[test]
fn quaternion_basis_algebra() {
    type Q = Quat<f64>;

    assert_eq!(Q::R * Q::I, Q::I);
    assert_eq!(Q::I * Q::J, Q::K);
    assert_eq!(Q::J * Q::I, -Q::K);

    fastrand::seed(9);
    for _ in 0..50 {
        let a = Quat::new(rand_cell(), rand_cell(), rand_cell(), rand_cell());
        let b = Quat::new(rand_cell(), rand_cell(), rand_cell(), rand_cell());
        if b.length() < 0.1 {
            continue;
        }
        // Division follows the negated-denominator convention.
        assert_approx_eq!((a * b) / b, -a).abs(1e-3);
    }
}

#[test]
fn error_cases() {
    assert_eq!(
        Matrix::<f64>::new(0, 5),
        Err(MathError::InvalidDimension {
            width: 0,
            height: 5
        })
    );

    let mat = Matrix::<f64>::square(3).unwrap();
    assert_eq!(
        mat.get(3, 0),
        Err(MathError::ColumnOutOfRange {
            column: 3,
            width: 3
        })
    );
    assert_eq!(
        mat.get(0, 3),
        Err(MathError::RowOutOfRange { row: 3, height: 3 })
    );
    assert!(mat.determinant().is_ok());
    assert_eq!(
        Matrix::<f64>::new(2, 3).unwrap().determinant(),
        Err(MathError::SquareRequired {
            width: 2,
            height: 3
        })
    );
    assert_eq!(
        mat.to_vec3(),
        Err(MathError::ShapeMismatch {
            len: 3,
            width: 3,
            height: 3
        })
    );
}
