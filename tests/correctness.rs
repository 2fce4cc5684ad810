use dense_matmul::printer::render;
use dense_matmul::{Matrix, MatmulError, MatrixFactory, matmul_naive_ijk, multiply};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, tol: f64, name: &str) {
    assert_eq!(expected.shape(), actual.shape(), "{}: shape mismatch", name);
    for (i, (e, a)) in expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .enumerate()
    {
        assert!(
            (e - a).abs() <= tol,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            e,
            a
        );
    }
}

fn from_rows(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ============================================================
// Known products
// ============================================================

#[test]
fn test_2x2_multiply_exact() {
    let a = from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]);

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c, from_rows(&[&[19.0, 22.0], &[43.0, 50.0]]));
}

#[test]
fn test_2x3_times_3x2() {
    let a = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_shape_vec((3, 2), vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_inputs_are_not_modified() {
    let mut factory = MatrixFactory::with_seed(3);
    let a = factory.generate(4, 6).unwrap();
    let b = factory.generate(6, 2).unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    multiply(&a, &b).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

// ============================================================
// Shape properties
// ============================================================

#[test]
fn test_result_shape_is_m_by_n() {
    let mut factory = MatrixFactory::with_seed(11);
    let cases = [(1, 1, 1), (3, 4, 5), (7, 1, 3), (1, 9, 1), (13, 17, 19)];

    for (m, k, n) in cases {
        let a = factory.generate(m, k).unwrap();
        let b = factory.generate(k, n).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (m, n), "{}x{}x{}", m, k, n);
    }
}

#[test]
fn test_dimension_mismatch_is_an_error() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(4, 5).unwrap();

    assert_eq!(
        multiply(&a, &b).unwrap_err(),
        MatmulError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 4,
            right_cols: 5,
        }
    );
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_on_the_right() {
    let mut factory = MatrixFactory::with_seed(5);
    for (m, k) in [(1, 1), (3, 4), (6, 2), (10, 10)] {
        let a = factory.generate(m, k).unwrap();
        let id = Matrix::identity(k).unwrap();

        let c = multiply(&a, &id).unwrap();

        assert_matrices_equal(&a, &c, 1e-12, &format!("A*I {}x{}", m, k));
    }
}

#[test]
fn test_identity_on_the_left() {
    let mut factory = MatrixFactory::with_seed(6);
    let a = factory.generate(5, 3).unwrap();
    let id = Matrix::identity(5).unwrap();

    assert_matrices_equal(&a, &multiply(&id, &a).unwrap(), 1e-12, "I*A");
}

#[test]
fn test_zero_matrix_gives_zero() {
    let mut factory = MatrixFactory::with_seed(8);
    let a = factory.generate(4, 7).unwrap();
    let z = Matrix::zeros(7, 3).unwrap();

    let c = multiply(&a, &z).unwrap();

    assert_eq!(c, Matrix::zeros(4, 3).unwrap());
}

#[test]
fn test_associativity() {
    let mut factory = MatrixFactory::with_seed(13);
    let a = factory.generate(4, 6).unwrap();
    let b = factory.generate(6, 5).unwrap();
    let c = factory.generate(5, 3).unwrap();

    let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
    let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();

    // entries reach ~1e4, so allow rounding slack
    assert_matrices_equal(&left, &right, 1e-8, "(AB)C vs A(BC)");
}

#[test]
fn test_transpose_of_product() {
    let mut factory = MatrixFactory::with_seed(21);
    let a = factory.generate(3, 4).unwrap();
    let b = factory.generate(4, 2).unwrap();

    let ab_t = multiply(&a, &b).unwrap().transpose();
    let bt_at = multiply(&b.transpose(), &a.transpose()).unwrap();

    assert_matrices_equal(&ab_t, &bt_at, 1e-9, "(AB)^T vs B^T A^T");
}

// ============================================================
// Kernel agreement
// ============================================================

#[test]
fn test_matches_flat_kernel_bit_for_bit() {
    let mut factory = MatrixFactory::with_seed(99);
    let (m, k, n) = (11, 13, 17);
    let a = factory.generate(m, k).unwrap();
    let b = factory.generate(k, n).unwrap();

    let mut expected = vec![0.0; m * n];
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut expected, m, n, k);

    assert_eq!(multiply(&a, &b).unwrap().as_slice(), expected.as_slice());
}

#[test]
fn test_infinities_propagate() {
    let a = from_rows(&[&[f64::INFINITY, 1.0]]);
    let b = from_rows(&[&[2.0], &[3.0]]);

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c[(0, 0)], f64::INFINITY);
}

// ============================================================
// End to end
// ============================================================

#[test]
fn test_generated_pipeline_preview() {
    let mut factory = MatrixFactory::with_seed(2024);
    let a = factory.generate(10, 10).unwrap();
    let b = factory.generate(10, 10).unwrap();
    let c = multiply(&a, &b).unwrap();

    let out = render(&c, 5, 5);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Matrix [10 x 10]:");
    let data_rows = lines.iter().filter(|l| l.ends_with("\t...")).count();
    assert_eq!(data_rows, 5);
    assert_eq!(lines[6], "...");
    for &v in c.as_slice() {
        // 10 products of values in [0, 10)
        assert!((0.0..1000.0).contains(&v));
    }
}
