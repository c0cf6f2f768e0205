pub(crate) use super::*;

#[test]
fn test_eigenvalues_diagonal_matrix() {
    // Already diagonal: the iteration converges immediately and the diagonal
    // comes back in matrix-position order, not sorted.
    let m = Matrix::from_vec(3, 3, vec![5.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 0.0, 2.0])
        .expect("valid 3x3");
    let eigs = m.eigenvalues().expect("matrix is square");

    assert_eq!(eigs.len(), 3);
    assert!((eigs[0] - 5.0).abs() < 1e-9);
    assert!((eigs[1] - (-3.0)).abs() < 1e-9);
    assert!((eigs[2] - 2.0).abs() < 1e-9);
}

#[test]
fn test_eigenvalues_identity() {
    let eigs = Matrix::eye(4).eigenvalues().expect("identity is square");
    assert_eq!(eigs.len(), 4);
    for lambda in eigs {
        assert!((lambda - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_eigenvalues_symmetric_2x2() {
    // [[2,1],[1,2]] has eigenvalues 3 and 1; the unshifted iteration settles
    // the dominant one into the leading diagonal slot.
    let m = Matrix::from_vec(2, 2, vec![2.0, 1.0, 1.0, 2.0]).expect("valid 2x2");
    let eigs = m.eigenvalues().expect("matrix is square");

    assert_eq!(eigs.len(), 2);
    assert!((eigs[0] - 3.0).abs() < 1e-6);
    assert!((eigs[1] - 1.0).abs() < 1e-6);
}

#[test]
fn test_eigenvalues_symmetric_3x3() {
    // [[6,2,1],[2,3,1],[1,1,1]]: well-separated spectrum, trace 10.
    let m = Matrix::from_vec(3, 3, vec![6.0, 2.0, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0, 1.0])
        .expect("valid 3x3");
    let eigs = m.eigenvalues().expect("matrix is square");

    let trace_sum: f64 = eigs.iter().sum();
    assert!((trace_sum - 10.0).abs() < 1e-6, "eigenvalue sum should equal the trace");

    let det = m.determinant().expect("matrix is square");
    let product: f64 = eigs.iter().product();
    assert!(
        (product - det).abs() < 1e-6,
        "eigenvalue product {product} should equal determinant {det}"
    );
}

#[test]
fn test_eigenvalues_upper_triangular() {
    // Triangular matrices expose their eigenvalues on the diagonal.
    let m = Matrix::from_vec(3, 3, vec![4.0, 1.0, -2.0, 0.0, 2.0, 5.0, 0.0, 0.0, -1.0])
        .expect("valid 3x3");
    let mut eigs = m.eigenvalues().expect("matrix is square");
    eigs.sort_by(|a, b| b.partial_cmp(a).expect("eigenvalues are finite"));

    assert!((eigs[0] - 4.0).abs() < 1e-5);
    assert!((eigs[1] - 2.0).abs() < 1e-5);
    assert!((eigs[2] - (-1.0)).abs() < 1e-5);
}

#[test]
fn test_eigenvalues_not_square() {
    let m = Matrix::zeros(2, 3);
    let err = m.eigenvalues().unwrap_err();
    assert!(matches!(err, MatrizError::NotSquare { rows: 2, cols: 3 }));
}

#[test]
fn test_qr_orthonormal_columns() {
    let m = Matrix::from_vec(3, 3, vec![1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0])
        .expect("valid 3x3");
    let (q, _r) = m.gram_schmidt_qr();

    // Q^T * Q should be the identity for a full-rank input.
    let qtq = q.transpose().matmul(&q).expect("3x3 * 3x3 is compatible");
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (qtq.get(i, j).unwrap() - expected).abs() < 1e-9,
                "Q^T*Q differs from identity at ({i}, {j})"
            );
        }
    }
}

#[test]
fn test_qr_reconstructs_input() {
    let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid 3x2");
    let (q, r) = m.gram_schmidt_qr();
    let product = q.matmul(&r).expect("(3x2) * (2x2) is compatible");

    for i in 0..3 {
        for j in 0..2 {
            assert!(
                (product.get(i, j).unwrap() - m.get(i, j).unwrap()).abs() < 1e-9,
                "Q*R differs from A at ({i}, {j})"
            );
        }
    }
}

#[test]
fn test_qr_r_is_upper_triangular() {
    let m = Matrix::from_vec(3, 3, vec![2.0, -1.0, 3.0, 1.0, 4.0, 0.0, -2.0, 1.0, 5.0])
        .expect("valid 3x3");
    let (_q, r) = m.gram_schmidt_qr();

    for i in 0..3 {
        for j in 0..i {
            assert!(r.get(i, j).unwrap().abs() < 1e-12);
        }
    }
    // Diagonal holds the (non-negative) column norms.
    for j in 0..3 {
        assert!(r.get(j, j).unwrap() >= 0.0);
    }
}

#[test]
fn test_qr_dependent_column_stays_zero() {
    // Column 1 is twice column 0: its residual norm is ~0, so Q keeps a zero
    // column instead of normalizing noise.
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 1.0, 2.0]).expect("valid 2x2");
    let (q, r) = m.gram_schmidt_qr();

    assert!(q.get(0, 1).unwrap().abs() < 1e-12);
    assert!(q.get(1, 1).unwrap().abs() < 1e-12);
    assert!(r.get(1, 1).unwrap().abs() < 1e-9);
}
