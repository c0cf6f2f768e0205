pub(crate) use super::*;

#[test]
fn test_determinant_1x1() {
    let m = Matrix::from_vec(1, 1, vec![7.5]).expect("valid 1x1");
    assert!((m.determinant().unwrap() - 7.5).abs() < 1e-12);
}

#[test]
fn test_determinant_2x2() {
    // [[4,7],[2,6]]: 4*6 - 7*2 = 10
    let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid 2x2");
    assert!((m.determinant().unwrap() - 10.0).abs() < 1e-12);
}

#[test]
fn test_determinant_3x3() {
    // [[6,1,1],[4,-2,5],[2,8,7]] = -306
    let m = Matrix::from_vec(3, 3, vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0])
        .expect("valid 3x3");
    assert!((m.determinant().unwrap() - (-306.0)).abs() < 1e-9);
}

#[test]
fn test_determinant_4x4() {
    // Upper triangular: determinant is the diagonal product 2*3*(-1)*4 = -24
    let m = Matrix::from_vec(
        4,
        4,
        vec![
            2.0, 5.0, -3.0, 1.0, //
            0.0, 3.0, 8.0, 2.0, //
            0.0, 0.0, -1.0, 6.0, //
            0.0, 0.0, 0.0, 4.0,
        ],
    )
    .expect("valid 4x4");
    assert!((m.determinant().unwrap() - (-24.0)).abs() < 1e-9);
}

#[test]
fn test_determinant_identity() {
    for n in 1..=5 {
        let det = Matrix::eye(n).determinant().unwrap();
        assert!((det - 1.0).abs() < 1e-12, "det(eye({n})) = {det}");
    }
}

#[test]
fn test_determinant_row_swap_flips_sign() {
    // Permutation matrix swapping two rows of the identity has determinant -1,
    // which pins down the cofactor sign convention.
    let m = Matrix::from_vec(3, 3, vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0])
        .expect("valid 3x3");
    assert!((m.determinant().unwrap() - (-1.0)).abs() < 1e-12);
}

#[test]
fn test_determinant_dependent_rows_is_zero() {
    // [[1,2],[2,4]]: second row is twice the first
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("valid 2x2");
    assert!(m.determinant().unwrap().abs() < 1e-12);
}

#[test]
fn test_determinant_not_square() {
    let m = Matrix::zeros(2, 3);
    let err = m.determinant().unwrap_err();
    assert!(matches!(err, MatrizError::NotSquare { rows: 2, cols: 3 }));
}

#[test]
fn test_determinant_scales_with_transpose() {
    // det(A) == det(A^T)
    let m = Matrix::from_vec(3, 3, vec![1.0, 4.0, 2.0, -3.0, 5.0, 7.0, 2.0, 0.0, 6.0])
        .expect("valid 3x3");
    let det = m.determinant().unwrap();
    let det_t = m.transpose().determinant().unwrap();
    assert!((det - det_t).abs() < 1e-9);
}
