use crate::*;

fn lhs() -> Matrix<f64> {
    Matrix::from(&[
        [2.0, -1.0, 0.5], //
        [0.0, 3.0, -2.0],
    ])
}

fn rhs() -> Matrix<f64> {
    Matrix::from(&[
        [1.0, 4.0], //
        [-2.0, 0.5],
        [3.0, 1.0],
    ])
}

fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
    assert_eq!(a.size(), b.size());
    assert!(a.data().norm_inf_diff(b.data()) < tol);
}

#[test]
fn transpose_distributes_over_products() {
    // (A*B)ᵀ = Bᵀ*Aᵀ
    let ab_t = transpose(&matmul(&lhs(), &rhs()).unwrap());
    let bt_at = matmul(&transpose(&rhs()), &transpose(&lhs())).unwrap();
    assert_close(&ab_t, &bt_at, 1e-12);
}

#[test]
fn matmul_is_associative() {
    let a = lhs();
    let b = rhs();
    let c = Matrix::from(&[[1.0, -1.0], [0.5, 2.0]]);

    let left = matmul(&matmul(&a, &b).unwrap(), &c).unwrap();
    let right = matmul(&a, &matmul(&b, &c).unwrap()).unwrap();
    assert_close(&left, &right, 1e-12);
}

#[test]
fn matmul_distributes_over_addition() {
    let a = lhs();
    let b = rhs();
    let c = scalar_mul(&rhs(), -0.5);

    let left = matmul(&a, &add(&b, &c).unwrap()).unwrap();
    let right = add(
        &matmul(&a, &b).unwrap(),
        &matmul(&a, &c).unwrap(),
    )
    .unwrap();
    assert_close(&left, &right, 1e-12);
}

#[test]
fn axis_reductions_agree_with_transpose() {
    let a = lhs();
    let at = transpose(&a);

    // reducing rows of A must equal reducing columns of Aᵀ
    let by_rows = apply_reduce(&a, Axis::Rows, |v| v.sum());
    let by_cols = apply_reduce(&at, Axis::Columns, |v| v.sum());
    assert_eq!(by_rows.data(), by_cols.data());
}

#[test]
fn axis_maps_cover_every_slice() {
    let a = rhs();

    let centered = apply_map(&a, Axis::Columns, |col| {
        let m = vector::mean(col);
        col.iter().map(|&x| x - m).collect()
    })
    .unwrap();

    // every column of the result has zero mean
    for j in 0..centered.ncols() {
        let col = centered.col(j).unwrap();
        assert!(vector::mean(&col).abs() < 1e-12);
    }
}

#[test]
fn construction_and_shape_errors() {
    assert_eq!(
        Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2),
        Err(MatrixError::DimensionMismatch)
    );
    assert_eq!(
        add(&lhs(), &rhs()),
        Err(MatrixError::DimensionMismatch)
    );
    assert_eq!(
        elementwise_mul(&lhs(), &rhs()),
        Err(MatrixError::DimensionMismatch)
    );
    assert_eq!(
        matmul(&lhs(), &lhs()),
        Err(MatrixError::DimensionMismatch)
    );
    assert_eq!(lhs().get(2, 0), Err(MatrixError::IndexOutOfBounds));
}

#[test]
fn generic_scalar_f32() {
    let a = Matrix::<f32>::from(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::<f32>::identity(2);
    assert_eq!(matmul(&a, &b).unwrap(), a);
    assert_eq!(
        add(&a, &a).unwrap(),
        scalar_mul(&a, 2.0f32)
    );
}
