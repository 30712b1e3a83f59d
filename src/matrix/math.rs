use super::Matrix;
use crate::errors::MatrixError;
use crate::floats::FloatT;
use crate::math_traits::{MatrixMath, MultiplyGEMM, VectorMath};

/// Axis selector for [`apply_reduce`] and [`apply_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// operate on each row slice
    Rows,
    /// operate on each column slice
    Columns,
}

impl<T> MatrixMath for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn lscale(&mut self, l: &[T]) {
        assert_eq!(l.len(), self.m);
        for (row, &li) in l.iter().enumerate() {
            self.row_slice_mut(row).scale(li);
        }
    }

    fn rscale(&mut self, r: &[T]) {
        assert_eq!(r.len(), self.n);
        for row in 0..self.m {
            self.row_slice_mut(row).hadamard(r);
        }
    }

    fn row_norms(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.m);
        for (norm, row) in norms.iter_mut().zip(self.rows()) {
            *norm = row.norm_inf();
        }
    }

    fn col_norms(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.n);
        norms.set(T::zero());
        for row in self.rows() {
            for (norm, v) in norms.iter_mut().zip(row) {
                *norm = T::max(*norm, v.abs());
            }
        }
    }
}

/// The transpose `Aᵀ`.
pub fn transpose<T: FloatT>(a: &Matrix<T>) -> Matrix<T> {
    let mut at = Matrix::zeros((a.n, a.m));
    for (i, row) in a.rows().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            at[(j, i)] = v;
        }
    }
    at
}

fn zip_op<T: FloatT>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: impl Fn(T, T) -> T,
) -> Result<Matrix<T>, MatrixError> {
    if a.size() != b.size() {
        return Err(MatrixError::DimensionMismatch);
    }
    let data = std::iter::zip(&a.data, &b.data)
        .map(|(&a, &b)| op(a, b))
        .collect();
    Ok(Matrix {
        m: a.m,
        n: a.n,
        data,
    })
}

/// Matrix sum `A + B`; `DimensionMismatch` unless shapes agree.
pub fn add<T: FloatT>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_op(a, b, |a, b| a + b)
}

/// Matrix difference `A - B`; `DimensionMismatch` unless shapes agree.
pub fn sub<T: FloatT>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_op(a, b, |a, b| a - b)
}

/// Elementwise (Hadamard) product; `DimensionMismatch` unless shapes agree.
pub fn elementwise_mul<T: FloatT>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, MatrixError> {
    zip_op(a, b, |a, b| a * b)
}

/// Elementwise quotient; `DimensionMismatch` unless shapes agree.
/// Division by zero follows native floating point semantics.
pub fn elementwise_div<T: FloatT>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, MatrixError> {
    zip_op(a, b, |a, b| a / b)
}

/// Scalar product `c * A`.
pub fn scalar_mul<T: FloatT>(a: &Matrix<T>, c: T) -> Matrix<T> {
    let mut out = a.clone();
    out.scale(c);
    out
}

/// Matrix product `A * B`; `DimensionMismatch` unless the inner
/// dimensions agree.
pub fn matmul<T: FloatT>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.n != b.m {
        return Err(MatrixError::DimensionMismatch);
    }
    let mut out = Matrix::zeros((a.m, b.n));
    out.mul(a, b, T::one(), T::zero());
    Ok(out)
}

/// Reduce each slice along `axis` to a scalar with `f`.
///
/// `Axis::Rows` reduces each row, producing an `m x 1` column of row
/// results; `Axis::Columns` reduces each column, producing a `1 x n`
/// row of column results.
pub fn apply_reduce<T: FloatT>(
    a: &Matrix<T>,
    axis: Axis,
    f: impl Fn(&[T]) -> T,
) -> Matrix<T> {
    match axis {
        Axis::Rows => {
            let data = a.rows().map(f).collect();
            Matrix {
                m: a.m,
                n: 1,
                data,
            }
        }
        Axis::Columns => {
            let data = (0..a.n)
                .map(|j| {
                    let col: Vec<T> =
                        a.data[j..].iter().step_by(a.n).copied().collect();
                    f(&col)
                })
                .collect();
            Matrix {
                m: 1,
                n: a.n,
                data,
            }
        }
    }
}

/// Map each slice along `axis` through `f`, preserving the matrix
/// shape.  `DimensionMismatch` if `f` returns a slice of a different
/// length than its input.
pub fn apply_map<T: FloatT>(
    a: &Matrix<T>,
    axis: Axis,
    f: impl Fn(&[T]) -> Vec<T>,
) -> Result<Matrix<T>, MatrixError> {
    let mut out = Matrix::zeros(a.size());
    match axis {
        Axis::Rows => {
            for (i, row) in a.rows().enumerate() {
                let mapped = f(row);
                if mapped.len() != a.n {
                    return Err(MatrixError::DimensionMismatch);
                }
                out.row_slice_mut(i).copy_from(&mapped);
            }
        }
        Axis::Columns => {
            for j in 0..a.n {
                let col: Vec<T> = a.data[j..].iter().step_by(a.n).copied().collect();
                let mapped = f(&col);
                if mapped.len() != a.m {
                    return Err(MatrixError::DimensionMismatch);
                }
                out.set_col(j, &mapped)?;
            }
        }
    }
    Ok(out)
}

/// Map every element of the matrix through `f`.
pub fn apply_map_all<T: FloatT>(a: &Matrix<T>, f: impl Fn(T) -> T) -> Matrix<T> {
    let mut out = a.clone();
    out.data.scalarop(f);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let at = transpose(&a);
        assert_eq!(at, Matrix::from(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));

        // involution
        assert_eq!(transpose(&at), a);
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from(&[[4.0, 3.0], [2.0, 1.0]]);

        assert_eq!(add(&a, &b).unwrap(), Matrix::filled((2, 2), 5.0));
        assert_eq!(
            sub(&a, &b).unwrap(),
            Matrix::from(&[[-3.0, -1.0], [1.0, 3.0]])
        );

        let c = Matrix::<f64>::zeros((2, 3));
        assert_eq!(add(&a, &c), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_elementwise() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from(&[[2.0, 2.0], [2.0, 2.0]]);

        assert_eq!(
            elementwise_mul(&a, &b).unwrap(),
            Matrix::from(&[[2.0, 4.0], [6.0, 8.0]])
        );
        assert_eq!(
            elementwise_div(&a, &b).unwrap(),
            Matrix::from(&[[0.5, 1.0], [1.5, 2.0]])
        );
        assert_eq!(scalar_mul(&a, 3.0), Matrix::from(&[[3.0, 6.0], [9.0, 12.0]]));
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);

        let c = matmul(&a, &b).unwrap();
        assert_eq!(c, Matrix::from(&[[58.0, 64.0], [139.0, 154.0]]));

        // inner dimensions must agree
        assert_eq!(matmul(&a, &a), Err(MatrixError::DimensionMismatch));

        // identity behaves as the multiplicative unit
        let eye = Matrix::identity(3);
        assert_eq!(matmul(&eye, &b).unwrap(), b);
    }

    #[test]
    fn test_diagonal_scaling() {
        let mut a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        a.lscale(&[2.0, 3.0]);
        assert_eq!(a, Matrix::from(&[[2.0, 4.0], [9.0, 12.0]]));

        let mut a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        a.rscale(&[2.0, 3.0]);
        assert_eq!(a, Matrix::from(&[[2.0, 6.0], [6.0, 12.0]]));
    }

    #[test]
    fn test_norms() {
        let a = Matrix::from(&[[-3.0, 2.0], [1.0, -4.0]]);
        let mut rnorms = vec![0.0; 2];
        let mut cnorms = vec![0.0; 2];
        a.row_norms(&mut rnorms);
        a.col_norms(&mut cnorms);
        assert_eq!(rnorms, vec![3.0, 4.0]);
        assert_eq!(cnorms, vec![3.0, 4.0]);
    }

    #[test]
    fn test_apply_reduce() {
        let a = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

        let rowsums = apply_reduce(&a, Axis::Rows, |v| v.sum());
        assert_eq!(rowsums, Matrix::from_col(&[6.0, 15.0]));

        let colsums = apply_reduce(&a, Axis::Columns, |v| v.sum());
        assert_eq!(colsums, Matrix::from_row(&[5.0, 7.0, 9.0]));
    }

    #[test]
    fn test_apply_map() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);

        let doubled = apply_map(&a, Axis::Rows, |v| {
            v.iter().map(|&x| 2.0 * x).collect()
        })
        .unwrap();
        assert_eq!(doubled, scalar_mul(&a, 2.0));

        let colrev = apply_map(&a, Axis::Columns, |v| {
            v.iter().rev().copied().collect()
        })
        .unwrap();
        assert_eq!(colrev, Matrix::from(&[[3.0, 4.0], [1.0, 2.0]]));

        // maps must preserve slice length
        let bad = apply_map(&a, Axis::Rows, |_| vec![0.0]);
        assert_eq!(bad, Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_apply_map_all() {
        let a = Matrix::from(&[[1.0, 4.0], [9.0, 16.0]]);
        let roots = apply_map_all(&a, f64::sqrt);
        assert_eq!(roots, Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]));
    }
}
