use crate::errors::MatrixError;
use crate::floats::{AsFloatT, FloatT};
use crate::math_traits::VectorMath;
use crate::matrix::{matmul, Matrix};

/// LU factorization with partial pivoting.
///
/// Stores the combined `L - I + U` factors in a single matrix plus the
/// row permutation applied during pivoting.  A pivot whose magnitude
/// falls below `ε * n * max|A|` is treated as exactly zero and the
/// factorization fails with [`SingularMatrix`](MatrixError::SingularMatrix).
pub struct LUEngine<T = f64> {
    lu: Matrix<T>,
    perm: Vec<usize>,
}

impl<T> LUEngine<T>
where
    T: FloatT,
{
    /// Factor a square matrix.  `DimensionMismatch` if `a` is not
    /// square, `SingularMatrix` if no acceptable pivot exists at some
    /// elimination step.
    pub fn factor(a: &Matrix<T>) -> Result<Self, MatrixError> {
        if !a.is_square() {
            return Err(MatrixError::DimensionMismatch);
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();

        // singularity threshold, scaled to the magnitude of the input
        let tiny = T::epsilon() * n.as_T() * lu.data().norm_inf();

        for k in 0..n {
            // partial pivoting: largest magnitude entry in column k at
            // or below the diagonal
            let mut prow = k;
            let mut pval = T::zero();
            for i in k..n {
                let v = lu[(i, k)].abs();
                if v > pval {
                    prow = i;
                    pval = v;
                }
            }
            if pval <= tiny || !pval.is_finite() {
                return Err(MatrixError::SingularMatrix);
            }
            if prow != k {
                for j in 0..n {
                    lu.data_mut().swap(k * n + j, prow * n + j);
                }
                perm.swap(k, prow);
            }

            // eliminate below the pivot, recording multipliers in the
            // lower triangle
            for i in (k + 1)..n {
                let (top, bottom) = lu.data_mut().split_at_mut(i * n);
                let rowk = &top[(k * n)..(k + 1) * n];
                let rowi = &mut bottom[..n];

                let f = rowi[k] / rowk[k];
                rowi[k] = f;
                for j in (k + 1)..n {
                    rowi[j] -= f * rowk[j];
                }
            }
        }
        Ok(Self { lu, perm })
    }

    /// Order of the factored matrix.
    pub fn nrows(&self) -> usize {
        self.lu.nrows()
    }

    /// Solve `A x = b` using the stored factors.  `DimensionMismatch`
    /// unless `b.len()` equals the matrix order.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, MatrixError> {
        let n = self.nrows();
        if b.len() != n {
            return Err(MatrixError::DimensionMismatch);
        }

        // apply the pivoting permutation
        let mut x: Vec<T> = self.perm.iter().map(|&p| b[p]).collect();

        // forward substitution with the unit lower triangle
        for i in 1..n {
            let s = self.lu.row_slice(i)[..i].dot(&x[..i]);
            x[i] = x[i] - s;
        }
        // back substitution with the upper triangle
        for i in (0..n).rev() {
            let row = self.lu.row_slice(i);
            let s = row[(i + 1)..].dot(&x[(i + 1)..]);
            x[i] = (x[i] - s) / row[i];
        }
        Ok(x)
    }

    /// The matrix inverse, assembled by solving against each identity
    /// column.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        let n = self.nrows();
        let mut inv = Matrix::zeros((n, n));
        let mut e = vec![T::zero(); n];
        for j in 0..n {
            e[j] = T::one();
            let x = self.solve(&e)?;
            inv.set_col(j, &x)?;
            e[j] = T::zero();
        }
        Ok(inv)
    }
}

/// The inverse of a square matrix via LU factorization with partial
/// pivoting.
///
/// Fails with `DimensionMismatch` for non-square input and
/// `SingularMatrix` when the matrix is singular to working precision.
pub fn inverse<T: FloatT>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    LUEngine::factor(a)?.inverse()
}

/// Matrix right division `A / B = A * B⁻¹`.
///
/// `B` must be square and invertible; `SingularMatrix` and
/// `DimensionMismatch` propagate from the inversion, and the product
/// requires `A.ncols() == B.nrows()`.
pub fn matrix_div<T: FloatT>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    matmul(a, &inverse(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matmul;

    #[test]
    fn test_solve() {
        let a = Matrix::from(&[
            [2.0, 1.0, 1.0], //
            [1.0, 3.0, 2.0],
            [1.0, 0.0, 0.0],
        ]);
        let eng = LUEngine::factor(&a).unwrap();

        // solution of A x = [4, 5, 6] is [6, 15, -23]
        let x = eng.solve(&[4.0, 5.0, 6.0]).unwrap();
        assert!(x.norm_inf_diff(&[6.0, 15.0, -23.0]) < 1e-12);

        assert_eq!(
            eng.solve(&[1.0, 2.0]),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn test_inverse() {
        let a = Matrix::from(&[
            [4.0, 7.0], //
            [2.0, 6.0],
        ]);
        let ainv = inverse(&a).unwrap();
        let expected = Matrix::from(&[
            [0.6, -0.7], //
            [-0.2, 0.4],
        ]);
        assert!(ainv.data().norm_inf_diff(expected.data()) < 1e-12);

        // A * A^{-1} = I
        let eye = matmul(&a, &ainv).unwrap();
        assert!(
            eye.data()
                .norm_inf_diff(Matrix::identity(2).data())
                < 1e-12
        );
    }

    #[test]
    fn test_inverse_requires_pivoting() {
        // zero on the leading diagonal forces a row exchange
        let a = Matrix::from(&[
            [0.0, 1.0], //
            [1.0, 0.0],
        ]);
        let ainv = inverse(&a).unwrap();
        assert!(ainv.data().norm_inf_diff(a.data()) < 1e-12);
    }

    #[test]
    fn test_matrix_div() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from(&[[4.0, 7.0], [2.0, 6.0]]);

        // (A / B) * B = A
        let q = matrix_div(&a, &b).unwrap();
        let back = matmul(&q, &b).unwrap();
        assert!(back.data().norm_inf_diff(a.data()) < 1e-12);

        // dividing by itself gives the identity
        let eye = matrix_div(&b, &b).unwrap();
        assert!(
            eye.data()
                .norm_inf_diff(Matrix::identity(2).data())
                < 1e-12
        );

        assert_eq!(
            matrix_div(&a, &Matrix::from(&[[1.0, 2.0], [2.0, 4.0]])),
            Err(MatrixError::SingularMatrix)
        );
    }

    #[test]
    fn test_singular_and_nonsquare() {
        // second row is a multiple of the first
        let a = Matrix::from(&[
            [1.0, 2.0], //
            [2.0, 4.0],
        ]);
        assert_eq!(inverse(&a), Err(MatrixError::SingularMatrix));

        let a = Matrix::<f64>::zeros((2, 3));
        assert_eq!(inverse(&a), Err(MatrixError::DimensionMismatch));
    }
}
