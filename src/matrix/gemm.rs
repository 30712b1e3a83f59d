#![allow(non_snake_case)]

use super::Matrix;
use crate::floats::FloatT;
use crate::math_traits::MultiplyGEMM;

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    // Computes self = α*A*B + β*self.  Row-major ikj loop order, so the
    // inner loop streams along contiguous rows of B and self.
    fn mul(&mut self, A: &Matrix<T>, B: &Matrix<T>, α: T, β: T) -> &mut Self {
        assert!(A.n == B.m && self.m == A.m && self.n == B.n);

        if self.m == 0 || self.n == 0 {
            return self;
        }

        for i in 0..self.m {
            self.row_slice_mut(i).iter_mut().for_each(|v| *v *= β);
            for k in 0..A.n {
                let scale = α * A[(i, k)];
                let brow = B.row_slice(k);
                for (cij, &bkj) in self.row_slice_mut(i).iter_mut().zip(brow) {
                    *cij += scale * bkj;
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemm() {
        let A = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let B = Matrix::from(&[[5.0, 6.0], [7.0, 8.0]]);

        let mut C = Matrix::filled((2, 2), 1.0);
        C.mul(&A, &B, 1.0, 0.0);
        assert_eq!(C, Matrix::from(&[[19.0, 22.0], [43.0, 50.0]]));

        // accumulate: C = 2*A*B + 1*C
        let mut C = Matrix::filled((2, 2), 1.0);
        C.mul(&A, &B, 2.0, 1.0);
        assert_eq!(C, Matrix::from(&[[39.0, 45.0], [87.0, 101.0]]));
    }

    #[test]
    fn test_gemm_rectangular() {
        let A = Matrix::from(&[[1.0, 0.0, 2.0], [0.0, 3.0, -1.0]]);
        let B = Matrix::from(&[[1.0], [2.0], [3.0]]);

        let mut C = Matrix::zeros((2, 1));
        C.mul(&A, &B, 1.0, 0.0);
        assert_eq!(C, Matrix::from(&[[7.0], [3.0]]));
    }
}
