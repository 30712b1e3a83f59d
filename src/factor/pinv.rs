use crate::errors::MatrixError;
use crate::floats::{AsFloatT, FloatT};
use crate::math_traits::MatrixMath;
use crate::matrix::{matmul, transpose, Matrix};

use super::svd;

/// The Moore-Penrose pseudo-inverse `A⁺ = V * diag(s⁺) * Uᵀ`.
///
/// Singular values at or below `ε * max(m, n) * s_max` are treated as
/// zero rank contributions and dropped rather than inverted, so rank
/// deficient input stays well behaved.  `ConvergenceFailure` is
/// propagated from the underlying factorization.
pub fn pseudo_inverse<T: FloatT>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let eng = svd(a)?;

    let (m, n) = a.size();
    let smax = eng.s.first().copied().unwrap_or_else(T::zero);
    let tol = T::epsilon() * m.max(n).as_T() * smax;

    let sinv: Vec<T> = eng
        .s
        .iter()
        .map(|&s| if s > tol { s.recip() } else { T::zero() })
        .collect();

    let mut vs = eng.v;
    vs.rscale(&sinv);
    matmul(&vs, &transpose(&eng.u))
}
