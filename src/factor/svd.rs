use crate::errors::MatrixError;
use crate::floats::FloatT;
use crate::math_traits::VectorMath;
use crate::matrix::{transpose, Matrix};
use crate::utils::sortperm_rev;

// sweep limit for the Jacobi iteration.  Convergence is normally
// reached well within ten sweeps; hitting the limit means the
// iteration is cycling on pathological input.
const MAX_SWEEPS: usize = 30;

/// Singular value decomposition by one-sided Jacobi rotation.
///
/// Produces the economy-size factorization `A = U * diag(s) * Vᵀ`
/// with `k = min(m, n)` singular values in descending order, `U` of
/// shape `m x k` and `V` of shape `n x k`.  `V` is economy-size too:
/// only the `k` right singular vectors paired with a singular value
/// are returned, never a full `n x n` basis.  A zero singular value
/// always pairs with a zero column of `U`, regardless of the input
/// shape.
pub struct SVDEngine<T = f64> {
    /// Computed singular values, descending
    pub s: Vec<T>,

    /// Left singular vectors, one per column
    pub u: Matrix<T>,

    /// Right singular vectors, one per column
    pub v: Matrix<T>,
}

impl<T> SVDEngine<T>
where
    T: FloatT,
{
    pub fn new(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let k = m.min(n);
        Self {
            s: vec![T::zero(); k],
            u: Matrix::zeros((m, k)),
            v: Matrix::zeros((n, k)),
        }
    }

    /// Factor `a`, leaving the results in `s`, `u` and `v`.
    ///
    /// `DimensionMismatch` if `a` does not match the engine shape,
    /// `ConvergenceFailure` if the rotation sweeps fail to settle.
    pub fn factor(&mut self, a: &Matrix<T>) -> Result<(), MatrixError> {
        let (m, n) = a.size();
        if self.u.nrows() != m || self.v.nrows() != n {
            return Err(MatrixError::DimensionMismatch);
        }

        // the one-sided iteration wants at least as many rows as
        // columns.  A wide matrix is factored through its transpose,
        // which swaps the roles of U and V.
        if m < n {
            let mut flipped = SVDEngine::new((n, m));
            flipped.factor(&transpose(a))?;
            self.s.copy_from_slice(&flipped.s);
            self.u = flipped.v;
            self.v = flipped.u;
            // the swap hands the dead columns to v, so re-establish
            // the zero-σ ⇒ zero u column convention
            for (j, &sj) in self.s.iter().enumerate() {
                if sj == T::zero() {
                    self.u.set_col(j, &vec![T::zero(); m])?;
                }
            }
            return Ok(());
        }

        // rows of w are the columns of A, kept contiguous for the
        // rotation kernels.  rows of vt accumulate the right singular
        // vectors.
        let mut w = transpose(a);
        let mut vt = Matrix::identity(n);

        let tol = T::epsilon().sqrt();
        let mut converged = false;
        for _ in 0..MAX_SWEEPS {
            let mut rotated = false;
            for p in 0..n {
                for q in (p + 1)..n {
                    let wp = w.row_slice(p);
                    let wq = w.row_slice(q);
                    let alpha = wp.sumsq();
                    let beta = wq.sumsq();
                    let gamma = wp.dot(wq);

                    if gamma.abs() <= tol * T::sqrt(alpha * beta) {
                        continue;
                    }
                    rotated = true;

                    // Jacobi rotation zeroing the (p,q) inner product
                    let zeta = (beta - alpha) / (gamma + gamma);
                    let t = T::signum(zeta)
                        / (zeta.abs() + T::sqrt(T::one() + zeta * zeta));
                    let c = T::one() / T::sqrt(T::one() + t * t);
                    let s = c * t;

                    rotate_rows(&mut w, p, q, c, s);
                    rotate_rows(&mut vt, p, q, c, s);
                }
            }
            if !rotated {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(MatrixError::ConvergenceFailure);
        }

        // singular values are the column norms of the rotated A;
        // numerically dead columns get a zero left vector rather than
        // an amplified noise vector
        let sigma: Vec<T> = (0..n).map(|j| w.row_slice(j).norm()).collect();

        let mut perm = vec![0usize; n];
        sortperm_rev(&mut perm, &sigma);

        for (j, &pj) in perm.iter().enumerate() {
            self.s[j] = sigma[pj];
            if sigma[pj] > T::zero() {
                let mut uj = w.row_slice(pj).to_vec();
                uj.scale(sigma[pj].recip());
                self.u.set_col(j, &uj)?;
            } else {
                self.u.set_col(j, &vec![T::zero(); m])?;
            }
            self.v.set_col(j, vt.row_slice(pj))?;
        }
        Ok(())
    }
}

// plane rotation of rows p and q (p < q):
//   row_p <- c*row_p - s*row_q
//   row_q <- s*row_p + c*row_q
fn rotate_rows<T: FloatT>(mat: &mut Matrix<T>, p: usize, q: usize, c: T, s: T) {
    debug_assert!(p < q);
    let n = mat.ncols();
    let (top, bottom) = mat.data_mut().split_at_mut(q * n);
    let rowp = &mut top[(p * n)..(p + 1) * n];
    let rowq = &mut bottom[..n];

    for (xp, xq) in std::iter::zip(rowp, rowq) {
        let (a, b) = (*xp, *xq);
        *xp = c * a - s * b;
        *xq = s * a + c * b;
    }
}

/// Convenience wrapper building and factoring an [`SVDEngine`] for `a`.
pub fn svd<T: FloatT>(a: &Matrix<T>) -> Result<SVDEngine<T>, MatrixError> {
    let mut eng = SVDEngine::new(a.size());
    eng.factor(a)?;
    Ok(eng)
}
