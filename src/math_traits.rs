// All internal math goes through these core traits, which are
// implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::FloatT).
///
/// These are the in-place / unchecked kernels: length preconditions are
/// asserted rather than returned as errors.  The checked public surface
/// lives in the [`vector`](crate::vector) module.
pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Apply an elementwise operation to `v` and assign the
    /// results to `self`.
    fn scalarop_from(&mut self, op: impl Fn(Self::T) -> Self::T, v: &Self) -> &mut Self;

    /// Elementwise translation.
    fn translate(&mut self, c: Self::T) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise reciprocal.
    fn recip(&mut self) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Elementwise scaling by another vector. Produces `self[i] = self[i] * y[i]`
    fn hadamard(&mut self, y: &Self) -> &mut Self;

    /// Normalize to unit 2-norm, returning the norm.  Do nothing if norm == 0.
    fn normalize(&mut self) -> Self::T;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Standard Euclidian or 2-norm distance from `self` to `y`
    fn dist(&self, y: &Self) -> Self::T;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Sum of squares of the elements.
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// One norm
    fn norm_one(&self) -> Self::T;

    /// max absolute difference from `b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// Minimum value in vector
    fn minimum(&self) -> Self::T;

    /// Maximum value in vector
    fn maximum(&self) -> Self::T;

    /// Mean value in vector
    fn mean(&self) -> Self::T;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;

    //blas-like vector ops
    //--------------------

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;

    /// BLAS-like shift and scale, non in-place version.  Produces `self = a*x+b*y`
    fn waxpby(&mut self, a: Self::T, x: &Self, b: Self::T, y: &Self) -> &mut Self;
}

/// In-place operations on matrices of [`FloatT`](crate::FloatT).
pub trait MatrixMath {
    type T;

    /// Elementwise scaling
    fn scale(&mut self, c: Self::T);

    /// Elementwise negation
    fn negate(&mut self);

    /// Left multiply the matrix `self` by `Diagonal(l)`
    fn lscale(&mut self, l: &[Self::T]);

    /// Right multiply the matrix `self` by `Diagonal(r)`
    fn rscale(&mut self, r: &[Self::T]);

    /// Compute rowwise infinity norms and assign the results to `norms`
    fn row_norms(&self, norms: &mut [Self::T]);

    /// Compute columnwise infinity norms and assign the results to `norms`
    fn col_norms(&self, norms: &mut [Self::T]);
}

/// Matrix-matrix multiply for matrices of [`FloatT`](crate::FloatT).
pub trait MultiplyGEMM {
    type T;

    /// BLAS-like general matrix-matrix multiply.  Produces `self = α*A*B + β*self`
    fn mul(&mut self, a: &Self, b: &Self, α: Self::T, β: Self::T) -> &mut Self;
}
