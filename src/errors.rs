use thiserror::Error;

/// Error type returned by matrix and vector operations.
///
/// Every checked operation validates its own preconditions and fails
/// immediately with the matching variant; no partial results are
/// returned on failure.  Factorization failures propagate unchanged
/// through dependent operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Shape or length precondition violated
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    DimensionMismatch,
    /// Row, column or sub-block index outside the matrix extents
    #[error("Index out of bounds")]
    IndexOutOfBounds,
    /// Elimination produced a near-zero pivot
    #[error("Matrix is singular to working precision")]
    SingularMatrix,
    /// Iterative factorization exceeded its sweep budget
    #[error("Iteration failed to converge")]
    ConvergenceFailure,
}
