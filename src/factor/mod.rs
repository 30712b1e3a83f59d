//! Dense factorization engines and the solvers built on them.

mod lu;
pub use lu::*;
mod svd;
pub use svd::*;
mod pinv;
pub use pinv::*;
