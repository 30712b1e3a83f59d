mod core;
pub use self::core::*;
mod math;
pub use self::math::*;
mod gemm;
