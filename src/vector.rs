//! Checked elementwise and reduction math over one-dimensional buffers.
//!
//! These free functions form the public vector surface: length
//! preconditions are reported as [`MatrixError`] values rather than
//! panics.  Binary elementwise operations accept equal-length operands,
//! or a length-1 operand which is broadcast to the other's length.

use crate::errors::MatrixError;
use crate::floats::FloatT;
use crate::math_traits::VectorMath;
use std::iter::zip;

fn broadcast_op<T: FloatT>(
    x: &[T],
    y: &[T],
    op: impl Fn(T, T) -> T,
) -> Result<Vec<T>, MatrixError> {
    if x.len() == y.len() {
        Ok(zip(x, y).map(|(&x, &y)| op(x, y)).collect())
    } else if y.len() == 1 {
        let c = y[0];
        Ok(x.iter().map(|&x| op(x, c)).collect())
    } else if x.len() == 1 {
        let c = x[0];
        Ok(y.iter().map(|&y| op(c, y)).collect())
    } else {
        Err(MatrixError::DimensionMismatch)
    }
}

/// Elementwise sum `x + y`.
pub fn add<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, |x, y| x + y)
}

/// Elementwise difference `x - y`.
pub fn sub<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, |x, y| x - y)
}

/// Elementwise product `x .* y`.
pub fn mul<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, |x, y| x * y)
}

/// Elementwise quotient `x ./ y`.  Division by zero follows native
/// floating point semantics and produces Inf/NaN entries.
pub fn div<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, |x, y| x / y)
}

/// Elementwise remainder `x % y`.
pub fn rem<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, |x, y| x % y)
}

/// Elementwise power `x[i]^y[i]`.
pub fn pow<T: FloatT>(x: &[T], y: &[T]) -> Result<Vec<T>, MatrixError> {
    broadcast_op(x, y, T::powf)
}

// ---------------------------------------------------------------------
// elementwise transcendental maps

macro_rules! elementwise_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub fn $name<T: FloatT>(x: &[T]) -> Vec<T> {
            x.iter().map(|&x| T::$name(x)).collect()
        }
    };
}

elementwise_map!(
    /// Elementwise square root.
    sqrt
);
elementwise_map!(
    /// Elementwise exponential.
    exp
);
elementwise_map!(
    /// Elementwise natural logarithm.
    ln
);
elementwise_map!(log2);
elementwise_map!(log10);
elementwise_map!(sin);
elementwise_map!(cos);
elementwise_map!(tan);
elementwise_map!(asin);
elementwise_map!(acos);
elementwise_map!(atan);
elementwise_map!(sinh);
elementwise_map!(cosh);
elementwise_map!(tanh);
elementwise_map!(asinh);
elementwise_map!(acosh);
elementwise_map!(atanh);
elementwise_map!(
    /// Elementwise absolute value.
    abs
);
elementwise_map!(floor);
elementwise_map!(ceil);
elementwise_map!(round);
elementwise_map!(trunc);
elementwise_map!(
    /// Elementwise reciprocal.
    recip
);

/// Elementwise negation.
pub fn neg<T: FloatT>(x: &[T]) -> Vec<T> {
    x.iter().map(|&x| -x).collect()
}

/// Clamp each element into `[low, high]`.
pub fn clip<T: FloatT>(x: &[T], low: T, high: T) -> Vec<T> {
    x.iter().map(|&x| T::min(T::max(x, low), high)).collect()
}

/// Replace elements below `low` with `low`.
pub fn threshold<T: FloatT>(x: &[T], low: T) -> Vec<T> {
    x.iter().map(|&x| T::max(x, low)).collect()
}

// ---------------------------------------------------------------------
// reductions

/// Sum of elements; 0 for an empty buffer.
pub fn sum<T: FloatT>(x: &[T]) -> T {
    x.sum()
}

/// Sum of absolute values; 0 for an empty buffer.
pub fn asum<T: FloatT>(x: &[T]) -> T {
    x.norm_one()
}

/// Mean value; 0 for an empty buffer.
pub fn mean<T: FloatT>(x: &[T]) -> T {
    x.mean()
}

/// Mean of absolute values; 0 for an empty buffer.
pub fn meamg<T: FloatT>(x: &[T]) -> T {
    if x.is_empty() {
        T::zero()
    } else {
        x.norm_one() / T::from_usize(x.len()).unwrap()
    }
}

/// Mean of squared values; 0 for an empty buffer.
pub fn measq<T: FloatT>(x: &[T]) -> T {
    if x.is_empty() {
        T::zero()
    } else {
        x.sumsq() / T::from_usize(x.len()).unwrap()
    }
}

/// Population standard deviation; 0 for an empty buffer.
pub fn std<T: FloatT>(x: &[T]) -> T {
    if x.is_empty() {
        return T::zero();
    }
    let m = x.mean();
    let var = crate::vecmath::accumulate_pairwise(x.iter(), |&x| T::powi(x - m, 2))
        / T::from_usize(x.len()).unwrap();
    T::sqrt(var)
}

/// Minimum element; +infinity for an empty buffer.
pub fn minimum<T: FloatT>(x: &[T]) -> T {
    x.minimum()
}

/// Maximum element; -infinity for an empty buffer.
pub fn maximum<T: FloatT>(x: &[T]) -> T {
    x.maximum()
}

/// Index of the minimum element, or `None` for an empty buffer.
pub fn argmin<T: FloatT>(x: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in x.iter().enumerate() {
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the maximum element, or `None` for an empty buffer.
pub fn argmax<T: FloatT>(x: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in x.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Return `(x - mean(x)) / std(x)` elementwise.
///
/// A buffer with zero standard deviation (all elements equal) maps to
/// the all-zero buffer, so constant-valued input has deterministic
/// output rather than producing NaN entries.
pub fn normalized<T: FloatT>(x: &[T]) -> Vec<T> {
    let m = mean(x);
    let s = std(x);
    if s == T::zero() {
        return vec![T::zero(); x.len()];
    }
    x.iter().map(|&x| (x - m) / s).collect()
}

/// Inner product; `DimensionMismatch` unless lengths agree.
pub fn dot<T: FloatT>(x: &[T], y: &[T]) -> Result<T, MatrixError> {
    if x.len() != y.len() {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok(VectorMath::dot(x, y))
}

/// Euclidean distance `sqrt(sum((x-y)^2))`; `DimensionMismatch`
/// unless lengths agree.
pub fn dist<T: FloatT>(x: &[T], y: &[T]) -> Result<T, MatrixError> {
    if x.len() != y.len() {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok(VectorMath::dist(x, y))
}

/// Weighted combination `a*x + b*y`; `DimensionMismatch` unless
/// lengths agree.
pub fn waxpby<T: FloatT>(a: T, x: &[T], b: T, y: &[T]) -> Result<Vec<T>, MatrixError> {
    if x.len() != y.len() {
        return Err(MatrixError::DimensionMismatch);
    }
    let mut w = vec![T::zero(); x.len()];
    w.waxpby(a, x, b, y);
    Ok(w)
}

// -------------
// testing

#[test]
fn test_elementwise_broadcast() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, 5.0, 6.0];

    assert_eq!(add(&x, &y).unwrap(), vec![5.0, 7.0, 9.0]);
    assert_eq!(sub(&x, &y).unwrap(), vec![-3.0, -3.0, -3.0]);
    assert_eq!(mul(&x, &y).unwrap(), vec![4.0, 10.0, 18.0]);
    assert_eq!(add(&x, &[10.0]).unwrap(), vec![11.0, 12.0, 13.0]);
    assert_eq!(sub(&[10.0], &x).unwrap(), vec![9.0, 8.0, 7.0]);
    assert_eq!(
        add::<f64>(&x, &[1.0, 2.0]),
        Err(MatrixError::DimensionMismatch)
    );
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let q = div(&[1.0, -1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(q[0], f64::INFINITY);
    assert_eq!(q[1], f64::NEG_INFINITY);
    assert!(q[2].is_nan());
}

#[test]
fn test_dot_dist() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    assert_eq!(
        dot::<f64>(&[1.0], &[1.0, 2.0]),
        Err(MatrixError::DimensionMismatch)
    );
    assert_eq!(dist(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
}

#[test]
fn test_reductions() {
    let x = vec![1.0, -2.0, 3.0, -4.0];
    assert_eq!(sum(&x), -2.0);
    assert_eq!(asum(&x), 10.0);
    assert_eq!(mean(&x), -0.5);
    assert_eq!(meamg(&x), 2.5);
    assert_eq!(measq(&x), 7.5);
    assert_eq!(minimum(&x), -4.0);
    assert_eq!(maximum(&x), 3.0);
    assert_eq!(argmin(&x), Some(3));
    assert_eq!(argmax(&x), Some(2));

    let empty: Vec<f64> = vec![];
    assert_eq!(sum(&empty), 0.0);
    assert_eq!(std(&empty), 0.0);
    assert_eq!(argmax(&empty), None);
}

#[test]
fn test_std_and_normalized() {
    let x: Vec<f64> = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert!((std(&x) - 2.0).abs() < 1e-12);

    let z = normalized(&x);
    assert!(mean(&z).abs() < 1e-12);
    assert!((std(&z) - 1.0).abs() < 1e-12);

    // constant input must give a deterministic all-zero result
    let c = vec![3.0; 5];
    assert_eq!(normalized(&c), vec![0.0; 5]);
}

#[test]
fn test_transcendental_maps() {
    let x = vec![1.0, 4.0, 9.0];
    assert_eq!(sqrt(&x), vec![1.0, 2.0, 3.0]);
    assert_eq!(neg(&x), vec![-1.0, -4.0, -9.0]);
    assert_eq!(exp(&[0.0f64]), vec![1.0]);
    assert_eq!(ln(&[1.0f64]), vec![0.0]);
    assert_eq!(clip(&x, 2.0, 5.0), vec![2.0, 4.0, 5.0]);
    assert_eq!(threshold(&x, 3.0), vec![3.0, 4.0, 9.0]);

    let t = tanh(&[0.0f64, 100.0]);
    assert_eq!(t[0], 0.0);
    assert!((t[1] - 1.0).abs() < 1e-12);
}
