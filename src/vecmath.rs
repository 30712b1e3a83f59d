use crate::floats::FloatT;
use crate::math_traits::VectorMath;
use itertools::izip;
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(T) -> T, v: &[T]) -> &mut Self {
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn translate(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x + c)
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn recip(&mut self) -> &mut Self {
        self.scalarop(T::recip)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn hadamard(&mut self, y: &[T]) -> &mut Self {
        zip(&mut *self, y).for_each(|(x, y)| *x *= *y);
        self
    }

    fn normalize(&mut self) -> T {
        let norm = self.norm();
        if norm == T::zero() {
            return T::zero();
        }
        // divide rather than multiply by the reciprocal, so exactly
        // representable quotients stay exact
        self.scalarop(|x| x / norm);
        norm
    }

    fn dot(&self, y: &[T]) -> T {
        let iter = zip(self, y);
        let op = |(&x, &y)| x * y;
        accumulate_pairwise(iter, op)
    }

    fn dist(&self, y: &Self) -> T {
        let iter = zip(self, y);
        let op = |(&x, &y)| T::powi(x - y, 2);
        let dist2 = accumulate_pairwise(iter, op);
        T::sqrt(dist2)
    }

    fn sum(&self) -> T {
        accumulate_pairwise(self.iter(), |&x| x)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    // 2-norm
    fn norm(&self) -> T {
        T::sqrt(self.sumsq())
    }

    // Returns infinity norm
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    // Returns one norm
    fn norm_one(&self) -> T {
        accumulate_pairwise(self.iter(), |&x| x.abs())
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn minimum(&self) -> T {
        self.iter().fold(T::infinity(), |r, &s| T::min(r, s))
    }

    fn maximum(&self) -> T {
        self.iter().fold(-T::infinity(), |r, &s| T::max(r, s))
    }

    fn mean(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            let num = self.sum();
            let den = T::from_usize(self.len()).unwrap();
            num / den
        }
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }

    fn waxpby(&mut self, a: T, x: &[T], b: T, y: &[T]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        assert_eq!(self.len(), y.len());

        for (w, x, y) in izip!(&mut *self, x, y) {
            *w = a * (*x) + b * (*y);
        }
        self
    }
}

// ---------------------------------------------------------------------
// generic pairwise accumulator utility for sums, dot products etc

pub(crate) fn accumulate_pairwise<T, I, A, F>(x: I, op: F) -> T
where
    T: FloatT,
    I: IntoIterator<Item = A> + Clone,
    I::IntoIter: ExactSizeIterator,
    F: Fn(A) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    let n = x.clone().into_iter().len();
    return if n == 0 {
        T::zero()
    } else {
        accumulate_pairwise_inner(x, &op, 0, n)
    };

    fn accumulate_pairwise_inner<T, I, A, F>(x: I, op: &F, i1: usize, n: usize) -> T
    where
        T: FloatT,
        I: IntoIterator<Item = A> + Clone,
        I::IntoIter: ExactSizeIterator,
        F: Fn(A) -> T,
    {
        if n < BASE_CASE_DIM {
            x.into_iter()
                .skip(i1)
                .take(n)
                .fold(T::zero(), |acc, x| acc + op(x))
        } else {
            let n2 = n / 2;
            accumulate_pairwise_inner(x.clone(), op, i1, n2)
                + accumulate_pairwise_inner(x, op, i1 + n2, n - n2)
        }
    }
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
}

#[test]
fn test_mean() {
    let x = vec![1., 2., 3., 4., 5.];
    assert_eq!(x.mean(), 3.);
    assert_eq!(x[0..1].mean(), 1.);
    assert_eq!(x[0..0].mean(), 0.);

    //taking the mean of a huge number of f32s is inaccurate for
    //naive summation, but the pairwise method should still work
    let n = 10000000usize;
    let x = vec![1.5f32; n];
    let mean = x.mean();
    assert_eq!(mean, 1.5f32);

    //example should be such that naive summation would
    //have been inaccurate.  'mean' this way is ~1.72
    let mean = x.iter().fold(0.0, |acc, &z| acc + z) / (n as f32);
    assert!((mean - 1.5f32).abs() > 0.2f32);
}

#[test]
fn test_sum() {
    let maxlen = 128 * 7 + 1; //awkward length to test base case
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();

    for i in 0..=x.len() {
        let z = &x[0..i];
        let sum1 = z.iter().fold(0.0, |acc, &z| acc + z);
        let sum2 = z.sum();
        assert_eq!(sum1, sum2);
    }
}

#[test]
fn test_scalar_ops_chain() {
    let mut x = vec![1.0, 2.0, 3.0];
    x.translate(1.0).scale(2.0).negate();
    assert_eq!(x, vec![-4.0, -6.0, -8.0]);

    x.recip();
    assert_eq!(x, vec![-0.25, -1.0 / 6.0, -0.125]);

    x.set(2.0);
    assert_eq!(x, vec![2.0; 3]);

    let y = vec![9.0, 16.0, 25.0];
    x.scalarop_from(f64::sqrt, &y);
    assert_eq!(x, vec![3.0, 4.0, 5.0]);
}

#[test]
fn test_axpby() {
    let x = vec![1.0, 2.0];
    let mut y = vec![10.0, 20.0];
    y.axpby(2.0, &x, 0.5);
    assert_eq!(y, vec![7.0, 14.0]);

    let mut w = vec![0.0; 2];
    w.waxpby(3.0, &x, -1.0, &[1.0, 1.0]);
    assert_eq!(w, vec![2.0, 5.0]);
}

#[test]
fn test_is_finite() {
    assert!([1.0, 2.0].is_finite());
    assert!(![1.0, f64::INFINITY].is_finite());
    assert!(![f64::NAN, 1.0].is_finite());
}

#[test]
fn test_normalize() {
    let mut x = vec![3.0, 4.0];
    let norm = x.normalize();
    assert_eq!(norm, 5.0);
    assert_eq!(x, vec![0.6, 0.8]);

    let mut z = vec![0.0; 4];
    assert_eq!(z.normalize(), 0.0);
    assert_eq!(z, vec![0.0; 4]);
}
