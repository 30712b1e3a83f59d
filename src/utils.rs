//! Internal utility functions and helpers.

use std::cmp::Ordering;

// fills p with the permutation that sorts v under `compare`
pub(crate) fn sortperm_by<T, F>(p: &mut [usize], v: &[T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert_eq!(p.len(), v.len());
    p.iter_mut().enumerate().for_each(|(i, p)| *p = i);
    let mut f = compare;
    p.sort_by(|&i, &j| f(&v[i], &v[j]));
}

// descending order for float data.  NaN entries sort last, so a
// stray NaN can never displace real values from the front.
pub(crate) fn sortperm_rev<T>(p: &mut [usize], v: &[T])
where
    T: num_traits::Float,
{
    sortperm_by(p, v, |a, b| {
        b.partial_cmp(a).unwrap_or(Ordering::Greater)
    });
}

#[test]
fn test_sortperm_rev() {
    let v = vec![3.0, 9.0, 1.0, 4.0];
    let mut p = vec![0; 4];
    sortperm_rev(&mut p, &v);
    assert_eq!(p, vec![1, 3, 0, 2]);
}
