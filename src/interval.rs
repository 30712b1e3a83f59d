//! One-dimensional index intervals used for matrix slicing.
//!
//! An [`Interval`] is an inclusive range over one matrix dimension in
//! which either bound may be left open.  Open bounds are resolved
//! against the extent of the dimension being sliced, so `(.., 2..)`
//! style arguments behave like their NumPy / Julia counterparts.

use crate::errors::MatrixError;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// An inclusive index range with optionally open ends.
///
/// Constructed implicitly from the standard range types and from bare
/// indices, e.g. all of the following are valid slicing arguments:
///
/// ```
/// use matlite::Interval;
/// let _: Interval = (0..5).into();   // start 0, end 4
/// let _: Interval = (0..=5).into();  // start 0, end 5
/// let _: Interval = (..5).into();    // end 4 only
/// let _: Interval = (2..).into();    // start 2 only
/// let _: Interval = (..).into();     // fully open
/// let _: Interval = 3.into();        // single index
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// inclusive lower bound, or `None` for the start of the dimension
    pub start: Option<usize>,
    /// inclusive upper bound, or `None` for the end of the dimension
    pub end: Option<usize>,
}

impl Interval {
    /// canonical empty interval
    pub const EMPTY: Interval = Interval {
        start: Some(1),
        end: Some(0),
    };

    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// True iff both bounds are present and start > end.
    pub fn is_empty(&self) -> bool {
        match (self.start, self.end) {
            (Some(lower), Some(upper)) => lower > upper,
            _ => false,
        }
    }

    /// Resolve open bounds against the extent of one matrix dimension,
    /// producing concrete inclusive `(start, end)` indices.
    ///
    /// Empty intervals and bounds reaching past the extent resolve to
    /// `IndexOutOfBounds`.
    pub(crate) fn resolve(&self, extent: usize) -> Result<(usize, usize), MatrixError> {
        if self.is_empty() || extent == 0 {
            return Err(MatrixError::IndexOutOfBounds);
        }
        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or(extent - 1);
        if start >= extent || end >= extent {
            return Err(MatrixError::IndexOutOfBounds);
        }
        Ok((start, end))
    }
}

impl From<usize> for Interval {
    fn from(idx: usize) -> Self {
        Interval::new(Some(idx), Some(idx))
    }
}

impl From<Range<usize>> for Interval {
    fn from(r: Range<usize>) -> Self {
        // half-open [a,b) becomes inclusive [a,b-1]; an empty range
        // maps to the canonical empty interval
        match r.end.checked_sub(1) {
            Some(end) if r.start <= end => Interval::new(Some(r.start), Some(end)),
            _ => Interval::EMPTY,
        }
    }
}

impl From<RangeInclusive<usize>> for Interval {
    fn from(r: RangeInclusive<usize>) -> Self {
        Interval::new(Some(*r.start()), Some(*r.end()))
    }
}

impl From<RangeTo<usize>> for Interval {
    fn from(r: RangeTo<usize>) -> Self {
        match r.end.checked_sub(1) {
            Some(end) => Interval::new(None, Some(end)),
            None => Interval::EMPTY,
        }
    }
}

impl From<RangeToInclusive<usize>> for Interval {
    fn from(r: RangeToInclusive<usize>) -> Self {
        Interval::new(None, Some(r.end))
    }
}

impl From<RangeFrom<usize>> for Interval {
    fn from(r: RangeFrom<usize>) -> Self {
        Interval::new(Some(r.start), None)
    }
}

impl From<RangeFull> for Interval {
    fn from(_: RangeFull) -> Self {
        Interval::new(None, None)
    }
}

#[test]
fn test_interval_literals() {
    let iv: Interval = 3.into();
    assert_eq!((iv.start, iv.end), (Some(3), Some(3)));

    let iv: Interval = (0..5).into();
    assert_eq!((iv.start, iv.end), (Some(0), Some(4)));

    let iv: Interval = (0..=5).into();
    assert_eq!((iv.start, iv.end), (Some(0), Some(5)));

    let iv: Interval = (..=5).into();
    assert_eq!((iv.start, iv.end), (None, Some(5)));

    let iv: Interval = (..5).into();
    assert_eq!((iv.start, iv.end), (None, Some(4)));

    let iv: Interval = (0..).into();
    assert_eq!((iv.start, iv.end), (Some(0), None));

    let iv: Interval = (..).into();
    assert_eq!((iv.start, iv.end), (None, None));
}

#[test]
fn test_interval_empty() {
    assert!(Interval::EMPTY.is_empty());
    assert!(Interval::from(2..2).is_empty());
    assert!(Interval::from(0..0).is_empty());
    assert!(Interval::new(Some(4), Some(2)).is_empty());
    assert!(!Interval::new(Some(2), Some(2)).is_empty());
    assert!(!Interval::new(None, Some(0)).is_empty());
    assert!(!Interval::new(Some(0), None).is_empty());
}

#[test]
fn test_interval_resolve() {
    let iv = Interval::from(1..=3);
    assert_eq!(iv.resolve(4), Ok((1, 3)));
    assert_eq!(iv.resolve(3), Err(MatrixError::IndexOutOfBounds));

    assert_eq!(Interval::from(..).resolve(5), Ok((0, 4)));
    assert_eq!(Interval::from(2..).resolve(5), Ok((2, 4)));
    assert_eq!(Interval::from(..3).resolve(5), Ok((0, 2)));
    assert_eq!(
        Interval::EMPTY.resolve(5),
        Err(MatrixError::IndexOutOfBounds)
    );
}
