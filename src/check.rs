//! Compatibility checks between two source estimates.
//!
//! Two estimates can be compared only if their data matrices have the same
//! shape and their time stamps agree. Distributed and sparse estimates of
//! different sizes are therefore never comparable.

use crate::error::{Error, Result};
use crate::estimate::{check_data_len, SourceEstimate};

/// How time stamps are compared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeTolerance {
    /// Bit-for-bit `==` on every time stamp.
    #[default]
    Exact,
    /// `|t1 - t2| <= eps` on every time stamp.
    Absolute(f64),
}

impl TimeTolerance {
    #[inline]
    fn matches(self, t1: f64, t2: f64) -> bool {
        match self {
            TimeTolerance::Exact => t1 == t2,
            TimeTolerance::Absolute(eps) => (t1 - t2).abs() <= eps,
        }
    }
}

/// Fail unless `a` and `b` have the same shape and identical time stamps.
///
/// Each estimate's data must also hold exactly `rows * cols` values, as
/// foreign [`SourceEstimate`] implementations are not checked on
/// construction.
///
/// ```rust
/// use stcmetrics::{check_compatible, Error, StcData};
///
/// let a = StcData::from_rows(&vec![vec![1.0, 2.0, 3.0]; 2], vec![0.0, 1.0, 2.0]).unwrap();
/// let b = StcData::from_rows(&vec![vec![1.0, 2.0]; 3], vec![0.0, 1.0]).unwrap();
/// assert!(matches!(check_compatible(&a, &b), Err(Error::ShapeMismatch { .. })));
/// ```
pub fn check_compatible<A, B>(a: &A, b: &B) -> Result<()>
where
    A: SourceEstimate + ?Sized,
    B: SourceEstimate + ?Sized,
{
    check_compatible_with(a, b, TimeTolerance::Exact)
}

/// [`check_compatible`] with a chosen time-stamp tolerance.
pub fn check_compatible_with<A, B>(a: &A, b: &B, tolerance: TimeTolerance) -> Result<()>
where
    A: SourceEstimate + ?Sized,
    B: SourceEstimate + ?Sized,
{
    let (left, right) = (a.shape(), b.shape());
    if left != right {
        return Err(Error::ShapeMismatch { left, right });
    }
    check_data_len(left, a.data().len())?;
    check_data_len(right, b.data().len())?;

    let (ta, tb) = (a.times(), b.times());
    let n = ta.len().max(tb.len());
    for index in 0..n {
        let (t1, t2) = (ta.get(index).copied(), tb.get(index).copied());
        let ok = match (t1, t2) {
            (Some(x), Some(y)) => tolerance.matches(x, y),
            _ => false,
        };
        if !ok {
            return Err(Error::TimeMismatch {
                index,
                left: t1,
                right: t2,
            });
        }
    }

    Ok(())
}
