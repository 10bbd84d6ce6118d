//! Source estimates and source spaces as seen by the metrics.
//!
//! A source estimate is a `locations × times` activity matrix plus the time
//! stamp of every column. Callers usually own richer objects; implementing
//! [`SourceEstimate`] is enough to compare them. [`StcData`] is a plain owned
//! implementation for callers that have nothing else.
//!
//! # Memory Layout
//!
//! Data is row-major, one row per source location:
//!
//! ```text
//! data[loc * n_times + t] = activity at location `loc`, time index `t`
//! ```

use crate::error::{Error, Result};

/// Read-only view of a source estimate.
pub trait SourceEstimate {
    /// `(n_locations, n_times)` of the data matrix.
    fn shape(&self) -> (usize, usize);

    /// Row-major data with `shape().0 * shape().1` values.
    fn data(&self) -> &[f64];

    /// Time stamp of each column.
    fn times(&self) -> &[f64];
}

impl<T: SourceEstimate + ?Sized> SourceEstimate for &T {
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn data(&self) -> &[f64] {
        (**self).data()
    }

    fn times(&self) -> &[f64] {
        (**self).times()
    }
}

/// Fail unless `actual` values fill a matrix of `shape` exactly.
///
/// A shape whose element count overflows `usize` is reported with
/// `expected: usize::MAX`.
pub(crate) fn check_data_len(shape: (usize, usize), actual: usize) -> Result<()> {
    match shape.0.checked_mul(shape.1) {
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(Error::InvalidEstimate { expected, actual }),
        None => Err(Error::InvalidEstimate {
            expected: usize::MAX,
            actual,
        }),
    }
}

/// Owned source estimate.
///
/// ```rust
/// use stcmetrics::{SourceEstimate, StcData};
///
/// let stc = StcData::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.0, 0.001]).unwrap();
/// assert_eq!(stc.shape(), (2, 2));
/// assert_eq!(stc.get(1, 0), Some(3.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StcData {
    data: Vec<f64>,
    n_locations: usize,
    times: Vec<f64>,
}

impl StcData {
    /// Build from flat row-major data.
    ///
    /// Fails with [`Error::InvalidEstimate`] unless
    /// `data.len() == n_locations * times.len()`.
    pub fn new(data: Vec<f64>, n_locations: usize, times: Vec<f64>) -> Result<Self> {
        check_data_len((n_locations, times.len()), data.len())?;
        Ok(Self {
            data,
            n_locations,
            times,
        })
    }

    /// Build from one row per source location.
    ///
    /// Every row must have `times.len()` values.
    pub fn from_rows(rows: &[Vec<f64>], times: Vec<f64>) -> Result<Self> {
        let n_times = times.len();
        if rows.iter().any(|row| row.len() != n_times) {
            return Err(Error::InvalidEstimate {
                expected: rows.len().saturating_mul(n_times),
                actual: rows.iter().map(Vec::len).sum(),
            });
        }
        Self::new(rows.concat(), rows.len(), times)
    }

    /// Times `tmin, tmin + tstep, ...` for `n_times` samples.
    ///
    /// Convenience for simulated data sampled on a regular grid.
    pub fn with_regular_times(
        data: Vec<f64>,
        n_locations: usize,
        tmin: f64,
        tstep: f64,
    ) -> Result<Self> {
        let n_times = if n_locations == 0 {
            0
        } else {
            data.len() / n_locations
        };
        let times = (0..n_times).map(|i| tmin + tstep * i as f64).collect();
        Self::new(data, n_locations, times)
    }

    /// Number of source locations (rows).
    pub fn n_locations(&self) -> usize {
        self.n_locations
    }

    /// Number of time points (columns).
    pub fn n_times(&self) -> usize {
        self.times.len()
    }

    /// Activity at `(location, time_index)`, or `None` when out of range.
    pub fn get(&self, location: usize, time_index: usize) -> Option<f64> {
        if location >= self.n_locations || time_index >= self.n_times() {
            return None;
        }
        self.data.get(location * self.n_times() + time_index).copied()
    }

    /// Activity of one location across time.
    pub fn row(&self, location: usize) -> Option<&[f64]> {
        if location >= self.n_locations {
            return None;
        }
        let n = self.n_times();
        self.data.get(location * n..(location + 1) * n)
    }

    /// New estimate with every value multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * k).collect(),
            n_locations: self.n_locations,
            times: self.times.clone(),
        }
    }
}

impl SourceEstimate for StcData {
    fn shape(&self) -> (usize, usize) {
        (self.n_locations, self.times.len())
    }

    fn data(&self) -> &[f64] {
        &self.data
    }

    fn times(&self) -> &[f64] {
        &self.times
    }
}

/// Geometry of candidate source locations.
///
/// Only the distance-based metrics look at a source space, and they only
/// check that one was supplied; the positions are carried through as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceSpace {
    positions: Vec<[f64; 3]>,
}

impl SourceSpace {
    /// Source space from location positions (metres, head coordinates).
    pub fn new(positions: Vec<[f64; 3]>) -> Self {
        Self { positions }
    }

    /// Location positions.
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if there are no locations.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
