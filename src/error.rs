//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::metric::Metric;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure to compare two source estimates.
///
/// All variants are validation failures raised before any arithmetic runs;
/// none are retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Data matrices have different `(locations, times)` dimensions.
    #[error("data in source estimates must have the same size: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape of the first estimate.
        left: (usize, usize),
        /// Shape of the second estimate.
        right: (usize, usize),
    },

    /// Time stamps differ. `None` on one side means that array ran out first.
    #[error("times of the source estimates must match (first difference at index {index}: {left:?} vs {right:?})")]
    TimeMismatch {
        /// First index where the time stamps disagree.
        index: usize,
        /// Time stamp of the first estimate at `index`.
        left: Option<f64>,
        /// Time stamp of the second estimate at `index`.
        right: Option<f64>,
    },

    /// Metric name is not one of [`Metric::ALL`].
    #[error("unknown metric {name:?}: expected one of \"rms\", \"cosine\", \"distance_err\", \"weighted_distance_err\"")]
    UnknownMetric {
        /// The rejected name.
        name: String,
    },

    /// Geometry-dependent metric requested without a source space.
    #[error("a source space is needed when using \"{metric}\"")]
    MissingSourceSpace {
        /// The metric that needs a source space.
        metric: Metric,
    },

    /// Metric is recognised but has no computation.
    #[error("metric \"{metric}\" is not implemented")]
    NotImplemented {
        /// The unavailable metric.
        metric: Metric,
    },

    /// Flat data length does not match `locations * times`.
    ///
    /// Raised by [`StcData`](crate::StcData) constructors and by the
    /// compatibility check for estimates whose data disagrees with their shape.
    #[error("source estimate data has {actual} values, expected {expected}")]
    InvalidEstimate {
        /// `locations * times`, saturated at `usize::MAX` on overflow.
        expected: usize,
        /// Values actually supplied.
        actual: usize,
    },
}

impl Error {
    /// True for failures caused by the pair of inputs rather than the request.
    pub fn is_incompatible_inputs(&self) -> bool {
        matches!(
            self,
            Error::ShapeMismatch { .. } | Error::TimeMismatch { .. }
        )
    }
}
