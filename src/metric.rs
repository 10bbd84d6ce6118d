//! Metric identifiers and the symmetric-metric trait surface.
//!
//! [`Metric`] is the closed set of names a caller can ask for. The two
//! geometry metrics are kept as variants so that requesting them fails with
//! a precise error instead of "unknown metric".
//!
//! [`SymmetricMetric`] is the flat-slice interface; [`Rms`] and
//! [`CosineDissimilarity`] are the implemented metrics.

use std::fmt;
use std::str::FromStr;

use crate::dense;
use crate::error::Error;

/// A named comparison between two source estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Root mean square of the element-wise difference.
    Rms,
    /// `1 - <a, b> / (|a| |b|)` over all elements.
    Cosine,
    /// Distance between most active dipoles. Needs a source space.
    DistanceErr,
    /// Distance between most active dipoles weighted by difference in activity.
    /// Needs a source space.
    WeightedDistanceErr,
}

impl Metric {
    /// Every known metric, in documentation order.
    pub const ALL: [Metric; 4] = [
        Metric::Rms,
        Metric::Cosine,
        Metric::DistanceErr,
        Metric::WeightedDistanceErr,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::Rms => "rms",
            Metric::Cosine => "cosine",
            Metric::DistanceErr => "distance_err",
            Metric::WeightedDistanceErr => "weighted_distance_err",
        }
    }

    /// Whether this metric is only defined with a source space.
    pub const fn requires_source_space(self) -> bool {
        matches!(self, Metric::DistanceErr | Metric::WeightedDistanceErr)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMetric { name: s.to_owned() })
    }
}

/// A symmetric distance over flattened data.
///
/// Implementations assume `a.len() == b.len()`; shape checking happens
/// before this trait is reached.
pub trait SymmetricMetric<T> {
    /// Compute the (symmetric) distance between `a` and `b`.
    fn distance(&self, a: &[T], b: &[T]) -> T;
}

/// Root-mean-square difference: `sqrt(mean((a - b)²))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rms;

impl SymmetricMetric<f64> for Rms {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        dense::rms_diff(a, b)
    }
}

/// Cosine dissimilarity: `1 - cosine(a, b)`, in `[0, 2]`.
///
/// Degenerate (zero-norm) input maps to `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDissimilarity;

impl SymmetricMetric<f64> for CosineDissimilarity {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        1.0 - dense::cosine(a, b)
    }
}
