//! Metric evaluation between two source estimates.
//!
//! Checks run in a fixed order so the first reported error is predictable:
//!
//! 1. metric name (string entry point only)
//! 2. source space present for geometry metrics
//! 3. shape, data length and time compatibility
//! 4. geometry metrics report [`Error::NotImplemented`]

use crate::check::{check_compatible_with, TimeTolerance};
use crate::error::{Error, Result};
use crate::estimate::{SourceEstimate, SourceSpace};
use crate::metric::{CosineDissimilarity, Metric, Rms, SymmetricMetric};

/// Options for [`evaluate_metric_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvalOptions {
    /// Time-stamp comparison used by the compatibility check.
    pub time_tolerance: TimeTolerance,
}

impl EvalOptions {
    /// Default options with the given time tolerance.
    pub fn with_time_tolerance(mut self, time_tolerance: TimeTolerance) -> Self {
        self.time_tolerance = time_tolerance;
        self
    }
}

/// Compute `metric` between two compatible source estimates.
///
/// `src` is only consulted by [`Metric::DistanceErr`] and
/// [`Metric::WeightedDistanceErr`].
///
/// # Silent and Empty Estimates
///
/// Scores are always defined numbers for finite input:
///
/// - `Cosine` against an all-zero estimate is `1.0` (uncorrelated), not NaN.
/// - `Rms` of two empty estimates is `0.0`; `Cosine` of them is `1.0`.
///
/// Callers porting from tools that let `0 / 0` produce NaN should test for
/// a zero norm themselves if they need to tell the cases apart.
///
/// Data whose length disagrees with the reported shape fails with
/// [`Error::InvalidEstimate`].
///
/// # Example
///
/// ```rust
/// use stcmetrics::{evaluate_metric, Metric, StcData};
///
/// let times = vec![0.0, 0.001];
/// let a = StcData::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], times.clone()).unwrap();
/// let b = StcData::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], times).unwrap();
///
/// assert_eq!(evaluate_metric(&a, &b, Metric::Rms, None).unwrap(), 0.0);
/// assert!(evaluate_metric(&a, &b, Metric::Cosine, None).unwrap().abs() < 1e-12);
/// ```
pub fn evaluate_metric<A, B>(
    stc1: &A,
    stc2: &B,
    metric: Metric,
    src: Option<&SourceSpace>,
) -> Result<f64>
where
    A: SourceEstimate + ?Sized,
    B: SourceEstimate + ?Sized,
{
    evaluate_metric_with(stc1, stc2, metric, src, &EvalOptions::default())
}

/// [`evaluate_metric`] with the metric given by name.
///
/// Unknown names fail with [`Error::UnknownMetric`] before anything else is
/// looked at.
pub fn evaluate_metric_by_name<A, B>(
    stc1: &A,
    stc2: &B,
    metric: &str,
    src: Option<&SourceSpace>,
) -> Result<f64>
where
    A: SourceEstimate + ?Sized,
    B: SourceEstimate + ?Sized,
{
    let metric: Metric = metric.parse()?;
    evaluate_metric(stc1, stc2, metric, src)
}

/// [`evaluate_metric`] with explicit options.
pub fn evaluate_metric_with<A, B>(
    stc1: &A,
    stc2: &B,
    metric: Metric,
    src: Option<&SourceSpace>,
    options: &EvalOptions,
) -> Result<f64>
where
    A: SourceEstimate + ?Sized,
    B: SourceEstimate + ?Sized,
{
    log::debug!(
        "evaluating {} on {:?} vs {:?} (source space: {})",
        metric,
        stc1.shape(),
        stc2.shape(),
        src.map_or_else(|| "none".to_owned(), |s| format!("{} locations", s.len()))
    );

    if metric.requires_source_space() && src.is_none() {
        return Err(Error::MissingSourceSpace { metric });
    }

    check_compatible_with(stc1, stc2, options.time_tolerance)?;
    let (data1, data2) = (stc1.data(), stc2.data());

    let score = match metric {
        Metric::Rms => Rms.distance(data1, data2),
        Metric::Cosine => CosineDissimilarity.distance(data1, data2),
        Metric::DistanceErr | Metric::WeightedDistanceErr => {
            return Err(Error::NotImplemented { metric });
        }
    };

    log::debug!("{} = {}", metric, score);
    Ok(score)
}
