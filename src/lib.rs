//! Similarity and error metrics between source estimates.
//!
//! `stcmetrics` compares a simulated source estimate with a reconstructed one
//! (both `locations × times` activity matrices) and reduces the pair to a
//! single score:
//!
//! | Metric | Formula | Range |
//! |--------|---------|-------|
//! | [`Metric::Rms`] | `sqrt(mean((a - b)²))` | `[0, inf)` |
//! | [`Metric::Cosine`] | `1 - <a, b> / (‖a‖_F ‖b‖_F)` | `[0, 2]` |
//! | [`Metric::DistanceErr`] | distance between most active dipoles | not implemented |
//! | [`Metric::WeightedDistanceErr`] | same, weighted by activity difference | not implemented |
//!
//! Before any arithmetic the two estimates must have the same shape and the
//! same time stamps ([`check_compatible`]).
//!
//! # SIMD Dispatch
//!
//! The reductions in [`dense`] dispatch to the fastest available instruction
//! set when the `simd` feature is enabled (default):
//!
//! | Architecture | Instructions | Detection |
//! |--------------|--------------|-----------|
//! | x86_64 | AVX2 + FMA | Runtime |
//! | aarch64 | NEON | Always available |
//! | Other | Portable | LLVM auto-vectorizes |
//!
//! Buffers shorter than [`MIN_DIM_SIMD`] values use portable code.
//!
//! # Logging
//!
//! Evaluation is traced through the [`log`] facade at `debug` level, and
//! zero-norm cosine input is reported at `warn`. No logger is
//! installed by this crate.
//!
//! # Example
//!
//! ```rust
//! use stcmetrics::{evaluate_metric, evaluate_metric_by_name, Error, Metric, StcData};
//!
//! let times = vec![0.0, 0.001, 0.002];
//! let simulated = StcData::from_rows(&[vec![0.0, 1.0, 0.0], vec![0.0, 0.5, 0.0]], times.clone()).unwrap();
//! let estimated = StcData::from_rows(&[vec![0.0, 0.8, 0.1], vec![0.1, 0.4, 0.0]], times).unwrap();
//!
//! let rms = evaluate_metric(&simulated, &estimated, Metric::Rms, None).unwrap();
//! assert!(rms > 0.0);
//!
//! let cos = evaluate_metric_by_name(&simulated, &estimated, "cosine", None).unwrap();
//! assert!((0.0..=2.0).contains(&cos));
//!
//! let err = evaluate_metric_by_name(&simulated, &estimated, "distance_err", None).unwrap_err();
//! assert!(matches!(err, Error::MissingSourceSpace { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "simd")]
mod arch;
mod check;
pub mod dense;
mod error;
mod estimate;
mod metric;
mod quantify;

pub use check::{check_compatible, check_compatible_with, TimeTolerance};
pub use error::{Error, Result};
pub use estimate::{SourceEstimate, SourceSpace, StcData};
pub use metric::{CosineDissimilarity, Metric, Rms, SymmetricMetric};
pub use quantify::{evaluate_metric, evaluate_metric_by_name, evaluate_metric_with, EvalOptions};

/// Minimum buffer length for SIMD to be worthwhile.
///
/// Below this threshold, call and reduction overhead outweighs SIMD benefits.
pub const MIN_DIM_SIMD: usize = 16;
