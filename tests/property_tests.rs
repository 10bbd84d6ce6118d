//! Property-based tests for the metrics.
//!
//! Properties are checked on random estimates of random shape, including
//! shapes that cross the SIMD threshold.

use proptest::prelude::*;
use stcmetrics::{evaluate_metric, Error, Metric, StcData};

/// Two estimates of the same random shape with shared time stamps.
fn arb_pair() -> impl Strategy<Value = (StcData, StcData)> {
    (1usize..6, 1usize..40).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            proptest::collection::vec(-100.0f64..100.0, n),
            proptest::collection::vec(-100.0f64..100.0, n),
        )
            .prop_map(move |(a, b)| {
                let times: Vec<f64> = (0..cols).map(|i| i as f64 * 0.001).collect();
                (
                    StcData::new(a, rows, times.clone()).unwrap(),
                    StcData::new(b, rows, times).unwrap(),
                )
            })
    })
}

/// Positive scale factors spanning `1e-20..1e20`.
fn arb_scale() -> impl Strategy<Value = f64> {
    (-20.0f64..20.0).prop_map(|e| 10f64.powf(e))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 300,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // RMS
    // ─────────────────────────────────────────────────────────────────────────

    /// RMS of an estimate with itself is exactly zero.
    #[test]
    fn rms_identity_is_zero((a, _) in arb_pair()) {
        prop_assert_eq!(evaluate_metric(&a, &a, Metric::Rms, None).unwrap(), 0.0);
    }

    /// RMS is symmetric.
    #[test]
    fn rms_is_symmetric((a, b) in arb_pair()) {
        let ab = evaluate_metric(&a, &b, Metric::Rms, None).unwrap();
        let ba = evaluate_metric(&b, &a, Metric::Rms, None).unwrap();
        prop_assert!((ab - ba).abs() <= 1e-12 * ab.max(1.0), "{} vs {}", ab, ba);
    }

    /// RMS is non-negative.
    #[test]
    fn rms_is_non_negative((a, b) in arb_pair()) {
        prop_assert!(evaluate_metric(&a, &b, Metric::Rms, None).unwrap() >= 0.0);
    }

    /// Scaling both estimates by k scales RMS by k.
    #[test]
    fn rms_scales_linearly((a, b) in arb_pair(), k in 0.01f64..100.0) {
        let base = evaluate_metric(&a, &b, Metric::Rms, None).unwrap();
        let scaled = evaluate_metric(&a.scaled(k), &b.scaled(k), Metric::Rms, None).unwrap();
        let tolerance = base * k * 1e-9 + 1e-12;
        prop_assert!(
            (scaled - base * k).abs() <= tolerance,
            "rms scaled {} vs {} * {}", scaled, base, k
        );
    }

    /// RMS never exceeds the largest absolute difference.
    #[test]
    fn rms_bounded_by_max_difference((a, b) in arb_pair()) {
        use stcmetrics::SourceEstimate;
        let max_diff = a.data().iter().zip(b.data())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0f64, f64::max);
        let rms = evaluate_metric(&a, &b, Metric::Rms, None).unwrap();
        prop_assert!(rms <= max_diff * (1.0 + 1e-12) + 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cosine
    // ─────────────────────────────────────────────────────────────────────────

    /// Cosine dissimilarity of an estimate with itself is zero.
    #[test]
    fn cosine_identity_is_zero((a, _) in arb_pair()) {
        let c = evaluate_metric(&a, &a, Metric::Cosine, None).unwrap();
        prop_assert!(c.abs() < 1e-10, "cosine(a, a) = {}", c);
    }

    /// Cosine dissimilarity stays in [0, 2] up to rounding.
    #[test]
    fn cosine_in_range((a, b) in arb_pair()) {
        let c = evaluate_metric(&a, &b, Metric::Cosine, None).unwrap();
        prop_assert!((-1e-10..=2.0 + 1e-10).contains(&c), "cosine out of range: {}", c);
    }

    /// Cosine dissimilarity is symmetric.
    #[test]
    fn cosine_is_symmetric((a, b) in arb_pair()) {
        let ab = evaluate_metric(&a, &b, Metric::Cosine, None).unwrap();
        let ba = evaluate_metric(&b, &a, Metric::Cosine, None).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    /// Scaling both estimates by a positive constant leaves cosine unchanged,
    /// however small or large the constant.
    #[test]
    fn cosine_scale_invariant((a, b) in arb_pair(), k in arb_scale()) {
        let base = evaluate_metric(&a, &b, Metric::Cosine, None).unwrap();
        let scaled = evaluate_metric(&a.scaled(k), &b.scaled(k), Metric::Cosine, None).unwrap();
        prop_assert!((base - scaled).abs() < 1e-9, "{} vs {} (k = {})", base, scaled, k);
    }

    /// Negating one estimate maps d to 2 - d.
    #[test]
    fn cosine_negation_reflects((a, b) in arb_pair()) {
        let c = evaluate_metric(&a, &b, Metric::Cosine, None).unwrap();
        let neg = evaluate_metric(&a, &b.scaled(-1.0), Metric::Cosine, None).unwrap();
        prop_assert!((c + neg - 2.0).abs() < 1e-9);
    }

    /// Identity stays at zero for tiny and huge amplitudes alike.
    #[test]
    fn cosine_identity_is_zero_at_any_scale((a, _) in arb_pair(), k in arb_scale()) {
        let scaled = a.scaled(k);
        let c = evaluate_metric(&scaled, &scaled, Metric::Cosine, None).unwrap();
        prop_assert!(c.abs() < 1e-10, "cosine(ka, ka) = {} at k = {:e}", c, k);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Any row-count difference is a shape mismatch, whatever the metric.
    #[test]
    fn different_row_counts_are_shape_mismatch(
        rows in 1usize..5,
        extra in 1usize..3,
        cols in 1usize..10,
        metric_idx in 0usize..2,
    ) {
        let times: Vec<f64> = (0..cols).map(|i| i as f64).collect();
        let a = StcData::new(vec![1.0; rows * cols], rows, times.clone()).unwrap();
        let b = StcData::new(vec![1.0; (rows + extra) * cols], rows + extra, times).unwrap();
        let metric = Metric::ALL[metric_idx];
        let is_shape_mismatch = matches!(
            evaluate_metric(&a, &b, metric, None),
            Err(Error::ShapeMismatch { .. })
        );
        prop_assert!(is_shape_mismatch);
    }
}
