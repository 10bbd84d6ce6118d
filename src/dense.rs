//! Flat `f64` reductions behind the metrics.
//!
//! Source estimates are compared as flattened row-major buffers, so every
//! metric reduces to one of a handful of slice operations:
//!
//! | Function | Formula |
//! |----------|---------|
//! | [`dot`] | `Σ a[i]·b[i]` (zero-lag cross-correlation) |
//! | [`norm`] | `sqrt(Σ v[i]²)` (Frobenius norm of the matrix) |
//! | [`sq_diff_sum`] | `Σ (a[i] - b[i])²` |
//! | [`rms_diff`] | `sqrt(sq_diff_sum / n)` |
//! | [`cosine`] | `dot / (norm(a)·norm(b))` |
//!
//! With the `simd` feature, `dot` and `sq_diff_sum` dispatch at runtime:
//! AVX2+FMA on x86_64, NEON on aarch64, portable code otherwise.

#[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
use crate::arch;
#[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
use crate::MIN_DIM_SIMD;

/// Dot product of two slices: `Σ(a[i] * b[i])`.
///
/// Returns 0.0 for empty slices.
///
/// # Debug Assertions
///
/// In debug builds, panics if lengths differ. In release builds,
/// mismatched lengths silently use the shorter length.
///
/// # Example
///
/// ```rust
/// use stcmetrics::dense::dot;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot(&a, &b), 32.0);
/// ```
#[inline]
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "dot: dimension mismatch ({} vs {})",
        a.len(),
        b.len()
    );

    #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
    let n = a.len().min(b.len());

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if n >= MIN_DIM_SIMD && is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
        {
            // SAFETY: AVX2 and FMA verified via runtime detection.
            return unsafe { arch::x86_64::dot_avx2(a, b) };
        }
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    {
        if n >= MIN_DIM_SIMD {
            // SAFETY: NEON is always available on aarch64.
            return unsafe { arch::aarch64::dot_neon(a, b) };
        }
    }

    #[allow(unreachable_code)]
    dot_portable(a, b)
}

/// Portable (non-SIMD) dot product.
#[inline]
#[must_use]
pub fn dot_portable(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a flat buffer: `sqrt(Σ(v[i]²))`.
///
/// Applied to a flattened matrix this is the Frobenius norm.
///
/// ```rust
/// use stcmetrics::dense::norm;
///
/// assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Sum of squared element-wise differences: `Σ(a[i] - b[i])²`.
#[inline]
#[must_use]
pub fn sq_diff_sum(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "sq_diff_sum: dimension mismatch");

    #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
    let n = a.len().min(b.len());

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if n >= MIN_DIM_SIMD && is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
        {
            // SAFETY: AVX2 and FMA verified via runtime detection.
            return unsafe { arch::x86_64::sq_diff_sum_avx2(a, b) };
        }
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    {
        if n >= MIN_DIM_SIMD {
            // SAFETY: NEON is always available on aarch64.
            return unsafe { arch::aarch64::sq_diff_sum_neon(a, b) };
        }
    }

    #[allow(unreachable_code)]
    sq_diff_sum_portable(a, b)
}

/// Portable (non-SIMD) sum of squared differences.
#[inline]
#[must_use]
pub fn sq_diff_sum_portable(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Root mean square of the element-wise difference.
///
/// Returns `0.0` for empty input (there is no difference to average).
///
/// ```rust
/// use stcmetrics::dense::rms_diff;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(rms_diff(&a, &b), 0.0);
/// ```
#[inline]
#[must_use]
pub fn rms_diff(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    (sq_diff_sum(a, b) / n as f64).sqrt()
}

/// Normalized zero-lag correlation: `dot(a, b) / (norm(a) * norm(b))`.
///
/// # Zero Norm Handling
///
/// Returns `0.0` if either input has a norm of exactly zero. A silent-source
/// estimate has no direction, so it is treated as uncorrelated with
/// everything rather than producing NaN. Any nonzero norm, however small,
/// is divided through, so the result does not depend on the overall scale.
///
/// # Result Range
///
/// `[-1, 1]` for valid input; rounding can push slightly outside.
#[inline]
#[must_use]
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let d = dot(a, b);
    let na = norm(a);
    let nb = norm(b);
    if na == 0.0 || nb == 0.0 {
        log::warn!(
            "cosine on zero norm (|a| = {:e}, |b| = {:e}); treating as uncorrelated",
            na,
            nb
        );
        return 0.0;
    }
    // Divide one norm at a time so the product cannot overflow.
    d / na / nb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_basic() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(dot(&a, &b), 32.0);
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_dot_simd_threshold() {
        // Below and above the SIMD threshold; small integers are exact in f64
        let small: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let large: Vec<f64> = (0..64).map(|i| i as f64).collect();

        let expected_small: f64 = (0..8).map(|i| (i * i) as f64).sum();
        let expected_large: f64 = (0..64).map(|i| (i * i) as f64).sum();

        assert_eq!(dot(&small, &small), expected_small);
        assert_eq!(dot(&large, &large), expected_large);
    }

    #[test]
    fn test_norm() {
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sq_diff_sum_matches_portable() {
        let a: Vec<f64> = (0..100).map(|i| (i as f64 * 0.3).sin()).collect();
        let b: Vec<f64> = (0..100).map(|i| (i as f64 * 0.7).cos()).collect();
        let fast = sq_diff_sum(&a, &b);
        let slow = sq_diff_sum_portable(&a, &b);
        assert!((fast - slow).abs() < 1e-10 * slow.max(1.0));
    }

    #[test]
    fn test_rms_diff_known_value() {
        // Differences are all ±2, so the RMS is 2.
        let a = [1.0, 1.0, 1.0, 1.0];
        let b = [3.0, -1.0, 3.0, -1.0];
        assert!((rms_diff(&a, &b) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rms_diff_empty() {
        assert_eq!(rms_diff(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal() {
        assert!(cosine(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_parallel() {
        assert!((cosine(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_tiny_norm_is_not_degenerate() {
        let a = [1e-13, 2e-13, 3e-13, 4e-13];
        let b = [2e-13, 2e-13, 3e-13, 2e-13];
        let unscaled = cosine(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 3.0, 2.0]);
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
        assert!((cosine(&a, &b) - unscaled).abs() < 1e-12);
    }
}
