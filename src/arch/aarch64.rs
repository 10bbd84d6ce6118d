//! aarch64 SIMD reductions using NEON.
//!
//! NEON is always available on aarch64, so no runtime detection is needed.
//! `target_feature` is still used for consistency with x86_64.

use std::arch::aarch64::{
    float64x2_t, vaddq_f64, vaddvq_f64, vdupq_n_f64, vfmaq_f64, vld1q_f64, vsubq_f64,
};

/// NEON dot product with 4-way unrolling (8 doubles per iteration).
///
/// # Safety
///
/// NEON is always available on aarch64; the annotation is kept for
/// consistency with the x86_64 kernels.
#[target_feature(enable = "neon")]
pub unsafe fn dot_neon(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_8 = n / 8;
    let mut sum0: float64x2_t = vdupq_n_f64(0.0);
    let mut sum1: float64x2_t = vdupq_n_f64(0.0);
    let mut sum2: float64x2_t = vdupq_n_f64(0.0);
    let mut sum3: float64x2_t = vdupq_n_f64(0.0);

    for i in 0..chunks_8 {
        let base = i * 8;
        sum0 = vfmaq_f64(sum0, vld1q_f64(a_ptr.add(base)), vld1q_f64(b_ptr.add(base)));
        sum1 = vfmaq_f64(
            sum1,
            vld1q_f64(a_ptr.add(base + 2)),
            vld1q_f64(b_ptr.add(base + 2)),
        );
        sum2 = vfmaq_f64(
            sum2,
            vld1q_f64(a_ptr.add(base + 4)),
            vld1q_f64(b_ptr.add(base + 4)),
        );
        sum3 = vfmaq_f64(
            sum3,
            vld1q_f64(a_ptr.add(base + 6)),
            vld1q_f64(b_ptr.add(base + 6)),
        );
    }

    let sum_all = vaddq_f64(vaddq_f64(sum0, sum1), vaddq_f64(sum2, sum3));
    let mut result = vaddvq_f64(sum_all);

    // Scalar tail
    for i in chunks_8 * 8..n {
        result += *a.get_unchecked(i) * *b.get_unchecked(i);
    }

    result
}

/// NEON sum of squared differences, `Σ(a[i] - b[i])²`.
///
/// # Safety
///
/// See [`dot_neon`].
#[target_feature(enable = "neon")]
pub unsafe fn sq_diff_sum_neon(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_4 = n / 4;
    let mut sum0: float64x2_t = vdupq_n_f64(0.0);
    let mut sum1: float64x2_t = vdupq_n_f64(0.0);

    for i in 0..chunks_4 {
        let base = i * 4;
        let d0 = vsubq_f64(vld1q_f64(a_ptr.add(base)), vld1q_f64(b_ptr.add(base)));
        let d1 = vsubq_f64(
            vld1q_f64(a_ptr.add(base + 2)),
            vld1q_f64(b_ptr.add(base + 2)),
        );
        sum0 = vfmaq_f64(sum0, d0, d0);
        sum1 = vfmaq_f64(sum1, d1, d1);
    }

    let mut result = vaddvq_f64(vaddq_f64(sum0, sum1));

    for i in chunks_4 * 4..n {
        let d = *a.get_unchecked(i) - *b.get_unchecked(i);
        result += d * d;
    }

    result
}
