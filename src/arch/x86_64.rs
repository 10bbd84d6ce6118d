//! x86_64 SIMD reductions using AVX2 and FMA.
//!
//! These functions are unsafe and require runtime feature detection
//! before calling. The safe API handles this.
//!
//! | ISA | Width | Unroll | Doubles per iteration |
//! |-----|-------|--------|-----------------------|
//! | AVX2+FMA | 4 f64 | 4-way | 16 |

use std::arch::x86_64::{
    __m256d, _mm256_add_pd, _mm256_castpd256_pd128, _mm256_extractf128_pd, _mm256_fmadd_pd,
    _mm256_loadu_pd, _mm256_setzero_pd, _mm256_sub_pd, _mm_add_pd, _mm_add_sd, _mm_cvtsd_f64,
    _mm_unpackhi_pd,
};

/// Horizontal sum of the four lanes.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn hsum_pd(v: __m256d) -> f64 {
    let hi = _mm256_extractf128_pd(v, 1);
    let lo = _mm256_castpd256_pd128(v);
    let sum128 = _mm_add_pd(lo, hi);
    let sum64 = _mm_add_sd(sum128, _mm_unpackhi_pd(sum128, sum128));
    _mm_cvtsd_f64(sum64)
}

/// AVX2+FMA dot product with 4-way unrolling.
///
/// # Safety
///
/// Caller must verify `is_x86_feature_detected!("avx2")` and
/// `is_x86_feature_detected!("fma")` before calling.
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn dot_avx2(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_16 = n / 16;
    let mut sum0: __m256d = _mm256_setzero_pd();
    let mut sum1: __m256d = _mm256_setzero_pd();
    let mut sum2: __m256d = _mm256_setzero_pd();
    let mut sum3: __m256d = _mm256_setzero_pd();

    for i in 0..chunks_16 {
        let base = i * 16;
        sum0 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(base)),
            _mm256_loadu_pd(b_ptr.add(base)),
            sum0,
        );
        sum1 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(base + 4)),
            _mm256_loadu_pd(b_ptr.add(base + 4)),
            sum1,
        );
        sum2 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(base + 8)),
            _mm256_loadu_pd(b_ptr.add(base + 8)),
            sum2,
        );
        sum3 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(base + 12)),
            _mm256_loadu_pd(b_ptr.add(base + 12)),
            sum3,
        );
    }

    // Remaining 4-double chunks go into the first accumulator
    let remaining_start = chunks_16 * 16;
    let chunks_4 = (n - remaining_start) / 4;
    for i in 0..chunks_4 {
        let offset = remaining_start + i * 4;
        sum0 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(offset)),
            _mm256_loadu_pd(b_ptr.add(offset)),
            sum0,
        );
    }

    let sum_all = _mm256_add_pd(_mm256_add_pd(sum0, sum1), _mm256_add_pd(sum2, sum3));
    let mut result = hsum_pd(sum_all);

    // Scalar tail
    let tail_start = remaining_start + chunks_4 * 4;
    for i in tail_start..n {
        result += *a.get_unchecked(i) * *b.get_unchecked(i);
    }

    result
}

/// AVX2+FMA sum of squared differences, `Σ(a[i] - b[i])²`.
///
/// # Safety
///
/// Same requirements as [`dot_avx2`].
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn sq_diff_sum_avx2(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_8 = n / 8;
    let mut sum0: __m256d = _mm256_setzero_pd();
    let mut sum1: __m256d = _mm256_setzero_pd();

    for i in 0..chunks_8 {
        let base = i * 8;
        let d0 = _mm256_sub_pd(
            _mm256_loadu_pd(a_ptr.add(base)),
            _mm256_loadu_pd(b_ptr.add(base)),
        );
        let d1 = _mm256_sub_pd(
            _mm256_loadu_pd(a_ptr.add(base + 4)),
            _mm256_loadu_pd(b_ptr.add(base + 4)),
        );
        sum0 = _mm256_fmadd_pd(d0, d0, sum0);
        sum1 = _mm256_fmadd_pd(d1, d1, sum1);
    }

    let remaining_start = chunks_8 * 8;
    if n - remaining_start >= 4 {
        let d = _mm256_sub_pd(
            _mm256_loadu_pd(a_ptr.add(remaining_start)),
            _mm256_loadu_pd(b_ptr.add(remaining_start)),
        );
        sum0 = _mm256_fmadd_pd(d, d, sum0);
    }

    let mut result = hsum_pd(_mm256_add_pd(sum0, sum1));

    let tail_start = remaining_start + ((n - remaining_start) / 4) * 4;
    for i in tail_start..n {
        let d = *a.get_unchecked(i) - *b.get_unchecked(i);
        result += d * d;
    }

    result
}
