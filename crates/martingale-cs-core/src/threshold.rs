//! Darling-Robbins confidence-sequence thresholds
//!
//! The running sum of `n` i.i.d. zero-mean values whose moment generating
//! function satisfies `mgf(t) <= exp(t^2 / 2)` stays below the width
//! returned by [`threshold`] with probability at least `1 - exp(log_eps)`,
//! *simultaneously for every `n >= min_count`*. That uniformity is what
//! lets a caller compare the sum against the envelope after every single
//! observation without inflating the false-positive rate.
//!
//! See Darling & Robbins, "Confidence sequences for mean, variance, and
//! median" (1967). We take their `a = c = 2` parameterization.
//!
//! Every arithmetic step below is followed by a directed-rounding
//! adjustment so the composed result over-approximates the exact
//! real-valued formula. The direction of each step matters; the magnitude
//! (a ULP here and there) does not.

use directed_rounding::{log2_down, log_up, next, prev, sqrt_up};

use crate::constants::MINUS_HALF_LN_LN_2_UP;

/// Fewest observations at which any interval of the family is meaningful.
/// Darling and Robbins's proof needs `m >= 2`.
const MIN_MEANINGFUL_COUNT: u64 = 2;

/// Over-approximates `log(A)`, the leading constant of the envelope.
///
/// With `Q_m = 1 / (lg m - 1/2)`, the proof needs `Q_m / A <= eps`, i.e.
/// `log(A) >= log(Q_m) - log(eps)`. Rounding `lg m` down rounds `Q_m` up,
/// which keeps the computed `log(A)` an over-approximation; subtracting the
/// non-positive `log_eps` then grows it further as epsilon shrinks.
fn log_a_up(min_count: u64, log_eps: f64) -> f64 {
    // The u64 -> f64 conversion is exact for any min_count that fits in a
    // 53-bit significand; past that the value dwarfs the rounding anyway.
    let inv_q_m = prev(log2_down(min_count as f64) - 0.5);

    log_up(next(1.0 / inv_q_m)) - log_eps
}

/// Width of a `1 - exp(log_eps)`-confidence sequence for the sum of `n`
/// i.i.d. zero-mean values with `mgf(t) <= exp(t^2 / 2)` (e.g. any
/// zero-mean distribution over `[-1, 1]`, by Hoeffding's lemma).
///
/// Comparing the running sum against this width after every observation,
/// starting at `n = min_count`, risks a false positive with probability at
/// most `exp(log_eps)` over the entire infinite sequence of comparisons.
///
/// By default this is a one-sided test: the confidence interval for the sum
/// is `(-inf, threshold)`. Add [`EQ`](crate::EQ) to `log_eps` for the
/// half-interval of a two-sided test.
///
/// `min_count` is clamped up to 2. While `n < min_count` the return value
/// is `+inf`: no usable interval yet.
///
/// # Preconditions
///
/// `log_eps` must be non-positive: it is the natural log of a probability.
/// Debug builds assert this; release builds degenerate to `-inf` (reject
/// unconditionally, the conservative reading of "at least 100% false
/// positives allowed").
pub fn threshold(n: u64, min_count: u64, log_eps: f64) -> f64 {
    debug_assert!(
        log_eps <= 0.0,
        "positive log_eps means > 100% false positive rate; should it be negated?"
    );

    let min_count = min_count.max(MIN_MEANINGFUL_COUNT);

    if n < min_count {
        return f64::INFINITY;
    }

    if log_eps >= 0.0 {
        // >= 100% false positive rate: just always reject.
        return f64::NEG_INFINITY;
    }

    let log_a = log_a_up(min_count, log_eps);

    // n f_n(A)
    //   = sqrt(n) (3 / 2sqrt(2)) sqrt(4 log log n - 4 log log 2 + 2 log A)
    //   = 3 sqrt[n (1/2 log log n - 1/2 log log 2 + 1/4 log A)].
    let inner = next(next(0.5 * log_up(log_up(n as f64)) + MINUS_HALF_LN_LN_2_UP) + 0.25 * log_a);

    next(3.0 * sqrt_up(next(n as f64 * inner)))
}

/// [`threshold`] rescaled for values with a range of the form
/// `[lo, lo + span]`.
///
/// Hoeffding's lemma guarantees the mgf condition for any zero-mean
/// distribution with range width 2; an arbitrary width rescales the sum,
/// and thus the envelope, by `span / 2`.
pub fn threshold_span(n: u64, min_count: u64, span: f64, log_eps: f64) -> f64 {
    let scale = span / 2.0; // Division by 2 is exact.
    next(scale * threshold(n, min_count, log_eps))
}

/// One-sided envelope (`sum <= width`) for values with zero mean and range
/// `[lo, hi]`, `lo <= 0 <= hi`.
///
/// Tighter than [`threshold_span`] when `|lo| > |hi|`: a positive excursion
/// of the sum then requires many small upward moves, which is less likely
/// than one large one. The mirrored half-interval (`sum >= -width`) is
/// obtained by negating the variate and swapping `-hi` and `-lo`; at least
/// one of the two half-widths equals the symmetric one, the other is
/// narrower unless the range is symmetric.
///
/// Hoeffding's proof bounds the mgf by `exp[1/2 rho (1 - rho) span^2 t^2]`
/// with `rho = -lo / span`. The quadratic `rho (1 - rho)` caps at 1/4, the
/// symmetric case; when `rho > 1/2` the cap is attained at the range edge
/// instead and the usable scale shrinks to `sqrt(rho (1 - rho)) * span`.
pub fn threshold_range(n: u64, min_count: u64, lo: f64, hi: f64, log_eps: f64) -> f64 {
    // A range entirely on one side of zero only averages to zero when every
    // value is exactly zero, so the sum can never leave it.
    if lo >= 0.0 || hi <= 0.0 {
        return 0.0;
    }

    let span = next(hi - lo);
    let rho = prev(-lo / span);
    let scale = if rho <= 0.5 {
        // No asymmetric advantage; same scale as threshold_span.
        span / 2.0
    } else {
        next(sqrt_up(rho * next(1.0 - rho)) * span)
    };

    next(scale * threshold(n, min_count, log_eps))
}
