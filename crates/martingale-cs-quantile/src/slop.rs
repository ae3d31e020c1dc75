//! Rank slop for distribution quantiles
//!
//! The sum envelope converts into a confidence sequence for *where a
//! quantile sits among the sorted observations*. Derive a synthetic
//! variate from each observation: values below the target quantile
//! contribute one sign, values above the other, scaled so the expectation
//! is exactly zero. The envelope on that synthetic sum then bounds how far
//! the quantile's true rank can drift from `quantile * n`.
//!
//! With slop `s = quantile_slop(q, n, ...)`, the distribution quantile lies
//! between the sorted observations at indices `floor(q * n - s)` and
//! `ceil(q * n + s)`, for every `n >= min_count` simultaneously, with
//! probability `1 - exp(log_eps)`. Either index may fall outside `0..n`;
//! that simply means too few observations to bound that side yet.

use martingale_cs_core::{threshold_range, threshold_span, EQ};

/// Symmetric rank slop for `quantile` among `n` sorted observations.
///
/// The underlying sum test is two-sided, so the half-interval offset
/// [`EQ`] is folded into `log_eps` here; pass the plain `ln(eps)`.
///
/// At the boundaries `quantile <= 0` or `>= 1` the rank is pinned and the
/// slop degenerates to 1.
///
/// Debug builds assert `quantile` lies in [0, 1].
pub fn quantile_slop(quantile: f64, n: u64, min_count: u64, log_eps: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&quantile),
        "quantile is a fraction in [0, 1]; was a percentile passed without dividing by 100?"
    );

    if quantile <= 0.0 || quantile >= 1.0 {
        return 1.0;
    }

    // Darling and Robbins split observations into two cases, below or above
    // the quantile. Real data can land exactly *on* the quantile with
    // non-zero probability, contributing zero cost instead of either sign,
    // so the interval is stretched by one extra observation.
    //
    // Unit range: each observation landing on the unexpected side of the
    // quantile costs exactly one rank position.
    1.0 + threshold_span(n, min_count, 1.0, log_eps + EQ)
}

/// Upper half of an asymmetric rank interval for `quantile`.
///
/// With probability `1 - exp(log_eps)` the true quantile is at or below the
/// sorted observation at index `ceil(quantile * n + slop_hi)`, for every
/// `n` at once. Tighter than [`quantile_slop`] whenever `quantile != 0.5`,
/// equal at 0.5.
pub fn quantile_slop_hi(quantile: f64, n: u64, min_count: u64, log_eps: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&quantile),
        "quantile is a fraction in [0, 1]; was a percentile passed without dividing by 100?"
    );

    if quantile <= 0.0 {
        return 1.0;
    }

    if quantile >= 1.0 {
        return f64::INFINITY;
    }

    // For, e.g., quantile = 0.9, an observation below the quantile moves
    // the synthetic sum by quantile - 1 = -0.1, one above it by +0.9.
    1.0 + threshold_range(n, min_count, quantile - 1.0, quantile, log_eps + EQ)
}

/// Lower half of an asymmetric rank interval for `quantile`.
///
/// With probability `1 - exp(log_eps)` the true quantile is at or above the
/// sorted observation at index `floor(quantile * n + slop_lo)` (the slop is
/// negative). The mirror image of [`quantile_slop_hi`]: the synthetic
/// variate is negated, which swaps and negates the range endpoints.
pub fn quantile_slop_lo(quantile: f64, n: u64, min_count: u64, log_eps: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&quantile),
        "quantile is a fraction in [0, 1]; was a percentile passed without dividing by 100?"
    );

    if quantile <= 0.0 {
        return f64::NEG_INFINITY;
    }

    if quantile >= 1.0 {
        return -1.0;
    }

    -1.0 - threshold_range(n, min_count, -quantile, 1.0 - quantile, log_eps + EQ)
}
