//! Validated configuration for a confidence sequence
//!
//! Binds `min_count` and `log_eps` once, behind constructors that reject
//! out-of-range rates, then delegates to the free functions. Useful when
//! the same test is applied observation after observation.

use martingale_cs_core::{threshold, threshold_range, threshold_span, Error, Result, EQ};
use martingale_cs_quantile::{
    quantile_slop, quantile_slop_hi, quantile_slop_lo, Error as QuantileError,
    Result as QuantileResult,
};

/// A confidence sequence with a fixed false-positive budget and warm-up
/// count.
///
/// Immutable and `Copy`: the sequence carries no running state, callers
/// keep their own sum and observation count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceSequence {
    min_count: u64,
    log_eps: f64,
}

impl ConfidenceSequence {
    /// One-sided sequence at false-positive rate `eps` in (0, 1): the sum is
    /// tested against `(-inf, threshold)` only.
    pub fn one_sided(eps: f64, min_count: u64) -> Result<Self> {
        Error::check_rate(eps)?;
        Ok(Self {
            min_count: min_count.max(2),
            log_eps: eps.ln(),
        })
    }

    /// Two-sided sequence at rate `eps`: the returned widths bound each half
    /// of `(-threshold, threshold)`, splitting the budget via [`EQ`].
    pub fn two_sided(eps: f64, min_count: u64) -> Result<Self> {
        Error::check_rate(eps)?;
        Ok(Self {
            min_count: min_count.max(2),
            log_eps: eps.ln() + EQ,
        })
    }

    /// Sequence from a pre-computed log rate (for callers composing their
    /// own offsets); `log_eps` must be non-positive.
    pub fn from_log_eps(log_eps: f64, min_count: u64) -> Result<Self> {
        Error::check_log_eps(log_eps)?;
        Ok(Self {
            min_count: min_count.max(2),
            log_eps,
        })
    }

    /// The warm-up count, after clamping to 2.
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// The log false-positive rate, including any two-sided offset.
    pub fn log_eps(&self) -> f64 {
        self.log_eps
    }

    /// Envelope width after `n` observations, for range-width-2 values.
    pub fn threshold(&self, n: u64) -> f64 {
        threshold(n, self.min_count, self.log_eps)
    }

    /// Envelope width for values with a range of width `span`.
    pub fn threshold_span(&self, n: u64, span: f64) -> f64 {
        threshold_span(n, self.min_count, span, self.log_eps)
    }

    /// One-sided envelope width for values with range `[lo, hi]`,
    /// `lo <= 0 <= hi`.
    pub fn threshold_range(&self, n: u64, lo: f64, hi: f64) -> f64 {
        threshold_range(n, self.min_count, lo, hi, self.log_eps)
    }

    /// True when `sum` escapes the envelope: reject the zero-mean null.
    ///
    /// Never fires while `n < min_count` (the envelope is infinite there).
    pub fn exceeds(&self, n: u64, sum: f64) -> bool {
        sum > self.threshold(n)
    }

    /// Symmetric rank slop for `quantile` after `n` observations.
    ///
    /// The slop functions fold their own two-sided offset into the rate, so
    /// build the sequence with [`one_sided`](Self::one_sided) for these.
    ///
    /// Unlike the free functions, which debug-assert, this entry point
    /// rejects a quantile outside [0, 1] with an error.
    pub fn quantile_slop(&self, quantile: f64, n: u64) -> QuantileResult<f64> {
        QuantileError::check_quantile(quantile)?;
        Ok(quantile_slop(quantile, n, self.min_count, self.log_eps))
    }

    /// Upper half of the asymmetric rank interval for `quantile`.
    pub fn quantile_slop_hi(&self, quantile: f64, n: u64) -> QuantileResult<f64> {
        QuantileError::check_quantile(quantile)?;
        Ok(quantile_slop_hi(quantile, n, self.min_count, self.log_eps))
    }

    /// Lower half of the asymmetric rank interval for `quantile`.
    pub fn quantile_slop_lo(&self, quantile: f64, n: u64) -> QuantileResult<f64> {
        QuantileError::check_quantile(quantile)?;
        Ok(quantile_slop_lo(quantile, n, self.min_count, self.log_eps))
    }
}
