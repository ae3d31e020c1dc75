//! Conservative confidence sequences for running sums
//!
//! Closed-form Darling-Robbins envelopes for sums of bounded zero-mean
//! i.i.d. observations, safe to check after every new observation while
//! spending one overall false-positive budget, plus derived anytime-valid
//! confidence intervals for quantile ranks.
//!
//! The workspace splits the machinery into focused crates, re-exported
//! here:
//!
//! - [`directed_rounding`]: ULP stepping and conservatively rounded
//!   `ln`/`log2`/`sqrt`, the soundness layer under every formula
//! - `martingale-cs-core`: the threshold family and the verified constant
//!   table
//! - `martingale-cs-quantile`: quantile-rank slop
//!
//! Every returned width is a provable over-approximation of the exact
//! mathematical bound: floating-point and libm error can only make the
//! envelope wider, never tighter.
//!
//! # Example
//!
//! ```rust
//! use martingale_cs::{verify_constants, ConfidenceSequence};
//!
//! verify_constants().expect("constant table corrupted");
//!
//! // Compare two bounded metrics by accumulating per-pair differences
//! // rescaled into [-1, 1]; reject "same mean" if the sum escapes.
//! let cs = ConfidenceSequence::two_sided(0.05, 32).unwrap();
//! let mut sum = 0.0f64;
//! for n in 1..=1000u64 {
//!     sum += 0.001; // observed difference for this pair
//!     assert!(!cs.exceeds(n, sum.abs()));
//! }
//! ```

pub mod sequence;

// Re-export workspace crates
pub use directed_rounding;

pub use martingale_cs_core::{
    check_constants, threshold, threshold_range, threshold_span, verify_constants, Error, Result,
    EQ, LE,
};
pub use martingale_cs_quantile::{
    quantile_slop, quantile_slop_hi, quantile_slop_lo, Error as QuantileError,
};
pub use sequence::ConfidenceSequence;
