//! Confidence sequences for quantile ranks
//!
//! Converts the sum envelope of `martingale-cs-core` into anytime-valid
//! bounds on the rank of a distribution quantile among `n` sorted
//! observations: a symmetric slop and a tighter asymmetric pair for
//! quantiles away from the median.
//!
//! # Example
//!
//! ```rust
//! use martingale_cs_quantile::quantile_slop;
//!
//! // How far can the true 90th percentile's rank drift from 0.9 * n,
//! // checked after every observation, at 95% confidence?
//! let slop = quantile_slop(0.9, 10_000, 32, 0.05f64.ln());
//! assert!(slop.is_finite() && slop > 1.0);
//! ```

pub mod error;
pub mod slop;

// Re-export main types
pub use error::{Error, Result};
pub use slop::{quantile_slop, quantile_slop_hi, quantile_slop_lo};
