//! Core Darling-Robbins confidence-sequence thresholds
//!
//! This crate computes conservative, closed-form envelopes for running sums
//! of bounded zero-mean i.i.d. observations. The envelope may be checked
//! after *every* new observation while spending a single overall
//! false-positive budget `exp(log_eps)`, because it bounds the excursions of
//! the underlying martingale uniformly over time (a law-of-the-iterated-
//! logarithm bound, after Darling & Robbins 1967).
//!
//! Everything is a pure function over scalars; the only process-wide state
//! is a read-only constant table whose compilation can be verified at
//! startup with [`verify_constants`].
//!
//! # Example
//!
//! ```rust
//! use martingale_cs_core::{threshold, verify_constants, EQ};
//!
//! verify_constants().expect("constant table corrupted by the toolchain");
//!
//! // Two-sided 95% envelope, first checked at 32 observations.
//! let log_eps = 0.05f64.ln() + EQ;
//! assert!(threshold(10, 32, log_eps).is_infinite());
//! let width = threshold(1000, 32, log_eps);
//! assert!(width.is_finite() && width > 0.0);
//! ```

pub mod constants;
pub mod error;
pub mod threshold;

// Re-export main types
pub use constants::{check_constants, verify_constants, EQ, LE};
pub use error::{Error, Result};
pub use threshold::{threshold, threshold_range, threshold_span};
