//! Error types for confidence-sequence construction
//!
//! The threshold functions themselves are total over `f64` and signal
//! degenerate inputs through sentinel values; this error type serves the
//! validated entry points (startup verification, sequence construction).

use thiserror::Error;

/// Error type for confidence-sequence operations
#[derive(Error, Debug)]
pub enum Error {
    /// `log_eps` must be the natural log of a probability, hence <= 0
    #[error("Invalid log_eps {log_eps}: must be <= 0 (was a probability passed without taking its log?)")]
    InvalidLogEps { log_eps: f64 },

    /// False-positive rate outside (0, 1)
    #[error("Invalid false-positive rate {eps}: must be in (0, 1)")]
    InvalidRate { eps: f64 },

    /// The compile-time constant table failed its bit-level self-check
    #[error("Constant self-check failed: mismatch bitmask {mask:#05b}")]
    CorruptConstants { mask: u32 },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common validation patterns

impl Error {
    /// Check that `log_eps` is a usable log-probability
    pub fn check_log_eps(log_eps: f64) -> Result<()> {
        // NaN fails the comparison and is rejected too.
        if !(log_eps <= 0.0) {
            return Err(Error::InvalidLogEps { log_eps });
        }
        Ok(())
    }

    /// Check that a false-positive rate is a probability strictly inside (0, 1)
    pub fn check_rate(eps: f64) -> Result<()> {
        if !(eps > 0.0 && eps < 1.0) {
            return Err(Error::InvalidRate { eps });
        }
        Ok(())
    }
}
