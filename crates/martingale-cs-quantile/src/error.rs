//! Error types for quantile-rank confidence sequences

use thiserror::Error;

/// Errors for quantile-rank interval construction
#[derive(Error, Debug)]
pub enum Error {
    /// Quantile outside [0, 1]
    #[error("Quantile {q} must be in [0, 1] (was a percentile passed without dividing by 100?)")]
    InvalidQuantile { q: f64 },

    /// Core threshold error
    #[error("Core threshold error: {0}")]
    Core(#[from] martingale_cs_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a quantile is a fraction in [0, 1]
    pub fn check_quantile(q: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&q) {
            return Err(Error::InvalidQuantile { q });
        }
        Ok(())
    }
}
