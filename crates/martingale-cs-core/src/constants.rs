//! Process-wide constants and their bit-level self-check
//!
//! The soundness argument leans on a handful of pre-rounded literals. A
//! toolchain that re-rounds or otherwise mangles one of them would silently
//! void the conservatism guarantee, so we pin each literal to its expected
//! IEEE-754 bit pattern and let callers verify the table at startup.

use crate::error::{Error, Result};
use tracing::debug;

/// Offset for a one-sided (less-or-equal) test: the base case, no adjustment.
pub const LE: f64 = 0.0;

/// Offset that turns a one-sided test into one half of a two-sided test.
///
/// `-ln 2`, rounded away from zero: adding this to `log_eps` halves the
/// false-positive budget, so the two half-intervals together still spend at
/// most `exp(log_eps)`.
pub const EQ: f64 = -0.6931471805599454;

/// `-1/2 ln ln 2`, rounded up. Internal to the threshold formula.
pub(crate) const MINUS_HALF_LN_LN_2_UP: f64 = 0.1832564602908322;

// Expected raw (sign-magnitude) bit patterns, in self-check order.
const LE_BITS: u64 = 0;
const EQ_BITS: u64 = 0xBFE6_2E42_FEFA_39F0;
const MINUS_HALF_LN_LN_2_UP_BITS: u64 = 0x3FC7_74F2_9BDD_6BA0;

/// Compares each constant's memory representation against its expected bit
/// pattern.
///
/// Returns 0 when every constant compiled correctly. Otherwise the result is
/// a bitmask with bit *i* set for the *i*-th mismatching constant:
///
/// * bit 0: [`LE`]
/// * bit 1: [`EQ`]
/// * bit 2: the internal `-1/2 ln ln 2` constant
///
/// Raw `to_bits` comparison, not `==`: numeric equality could be fooled by
/// a NaN or by a value that merely rounds to the same decimal display.
pub fn check_constants() -> u32 {
    let table: [(f64, u64); 3] = [
        (LE, LE_BITS),
        (EQ, EQ_BITS),
        (MINUS_HALF_LN_LN_2_UP, MINUS_HALF_LN_LN_2_UP_BITS),
    ];

    let mut mask = 0;
    for (index, (value, expected)) in table.iter().enumerate() {
        if value.to_bits() != *expected {
            mask |= 1 << index;
        }
    }
    mask
}

/// Runs [`check_constants`] and converts a non-zero mask into an error.
///
/// Call once during initialization and treat a failure as fatal: every bound
/// produced afterwards would be built on corrupted constants.
pub fn verify_constants() -> Result<()> {
    let mask = check_constants();
    if mask != 0 {
        return Err(Error::CorruptConstants { mask });
    }
    debug!("constant self-check passed");
    Ok(())
}
