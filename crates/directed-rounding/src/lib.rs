//! Directed rounding for IEEE-754 doubles
//!
//! This crate provides the numerical-soundness layer used by the
//! confidence-sequence formulas: a monotonic bit-encoding of `f64` that
//! supports stepping by whole ULPs in either direction, and "safe" versions
//! of `ln`, `log2` and `sqrt` whose results are guaranteed over- or
//! under-approximations of the true mathematical value.
//!
//! The guarantee we care about is directional, not tight: a caller that
//! composes these primitives and rounds every intermediate step in the same
//! direction obtains a bound that can only err on the conservative side,
//! regardless of how the platform's libm rounds internally.
//!
//! # Example
//!
//! ```rust
//! use directed_rounding::{log_up, next, prev, sqrt_up};
//!
//! // Guaranteed upper bounds on the true values.
//! assert!(log_up(10.0) > 10f64.ln());
//! assert!(sqrt_up(2.0) > std::f64::consts::SQRT_2);
//!
//! // Adjacent representable values.
//! assert_eq!(prev(next(1.5)), 1.5);
//! ```

/// Assumed worst-case error of the platform `ln`/`log2`, in ULPs.
///
/// glibc documents < 3 ULPs for these functions; 4 leaves headroom for
/// other libms.
pub const LIBM_ERROR_ULPS: u64 = 4;

/// Maps a double to an unsigned key whose two's-complement ordering matches
/// the ordering of the doubles.
///
/// The raw IEEE-754 bit pattern is sign-magnitude: negative values order
/// backwards when compared as integers. Flipping every bit except the sign
/// bit for negative inputs fixes that, and makes `+0.0` and `-0.0` adjacent
/// keys, so incrementing the key walks the whole real line one representable
/// value at a time, across zero included.
///
/// Branch-free; never passed a NaN by the callers in this workspace.
#[inline]
pub fn float_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    // All-ones when the sign bit is set, all-zeros otherwise.
    let mask = ((bits as i64) >> 63) as u64;
    bits ^ (mask >> 1)
}

/// Inverse of [`float_bits`].
#[inline]
pub fn bits_float(bits: u64) -> f64 {
    let mask = ((bits as i64) >> 63) as u64;
    f64::from_bits(bits ^ (mask >> 1))
}

/// Returns the value `ulps` representable steps above `x`.
///
/// Infinities saturate: stepping up from `+inf` stays at `+inf` (and
/// symmetrically for `-inf`), so a `+inf` sentinel survives any chain of
/// conservative adjustments instead of decaying into a NaN bit pattern.
#[inline]
pub fn next_k(x: f64, ulps: u64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    bits_float(float_bits(x).wrapping_add(ulps))
}

/// Returns the value `ulps` representable steps below `x`.
///
/// Saturates at infinities like [`next_k`].
#[inline]
pub fn prev_k(x: f64, ulps: u64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    bits_float(float_bits(x).wrapping_sub(ulps))
}

/// The adjacent representable value above `x`.
#[inline]
pub fn next(x: f64) -> f64 {
    next_k(x, 1)
}

/// The adjacent representable value below `x`.
#[inline]
pub fn prev(x: f64) -> f64 {
    prev_k(x, 1)
}

/// Upper bound on the natural log of `x`, for finite `x > 0`.
///
/// The libm result is pushed [`LIBM_ERROR_ULPS`] steps up, past any
/// rounding error the library may have committed in either direction.
#[inline]
pub fn log_up(x: f64) -> f64 {
    next_k(x.ln(), LIBM_ERROR_ULPS)
}

/// Lower bound on the base-2 log of `x`, for finite `x > 0`.
#[inline]
pub fn log2_down(x: f64) -> f64 {
    prev_k(x.log2(), LIBM_ERROR_ULPS)
}

/// Upper bound on the square root of `x`, for finite `x >= 0`.
///
/// IEEE-754 requires `sqrt` to be correctly rounded, so one ULP of
/// headroom suffices.
#[inline]
pub fn sqrt_up(x: f64) -> f64 {
    next(x.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encoding_round_trip() {
        for &x in &[0.0, -0.0, 1.0, -1.0, 1e-300, -1e-300, f64::MAX, f64::MIN] {
            assert_eq!(bits_float(float_bits(x)).to_bits(), x.to_bits());
        }
    }

    #[test]
    fn test_adjacency() {
        assert_eq!(next(1.0), 1.0 + f64::EPSILON);
        assert_eq!(prev(1.0 + f64::EPSILON), 1.0);
        assert_eq!(next(0.0), f64::from_bits(1)); // smallest subnormal
        assert!(prev(prev(0.0)) < 0.0);
        assert_eq!(next(prev(0.0)), 0.0);
    }

    #[test]
    fn test_crossing_zero() {
        // -0.0 and +0.0 are adjacent keys; walking up from below zero
        // reaches positive values without skipping anything.
        let just_below = -f64::from_bits(1);
        assert_eq!(next(next(next(just_below))), f64::from_bits(1));
    }

    #[test]
    fn test_saturation_at_infinity() {
        assert_eq!(next(f64::INFINITY), f64::INFINITY);
        assert_eq!(next_k(f64::INFINITY, 10), f64::INFINITY);
        assert_eq!(prev(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(next(f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_directed_transcendentals() {
        for &x in &[0.5, 1.0, 2.0, 10.0, 1e6, 1e300] {
            assert!(log_up(x) > x.ln());
            assert!(log2_down(x) < x.log2());
            assert!(sqrt_up(x) > x.sqrt());
        }
        // The compensation is small: 4 ULPs, not a relative fudge factor.
        assert!((log_up(10.0) - 10f64.ln()).abs() < 1e-14);
    }

    proptest! {
        #[test]
        fn prop_encoding_is_monotonic(a in -1e300f64..1e300, b in -1e300f64..1e300) {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assume!(lo < hi);
            prop_assert!((float_bits(lo) as i64) < (float_bits(hi) as i64));
        }

        #[test]
        fn prop_next_prev_inverse(x in -1e300f64..1e300) {
            prop_assert_eq!(prev(next(x)).to_bits(), x.to_bits());
            prop_assert_eq!(next(prev(x)).to_bits(), x.to_bits());
        }

        #[test]
        fn prop_step_width_is_exact(x in -1e300f64..1e300, k in 1u64..64) {
            let stepped = next_k(x, k);
            prop_assert!(stepped > x);
            prop_assert_eq!(float_bits(stepped).wrapping_sub(float_bits(x)), k);
        }
    }
}
