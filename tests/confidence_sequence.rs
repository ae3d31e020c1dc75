//! Integration tests for the threshold family and quantile slop,
//! exercised through the facade crate exactly as an external caller would.

use approx::assert_abs_diff_eq;
use martingale_cs::directed_rounding::next;
use martingale_cs::{
    check_constants, quantile_slop, quantile_slop_hi, quantile_slop_lo, threshold,
    threshold_range, threshold_span, verify_constants, ConfidenceSequence, EQ, LE,
};

#[test]
fn constants_ok() {
    assert_eq!(check_constants(), 0);
    assert!(verify_constants().is_ok());
    assert_eq!(LE, 0.0);
    assert_eq!(EQ.to_bits(), 0xBFE6_2E42_FEFA_39F0);
}

// Darling and Robbins give an example with a = c = 2, m = 32, eps = 0.05:
// A = 80/9 and 2 f_n(A) = 3 sqrt[n (log log n + 1.457) / 2].
#[test]
fn golden() {
    let log_eps = 0.05f64.ln() + EQ;
    for n in 32..64u64 {
        let x = n as f64;
        let expected = 3.0 * (0.5 * x * (x.ln().ln() + 1.457)).sqrt();
        assert_abs_diff_eq!(threshold(n, 32, log_eps), expected, epsilon = 1e-2);
    }
}

// n < min_count -> infinite threshold.
#[test]
fn too_early() {
    assert_eq!(threshold(1, 10, -10.0), f64::INFINITY);
}

#[test]
fn default_min_count() {
    assert_eq!(threshold(1, 1, -10.0), f64::INFINITY);

    assert_eq!(threshold(1_000_000, 1, -2.0), threshold(1_000_000, 2, -2.0));
}

// Higher n -> higher absolute threshold, lower relative to n.
#[test]
fn monotonic_n() {
    assert!(threshold(1001, 10, -10.0) > threshold(1000, 10, -10.0));

    assert!(threshold(1001, 10, -10.0) / 1001.0 < threshold(1000, 10, -10.0) / 1000.0);
}

// Higher min count -> lower threshold.
#[test]
fn monotonic_min_count() {
    assert!(threshold(1000, 11, -10.0) < threshold(1000, 10, -10.0));
}

// Lower eps -> higher threshold.
#[test]
fn monotonic_eps() {
    assert!(threshold(1000, 10, -5.0) > threshold(1000, 10, -4.0));
}

// Span 2 is the canonical unscaled case, up to the span variant's one
// trailing conservative rounding step.
#[test]
fn span_round_trip() {
    for &(n, m, log_eps) in &[(100u64, 2u64, -1.0f64), (1000, 10, -5.0), (65_536, 32, -9.2)] {
        let t = threshold(n, m, log_eps);
        assert_eq!(threshold_span(n, m, 2.0, log_eps), next(t));
    }
}

#[test]
fn range_collapses_when_zero_mean_is_degenerate() {
    assert_eq!(threshold_range(1000, 10, 0.0, 1.0, -5.0), 0.0);
    assert_eq!(threshold_range(1000, 10, -1.0, 0.0, -5.0), 0.0);
    assert_eq!(threshold_range(1000, 10, 0.25, 1.0, -5.0), 0.0);
}

#[test]
fn range_rewards_skew() {
    // rho = 0.75: one-sided scale sqrt(0.1875) * 4 ~ 1.73 beats the
    // symmetric 2.
    let skewed = threshold_range(1000, 10, -3.0, 1.0, -5.0);
    let symmetric = threshold_span(1000, 10, 4.0, -5.0);
    assert!(skewed < symmetric);

    // The mirrored half-interval comes from negating the variate and
    // swapping endpoints; the skew advantage moves with it.
    let mirrored = threshold_range(1000, 10, -1.0, 3.0, -5.0);
    assert_abs_diff_eq!(mirrored, symmetric, epsilon = 1e-9);
}

// The current slop formula stretches the interval by one observation for
// probability mass sitting exactly on the quantile, then scales a
// unit-range variate, so interior quantiles all share one slop value.
#[test]
fn quantile_slop_interior() {
    let log_eps = 0.05f64.ln();
    let at_median = quantile_slop(0.5, 1000, 32, log_eps);
    assert_eq!(
        at_median,
        1.0 + threshold_span(1000, 32, 1.0, log_eps + EQ)
    );
    assert_eq!(quantile_slop(0.1, 1000, 32, log_eps), at_median);
    assert_eq!(quantile_slop(0.9, 1000, 32, log_eps), at_median);

    assert_abs_diff_eq!(
        at_median - 1.0,
        0.5 * threshold(1000, 32, log_eps + EQ),
        epsilon = 1e-9
    );
}

#[test]
fn quantile_slop_boundaries() {
    assert_eq!(quantile_slop(0.0, 1000, 32, -3.0), 1.0);
    assert_eq!(quantile_slop(1.0, 1000, 32, -3.0), 1.0);
    assert_eq!(quantile_slop_hi(0.0, 1000, 32, -3.0), 1.0);
    assert_eq!(quantile_slop_hi(1.0, 1000, 32, -3.0), f64::INFINITY);
    assert_eq!(quantile_slop_lo(0.0, 1000, 32, -3.0), f64::NEG_INFINITY);
    assert_eq!(quantile_slop_lo(1.0, 1000, 32, -3.0), -1.0);
}

#[test]
fn quantile_slop_mirror_symmetry() {
    let log_eps = 0.001f64.ln();
    for &q in &[0.5, 0.75, 0.9, 0.99] {
        let hi = quantile_slop_hi(q, 10_000, 3, log_eps);
        let lo = quantile_slop_lo(1.0 - q, 10_000, 3, log_eps);
        assert_eq!(hi, -lo);
    }
}

#[test]
fn sequence_type_matches_free_functions() {
    let cs = ConfidenceSequence::two_sided(0.05, 32).unwrap();
    let log_eps = 0.05f64.ln() + EQ;
    for n in [1u64, 31, 32, 1000, 1_000_000] {
        assert_eq!(cs.threshold(n), threshold(n, 32, log_eps));
    }

    let one_sided = ConfidenceSequence::one_sided(0.05, 32).unwrap();
    assert_eq!(
        one_sided.quantile_slop(0.9, 1000).unwrap(),
        quantile_slop(0.9, 1000, 32, 0.05f64.ln())
    );
}
