//! Scalar helpers: rounding, range tests, and linear remapping.
//!
//! Everything here is a pure function over `f64`. NaN inputs propagate
//! through the arithmetic unchanged; nothing returns an error.
//!
//! # Degenerate ranges
//!
//! [`normalise`] and [`scale`] treat equal bounds as a fixed policy rather
//! than dividing by zero:
//!
//! | Call | Equal bounds | Result |
//! |---|---|---|
//! | `normalise(x, a, b)` | `a == b` | `1.0` |
//! | `scale(x, from, to)` | `to.0 == to.1` | `to.1` |

use rand::Rng;

/// Absolute value, `|x|`.
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// `x` raised to the power `p`.
#[inline]
pub fn pow(x: f64, p: f64) -> f64 {
    x.powf(p)
}

/// Returns `true` if `x` is a usable number (finite, not NaN).
///
/// # Examples
/// ```
/// use u_quant::numeric::is_number;
/// assert!(is_number(3.5));
/// assert!(!is_number(f64::NAN));
/// assert!(!is_number(f64::INFINITY));
/// ```
#[inline]
pub fn is_number(x: f64) -> bool {
    x.is_finite()
}

/// Draws a uniform value in `[0, x)` from `rng`.
///
/// For negative `x` the interval flips to `(x, 0]`.
///
/// # Examples
/// ```
/// use u_quant::numeric::random;
/// use u_quant::random::create_rng;
/// let mut rng = create_rng(7);
/// let v = random(10.0, &mut rng);
/// assert!((0.0..10.0).contains(&v));
/// ```
pub fn random<R: Rng + ?Sized>(x: f64, rng: &mut R) -> f64 {
    rng.random::<f64>() * x
}

/// Inclusive range test, independent of bound order.
///
/// A NaN in any position makes the result `false`.
///
/// # Examples
/// ```
/// use u_quant::numeric::is_between;
/// assert!(is_between(5.0, 10.0, 0.0));
/// assert!(is_between(10.0, 0.0, 10.0));
/// assert!(!is_between(10.5, 0.0, 10.0));
/// ```
pub fn is_between(x: f64, a: f64, b: f64) -> bool {
    // f64::min/max would drop a NaN bound and widen the range to the other one
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let lo = a.min(b);
    let hi = a.max(b);
    lo <= x && x <= hi
}

/// Position of `x` within `[a, b]` as a fraction: `(x - a) / (b - a)`.
///
/// Returns exactly `1.0` when `a == b`, whatever `x` is.
///
/// # Examples
/// ```
/// use u_quant::numeric::normalise;
/// assert_eq!(normalise(5.0, 0.0, 10.0), 0.5);
/// assert_eq!(normalise(-3.0, 4.0, 4.0), 1.0);
/// ```
pub fn normalise(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        return 1.0;
    }
    (x - a) / (b - a)
}

/// Linearly remaps `x` from the interval `from` onto the interval `to`.
///
/// When `to` is degenerate (`to.0 == to.1`) the result is `to.1`. When
/// `from` is degenerate the phase is `1.0` (see [`normalise`]), so the
/// result is `to.1` as well.
///
/// # Examples
/// ```
/// use u_quant::numeric::scale;
/// assert_eq!(scale(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
/// assert_eq!(scale(5.0, (0.0, 10.0), (7.0, 7.0)), 7.0);
/// ```
pub fn scale(x: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let phase = normalise(x, from.0, from.1);
    if to.0 == to.1 {
        return to.1;
    }
    to.0 + phase * (to.1 - to.0)
}

/// Rounds `x` to `dp` decimal places.
///
/// Computed as `(x * 10^dp).round() / 10^dp`, which rounds half away from
/// zero on the *binary* value. Decimal literals that are not exactly
/// representable can land on the other side of the half:
///
/// ```
/// use u_quant::numeric::round;
/// assert_eq!(round(2.345, 1), 2.3);
/// assert_eq!(round(1.005, 2), 1.0); // 1.005 is stored as 1.00499999...
/// assert_eq!(round(-2.5, 0), -3.0);
/// assert_eq!(round(1234.0, -2), 1200.0);
/// ```
pub fn round(x: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (x * factor).round() / factor
}

/// [`round`] with zero decimal places.
#[inline]
pub fn round0(x: f64) -> f64 {
    round(x, 0)
}

/// Calls `f(i)` for `i` in `0..n`, in ascending order, and returns `n`.
///
/// Does nothing when `n <= 0`.
///
/// # Examples
/// ```
/// use u_quant::numeric::times;
/// let mut seen = Vec::new();
/// assert_eq!(times(3, |i| seen.push(i)), 3);
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
pub fn times<F: FnMut(i64)>(n: i64, mut f: F) -> i64 {
    for i in 0..n {
        f(i);
    }
    n
}

/// Method syntax for the scalar helpers on `f64`.
///
/// ```
/// use u_quant::numeric::NumberExt;
/// assert!(3.0_f64.is_between(5.0, 1.0));
/// assert_eq!(0.25_f64.scale((0.0, 1.0), (0.0, 8.0)), 2.0);
/// assert_eq!(1.23456_f64.round_dp(2), 1.23);
/// ```
pub trait NumberExt {
    /// See [`is_number`].
    fn is_number(self) -> bool;
    /// See [`is_between`].
    fn is_between(self, a: f64, b: f64) -> bool;
    /// See [`normalise`].
    fn normalise(self, a: f64, b: f64) -> f64;
    /// See [`scale`].
    fn scale(self, from: (f64, f64), to: (f64, f64)) -> f64;
    /// See [`round`].
    fn round_dp(self, dp: i32) -> f64;
}

impl NumberExt for f64 {
    fn is_number(self) -> bool {
        is_number(self)
    }

    fn is_between(self, a: f64, b: f64) -> bool {
        is_between(self, a, b)
    }

    fn normalise(self, a: f64, b: f64) -> f64 {
        normalise(self, a, b)
    }

    fn scale(self, from: (f64, f64), to: (f64, f64)) -> f64 {
        scale(self, from, to)
    }

    fn round_dp(self, dp: i32) -> f64 {
        round(self, dp)
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn bound() -> impl Strategy<Value = f64> {
        -1e6_f64..1e6
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn normalise_equal_bounds_is_one(x in bound(), a in bound()) {
            prop_assert_eq!(normalise(x, a, a), 1.0);
        }

        #[test]
        fn scale_equal_target_is_target(x in bound(), a0 in bound(), a1 in bound(), b in bound()) {
            prop_assert_eq!(scale(x, (a0, a1), (b, b)), b);
        }

        #[test]
        fn scale_round_trips(
            x in bound(),
            a0 in bound(), a1 in bound(),
            b0 in bound(), b1 in bound(),
        ) {
            prop_assume!((a1 - a0).abs() > 1.0 && (b1 - b0).abs() > 1.0);
            let there = scale(x, (a0, a1), (b0, b1));
            let back = scale(there, (b0, b1), (a0, a1));
            let tol = 1e-6 * x.abs().max(a0.abs()).max(a1.abs()).max(1.0);
            prop_assert!((back - x).abs() < tol, "x={} back={}", x, back);
        }

        #[test]
        fn is_between_symmetric(x in bound(), a in bound(), b in bound()) {
            prop_assert_eq!(is_between(x, a, b), is_between(x, b, a));
        }

        #[test]
        fn bounds_are_between(a in bound(), b in bound()) {
            prop_assert!(is_between(a, a, b));
            prop_assert!(is_between(b, a, b));
        }

        #[test]
        fn round_stays_close(x in bound(), dp in 0_i32..6) {
            let r = round(x, dp);
            prop_assert!((r - x).abs() <= 0.5 * 10f64.powi(-dp) + 1e-9 * x.abs().max(1.0));
        }
    }
}
