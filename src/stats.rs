//! Descriptive statistics over a slice of numbers.
//!
//! Aggregates never mutate their input and never return an error. Empty
//! input is not guarded: [`mean`], [`variance`] and [`std_dev`] return NaN
//! for it, and callers that can see empty data must check first.
//!
//! # Algorithms
//!
//! - **Sum**: plain left-to-right accumulation, so results are
//!   reproducible bit-for-bit for the same input order.
//! - **Variance**: two-pass population variance (denominator `n`).

/// Sums `data` in ascending index order.
///
/// # Examples
/// ```
/// use u_quant::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Arithmetic mean, `sum(data) / n`.
///
/// # Returns
/// NaN when `data` is empty (0 / 0).
///
/// # Examples
/// ```
/// use u_quant::stats::mean;
/// assert_eq!(mean(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 5.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    sum(data) / data.len() as f64
}

/// Population variance: `(1/n) Σ (xᵢ − x̄)²`.
///
/// Divides by `n`, not `n − 1`.
///
/// # Complexity
/// Time: O(n), two passes. Space: O(1)
///
/// # Returns
/// NaN when `data` is empty.
///
/// # Examples
/// ```
/// use u_quant::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&v), 4.0);
/// ```
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    let squares = data.iter().fold(0.0, |acc, &x| {
        let d = x - m;
        acc + d * d
    });
    squares / data.len() as f64
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Examples
/// ```
/// use u_quant::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(std_dev(&v), 2.0);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Smallest value in `data`.
///
/// Returns `+∞` for empty input. Any NaN element makes the result NaN.
///
/// # Examples
/// ```
/// use u_quant::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), 1.0);
/// assert_eq!(min(&[]), f64::INFINITY);
/// ```
pub fn min(data: &[f64]) -> f64 {
    data.iter().fold(f64::INFINITY, |acc, &x| {
        if x.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.min(x)
        }
    })
}

/// Largest value in `data`.
///
/// Returns `−∞` for empty input. Any NaN element makes the result NaN.
///
/// # Examples
/// ```
/// use u_quant::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), 5.0);
/// assert_eq!(max(&[]), f64::NEG_INFINITY);
/// ```
pub fn max(data: &[f64]) -> f64 {
    data.iter().fold(f64::NEG_INFINITY, |acc, &x| {
        if x.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(x)
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    // --- sum ---

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
    }

    #[test]
    fn test_sum_order_is_ascending_index() {
        // 1e16 + 1 + 1 loses both ones when added left to right
        assert_eq!(sum(&[1e16, 1.0, 1.0]), 1e16);
        assert_eq!(sum(&[1.0, 1.0, 1e16]), 1e16 + 2.0);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0.0);
    }

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&SAMPLE), 5.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_mean_nan_propagates() {
        assert!(mean(&[1.0, f64::NAN, 3.0]).is_nan());
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_population() {
        assert_eq!(variance(&SAMPLE), 4.0);
    }

    #[test]
    fn test_variance_constant() {
        assert_eq!(variance(&[5.0; 100]), 0.0);
    }

    #[test]
    fn test_variance_single() {
        assert_eq!(variance(&[3.0]), 0.0);
    }

    #[test]
    fn test_variance_empty_is_nan() {
        assert!(variance(&[]).is_nan());
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&SAMPLE), 2.0);
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn test_input_not_mutated() {
        let data = SAMPLE;
        let _ = (sum(&data), mean(&data), variance(&data), std_dev(&data));
        assert_eq!(data, SAMPLE);
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(min(&v), 1.0);
        assert_eq!(max(&v), 9.0);
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), f64::INFINITY);
        assert_eq!(max(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_min_max_nan() {
        assert!(min(&[1.0, f64::NAN, 0.0]).is_nan());
        assert!(max(&[f64::NAN, 2.0]).is_nan());
    }
}
