//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1]
//! Seed: EMA[period-1] = SMA of first `period` values.

/// Compute an EMA over a value series. NaN warm-up prefix of `period - 1`.
///
/// Leading NaNs in the input are skipped: the seed window starts at the
/// first finite value, so this composes with indicators that themselves
/// carry a warm-up prefix (the MACD signal line uses this).
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 {
        return result;
    }

    let start = match values.iter().position(|v| v.is_finite()) {
        Some(idx) => idx,
        None => return result,
    };
    if n - start < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` finite values
    let mut sum = 0.0;
    for &v in &values[start..start + period] {
        if v.is_nan() {
            return result;
        }
        sum += v;
    }
    let seed = sum / period as f64;
    result[start + period - 1] = seed;

    let mut prev = seed;
    for i in (start + period)..n {
        if values[i].is_nan() {
            // NaN taints everything after it
            for val in result.iter_mut().skip(i) {
                *val = f64::NAN;
            }
            return result;
        }
        let current = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = current;
        prev = current;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn ema_seed_is_sma() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&values, 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 2.0, 1e-12); // (1+2+3)/3
    }

    #[test]
    fn ema_recursion() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let result = ema(&values, 3);
        // alpha = 0.5; seed 2.0; next = 0.5*4 + 0.5*2 = 3.0
        assert_approx(result[3], 3.0, 1e-12);
    }

    #[test]
    fn ema_skips_leading_nans() {
        let values = [f64::NAN, f64::NAN, 1.0, 2.0, 3.0, 4.0];
        let result = ema(&values, 3);
        assert!(result[3].is_nan());
        assert_approx(result[4], 2.0, 1e-12);
        assert_approx(result[5], 3.0, 1e-12);
    }

    #[test]
    fn ema_short_series_all_nan() {
        let result = ema(&[1.0, 2.0], 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn ema_interior_nan_taints_tail() {
        let values = [1.0, 2.0, 3.0, f64::NAN, 5.0];
        let result = ema(&values, 2);
        assert!(!result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
    }
}
