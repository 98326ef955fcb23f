//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1],
//! alpha = 2 / (period + 1). Seed: SMA of the first `period` closes.
//! Lookback: period - 1.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        ema_of_series(&closes, self.period)
    }
}

/// Compute EMA values from a raw f64 slice.
///
/// Used by composed indicators (MACD signal line) that need EMA of an
/// arbitrary series. Leading NaNs are skipped; the seed window starts at the
/// first run of `period` consecutive valid values. A NaN after the seed
/// taints the remainder of the series.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period {
        return result;
    }

    let first_valid = match values.iter().position(|v| !v.is_nan()) {
        Some(i) => i,
        None => return result,
    };
    let seed_end = first_valid + period;
    if seed_end > n {
        return result;
    }

    let seed_window = &values[first_valid..seed_end];
    if seed_window.iter().any(|v| v.is_nan()) {
        return result;
    }
    let seed = seed_window.iter().sum::<f64>() / period as f64;
    result[seed_end - 1] = seed;

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = seed;
    for i in seed_end..n {
        if values[i].is_nan() {
            for val in result.iter_mut().skip(i) {
                *val = f64::NAN;
            }
            return result;
        }
        let ema = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = ema;
        prev = ema;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn ema_seed_is_sma() {
        let bars = make_bars(&[10.0, 20.0, 30.0, 40.0]);
        let ema = Ema::new(3);
        let out = ema.compute(&bars);
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        // Seed at index 2: mean(10, 20, 30) = 20
        assert_approx(out[2], 20.0, DEFAULT_EPSILON);
        // alpha = 0.5: 0.5*40 + 0.5*20 = 30
        assert_approx(out[3], 30.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_of_series_skips_leading_nans() {
        let values = [f64::NAN, f64::NAN, 10.0, 20.0, 30.0];
        let out = ema_of_series(&values, 2);
        assert!(out[0].is_nan());
        assert!(out[2].is_nan());
        // Seed at index 3: mean(10, 20) = 15
        assert_approx(out[3], 15.0, DEFAULT_EPSILON);
        // alpha = 2/3: (2/3)*30 + (1/3)*15 = 25
        assert_approx(out[4], 25.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_constant_series_is_constant() {
        let bars = make_bars(&[50.0; 10]);
        let out = Ema::new(4).compute(&bars);
        for v in out.iter().skip(3) {
            assert_approx(*v, 50.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn ema_lookback() {
        assert_eq!(Ema::new(12).lookback(), 11);
        assert_eq!(Ema::new(26).lookback(), 25);
    }
}
