//! Relative Strength Index (RSI), rolling-mean variant.
//!
//! Gains and losses from close-to-close deltas, each averaged over a plain
//! rolling window (not Wilder smoothing). RSI = 100 - 100 / (1 + RS),
//! RS = avg_gain / avg_loss. Lookback: period (the delta series starts at
//! index 1).

use super::{rolling_mean, Indicator};
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut gains = vec![f64::NAN; n];
        let mut losses = vec![f64::NAN; n];
        for i in 1..n {
            let delta = bars[i].close - bars[i - 1].close;
            if delta.is_nan() {
                continue;
            }
            gains[i] = delta.max(0.0);
            losses[i] = (-delta).max(0.0);
        }

        let avg_gain = rolling_mean(&gains, self.period);
        let avg_loss = rolling_mean(&losses, self.period);

        avg_gain
            .iter()
            .zip(avg_loss.iter())
            .map(|(&g, &l)| {
                if g.is_nan() || l.is_nan() {
                    return f64::NAN;
                }
                // IEEE division covers the degenerate windows: all-gain gives
                // rs = inf -> rsi = 100; a perfectly flat window gives 0/0 =
                // NaN, which stays missing rather than becoming a fake level.
                let rs = g / l;
                100.0 - 100.0 / (1.0 + rs)
            })
            .collect()
    }
}
