//! Average Directional Index (ADX), rolling-mean variant.
//!
//! Directional movement uses raw high/low diffs (plus_dm = high[t]-high[t-1],
//! minus_dm = |low[t]-low[t-1]|), averaged over a plain rolling window rather
//! than Wilder smoothing. DI lines are scaled by a rolling-mean ATR, DX is
//! their normalized absolute spread, and ADX is the rolling mean of DX.
//! Lookback: 2 * period - 1 (one window for the DI lines, one for ADX).

use super::atr::true_range;
use super::{rolling_mean, Indicator};
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Adx {
    period: usize,
    name: String,
}

impl Adx {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ADX period must be >= 1");
        Self {
            period,
            name: format!("adx_{period}"),
        }
    }
}

impl Indicator for Adx {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        2 * self.period - 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut plus_dm = vec![f64::NAN; n];
        let mut minus_dm = vec![f64::NAN; n];
        for i in 1..n {
            plus_dm[i] = bars[i].high - bars[i - 1].high;
            minus_dm[i] = (bars[i].low - bars[i - 1].low).abs();
        }

        let mut tr = true_range(bars);
        // TR[0] has no previous close; align its warm-up with the DM series.
        if !tr.is_empty() {
            tr[0] = f64::NAN;
        }

        let atr = rolling_mean(&tr, self.period);
        let plus_avg = rolling_mean(&plus_dm, self.period);
        let minus_avg = rolling_mean(&minus_dm, self.period);

        let dx: Vec<f64> = (0..n)
            .map(|i| {
                let (a, p, m) = (atr[i], plus_avg[i], minus_avg[i]);
                if a.is_nan() || p.is_nan() || m.is_nan() {
                    return f64::NAN;
                }
                let plus_di = 100.0 * (p / a);
                let minus_di = 100.0 * (m / a);
                ((plus_di - minus_di).abs() / (plus_di + minus_di)) * 100.0
            })
            .collect();

        rolling_mean(&dx, self.period)
    }
}
