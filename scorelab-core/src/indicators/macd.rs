//! MACD — fast EMA minus slow EMA, plus its signal line.
//!
//! macd[t] = ema_fast(close)[t] - ema_slow(close)[t]
//! signal[t] = ema_signal(macd)[t]
//!
//! A two-series indicator exposed as separate named instances per line,
//! selected by `MacdLine`, keeping the single-series `Indicator` trait
//! unchanged. Lookback: slow - 1 for the MACD line, slow + signal - 2 for
//! the signal line.

use super::ema::ema_of_series;
use super::Indicator;
use crate::domain::Bar;

/// Which MACD output series an instance computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdLine {
    Macd,
    Signal,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
    line: MacdLine,
    name: String,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize, line: MacdLine) -> Self {
        assert!(fast >= 1 && slow >= 1 && signal >= 1, "periods must be >= 1");
        assert!(fast < slow, "fast period must be shorter than slow");
        let suffix = match line {
            MacdLine::Macd => "macd",
            MacdLine::Signal => "signal",
        };
        Self {
            fast,
            slow,
            signal,
            line,
            name: format!("macd_{fast}_{slow}_{signal}_{suffix}"),
        }
    }

    /// The conventional 12/26/9 parameterization.
    pub fn standard(line: MacdLine) -> Self {
        Self::new(12, 26, 9, line)
    }

    fn macd_series(&self, bars: &[Bar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let fast = ema_of_series(&closes, self.fast);
        let slow = ema_of_series(&closes, self.slow);
        fast.iter()
            .zip(slow.iter())
            .map(|(&f, &s)| {
                if f.is_nan() || s.is_nan() {
                    f64::NAN
                } else {
                    f - s
                }
            })
            .collect()
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        match self.line {
            MacdLine::Macd => self.slow - 1,
            MacdLine::Signal => self.slow + self.signal - 2,
        }
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let macd = self.macd_series(bars);
        match self.line {
            MacdLine::Macd => macd,
            MacdLine::Signal => ema_of_series(&macd, self.signal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn macd_warmup_matches_slow_ema() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let out = Macd::new(3, 6, 4, MacdLine::Macd).compute(&bars);
        for v in out.iter().take(5) {
            assert!(v.is_nan());
        }
        assert!(!out[5].is_nan());
    }

    #[test]
    fn signal_lags_macd_by_its_period() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let macd = Macd::new(3, 6, 4, MacdLine::Macd).compute(&bars);
        let signal = Macd::new(3, 6, 4, MacdLine::Signal).compute(&bars);
        // MACD first valid at 5, signal needs 4 MACD values -> first valid at 8.
        assert!(!macd[5].is_nan());
        assert!(signal[7].is_nan());
        assert!(!signal[8].is_nan());
    }

    #[test]
    fn constant_series_macd_is_zero() {
        let bars = make_bars(&[75.0; 20]);
        let out = Macd::new(3, 6, 4, MacdLine::Macd).compute(&bars);
        for v in out.iter().filter(|v| !v.is_nan()) {
            assert_approx(*v, 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn standard_lookbacks() {
        assert_eq!(Macd::standard(MacdLine::Macd).lookback(), 25);
        assert_eq!(Macd::standard(MacdLine::Signal).lookback(), 33);
    }
}
