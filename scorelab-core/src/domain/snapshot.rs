//! IndicatorSnapshot — the per-bar indicator bundle consumed by the scorer.
//!
//! Fields use `f64::NAN` for "not yet available": every indicator emits NaN
//! during its warm-up window, and downstream consumers must treat NaN as
//! missing data, never as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable bundle of indicator values for one bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub adx: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub volume: f64,
    pub avg_volume: f64,
    pub atr: f64,
}

impl IndicatorSnapshot {
    /// True when the trend inputs (both EMAs and ADX) are all defined.
    pub fn has_trend_inputs(&self) -> bool {
        !self.ema_fast.is_nan() && !self.ema_slow.is_nan() && !self.adx.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(ema_fast: f64, ema_slow: f64, adx: f64) -> IndicatorSnapshot {
        IndicatorSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ema_fast,
            ema_slow,
            adx,
            rsi: 50.0,
            macd: 0.0,
            macd_signal: 0.0,
            volume: 1000.0,
            avg_volume: 1000.0,
            atr: 1.0,
        }
    }

    #[test]
    fn trend_inputs_complete() {
        assert!(snapshot_with(101.0, 100.0, 20.0).has_trend_inputs());
    }

    #[test]
    fn trend_inputs_missing_during_warmup() {
        assert!(!snapshot_with(f64::NAN, 100.0, 20.0).has_trend_inputs());
        assert!(!snapshot_with(101.0, 100.0, f64::NAN).has_trend_inputs());
    }
}
