//! Strategy parameters.
//!
//! Hand-set design constants, not calibrated values. Serializable so a run's
//! exact parameterization can be persisted next to its results; every field
//! defaults independently, so a TOML override file only names what it
//! changes.

use serde::{Deserialize, Serialize};

/// All tunables for one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Composite score at or above which a flat position enters.
    pub buy_threshold: f64,
    /// Composite score at or below which a long position trims.
    pub sell_threshold: f64,
    /// Fraction of available cash deployed on entry.
    pub buy_ratio: f64,
    /// Fraction of held shares sold on a weak-score trim.
    pub sell_ratio: f64,
    /// Full-exit floor: price / avg_entry at or below this stops out.
    pub stop_loss_ratio: f64,
    /// Full-exit ceiling: price / avg_entry at or above this takes profit.
    pub take_profit_ratio: f64,
    /// Trailing stop distance below the high-water mark (fraction).
    pub trail_pct: f64,

    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
    pub adx_period: usize,
    pub rsi_period: usize,
    pub macd_signal_period: usize,
    pub volume_period: usize,
    pub atr_period: usize,

    /// Trailing window for the noise evaluator's local z-score.
    pub noise_window: usize,
    /// EMA-spread band separating Sideways from Bull/Bear.
    pub direction_band: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            buy_threshold: 1.5,
            sell_threshold: -1.5,
            buy_ratio: 0.5,
            sell_ratio: 0.5,
            stop_loss_ratio: 0.93,
            take_profit_ratio: 1.15,
            trail_pct: 0.10,
            ema_fast_period: 12,
            ema_slow_period: 26,
            adx_period: 14,
            rsi_period: 14,
            macd_signal_period: 9,
            volume_period: 20,
            atr_period: 14,
            noise_window: 14,
            direction_band: 0.005,
        }
    }
}

impl StrategyParams {
    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), String> {
        if self.buy_threshold <= self.sell_threshold {
            return Err("buy_threshold must exceed sell_threshold".into());
        }
        if !(0.0..=1.0).contains(&self.buy_ratio) || !(0.0..=1.0).contains(&self.sell_ratio) {
            return Err("buy_ratio and sell_ratio must be in [0, 1]".into());
        }
        if !(0.0..1.0).contains(&self.stop_loss_ratio) {
            return Err("stop_loss_ratio must be in [0, 1)".into());
        }
        if self.take_profit_ratio <= 1.0 {
            return Err("take_profit_ratio must exceed 1.0".into());
        }
        if !(0.0..1.0).contains(&self.trail_pct) || self.trail_pct == 0.0 {
            return Err("trail_pct must be in (0, 1)".into());
        }
        if self.ema_fast_period >= self.ema_slow_period {
            return Err("ema_fast_period must be shorter than ema_slow_period".into());
        }
        if self.noise_window < 2 {
            return Err("noise_window must be >= 2".into());
        }
        Ok(())
    }
}
