//! Indicator precompute — bar series in, per-bar snapshots out.
//!
//! All indicator series are computed once, before the bar loop, then sliced
//! into one `IndicatorSnapshot` per bar. No indicator is recomputed during
//! the loop, and no series value at bar t depends on bars after t.

use crate::domain::{Bar, IndicatorSnapshot};
use crate::indicators::{Adx, Atr, AvgVolume, Ema, Indicator, Macd, MacdLine, Rsi};
use crate::params::StrategyParams;

/// Compute every indicator series and assemble per-bar snapshots.
pub fn build_snapshots(bars: &[Bar], params: &StrategyParams) -> Vec<IndicatorSnapshot> {
    let ema_fast = Ema::new(params.ema_fast_period).compute(bars);
    let ema_slow = Ema::new(params.ema_slow_period).compute(bars);
    let adx = Adx::new(params.adx_period).compute(bars);
    let rsi = Rsi::new(params.rsi_period).compute(bars);
    let macd = Macd::new(
        params.ema_fast_period,
        params.ema_slow_period,
        params.macd_signal_period,
        MacdLine::Macd,
    )
    .compute(bars);
    let macd_signal = Macd::new(
        params.ema_fast_period,
        params.ema_slow_period,
        params.macd_signal_period,
        MacdLine::Signal,
    )
    .compute(bars);
    let avg_volume = AvgVolume::new(params.volume_period).compute(bars);
    let atr = Atr::new(params.atr_period).compute(bars);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| IndicatorSnapshot {
            date: bar.date,
            ema_fast: ema_fast[i],
            ema_slow: ema_slow[i],
            adx: adx[i],
            rsi: rsi[i],
            macd: macd[i],
            macd_signal: macd_signal[i],
            volume: bar.volume as f64,
            avg_volume: avg_volume[i],
            atr: atr[i],
        })
        .collect()
}

/// The longest warm-up across all configured indicators.
///
/// Bars before this index produce at least one NaN snapshot field; the
/// scorer and regime classifier degrade those to neutral.
pub fn max_lookback(params: &StrategyParams) -> usize {
    let macd_signal = Macd::new(
        params.ema_fast_period,
        params.ema_slow_period,
        params.macd_signal_period,
        MacdLine::Signal,
    );
    [
        Ema::new(params.ema_slow_period).lookback(),
        Adx::new(params.adx_period).lookback(),
        Rsi::new(params.rsi_period).lookback(),
        macd_signal.lookback(),
        AvgVolume::new(params.volume_period).lookback(),
        Atr::new(params.atr_period).lookback(),
        params.noise_window,
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    #[test]
    fn snapshots_align_with_bars() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let bars = make_bars(&closes);
        let params = StrategyParams::default();
        let snapshots = build_snapshots(&bars, &params);
        assert_eq!(snapshots.len(), bars.len());
        for (bar, snap) in bars.iter().zip(snapshots.iter()) {
            assert_eq!(bar.date, snap.date);
            assert_eq!(bar.volume as f64, snap.volume);
        }
    }

    #[test]
    fn warmup_fields_are_nan_then_defined() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64 * 0.2).collect();
        let bars = make_bars(&closes);
        let params = StrategyParams::default();
        let snapshots = build_snapshots(&bars, &params);
        let warmup = max_lookback(&params);

        assert!(snapshots[0].ema_slow.is_nan());
        assert!(snapshots[0].macd_signal.is_nan());
        // ATR is defined from the first bar (partial window).
        assert!(!snapshots[0].atr.is_nan());

        let ready = &snapshots[warmup];
        assert!(ready.has_trend_inputs());
        assert!(!ready.macd_signal.is_nan());
        assert!(!ready.avg_volume.is_nan());
    }

    #[test]
    fn default_max_lookback_is_macd_signal() {
        // slow EMA 26 + signal 9 - 2 = 33 dominates ADX's 27.
        assert_eq!(max_lookback(&StrategyParams::default()), 33);
    }
}
