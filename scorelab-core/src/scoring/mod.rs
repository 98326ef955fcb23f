//! Composite scoring engine.
//!
//! Four weighted factors — trend strength (40%), MACD momentum (20%), RSI
//! oscillator (20%), volume (10%) — summed into a total score with a nominal
//! range of about [-9, 9]. The scorer is a pure function of the current
//! bar's snapshot: no history, no caching, no side effects.

pub mod momentum;
pub mod oscillator;
pub mod trend;
pub mod volume;

use crate::domain::{IndicatorSnapshot, ScoreBreakdown};

pub use momentum::momentum_score;
pub use oscillator::oscillator_score;
pub use trend::trend_strength_score;
pub use volume::volume_score;

/// Stateless composite scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer;

impl CompositeScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one bar's indicator bundle.
    ///
    /// Warm-up trend inputs score neutral and flag the breakdown as
    /// insufficient; the other factors degrade to zero individually.
    pub fn score(&self, snapshot: &IndicatorSnapshot) -> ScoreBreakdown {
        let (trend, insufficient) =
            match trend_strength_score(snapshot.ema_fast, snapshot.ema_slow, snapshot.adx) {
                Some(score) => (score, false),
                None => (0.0, true),
            };
        let momentum = momentum_score(snapshot.macd, snapshot.macd_signal);
        let oscillator = oscillator_score(snapshot.rsi);
        let volume = volume_score(snapshot.volume, snapshot.avg_volume);

        ScoreBreakdown {
            date: snapshot.date,
            trend_strength_score: trend,
            momentum_score: momentum,
            oscillator_score: oscillator,
            volume_score: volume,
            total_score: trend + momentum + oscillator + volume,
            insufficient_data: insufficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            ema_fast: 100.0,
            ema_slow: 100.0,
            adx: 20.0,
            rsi: 50.0,
            macd: 0.0,
            macd_signal: 0.0,
            volume: 1000.0,
            avg_volume: 1000.0,
            atr: 1.5,
        }
    }

    #[test]
    fn neutral_snapshot_scores_zero() {
        let b = CompositeScorer::new().score(&snapshot());
        assert!(b.total_score.abs() < 1e-12);
        assert!(!b.insufficient_data);
    }

    #[test]
    fn total_is_sum_of_factors() {
        let mut s = snapshot();
        s.ema_fast = 100.5;
        s.rsi = 25.0;
        s.macd = 0.05;
        s.volume = 1050.0;
        let b = CompositeScorer::new().score(&s);
        let sum = b.trend_strength_score + b.momentum_score + b.oscillator_score + b.volume_score;
        assert!((b.total_score - sum).abs() < 1e-12);
    }

    #[test]
    fn oversold_rsi_with_flat_trend() {
        // RSI 15 -> +2; zero spread with ADX 20 sits exactly at the midpoint
        // of the interpolation band -> trend term 0.
        let mut s = snapshot();
        s.rsi = 15.0;
        let b = CompositeScorer::new().score(&s);
        assert_eq!(b.oscillator_score, 2.0);
        assert!(b.trend_strength_score.abs() < 1e-12);
        assert!((b.total_score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn warmup_trend_flags_insufficient() {
        let mut s = snapshot();
        s.adx = f64::NAN;
        let b = CompositeScorer::new().score(&s);
        assert!(b.insufficient_data);
        assert_eq!(b.trend_strength_score, 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let s = snapshot();
        let scorer = CompositeScorer::new();
        let a = scorer.score(&s);
        let b = scorer.score(&s);
        assert_eq!(a.total_score, b.total_score);
    }
}
