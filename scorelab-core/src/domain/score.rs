//! ScoreBreakdown — one bar's composite score and its four factors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-bar scoring record produced by the composite scorer.
///
/// Immutable after creation. `total_score` is always the sum of the four
/// factor scores; the nominal range is about [-9, 9].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub date: NaiveDate,
    /// EMA spread + ADX confirmation, clamped to [-4, 4].
    pub trend_strength_score: f64,
    /// MACD histogram, clamped to [-2, 2].
    pub momentum_score: f64,
    /// RSI band score in {-2, -1, 0, 1, 2}.
    pub oscillator_score: f64,
    /// Volume-vs-average ratio, clamped to [-1, 1].
    pub volume_score: f64,
    pub total_score: f64,
    /// True when the trend inputs were still in warm-up and scored neutral.
    pub insufficient_data: bool,
}

impl ScoreBreakdown {
    /// A fully-neutral breakdown flagged as insufficient (warm-up bars).
    pub fn insufficient(date: NaiveDate) -> Self {
        Self {
            date,
            trend_strength_score: 0.0,
            momentum_score: 0.0,
            oscillator_score: 0.0,
            volume_score: 0.0,
            total_score: 0.0,
            insufficient_data: true,
        }
    }
}
