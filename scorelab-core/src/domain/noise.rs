//! NoiseAssessment — one bar's volatility-noise evaluation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-bar record produced by the noise evaluator.
///
/// `window_mean`/`window_std`/`z_score` are trailing-window statistics;
/// the `dynamic_*` thresholds are expanding-window 90th percentiles over the
/// entire ATR history up to and including this bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseAssessment {
    pub date: NaiveDate,
    pub latest_atr: f64,
    pub window_mean: f64,
    pub window_std: f64,
    pub z_score: f64,
    pub dynamic_std_threshold: f64,
    pub dynamic_zscore_threshold: f64,
    pub is_noise: bool,
}

impl NoiseAssessment {
    /// The not-yet-determined assessment returned before `window` observations exist.
    pub fn undetermined(date: NaiveDate) -> Self {
        Self {
            date,
            latest_atr: 0.0,
            window_mean: 0.0,
            window_std: 0.0,
            z_score: 0.0,
            dynamic_std_threshold: 0.0,
            dynamic_zscore_threshold: 0.0,
            is_noise: false,
        }
    }
}
