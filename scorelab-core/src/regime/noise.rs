//! Noise evaluator — flags bars whose volatility range is abnormal.
//!
//! Two tests, either of which marks a bar as noise:
//! - the latest ATR reaches the 90th percentile of the entire ATR history
//!   up to this bar (expanding window);
//! - the trailing-window z-score of the latest ATR reaches the 90th
//!   percentile of the full z-scored history.
//!
//! The expanding thresholds are maintained incrementally via
//! `ExpandingStats`; the z-score threshold uses the affine identity
//! `q90(z) = (q90(atr) - mean) / std`, which holds because the z transform
//! is monotonic for std > 0.

use super::quantile::ExpandingStats;
use crate::domain::NoiseAssessment;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Default trailing window for the local z-score.
pub const DEFAULT_WINDOW: usize = 14;
/// Percentile used for both expanding thresholds.
pub const NOISE_PERCENTILE: f64 = 0.90;

/// Stateful noise evaluator. Feed it one ATR observation per bar, in date
/// order; it owns the full history.
#[derive(Debug, Clone)]
pub struct NoiseRegimeEvaluator {
    window: usize,
    recent: VecDeque<f64>,
    history: ExpandingStats,
    last_date: Option<NaiveDate>,
}

impl NoiseRegimeEvaluator {
    pub fn new(window: usize) -> Self {
        assert!(window >= 2, "noise window must be >= 2");
        Self {
            window,
            recent: VecDeque::with_capacity(window + 1),
            history: ExpandingStats::new(),
            last_date: None,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of ATR observations seen so far.
    pub fn observations(&self) -> usize {
        self.history.len()
    }

    /// Record the ATR for `date` and assess it.
    ///
    /// Dates must be strictly increasing; the value must be a defined
    /// (non-NaN) volatility range. Returns the not-yet-determined assessment
    /// until `window` observations exist.
    pub fn assess(&mut self, date: NaiveDate, atr: f64) -> NoiseAssessment {
        debug_assert!(!atr.is_nan(), "ATR observation must be defined");
        debug_assert!(
            self.last_date.map_or(true, |d| date > d),
            "ATR observations must arrive in strictly increasing date order"
        );
        self.last_date = Some(date);

        self.recent.push_back(atr);
        if self.recent.len() > self.window {
            self.recent.pop_front();
        }
        self.history.insert(atr);

        if self.history.len() < self.window {
            return NoiseAssessment::undetermined(date);
        }

        let window_mean = self.recent.iter().sum::<f64>() / self.recent.len() as f64;
        let window_std = sample_std(&self.recent, window_mean);
        let z_score = if window_std != 0.0 {
            (atr - window_mean) / window_std
        } else {
            0.0
        };

        let dynamic_std_threshold = self.history.quantile(NOISE_PERCENTILE);
        let all_std = self.history.sample_std();
        let dynamic_zscore_threshold = if all_std != 0.0 {
            (dynamic_std_threshold - self.history.mean()) / all_std
        } else {
            0.0
        };

        let is_noise =
            atr >= dynamic_std_threshold || z_score.abs() >= dynamic_zscore_threshold;

        NoiseAssessment {
            date,
            latest_atr: atr,
            window_mean,
            window_std,
            z_score,
            dynamic_std_threshold,
            dynamic_zscore_threshold,
            is_noise,
        }
    }
}

impl Default for NoiseRegimeEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

fn sample_std(values: &VecDeque<f64>, mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}
