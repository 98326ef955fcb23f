//! Market regime classification.
//!
//! The noise evaluator is authoritative for abnormal volatility: a noisy bar
//! classifies as `Volatile` before any direction is considered. Quiet bars
//! take their direction from the EMA spread — above the band is `Bull`,
//! below is `Bear`, inside is `Sideways`. Bars whose inputs are still in
//! warm-up classify as `None`.

pub mod noise;
pub mod quantile;

pub use noise::{NoiseRegimeEvaluator, DEFAULT_WINDOW, NOISE_PERCENTILE};
pub use quantile::ExpandingStats;

use crate::domain::{IndicatorSnapshot, MarketRegime, NoiseAssessment};

/// Default EMA-spread band separating Sideways from Bull/Bear (±0.5%).
pub const DEFAULT_DIRECTION_BAND: f64 = 0.005;

/// Per-bar regime classifier owning the noise evaluator's state.
#[derive(Debug, Clone)]
pub struct RegimeClassifier {
    evaluator: NoiseRegimeEvaluator,
    direction_band: f64,
}

impl RegimeClassifier {
    pub fn new(noise_window: usize, direction_band: f64) -> Self {
        assert!(direction_band >= 0.0, "direction band must be >= 0");
        Self {
            evaluator: NoiseRegimeEvaluator::new(noise_window),
            direction_band,
        }
    }

    /// Classify one bar, consuming its ATR observation.
    ///
    /// Returns the regime together with the underlying noise assessment so
    /// the caller can journal both.
    pub fn classify(&mut self, snapshot: &IndicatorSnapshot) -> (MarketRegime, NoiseAssessment) {
        if snapshot.atr.is_nan() {
            return (MarketRegime::None, NoiseAssessment::undetermined(snapshot.date));
        }

        let assessment = self.evaluator.assess(snapshot.date, snapshot.atr);
        if self.evaluator.observations() < self.evaluator.window() {
            return (MarketRegime::None, assessment);
        }
        if assessment.is_noise {
            return (MarketRegime::Volatile, assessment);
        }

        let regime = self.direction(snapshot);
        (regime, assessment)
    }

    fn direction(&self, snapshot: &IndicatorSnapshot) -> MarketRegime {
        if snapshot.ema_fast.is_nan() || snapshot.ema_slow.is_nan() || snapshot.ema_slow == 0.0 {
            return MarketRegime::None;
        }
        let spread = (snapshot.ema_fast - snapshot.ema_slow) / snapshot.ema_slow;
        if spread > self.direction_band {
            MarketRegime::Bull
        } else if spread < -self.direction_band {
            MarketRegime::Bear
        } else {
            MarketRegime::Sideways
        }
    }
}

impl Default for RegimeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_DIRECTION_BAND)
    }
}
