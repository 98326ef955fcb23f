//! ScoreLab Core — composite scoring, regime evaluation, trade control.
//!
//! This crate contains the heart of the backtesting engine:
//! - Domain types (bars, snapshots, scores, regimes, positions, trade events)
//! - Technical indicators with NaN warm-up semantics
//! - Composite scorer: four weighted factors into one bounded total
//! - Noise/regime evaluation with expanding-window thresholds
//! - Long-only position controller with trailing-stop and stop/target exits
//! - Bar-by-bar engine loop over a broker and journal abstraction

pub mod broker;
pub mod controller;
pub mod domain;
pub mod engine;
pub mod indicators;
pub mod journal;
pub mod params;
pub mod regime;
pub mod scoring;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types are Send + Sync, so a future worker
    /// thread can own a whole run without retrofitting.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::IndicatorSnapshot>();
        require_sync::<domain::IndicatorSnapshot>();
        require_send::<domain::ScoreBreakdown>();
        require_sync::<domain::ScoreBreakdown>();
        require_send::<domain::NoiseAssessment>();
        require_sync::<domain::NoiseAssessment>();
        require_send::<domain::MarketRegime>();
        require_sync::<domain::MarketRegime>();
        require_send::<domain::PositionState>();
        require_sync::<domain::PositionState>();
        require_send::<domain::TradeEvent>();
        require_sync::<domain::TradeEvent>();

        require_send::<scoring::CompositeScorer>();
        require_sync::<scoring::CompositeScorer>();
        require_send::<regime::NoiseRegimeEvaluator>();
        require_sync::<regime::NoiseRegimeEvaluator>();
        require_send::<regime::RegimeClassifier>();
        require_sync::<regime::RegimeClassifier>();
        require_send::<controller::PositionController>();
        require_sync::<controller::PositionController>();
        require_send::<broker::SimBroker>();
        require_sync::<broker::SimBroker>();
        require_send::<journal::MemoryJournal>();
        require_sync::<journal::MemoryJournal>();
        require_send::<params::StrategyParams>();
        require_sync::<params::StrategyParams>();
        require_send::<engine::EngineConfig>();
        require_sync::<engine::EngineConfig>();
        require_send::<engine::RunResult>();
        require_sync::<engine::RunResult>();
    }

    /// Architecture contract: the scorer is a pure function of one snapshot.
    ///
    /// `CompositeScorer::score` takes `&IndicatorSnapshot` and nothing else —
    /// no bar history, no position, no broker. If the signature grows a
    /// history or portfolio parameter, this stops compiling and the
    /// separation has to be re-argued explicitly.
    #[test]
    fn scorer_sees_only_the_current_snapshot() {
        fn _check(
            scorer: &scoring::CompositeScorer,
            snapshot: &domain::IndicatorSnapshot,
        ) -> domain::ScoreBreakdown {
            scorer.score(snapshot)
        }
    }
}
