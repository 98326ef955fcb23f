//! Bar-by-bar backtest loop.
//!
//! Strictly forward in time, single-threaded: score and regime for bar t
//! consult only data with timestamp <= t, and bar t+1 is processed only
//! after bar t's position mutations are committed. Void bars (NaN OHLC from
//! upstream alignment) take no decisions; equity carries forward on the last
//! valid close.

use chrono::NaiveDate;
use thiserror::Error;

use crate::broker::SimBroker;
use crate::controller::PositionController;
use crate::domain::{Bar, PositionState, TradeAction};
use crate::engine::precompute::{build_snapshots, max_lookback};
use crate::journal::TradeJournal;
use crate::params::StrategyParams;
use crate::regime::RegimeClassifier;
use crate::scoring::CompositeScorer;

/// Configuration for a single backtest run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub initial_capital: f64,
    pub commission_rate: f64,
    pub params: StrategyParams,
}

impl EngineConfig {
    pub fn new(initial_capital: f64) -> Self {
        Self {
            initial_capital,
            commission_rate: 0.002,
            params: StrategyParams::default(),
        }
    }
}

/// Errors from the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no bars to process")]
    EmptyData,
    #[error("bar dates must be strictly increasing (violation at {0})")]
    UnsortedDates(NaiveDate),
    #[error("invalid strategy parameters: {0}")]
    InvalidParams(String),
}

/// Result of a complete backtest run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Equity value at each bar close.
    pub equity_curve: Vec<f64>,
    pub final_equity: f64,
    pub bar_count: usize,
    /// Bars before every indicator is warm.
    pub warmup_bars: usize,
    /// Void bars skipped (no decision taken).
    pub void_bars: usize,
    pub trade_count: usize,
    /// Position state at the end of the run.
    pub final_position: PositionState,
    pub total_commission: f64,
}

/// Run a full backtest over `bars`, journaling every score, noise
/// assessment, and trade event.
pub fn run_backtest(
    bars: &[Bar],
    config: &EngineConfig,
    journal: &mut dyn TradeJournal,
) -> Result<RunResult, EngineError> {
    if bars.is_empty() {
        return Err(EngineError::EmptyData);
    }
    config
        .params
        .validate()
        .map_err(EngineError::InvalidParams)?;
    for pair in bars.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(EngineError::UnsortedDates(pair[1].date));
        }
    }

    let snapshots = build_snapshots(bars, &config.params);
    let scorer = CompositeScorer::new();
    let mut classifier = RegimeClassifier::new(
        config.params.noise_window,
        config.params.direction_band,
    );
    let mut controller = PositionController::new(config.params.clone());
    let mut broker = SimBroker::new(config.initial_capital, config.commission_rate);

    let mut equity_curve = Vec::with_capacity(bars.len());
    let mut last_valid_close = f64::NAN;
    let mut void_bars = 0;
    let mut trade_count = 0;

    for (bar, snapshot) in bars.iter().zip(snapshots.iter()) {
        if bar.is_void() {
            void_bars += 1;
            let carry = if last_valid_close.is_nan() {
                config.initial_capital
            } else {
                broker.equity()
            };
            equity_curve.push(carry);
            continue;
        }

        broker.mark(bar.close);

        let score = scorer.score(snapshot);
        journal.record_score(&score);

        let (regime, assessment) = classifier.classify(snapshot);
        journal.record_noise(&assessment);

        let action = controller.on_bar(&score, regime, bar.close, &mut broker, journal);
        if action.is_some() {
            trade_count += 1;
        }
        debug_assert!(
            action != Some(TradeAction::Buy) || controller.position().is_long(),
            "buy must leave the controller long"
        );

        last_valid_close = bar.close;
        equity_curve.push(broker.equity());
    }

    let final_equity = *equity_curve.last().unwrap_or(&config.initial_capital);
    Ok(RunResult {
        final_equity,
        bar_count: bars.len(),
        warmup_bars: max_lookback(&config.params),
        void_bars,
        trade_count,
        final_position: controller.position().clone(),
        total_commission: broker.total_commission(),
        equity_curve,
    })
}
