//! Backtest runner — wires together config, data, engine, and metrics.
//!
//! Two entry points:
//! - `run_single_backtest()`: resolves data from the config, then runs.
//!   Used by the CLI.
//! - `run_backtest_from_bars()`: takes pre-loaded bars. Used by tests and
//!   embedders that manage their own data.

use scorelab_core::domain::{Bar, NoiseAssessment, ScoreBreakdown, TradeEvent};
use scorelab_core::engine::{run_backtest, EngineConfig, EngineError};
use scorelab_core::journal::MemoryJournal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{BacktestConfig, ConfigError};
use crate::data_loader::{load_bars, DataSource, LoadError};
use crate::metrics::PerformanceMetrics;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Complete result of a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestResult {
    pub symbol: String,
    pub start_date: String,
    pub end_date: String,
    pub initial_capital: f64,
    pub final_equity: f64,
    pub bar_count: usize,
    pub warmup_bars: usize,
    pub total_commission: f64,
    pub metrics: PerformanceMetrics,
    pub equity_curve: Vec<f64>,
    pub scores: Vec<ScoreBreakdown>,
    pub assessments: Vec<NoiseAssessment>,
    pub trades: Vec<TradeEvent>,
    /// True when the run used generated data; such results are labeled in
    /// reports and must not be read as market performance.
    pub has_synthetic: bool,
}

/// Run a backtest over pre-loaded bars.
pub fn run_backtest_from_bars(
    config: &BacktestConfig,
    bars: &[Bar],
    has_synthetic: bool,
) -> Result<BacktestResult, RunError> {
    let engine_config = EngineConfig {
        initial_capital: config.initial_capital,
        commission_rate: config.commission_rate,
        params: config.params.clone(),
    };

    let mut journal = MemoryJournal::new();
    let result = run_backtest(bars, &engine_config, &mut journal)?;
    let metrics = PerformanceMetrics::compute(&result.equity_curve, &journal.trades);

    Ok(BacktestResult {
        symbol: config.symbol.clone(),
        start_date: bars.first().map(|b| b.date.to_string()).unwrap_or_default(),
        end_date: bars.last().map(|b| b.date.to_string()).unwrap_or_default(),
        initial_capital: config.initial_capital,
        final_equity: result.final_equity,
        bar_count: result.bar_count,
        warmup_bars: result.warmup_bars,
        total_commission: result.total_commission,
        metrics,
        equity_curve: result.equity_curve,
        scores: journal.scores,
        assessments: journal.assessments,
        trades: journal.trades,
        has_synthetic,
    })
}

/// Load the config's data and run a backtest.
pub fn run_single_backtest(config: &BacktestConfig) -> Result<BacktestResult, RunError> {
    config.validate()?;
    let loaded = load_bars(config)?;
    run_backtest_from_bars(
        config,
        &loaded.bars,
        loaded.source == DataSource::Synthetic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;

    #[test]
    fn synthetic_run_produces_full_result() {
        let config = BacktestConfig::for_symbol("TEST");
        let result = run_single_backtest(&config).unwrap();
        assert_eq!(result.symbol, "TEST");
        assert!(result.has_synthetic);
        assert_eq!(result.bar_count, 750);
        assert_eq!(result.equity_curve.len(), 750);
        assert_eq!(result.scores.len(), 750);
        assert_eq!(result.assessments.len(), 750);
        assert!(result.final_equity > 0.0);
    }

    #[test]
    fn identical_configs_produce_identical_results() {
        let config = BacktestConfig {
            data: DataConfig::Synthetic { bars: 400, seed: 7 },
            ..BacktestConfig::for_symbol("TEST")
        };
        let a = run_single_backtest(&config).unwrap();
        let b = run_single_backtest(&config).unwrap();
        assert_eq!(a.final_equity, b.final_equity);
        assert_eq!(a.trades.len(), b.trades.len());
        assert_eq!(a.equity_curve, b.equity_curve);
    }

    #[test]
    fn missing_csv_surfaces_data_error() {
        let config = BacktestConfig {
            data: DataConfig::Csv {
                path: "/nonexistent/bars.csv".into(),
            },
            ..BacktestConfig::for_symbol("TEST")
        };
        assert!(matches!(
            run_single_backtest(&config),
            Err(RunError::Data(_))
        ));
    }
}
