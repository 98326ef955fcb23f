//! ScoreLab Runner — backtest orchestration on top of `scorelab-core`.
//!
//! This crate provides:
//! - TOML backtest configuration with per-field defaults
//! - Bar loading from CSV, with a seeded synthetic fallback (tagged)
//! - The single-backtest runner wiring config → data → engine → metrics
//! - Performance metrics over the equity curve and trade events
//! - Artifact export (CSV journals, JSON result, markdown report)

pub mod config;
pub mod data_loader;
pub mod export;
pub mod metrics;
pub mod runner;

pub use config::{BacktestConfig, ConfigError, DataConfig};
pub use data_loader::{generate_synthetic, load_bars, load_csv, DataSource, LoadError, LoadedBars};
pub use export::{export_run, render_report, ArtifactPaths};
pub use metrics::PerformanceMetrics;
pub use runner::{run_backtest_from_bars, run_single_backtest, BacktestResult, RunError};
