//! Serializable backtest configuration.
//!
//! A TOML file names the symbol, date range, capital, and any strategy
//! parameter overrides; everything omitted takes its default. The data
//! section picks between a CSV file and seeded synthetic bars.

use chrono::NaiveDate;
use scorelab_core::params::StrategyParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where bars come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataConfig {
    /// Load OHLCV bars from a CSV file (date,open,high,low,close,volume).
    Csv { path: PathBuf },
    /// Generate a seeded random-walk series. Results are tagged synthetic.
    Synthetic {
        #[serde(default = "default_synthetic_bars")]
        bars: usize,
        #[serde(default)]
        seed: u64,
    },
}

fn default_synthetic_bars() -> usize {
    750
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::Synthetic {
            bars: default_synthetic_bars(),
            seed: 0,
        }
    }
}

/// Full configuration for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub symbol: String,
    /// First trading date kept after loading (inclusive). Bars before it are
    /// still used for indicator warm-up when present in the data.
    pub start: Option<NaiveDate>,
    /// Last trading date kept (inclusive).
    pub end: Option<NaiveDate>,
    #[serde(default = "default_capital")]
    pub initial_capital: f64,
    #[serde(default = "default_commission")]
    pub commission_rate: f64,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub params: StrategyParams,
}

fn default_capital() -> f64 {
    10_000.0
}

fn default_commission() -> f64 {
    0.002
}

impl BacktestConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.is_empty() {
            return Err(ConfigError::Invalid("symbol must not be empty".into()));
        }
        if self.initial_capital <= 0.0 {
            return Err(ConfigError::Invalid(
                "initial_capital must be positive".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.commission_rate) {
            return Err(ConfigError::Invalid(
                "commission_rate must be in [0, 1)".into(),
            ));
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end < start {
                return Err(ConfigError::Invalid("end date precedes start date".into()));
            }
        }
        self.params.validate().map_err(ConfigError::Invalid)
    }

    /// A ready-to-run config for a symbol with everything defaulted.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            start: None,
            end: None,
            initial_capital: default_capital(),
            commission_rate: default_commission(),
            data: DataConfig::default(),
            params: StrategyParams::default(),
        }
    }
}
