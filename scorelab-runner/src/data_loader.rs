//! Bar loading for the runner: CSV files or seeded synthetic series.
//!
//! CSV rows are `date,open,high,low,close,volume` with ISO dates. Synthetic
//! bars are a seeded random walk — a developer/debug mode, so loaded data is
//! tagged with its source and synthetic results are labeled in reports.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scorelab_core::domain::Bar;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::config::{BacktestConfig, DataConfig};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read bar file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse bar file: {0}")]
    Csv(#[from] csv::Error),
    #[error("bar dates must be strictly increasing (violation at {0})")]
    Unsorted(NaiveDate),
    #[error("rejected bar on {date}: {reason}")]
    BadBar { date: NaiveDate, reason: String },
    #[error("no bars remain after date filtering")]
    Empty,
}

/// Provenance of a loaded bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Csv,
    Synthetic,
}

/// A loaded bar series plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedBars {
    pub bars: Vec<Bar>,
    pub source: DataSource,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Load bars from a CSV file, checking ordering and basic sanity.
pub fn load_csv(path: impl AsRef<Path>, symbol: &str) -> Result<Vec<Bar>, LoadError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut bars = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        let bar = Bar {
            symbol: symbol.to_string(),
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        };
        if !bar.is_sane() {
            return Err(LoadError::BadBar {
                date: bar.date,
                reason: "OHLC fields fail the sanity check".into(),
            });
        }
        if let Some(prev) = bars.last() {
            let prev: &Bar = prev;
            if bar.date <= prev.date {
                return Err(LoadError::Unsorted(bar.date));
            }
        }
        bars.push(bar);
    }
    if bars.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(bars)
}

/// Generate a seeded random-walk bar series for demos and tests.
///
/// Weekdays only, starting 2020-01-02. Deterministic for a given seed.
pub fn generate_synthetic(symbol: &str, n: usize, seed: u64) -> Vec<Bar> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bars = Vec::with_capacity(n);
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let mut close = 100.0;

    for _ in 0..n {
        let drift = 0.0004;
        let shock: f64 = rng.gen_range(-0.02..0.02);
        let open = close;
        close = (open * (1.0 + drift + shock)).max(1.0);
        let span = open.max(close) * rng.gen_range(0.002..0.015);
        let high = open.max(close) + span;
        let low = (open.min(close) - span).max(0.5);
        let volume = rng.gen_range(500_000u64..2_000_000);

        bars.push(Bar {
            symbol: symbol.to_string(),
            date,
            open,
            high,
            low,
            close,
            volume,
        });

        date = date + chrono::Duration::days(1);
        while matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun) {
            date = date + chrono::Duration::days(1);
        }
    }

    bars
}

/// Keep bars within the config's inclusive date range.
pub fn filter_date_range(
    bars: Vec<Bar>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<Bar>, LoadError> {
    let filtered: Vec<Bar> = bars
        .into_iter()
        .filter(|b| start.map_or(true, |s| b.date >= s) && end.map_or(true, |e| b.date <= e))
        .collect();
    if filtered.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(filtered)
}

/// Resolve a config's data section into bars.
pub fn load_bars(config: &BacktestConfig) -> Result<LoadedBars, LoadError> {
    let (bars, source) = match &config.data {
        DataConfig::Csv { path } => (load_csv(path, &config.symbol)?, DataSource::Csv),
        DataConfig::Synthetic { bars, seed } => (
            generate_synthetic(&config.symbol, *bars, *seed),
            DataSource::Synthetic,
        ),
    };
    let bars = filter_date_range(bars, config.start, config.end)?;
    Ok(LoadedBars { bars, source })
}
