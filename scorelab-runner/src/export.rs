//! Artifact export: CSV journals, JSON result, markdown report.
//!
//! One directory per run:
//! - `scores.csv` — per-bar score breakdowns
//! - `noise.csv` — per-bar noise assessments
//! - `trades.csv` — trade events
//! - `result.json` — the full `BacktestResult`
//! - `report.md` — human-readable summary (optional)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::runner::BacktestResult;

/// Paths of everything written for one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub scores_csv: PathBuf,
    pub noise_csv: PathBuf,
    pub trades_csv: PathBuf,
    pub result_json: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// Write all artifacts for a run into `output_dir` (created if missing).
pub fn export_run(
    output_dir: impl AsRef<Path>,
    result: &BacktestResult,
    include_report: bool,
) -> Result<ArtifactPaths> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating artifact directory {}", dir.display()))?;

    let scores_csv = dir.join("scores.csv");
    write_csv(&scores_csv, &result.scores)?;

    let noise_csv = dir.join("noise.csv");
    write_csv(&noise_csv, &result.assessments)?;

    let trades_csv = dir.join("trades.csv");
    write_csv(&trades_csv, &result.trades)?;

    let result_json = dir.join("result.json");
    let file = std::fs::File::create(&result_json)
        .with_context(|| format!("creating {}", result_json.display()))?;
    serde_json::to_writer_pretty(file, result).context("serializing result.json")?;

    let report_markdown = if include_report {
        let path = dir.join("report.md");
        std::fs::write(&path, render_report(result))
            .with_context(|| format!("writing {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    Ok(ArtifactPaths {
        scores_csv,
        noise_csv,
        trades_csv,
        result_json,
        report_markdown,
    })
}

fn write_csv<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the markdown summary report.
pub fn render_report(result: &BacktestResult) -> String {
    let m = &result.metrics;
    let synthetic_note = if result.has_synthetic {
        "\n> Generated (synthetic) data — not market performance.\n"
    } else {
        ""
    };
    format!(
        "# Backtest report: {symbol}\n\
         {synthetic_note}\n\
         | | |\n\
         |---|---|\n\
         | Period | {start} to {end} |\n\
         | Bars | {bars} (warmup {warmup}) |\n\
         | Initial capital | {capital:.2} |\n\
         | Final equity | {final_eq:.2} |\n\
         | Total return | {ret:.2}% |\n\
         | CAGR | {cagr:.2}% |\n\
         | Sharpe | {sharpe:.2} |\n\
         | Max drawdown | {dd:.2}% |\n\
         | Exits | {exits} (win rate {wr:.1}%) |\n\
         | Profit factor | {pf:.2} |\n\
         | Commission paid | {commission:.2} |\n",
        symbol = result.symbol,
        synthetic_note = synthetic_note,
        start = result.start_date,
        end = result.end_date,
        bars = result.bar_count,
        warmup = result.warmup_bars,
        capital = result.initial_capital,
        final_eq = result.final_equity,
        ret = m.total_return * 100.0,
        cagr = m.cagr * 100.0,
        sharpe = m.sharpe,
        dd = m.max_drawdown * 100.0,
        exits = m.exit_count,
        wr = m.win_rate * 100.0,
        pf = m.profit_factor,
        commission = result.total_commission,
    )
}
