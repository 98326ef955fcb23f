//! ScoreLab CLI — run backtests and generate sample data.
//!
//! Commands:
//! - `run` — execute a backtest from a TOML config file (or a defaulted
//!   synthetic run for a bare symbol), printing a summary and optionally
//!   exporting artifacts
//! - `synth` — write a seeded synthetic OHLCV CSV for experimentation

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scorelab_runner::{
    export_run, generate_synthetic, run_single_backtest, BacktestConfig, BacktestResult,
    DataConfig,
};

#[derive(Parser)]
#[command(
    name = "scorelab",
    about = "ScoreLab CLI — composite-score backtesting engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest from a TOML config file.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Symbol (used when no config file is given, or as an override).
        #[arg(long)]
        symbol: Option<String>,

        /// Start date (YYYY-MM-DD) override.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD) override.
        #[arg(long)]
        end: Option<String>,

        /// Initial capital override.
        #[arg(long)]
        cash: Option<f64>,

        /// CSV bar file override.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Directory to export artifacts (scores.csv, trades.csv, ...).
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip the markdown report when exporting.
        #[arg(long, default_value_t = false)]
        no_report: bool,
    },
    /// Generate a seeded synthetic OHLCV CSV.
    Synth {
        /// Output CSV path.
        #[arg(long, default_value = "synthetic.csv")]
        out: PathBuf,

        /// Number of bars.
        #[arg(long, default_value_t = 750)]
        bars: usize,

        /// RNG seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Symbol written into the bars.
        #[arg(long, default_value = "SYNTH")]
        symbol: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            symbol,
            start,
            end,
            cash,
            data,
            out,
            no_report,
        } => cmd_run(config, symbol, start, end, cash, data, out, no_report),
        Commands::Synth {
            out,
            bars,
            seed,
            symbol,
        } => cmd_synth(out, bars, seed, &symbol),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    config_path: Option<PathBuf>,
    symbol: Option<String>,
    start: Option<String>,
    end: Option<String>,
    cash: Option<f64>,
    data: Option<PathBuf>,
    out: Option<PathBuf>,
    no_report: bool,
) -> Result<()> {
    let mut config = match (&config_path, &symbol) {
        (Some(path), _) => BacktestConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        (None, Some(symbol)) => BacktestConfig::for_symbol(symbol.clone()),
        (None, None) => bail!("either --config or --symbol is required"),
    };

    if let Some(symbol) = symbol {
        config.symbol = symbol;
    }
    if let Some(start) = start {
        config.start = Some(parse_date(&start)?);
    }
    if let Some(end) = end {
        config.end = Some(parse_date(&end)?);
    }
    if let Some(cash) = cash {
        config.initial_capital = cash;
    }
    if let Some(path) = data {
        config.data = DataConfig::Csv { path };
    }

    let result = run_single_backtest(&config)?;
    print_summary(&result);

    if let Some(out) = out {
        let paths = export_run(&out, &result, !no_report)?;
        println!("\nArtifacts written to {}", out.display());
        if let Some(report) = paths.report_markdown {
            println!("Report: {}", report.display());
        }
    }

    Ok(())
}

fn cmd_synth(out: PathBuf, bars: usize, seed: u64, symbol: &str) -> Result<()> {
    if bars == 0 {
        bail!("--bars must be >= 1");
    }
    let series = generate_synthetic(symbol, bars, seed);
    let mut text = String::from("date,open,high,low,close,volume\n");
    for bar in &series {
        text.push_str(&format!(
            "{},{:.4},{:.4},{:.4},{:.4},{}\n",
            bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
        ));
    }
    std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} synthetic bars to {}", series.len(), out.display());
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{text}', expected YYYY-MM-DD"))
}

fn print_summary(result: &BacktestResult) {
    let m = &result.metrics;
    println!("Backtest: {}", result.symbol);
    if result.has_synthetic {
        println!("  (synthetic data — not market performance)");
    }
    println!("  Period:        {} to {}", result.start_date, result.end_date);
    println!(
        "  Bars:          {} (warmup {})",
        result.bar_count, result.warmup_bars
    );
    println!("  Capital:       {:.2}", result.initial_capital);
    println!("  Final equity:  {:.2}", result.final_equity);
    println!("  Total return:  {:+.2}%", m.total_return * 100.0);
    println!("  CAGR:          {:+.2}%", m.cagr * 100.0);
    println!("  Sharpe:        {:.2}", m.sharpe);
    println!("  Max drawdown:  {:.2}%", m.max_drawdown * 100.0);
    println!(
        "  Exits:         {} (win rate {:.1}%, profit factor {:.2})",
        m.exit_count,
        m.win_rate * 100.0,
        m.profit_factor
    );
    println!("  Commission:    {:.2}", result.total_commission);
}
