//! Criterion benchmarks for scorelab hot paths.
//!
//! Benchmarks:
//! 1. Composite scoring of a single snapshot
//! 2. Noise evaluation over long ATR histories (expanding thresholds)
//! 3. Indicator precompute over a full bar series
//! 4. Complete backtest run

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use scorelab_core::domain::{Bar, IndicatorSnapshot};
use scorelab_core::engine::{build_snapshots, run_backtest, EngineConfig};
use scorelab_core::journal::NullJournal;
use scorelab_core::params::StrategyParams;
use scorelab_core::regime::NoiseRegimeEvaluator;
use scorelab_core::scoring::CompositeScorer;

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.02;
            let open = close - 0.3;
            Bar {
                symbol: "BENCH".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: close + 1.5,
                low: open - 1.5,
                close,
                volume: 1_000_000 + (i as u64 % 500_000),
            }
        })
        .collect()
}

fn bench_scorer(c: &mut Criterion) {
    let snapshot = IndicatorSnapshot {
        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        ema_fast: 102.0,
        ema_slow: 100.0,
        adx: 22.0,
        rsi: 28.0,
        macd: 1.2,
        macd_signal: 1.05,
        volume: 1_200_000.0,
        avg_volume: 1_000_000.0,
        atr: 2.1,
    };
    let scorer = CompositeScorer::new();
    c.bench_function("composite_score", |b| {
        b.iter(|| scorer.score(black_box(&snapshot)))
    });
}

fn bench_noise_evaluator(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise_evaluator");
    for n in [500usize, 2_500, 10_000] {
        let atrs: Vec<f64> = (0..n)
            .map(|i| 1.0 + (i as f64 * 0.37).sin().abs() * 0.8)
            .collect();
        let base_date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &atrs, |b, atrs| {
            b.iter(|| {
                let mut evaluator = NoiseRegimeEvaluator::new(14);
                for (i, &atr) in atrs.iter().enumerate() {
                    black_box(
                        evaluator.assess(base_date + chrono::Duration::days(i as i64), atr),
                    );
                }
            })
        });
    }
    group.finish();
}

fn bench_precompute(c: &mut Criterion) {
    let bars = make_bars(2_500);
    let params = StrategyParams::default();
    c.bench_function("precompute_2500_bars", |b| {
        b.iter(|| build_snapshots(black_box(&bars), black_box(&params)))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let bars = make_bars(2_500);
    let config = EngineConfig::new(100_000.0);
    c.bench_function("backtest_2500_bars", |b| {
        b.iter(|| {
            let mut journal = NullJournal;
            run_backtest(black_box(&bars), black_box(&config), &mut journal).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_scorer,
    bench_noise_evaluator,
    bench_precompute,
    bench_full_run
);
criterion_main!(benches);
