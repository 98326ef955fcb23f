//! Performance metrics — pure functions over the equity curve and trades.
//!
//! Every metric is equity curve and/or trade events in, scalar out. Realized
//! PnL per exit is reconstructed from the event's size, price, and average
//! entry price; entries carry no realized PnL.

use scorelab_core::domain::TradeEvent;
use serde::{Deserialize, Serialize};

/// Aggregate performance metrics for a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub cagr: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub profit_factor: f64,
    /// Realized exits (sell, stop_loss, take_profit, trailing_stop).
    pub exit_count: usize,
    /// All trade events including entries.
    pub event_count: usize,
}

impl PerformanceMetrics {
    pub fn compute(equity_curve: &[f64], events: &[TradeEvent]) -> Self {
        let exits: Vec<&TradeEvent> = events.iter().filter(|e| e.action.is_exit()).collect();
        Self {
            total_return: total_return(equity_curve),
            cagr: cagr(equity_curve),
            sharpe: sharpe_ratio(equity_curve),
            max_drawdown: max_drawdown(equity_curve),
            win_rate: win_rate(&exits),
            profit_factor: profit_factor(&exits),
            exit_count: exits.len(),
            event_count: events.len(),
        }
    }
}

/// Realized PnL of one exit event.
fn realized_pnl(event: &TradeEvent) -> f64 {
    (event.price - event.avg_price) * event.size as f64
}

/// Total return as a fraction: (final - initial) / initial.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    let final_eq = *equity_curve.last().unwrap();
    if initial <= 0.0 {
        return 0.0;
    }
    (final_eq - initial) / initial
}

/// Compound annual growth rate, assuming 252 trading days per year.
pub fn cagr(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    let final_eq = *equity_curve.last().unwrap();
    if initial <= 0.0 || final_eq <= 0.0 {
        return 0.0;
    }
    let years = equity_curve.len() as f64 / 252.0;
    (final_eq / initial).powf(1.0 / years) - 1.0
}

/// Annualized Sharpe ratio from daily returns (zero risk-free rate).
pub fn sharpe_ratio(equity_curve: &[f64]) -> f64 {
    let returns = daily_returns(equity_curve);
    if returns.len() < 2 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (returns.len() - 1) as f64;
    let std = var.sqrt();
    if std < 1e-15 {
        return 0.0;
    }
    (mean / std) * (252.0_f64).sqrt()
}

/// Maximum peak-to-trough drawdown as a positive fraction.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;
    for &equity in equity_curve {
        peak = peak.max(equity);
        if peak > 0.0 {
            worst = worst.max((peak - equity) / peak);
        }
    }
    worst
}

/// Fraction of exits with positive realized PnL. 0.0 with no exits.
pub fn win_rate(exits: &[&TradeEvent]) -> f64 {
    if exits.is_empty() {
        return 0.0;
    }
    let wins = exits.iter().filter(|e| realized_pnl(e) > 0.0).count();
    wins as f64 / exits.len() as f64
}

/// Gross profit over gross loss. 0.0 with no exits; f64::INFINITY with
/// profits and no losses.
pub fn profit_factor(exits: &[&TradeEvent]) -> f64 {
    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    for event in exits {
        let pnl = realized_pnl(event);
        if pnl > 0.0 {
            gross_profit += pnl;
        } else {
            gross_loss += -pnl;
        }
    }
    if gross_loss < 1e-15 {
        if gross_profit > 0.0 {
            return f64::INFINITY;
        }
        return 0.0;
    }
    gross_profit / gross_loss
}

fn daily_returns(equity_curve: &[f64]) -> Vec<f64> {
    equity_curve
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scorelab_core::domain::{MarketRegime, TradeAction};

    fn exit(action: TradeAction, price: f64, avg: f64, size: u64) -> TradeEvent {
        TradeEvent {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            action,
            score: 0.0,
            price,
            size,
            avg_price: avg,
            roi: Some((price - avg) / avg * 100.0),
            market_value: 0.0,
            regime: MarketRegime::None,
        }
    }

    #[test]
    fn total_return_basic() {
        assert!((total_return(&[100.0, 110.0]) - 0.1).abs() < 1e-12);
        assert_eq!(total_return(&[100.0]), 0.0);
    }

    #[test]
    fn max_drawdown_basic() {
        // Peak 120, trough 90 -> 25%.
        let curve = [100.0, 120.0, 90.0, 110.0];
        assert!((max_drawdown(&curve) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn max_drawdown_monotone_curve_is_zero() {
        let curve = [100.0, 101.0, 102.0, 103.0];
        assert_eq!(max_drawdown(&curve), 0.0);
    }

    #[test]
    fn flat_curve_sharpe_is_zero() {
        assert_eq!(sharpe_ratio(&[100.0; 50]), 0.0);
    }

    #[test]
    fn win_rate_and_profit_factor() {
        let events = vec![
            exit(TradeAction::TakeProfit, 115.0, 100.0, 10), // +150
            exit(TradeAction::StopLoss, 93.0, 100.0, 10),    // -70
            exit(TradeAction::Sell, 105.0, 100.0, 4),        // +20
        ];
        let exits: Vec<&TradeEvent> = events.iter().collect();
        assert!((win_rate(&exits) - 2.0 / 3.0).abs() < 1e-12);
        assert!((profit_factor(&exits) - 170.0 / 70.0).abs() < 1e-12);
    }

    #[test]
    fn no_losses_gives_infinite_profit_factor() {
        let events = vec![exit(TradeAction::TakeProfit, 115.0, 100.0, 10)];
        let exits: Vec<&TradeEvent> = events.iter().collect();
        assert!(profit_factor(&exits).is_infinite());
    }

    #[test]
    fn compute_counts_exits_not_entries() {
        let mut events = vec![exit(TradeAction::TakeProfit, 115.0, 100.0, 10)];
        events.push(TradeEvent {
            roi: None,
            action: TradeAction::Buy,
            ..events[0].clone()
        });
        let metrics = PerformanceMetrics::compute(&[100.0, 110.0], &events);
        assert_eq!(metrics.exit_count, 1);
        assert_eq!(metrics.event_count, 2);
    }
}
