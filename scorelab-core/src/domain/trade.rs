//! TradeEvent — an immutable record emitted on every buy or sell.

use super::regime::MarketRegime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of transition produced a trade event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
    StopLoss,
    TakeProfit,
    TrailingStop,
}

impl TradeAction {
    /// Every action except `Buy` realizes PnL against the average entry price.
    pub fn is_exit(&self) -> bool {
        !matches!(self, Self::Buy)
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::StopLoss => "stop_loss",
            Self::TakeProfit => "take_profit",
            Self::TrailingStop => "trailing_stop",
        };
        f.write_str(s)
    }
}

/// Append-only trade record. Ownership transfers to the journal on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEvent {
    pub date: NaiveDate,
    pub action: TradeAction,
    /// The composite total score at decision time.
    pub score: f64,
    pub price: f64,
    pub size: u64,
    /// Average entry price at decision time (unchanged by partial sells).
    pub avg_price: f64,
    /// Realized return percent vs. average entry. `None` on entries.
    pub roi: Option<f64>,
    /// Market value of the position remaining after this event.
    pub market_value: f64,
    pub regime: MarketRegime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> TradeEvent {
        TradeEvent {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            action: TradeAction::StopLoss,
            score: -0.4,
            price: 86.0,
            size: 10,
            avg_price: 100.0,
            roi: Some(-14.0),
            market_value: 0.0,
            regime: MarketRegime::Bear,
        }
    }

    #[test]
    fn exits_realize_roi() {
        assert!(TradeAction::StopLoss.is_exit());
        assert!(TradeAction::TrailingStop.is_exit());
        assert!(!TradeAction::Buy.is_exit());
    }

    #[test]
    fn action_display() {
        assert_eq!(TradeAction::TrailingStop.to_string(), "trailing_stop");
        assert_eq!(TradeAction::Buy.to_string(), "buy");
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap();
        let deser: TradeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.action, deser.action);
        assert_eq!(event.roi, deser.roi);
        assert_eq!(event.regime, deser.regime);
    }
}
