//! Position controller — the per-bar trade state machine.
//!
//! Two states, FLAT and LONG; no short state exists, and every sell is
//! guarded by a position check. Per bar the checks run in a fixed order:
//! trailing-high update, trailing-stop trigger, stop-loss/take-profit, entry,
//! weak-score trim. Exits always run before entries, and a position closed
//! by a stop is not re-opened on the same bar.
//!
//! The controller is the sole owner of `PositionState`. Broker cash and
//! share counts are read once at the top of the bar; a broker rejection
//! means "no trade this bar", never a retry.

use crate::broker::Broker;
use crate::domain::{MarketRegime, PositionState, ScoreBreakdown, TradeAction, TradeEvent};
use crate::journal::TradeJournal;
use crate::params::StrategyParams;

/// Per-bar decision state machine over a single long-only position.
#[derive(Debug, Clone)]
pub struct PositionController {
    params: StrategyParams,
    position: PositionState,
}

impl PositionController {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            params,
            position: PositionState::flat(),
        }
    }

    pub fn position(&self) -> &PositionState {
        &self.position
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    /// Run one bar through the state machine.
    ///
    /// Returns the action taken, if any. All emitted trade events are handed
    /// to `journal` before this returns.
    pub fn on_bar(
        &mut self,
        score: &ScoreBreakdown,
        regime: MarketRegime,
        price: f64,
        broker: &mut dyn Broker,
        journal: &mut dyn TradeJournal,
    ) -> Option<TradeAction> {
        debug_assert!(price > 0.0, "bar price must be positive");
        self.position.debug_validate();

        // Cash and share snapshots are taken once, before any decision.
        let cash = broker.available_cash();
        debug_assert_eq!(
            broker.current_shares(),
            self.position.share_count,
            "controller and broker disagree on position size"
        );

        if self.position.is_long() {
            self.position.ratchet_high(price);

            if price <= self.position.trailing_high * (1.0 - self.params.trail_pct) {
                return self.close_all(TradeAction::TrailingStop, score, regime, price, broker, journal);
            }

            // share_count > 0 implies avg_entry_price > 0 under the position
            // invariant; pnl_ratio is only ever computed here.
            debug_assert!(self.position.avg_entry_price > 0.0);
            let pnl_ratio = price / self.position.avg_entry_price;
            if pnl_ratio <= self.params.stop_loss_ratio {
                return self.close_all(TradeAction::StopLoss, score, regime, price, broker, journal);
            }
            if pnl_ratio >= self.params.take_profit_ratio {
                return self.close_all(TradeAction::TakeProfit, score, regime, price, broker, journal);
            }
        }

        if regime == MarketRegime::Bull
            && score.total_score >= self.params.buy_threshold
            && !self.position.is_long()
        {
            return self.enter(score, regime, price, cash, broker, journal);
        }

        if score.total_score <= self.params.sell_threshold && self.position.is_long() {
            return self.trim(score, regime, price, broker, journal);
        }

        None
    }

    /// Liquidate the whole position for a stop/target trigger.
    fn close_all(
        &mut self,
        action: TradeAction,
        score: &ScoreBreakdown,
        regime: MarketRegime,
        price: f64,
        broker: &mut dyn Broker,
        journal: &mut dyn TradeJournal,
    ) -> Option<TradeAction> {
        let size = self.position.share_count;
        if broker.sell(size).is_err() {
            return None;
        }
        let avg = self.position.avg_entry_price;
        let roi = (price - avg) / avg * 100.0;
        self.position.close();
        journal.record_trade(&TradeEvent {
            date: score.date,
            action,
            score: score.total_score,
            price,
            size,
            avg_price: avg,
            roi: Some(roi),
            market_value: 0.0,
            regime,
        });
        Some(action)
    }

    fn enter(
        &mut self,
        score: &ScoreBreakdown,
        regime: MarketRegime,
        price: f64,
        cash: f64,
        broker: &mut dyn Broker,
        journal: &mut dyn TradeJournal,
    ) -> Option<TradeAction> {
        let size = (cash * self.params.buy_ratio / price).floor() as u64;
        if size < 1 || price * size as f64 > cash {
            return None;
        }
        if broker.buy(size).is_err() {
            return None;
        }
        self.position.add_lot(size, price);
        journal.record_trade(&TradeEvent {
            date: score.date,
            action: TradeAction::Buy,
            score: score.total_score,
            price,
            size,
            avg_price: self.position.avg_entry_price,
            roi: None,
            market_value: self.position.share_count as f64 * price,
            regime,
        });
        Some(TradeAction::Buy)
    }

    /// Partial exit on a weak composite score.
    fn trim(
        &mut self,
        score: &ScoreBreakdown,
        regime: MarketRegime,
        price: f64,
        broker: &mut dyn Broker,
        journal: &mut dyn TradeJournal,
    ) -> Option<TradeAction> {
        let size = (((self.position.share_count as f64) * self.params.sell_ratio).floor() as u64)
            .max(1);
        if broker.sell(size).is_err() {
            return None;
        }
        let avg = self.position.avg_entry_price;
        let roi = (price - avg) / avg * 100.0;
        self.position.remove_lot(size);
        journal.record_trade(&TradeEvent {
            date: score.date,
            action: TradeAction::Sell,
            score: score.total_score,
            price,
            size,
            avg_price: avg,
            roi: Some(roi),
            market_value: self.position.share_count as f64 * price,
            regime,
        });
        Some(TradeAction::Sell)
    }
}
