//! PositionState — the controller's mutable long-only position.

use serde::{Deserialize, Serialize};

/// Position state owned exclusively by the controller.
///
/// Structural invariants, checked by `debug_validate`:
/// - `share_count == 0` iff `avg_entry_price == 0.0`
/// - `trailing_high` is non-decreasing while shares are held and is reset to
///   0.0 exactly when the position is fully closed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionState {
    pub share_count: u64,
    pub avg_entry_price: f64,
    pub trailing_high: f64,
}

impl PositionState {
    /// A flat position: no shares, no cost basis, no high-water mark.
    pub fn flat() -> Self {
        Self {
            share_count: 0,
            avg_entry_price: 0.0,
            trailing_high: 0.0,
        }
    }

    pub fn is_long(&self) -> bool {
        self.share_count > 0
    }

    /// Add a lot, updating the weighted average entry price.
    pub fn add_lot(&mut self, size: u64, price: f64) {
        debug_assert!(size >= 1, "lot size must be >= 1");
        if self.share_count == 0 {
            self.avg_entry_price = price;
        } else {
            let held = self.share_count as f64;
            let added = size as f64;
            self.avg_entry_price = (self.avg_entry_price * held + price * added) / (held + added);
        }
        self.share_count += size;
        self.debug_validate();
    }

    /// Remove shares from the position. The average entry price is unchanged
    /// by partial sells; a full close resets the position to flat.
    pub fn remove_lot(&mut self, size: u64) {
        debug_assert!(size >= 1 && size <= self.share_count, "oversell");
        self.share_count -= size;
        if self.share_count == 0 {
            self.avg_entry_price = 0.0;
            self.trailing_high = 0.0;
        }
        self.debug_validate();
    }

    /// Reset to flat (full liquidation).
    pub fn close(&mut self) {
        self.share_count = 0;
        self.avg_entry_price = 0.0;
        self.trailing_high = 0.0;
    }

    /// Raise the trailing high-water mark. Only meaningful while long.
    pub fn ratchet_high(&mut self, price: f64) {
        debug_assert!(self.is_long(), "trailing high only tracked while long");
        if price > self.trailing_high {
            self.trailing_high = price;
        }
    }

    /// Assert the structural invariants. Compiled out in release builds.
    pub fn debug_validate(&self) {
        debug_assert!(
            (self.share_count == 0) == (self.avg_entry_price == 0.0),
            "position invariant violated: share_count={}, avg_entry_price={}",
            self.share_count,
            self.avg_entry_price
        );
        debug_assert!(
            self.share_count > 0 || self.trailing_high == 0.0,
            "trailing_high must be 0 while flat"
        );
    }
}

impl Default for PositionState {
    fn default() -> Self {
        Self::flat()
    }
}
