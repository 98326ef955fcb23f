//! Domain types for scorelab.

pub mod bar;
pub mod noise;
pub mod position;
pub mod regime;
pub mod score;
pub mod snapshot;
pub mod trade;

pub use bar::Bar;
pub use noise::NoiseAssessment;
pub use position::PositionState;
pub use regime::MarketRegime;
pub use score::ScoreBreakdown;
pub use snapshot::IndicatorSnapshot;
pub use trade::{TradeAction, TradeEvent};

/// Symbol type alias
pub type Symbol = String;
