//! Trade journal — the sink for finalized scoring, regime, and trade records.
//!
//! The core hands the journal immutable, already-finalized records and never
//! reads them back. Durable sinks (CSV files, JSON artifacts) live in the
//! runner; the core ships an in-memory journal for tests and metrics and a
//! null journal for callers that only want the equity curve.

use crate::domain::{NoiseAssessment, ScoreBreakdown, TradeEvent};

/// Sink for per-bar records. Implementations must not mutate records.
pub trait TradeJournal {
    fn record_score(&mut self, score: &ScoreBreakdown);
    fn record_noise(&mut self, assessment: &NoiseAssessment);
    fn record_trade(&mut self, event: &TradeEvent);
}

/// Journal that retains everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryJournal {
    pub scores: Vec<ScoreBreakdown>,
    pub assessments: Vec<NoiseAssessment>,
    pub trades: Vec<TradeEvent>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeJournal for MemoryJournal {
    fn record_score(&mut self, score: &ScoreBreakdown) {
        self.scores.push(score.clone());
    }

    fn record_noise(&mut self, assessment: &NoiseAssessment) {
        self.assessments.push(assessment.clone());
    }

    fn record_trade(&mut self, event: &TradeEvent) {
        self.trades.push(event.clone());
    }
}

/// Journal that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullJournal;

impl TradeJournal for NullJournal {
    fn record_score(&mut self, _score: &ScoreBreakdown) {}
    fn record_noise(&mut self, _assessment: &NoiseAssessment) {}
    fn record_trade(&mut self, _event: &TradeEvent) {}
}
