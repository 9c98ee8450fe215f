//! Services layer: the match orchestrator and its presentation seam.

pub mod match_flow;
pub mod observer;

pub use match_flow::{
    ActionOutcome, BonusAward, BonusKind, HandEndReason, HandSummary, MatchOrchestrator,
    MatchPhase, StandardMatch,
};
pub use observer::{GameObserver, TracingObserver};
