#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Truco rules engine: card ranking, rounds and hands, the truco betting
//! ladder, envido and flor, match scoring and bot turns.
//!
//! The entry point is [`MatchOrchestrator`]; everything it decides goes out
//! through a [`GameObserver`].

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, BotDecisionProvider, RandomBot};
pub use config::{ConfigError, MatchConfig};
pub use domain::{
    Action, BetCall, BetLevel, BettingLadder, BotContext, Card, Deck, DeckMode, DeckSource,
    HandState, LadderState, Player, PlayerId, Rank, Scoreboard, Side, SideTally, Suit,
    TrickOutcome, TrickResult,
};
pub use errors::{DomainError, ValidationKind};
pub use services::{
    ActionOutcome, BonusAward, BonusKind, GameObserver, HandEndReason, HandSummary,
    MatchOrchestrator, MatchPhase, StandardMatch, TracingObserver,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
