//! Bot players - automated decisions for bot-controlled seats.
//!
//! This module provides:
//! - `BotDecisionProvider`, the trait the orchestrator asks for bot moves
//! - `RandomBot`: picks random legal actions (seedable for tests)
//! - `AiConfig` and `create_ai` to build bots from JSON configuration

mod config;
mod random;
mod trait_def;

pub use config::AiConfig;
pub use random::RandomBot;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, BotDecisionProvider};

/// Create a bot from its type name and optional JSON config.
///
/// Currently supports:
/// - "random" (or `RandomBot::NAME`): RandomBot with optional seed from config
///
/// Returns None if `ai_type` is unrecognized.
pub fn create_ai(
    ai_type: &str,
    config: Option<&JsonValue>,
) -> Option<Box<dyn BotDecisionProvider>> {
    let config = AiConfig::from_json(config);
    match ai_type {
        "random" | RandomBot::NAME => Some(Box::new(RandomBot::new(config.seed()))),
        _ => None,
    }
}
