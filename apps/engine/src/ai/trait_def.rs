//! Bot decision trait definition.

use std::fmt;

use crate::domain::player_view::BotContext;
use crate::domain::Action;
use crate::errors::domain::DomainError;

/// Errors that can occur during bot decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Bot encountered an internal error
    Internal(String),
    /// Bot could not produce a legal move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "bot internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "bot invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::Ai(err.to_string())
    }
}

/// Decision source for bot-controlled seats.
///
/// Implementations receive what the seat can see and must return one action.
/// The orchestrator validates the answer like any other submission, so a bot
/// that ignores [`BotContext::legal_actions`] gets its move rejected.
pub trait BotDecisionProvider: Send + Sync {
    fn decide(&self, ctx: &BotContext) -> Result<Action, AiError>;
}

impl<T: BotDecisionProvider + ?Sized> BotDecisionProvider for Box<T> {
    fn decide(&self, ctx: &BotContext) -> Result<Action, AiError> {
        (**self).decide(ctx)
    }
}
