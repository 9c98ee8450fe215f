//! Domain-level error type used by the rules engine and its collaborators.
//!
//! Every rejected action is reported through `DomainError` before any state
//! is touched, so callers can re-prompt without repairing anything.

use thiserror::Error;

/// Kinds of validation failures (rule violations by the caller).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Betting ladder called out of order or by the wrong side.
    InvalidEscalation,
    /// Card index out of range, or the hand is empty.
    InvalidCardIndex,
    /// A card played by value is not in the player's hand.
    CardNotHeld,
    /// Action submitted by someone other than the current player.
    OutOfTurn,
    /// A card was played while a bet or envido answer is still owed.
    ResponsePending,
    /// Action does not fit the match phase (no hand in progress, match over).
    PhaseMismatch,
    /// Bot turn requested while a human holds the turn.
    NotBotTurn,
    EnvidoUnavailable,
    FlorUnavailable,
    ParseCard,
    ParseAction,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Not enough cards left in the deck to deal a full hand
    #[error("deck exhausted: need {needed} cards, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
    /// Bot collaborator failed to produce a decision
    #[error("bot error: {0}")]
    Ai(String),
    /// Internal invariant broken (never caused by caller input)
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a validation failure.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
