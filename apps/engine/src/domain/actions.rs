//! Action vocabulary accepted by the match orchestrator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::betting::BetCall;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type", content = "index")]
pub enum Action {
    /// Play the card at this position of the caller's hand.
    PlayCard(usize),
    Truco,
    Retruco,
    ValeQuatro,
    /// Accept the pending truco raise or envido.
    #[serde(rename = "ACEITO")]
    Accept,
    /// Decline the pending truco raise or envido.
    #[serde(rename = "NAO_ACEITO")]
    Decline,
    Envido,
    Flor,
}

impl Action {
    /// Boundary label, as shown to the table.
    pub fn label(self) -> &'static str {
        match self {
            Action::PlayCard(_) => "PLAY_CARD",
            Action::Truco => "TRUCO",
            Action::Retruco => "RETRUCO",
            Action::ValeQuatro => "VALE_QUATRO",
            Action::Accept => "ACEITO",
            Action::Decline => "NAO_ACEITO",
            Action::Envido => "ENVIDO",
            Action::Flor => "FLOR",
        }
    }

    pub fn is_raise(self) -> bool {
        matches!(self, Action::Truco | Action::Retruco | Action::ValeQuatro)
    }

    pub fn is_answer(self) -> bool {
        matches!(self, Action::Accept | Action::Decline)
    }

    /// Betting ladder move for truco-family actions.
    pub fn bet_call(self) -> Option<BetCall> {
        match self {
            Action::Truco => Some(BetCall::Truco),
            Action::Retruco => Some(BetCall::Retruco),
            Action::ValeQuatro => Some(BetCall::ValeQuatro),
            Action::Accept => Some(BetCall::Accept),
            Action::Decline => Some(BetCall::Decline),
            Action::PlayCard(_) | Action::Envido | Action::Flor => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayCard(index) => write!(f, "PLAY_CARD {index}"),
            other => f.write_str(other.label()),
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    /// Accepts the boundary labels case-insensitively, with spaces or dashes
    /// in place of underscores (`"nao aceito"`, `"Vale-Quatro"`, `"VALE4"`).
    /// Card plays take an index: `"PLAY_CARD 1"` or `"PLAY_CARD:1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' | ':' => '_',
                'ã' | 'Ã' => 'A',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        if let Some(index) = normalized.strip_prefix("PLAY_CARD_") {
            return index.parse::<usize>().map(Action::PlayCard).map_err(|_| {
                DomainError::validation(
                    ValidationKind::ParseAction,
                    format!("Invalid card index in action: {s}"),
                )
            });
        }

        match normalized.as_str() {
            "TRUCO" => Ok(Action::Truco),
            "RETRUCO" => Ok(Action::Retruco),
            "VALE_QUATRO" | "VALE4" | "VALE_4" => Ok(Action::ValeQuatro),
            "ACEITO" | "ACCEPT" => Ok(Action::Accept),
            "NAO_ACEITO" | "DECLINE" => Ok(Action::Decline),
            "ENVIDO" => Ok(Action::Envido),
            "FLOR" => Ok(Action::Flor),
            "PLAY_CARD" => Err(DomainError::validation(
                ValidationKind::ParseAction,
                "PLAY_CARD needs a card index",
            )),
            _ => Err(DomainError::validation(
                ValidationKind::ParseAction,
                format!("Unknown action: {s}"),
            )),
        }
    }
}
