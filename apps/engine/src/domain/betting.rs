//! Truco betting ladder: Truco → Retruco → Vale-Quatro with accept/decline.
//!
//! One ladder lives for one hand. Raises must climb exactly one rung and can
//! only come from the side opposite the last caller; answers (accept or
//! decline) likewise come from the side opposite the last caller. A decline
//! freezes the ladder and hands the previous rung's points to the last caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::BASE_HAND_POINTS;
use crate::domain::state::{side_of, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Rungs of the ladder.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetLevel {
    Truco,
    Retruco,
    ValeQuatro,
}

impl BetLevel {
    /// Points the hand is worth once this rung is accepted.
    pub fn points(self) -> u8 {
        match self {
            BetLevel::Truco => 2,
            BetLevel::Retruco => 3,
            BetLevel::ValeQuatro => 4,
        }
    }

    /// Points the hand was worth before this rung was called.
    pub fn points_before(self) -> u8 {
        match self {
            BetLevel::Truco => BASE_HAND_POINTS,
            BetLevel::Retruco => BetLevel::Truco.points(),
            BetLevel::ValeQuatro => BetLevel::Retruco.points(),
        }
    }

    pub fn next(self) -> Option<BetLevel> {
        match self {
            BetLevel::Truco => Some(BetLevel::Retruco),
            BetLevel::Retruco => Some(BetLevel::ValeQuatro),
            BetLevel::ValeQuatro => None,
        }
    }
}

/// Observable ladder state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LadderState {
    NotCalled,
    Truco,
    Retruco,
    ValeQuatro,
    /// Terminal: a raise was declined.
    Declined,
}

impl From<BetLevel> for LadderState {
    fn from(level: BetLevel) -> Self {
        match level {
            BetLevel::Truco => LadderState::Truco,
            BetLevel::Retruco => LadderState::Retruco,
            BetLevel::ValeQuatro => LadderState::ValeQuatro,
        }
    }
}

/// A single move on the ladder.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetCall {
    Truco,
    Retruco,
    ValeQuatro,
    Accept,
    Decline,
}

impl BetCall {
    /// The rung this call asks for, if it is a raise.
    pub fn raise_level(self) -> Option<BetLevel> {
        match self {
            BetCall::Truco => Some(BetLevel::Truco),
            BetCall::Retruco => Some(BetLevel::Retruco),
            BetCall::ValeQuatro => Some(BetLevel::ValeQuatro),
            BetCall::Accept | BetCall::Decline => None,
        }
    }
}

impl From<BetLevel> for BetCall {
    fn from(level: BetLevel) -> Self {
        match level {
            BetLevel::Truco => BetCall::Truco,
            BetLevel::Retruco => BetCall::Retruco,
            BetLevel::ValeQuatro => BetCall::ValeQuatro,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BettingLadder {
    state: LadderState,
    /// Highest rung reached, kept after a decline.
    level: Option<BetLevel>,
    points: u8,
    last_caller: Option<PlayerId>,
    awaiting_response: bool,
}

impl Default for BettingLadder {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingLadder {
    pub fn new() -> Self {
        Self {
            state: LadderState::NotCalled,
            level: None,
            points: BASE_HAND_POINTS,
            last_caller: None,
            awaiting_response: false,
        }
    }

    pub fn state(&self) -> LadderState {
        self.state
    }

    pub fn level(&self) -> Option<BetLevel> {
        self.level
    }

    /// Points currently at stake (or locked in, after a decline).
    pub fn points(&self) -> u8 {
        self.points
    }

    pub fn last_caller(&self) -> Option<PlayerId> {
        self.last_caller
    }

    /// A raise is waiting for an accept/decline (or counter-raise).
    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn is_declined(&self) -> bool {
        self.state == LadderState::Declined
    }

    /// The rung `player` could call right now, if any.
    pub fn next_raise_for(&self, player: PlayerId) -> Option<BetLevel> {
        if self.is_declined() || !self.may_act(player) {
            return None;
        }
        match self.level {
            None => Some(BetLevel::Truco),
            Some(level) => level.next(),
        }
    }

    pub fn call(&mut self, call: BetCall, player: PlayerId) -> Result<(), DomainError> {
        match call {
            BetCall::Truco => self.raise(BetLevel::Truco, player),
            BetCall::Retruco => self.raise(BetLevel::Retruco, player),
            BetCall::ValeQuatro => self.raise(BetLevel::ValeQuatro, player),
            BetCall::Accept => self.accept(player),
            BetCall::Decline => self.decline(player),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Only the side opposite the last caller may act on the ladder.
    fn may_act(&self, player: PlayerId) -> bool {
        match self.last_caller {
            Some(caller) => side_of(caller) != side_of(player),
            None => true,
        }
    }

    fn raise(&mut self, level: BetLevel, player: PlayerId) -> Result<(), DomainError> {
        if self.is_declined() {
            return Err(invalid("Betting is closed after a decline"));
        }
        let expected = match self.level {
            None => Some(BetLevel::Truco),
            Some(current) => current.next(),
        };
        if expected != Some(level) {
            return Err(invalid(format!(
                "Cannot call {level:?}; next rung is {expected:?}"
            )));
        }
        if !self.may_act(player) {
            return Err(invalid(format!(
                "Player {player} cannot raise their own side's call"
            )));
        }

        self.level = Some(level);
        self.state = level.into();
        self.points = level.points();
        self.last_caller = Some(player);
        self.awaiting_response = true;
        debug!(player, ?level, points = self.points, "Bet raised");
        Ok(())
    }

    fn accept(&mut self, player: PlayerId) -> Result<(), DomainError> {
        self.require_answerable(player)?;
        self.awaiting_response = false;
        debug!(player, state = ?self.state, points = self.points, "Bet accepted");
        Ok(())
    }

    fn decline(&mut self, player: PlayerId) -> Result<(), DomainError> {
        self.require_answerable(player)?;
        let Some(level) = self.level else {
            return Err(DomainError::invariant(
                "pending bet without a ladder level",
            ));
        };
        self.state = LadderState::Declined;
        self.points = level.points_before();
        self.awaiting_response = false;
        debug!(
            player,
            ?level,
            points = self.points,
            winner = ?self.last_caller,
            "Bet declined"
        );
        Ok(())
    }

    fn require_answerable(&self, player: PlayerId) -> Result<(), DomainError> {
        if !self.awaiting_response {
            return Err(invalid("No bet is waiting for an answer"));
        }
        if !self.may_act(player) {
            return Err(invalid(format!(
                "Player {player} cannot answer their own side's call"
            )));
        }
        Ok(())
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidEscalation, detail)
}
