//! Match orchestration: one hand after another until a side reaches the target.
//!
//! `MatchOrchestrator` owns every piece of mutable match state (deck, ladder,
//! hand progress, the current round's plays, the scoreboard) and processes one
//! action at a time. Every action is validated in full before anything is
//! touched, so a rejected action leaves the match exactly as it was.
//!
//! The `impl` is split by concern:
//! - `orchestration`: construction, dealing, hand and match endings
//! - `player_actions`: validation and application of submitted actions
//! - `ai_coordinator`: bot turns

mod ai_coordinator;
mod orchestration;
mod player_actions;

use serde::Serialize;

use crate::ai::RandomBot;
use crate::config::MatchConfig;
use crate::domain::state::{PlayerId, Side, SideTally};
use crate::domain::tricks::TrickResult;
use crate::domain::{Action, BettingLadder, Card, Deck, HandState, Player, Scoreboard};
use crate::services::observer::TracingObserver;

/// Where the match stands between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum MatchPhase {
    /// No hand in progress; `start_new_hand` deals the next one.
    AwaitingDeal,
    /// A hand is being played.
    Playing,
    Finished { winner: Side },
}

/// Why a hand stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandEndReason {
    /// Decided by rounds won.
    Tricks,
    /// A truco raise was declined; the last caller's side takes the hand.
    #[serde(rename = "TRUCO_NAO_ACEITO")]
    TrucoDeclined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandSummary {
    pub winner: Side,
    pub points: u8,
    pub reason: HandEndReason,
    pub tricks_won: SideTally<u8>,
    /// Match totals after the award.
    pub totals: SideTally<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusKind {
    EnvidoAccepted,
    EnvidoDeclined,
    Flor,
}

/// Points scored outside of the hand result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusAward {
    pub kind: BonusKind,
    pub side: Side,
    pub points: u8,
}

/// Everything a single accepted action caused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub player: PlayerId,
    pub action: Action,
    /// The card that left the player's hand, for card plays.
    pub card: Option<Card>,
    /// Set when this play completed a round.
    pub round: Option<TrickResult>,
    pub bonus: Option<BonusAward>,
    /// Set when this action ended the hand.
    pub hand: Option<HandSummary>,
    /// Set when this action ended the match.
    pub match_winner: Option<Side>,
    /// The hand was scored but the next one could not be dealt; the match
    /// waits in `AwaitingDeal` for `start_new_hand`.
    pub deal_pending: bool,
}

impl ActionOutcome {
    fn new(player: PlayerId, action: Action) -> Self {
        Self {
            player,
            action,
            card: None,
            round: None,
            bonus: None,
            hand: None,
            match_winner: None,
            deal_pending: false,
        }
    }
}

/// Envido negotiation state for the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnvidoState {
    Open,
    Pending { caller: PlayerId },
    Closed,
}

/// Orchestrator wired with the standard collaborators.
pub type StandardMatch = MatchOrchestrator<Deck, RandomBot, TracingObserver>;

pub struct MatchOrchestrator<D, B, O> {
    config: MatchConfig,
    players: Vec<Player>,
    deck: D,
    bot: B,
    observer: O,
    scoreboard: Scoreboard,
    ladder: BettingLadder,
    hand: HandState,
    trick: Vec<(PlayerId, Card)>,
    current_turn: PlayerId,
    /// Natural turn to restore once a truco or envido negotiation settles.
    resume_turn: Option<PlayerId>,
    envido: EnvidoState,
    /// Mão of the hand in progress, or of the next hand to deal.
    hand_leader: PlayerId,
    phase: MatchPhase,
}

impl<D, B, O> MatchOrchestrator<D, B, O> {
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    pub fn ladder(&self) -> &BettingLadder {
        &self.ladder
    }

    pub fn hand(&self) -> &HandState {
        &self.hand
    }

    /// Plays of the round in progress.
    pub fn current_trick(&self) -> &[(PlayerId, Card)] {
        &self.trick
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn hand_leader(&self) -> PlayerId {
        self.hand_leader
    }

    /// An envido is waiting for an answer.
    pub fn envido_pending(&self) -> bool {
        matches!(self.envido, EnvidoState::Pending { .. })
    }

    /// Envido can still be called this hand.
    pub fn envido_open(&self) -> bool {
        self.envido == EnvidoState::Open
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }
}
