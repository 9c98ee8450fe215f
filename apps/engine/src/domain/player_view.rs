//! What a seat can see at its decision point.
//!
//! `BotContext` is the interface between the orchestrator and bot players:
//! the bot's own hand, the public table state and the actions the
//! orchestrator would accept right now. Bots should pick from
//! [`legal_actions`](BotContext::legal_actions) rather than re-deriving the
//! rules.

use serde::Serialize;

use crate::domain::actions::Action;
use crate::domain::betting::LadderState;
use crate::domain::state::{PlayerId, Side, SideTally};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotContext {
    /// Seat making the decision.
    pub player: PlayerId,
    pub side: Side,

    /// Cards still in hand, in dealt order. `PlayCard(i)` indexes this.
    pub hand: Vec<Card>,

    /// Plays of the round in progress, in play order.
    pub current_trick: Vec<(PlayerId, Card)>,

    /// Rounds already resolved in this hand (0..=2 while playing).
    pub round_index: u8,
    /// The mão for this hand.
    pub hand_leader: PlayerId,
    pub tricks_won: SideTally<u8>,

    pub ladder_state: LadderState,
    /// Points the hand is currently worth.
    pub hand_points: u8,
    pub last_caller: Option<PlayerId>,
    /// A truco raise is waiting for this seat's answer.
    pub bet_pending: bool,
    /// An envido is waiting for this seat's answer.
    pub envido_pending: bool,

    pub scores: SideTally<u16>,
    pub target_score: u16,

    /// Every action `submit_action` would accept from this seat.
    pub legal_actions: Vec<Action>,
}

impl BotContext {
    /// Hand indices that may be played right now.
    pub fn legal_plays(&self) -> Vec<usize> {
        self.legal_actions
            .iter()
            .filter_map(|action| match action {
                Action::PlayCard(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// An answer (accept, decline or a counter-raise) is owed.
    pub fn must_answer(&self) -> bool {
        self.bet_pending || self.envido_pending
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.legal_actions.contains(&action)
    }
}
