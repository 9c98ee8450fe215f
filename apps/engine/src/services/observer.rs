//! Presentation seam: what the orchestrator tells the table.

use tracing::{debug, info};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{PlayerId, Side};
use crate::domain::tricks::{TrickOutcome, TrickResult};
use crate::domain::{Action, Card};
use crate::services::match_flow::HandSummary;

/// Receives match notifications in the order they happen.
///
/// The first four methods are required; the rest are optional hooks.
pub trait GameObserver {
    /// Freshly dealt hands, indexed by seat.
    fn show_hands(&mut self, hands: &[Vec<Card>; PLAYERS]);
    /// An accepted action, before its effects are reported.
    fn show_action(&mut self, player: PlayerId, action: Action);
    fn update_scoreboard(&mut self, us: u16, them: u16);
    fn start_new_hand(&mut self);

    fn card_played(&mut self, _player: PlayerId, _card: Card) {}
    fn round_resolved(&mut self, _result: &TrickResult) {}
    fn hand_ended(&mut self, _summary: &HandSummary) {}
    fn match_ended(&mut self, _winner: Side) {}
}

/// Observer that writes every notification to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn show_hands(&mut self, hands: &[Vec<Card>; PLAYERS]) {
        for (seat, hand) in hands.iter().enumerate() {
            let cards: Vec<String> = hand.iter().map(Card::to_string).collect();
            debug!(seat, ?cards, "Hand dealt");
        }
    }

    fn show_action(&mut self, player: PlayerId, action: Action) {
        info!(player, action = action.label(), "Action");
    }

    fn update_scoreboard(&mut self, us: u16, them: u16) {
        info!(us, them, "Scoreboard");
    }

    fn start_new_hand(&mut self) {
        info!("New hand");
    }

    fn card_played(&mut self, player: PlayerId, card: Card) {
        debug!(player, card = %card, "Card played");
    }

    fn round_resolved(&mut self, result: &TrickResult) {
        match result.outcome {
            TrickOutcome::Won { winner, side } => {
                debug!(winner, ?side, next_leader = result.next_leader, "Round won")
            }
            TrickOutcome::Parda => debug!(next_leader = result.next_leader, "Round parda"),
        }
    }

    fn hand_ended(&mut self, summary: &HandSummary) {
        info!(
            winner = ?summary.winner,
            points = summary.points,
            reason = ?summary.reason,
            "Hand ended"
        );
    }

    fn match_ended(&mut self, winner: Side) {
        info!(?winner, "Match ended");
    }
}
