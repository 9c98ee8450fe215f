//! Observer that keeps every notification.

use truco_engine::domain::rules::PLAYERS;
use truco_engine::{Action, Card, GameObserver, HandSummary, PlayerId, Side, TrickResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    Hands(Vec<Vec<Card>>),
    Action { player: PlayerId, action: Action },
    Scoreboard { us: u16, them: u16 },
    NewHand,
    CardPlayed { player: PlayerId, card: Card },
    RoundResolved(TrickResult),
    HandEnded(HandSummary),
    MatchEnded(Side),
}

#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ObserverEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn new_hands(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ObserverEvent::NewHand))
            .count()
    }

    /// Most recent hands shown, by seat.
    pub fn last_hands(&self) -> Option<&[Vec<Card>]> {
        self.events.iter().rev().find_map(|e| match e {
            ObserverEvent::Hands(hands) => Some(hands.as_slice()),
            _ => None,
        })
    }

    pub fn scoreboard_updates(&self) -> Vec<(u16, u16)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::Scoreboard { us, them } => Some((*us, *them)),
                _ => None,
            })
            .collect()
    }

    pub fn hand_summaries(&self) -> Vec<HandSummary> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::HandEnded(summary) => Some(summary.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn match_winner(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            ObserverEvent::MatchEnded(side) => Some(*side),
            _ => None,
        })
    }
}

impl GameObserver for RecordingObserver {
    fn show_hands(&mut self, hands: &[Vec<Card>; PLAYERS]) {
        self.events.push(ObserverEvent::Hands(hands.to_vec()));
    }

    fn show_action(&mut self, player: PlayerId, action: Action) {
        self.events.push(ObserverEvent::Action { player, action });
    }

    fn update_scoreboard(&mut self, us: u16, them: u16) {
        self.events.push(ObserverEvent::Scoreboard { us, them });
    }

    fn start_new_hand(&mut self) {
        self.events.push(ObserverEvent::NewHand);
    }

    fn card_played(&mut self, player: PlayerId, card: Card) {
        self.events.push(ObserverEvent::CardPlayed { player, card });
    }

    fn round_resolved(&mut self, result: &TrickResult) {
        self.events.push(ObserverEvent::RoundResolved(*result));
    }

    fn hand_ended(&mut self, summary: &HandSummary) {
        self.events.push(ObserverEvent::HandEnded(summary.clone()));
    }

    fn match_ended(&mut self, winner: Side) {
        self.events.push(ObserverEvent::MatchEnded(winner));
    }
}
