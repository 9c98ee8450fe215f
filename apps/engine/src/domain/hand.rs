//! Dealing and per-hand round bookkeeping.

use serde::Serialize;
use tracing::debug;

use crate::domain::deck::DeckSource;
use crate::domain::player::Player;
use crate::domain::rules::{cards_per_deal, HAND_SIZE, ROUNDS_PER_HAND, ROUNDS_TO_WIN};
use crate::domain::state::{side_of, PlayerId, Side, SideTally};
use crate::domain::tricks::{TrickOutcome, TrickResult};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Deal three cards to every player, one per pass, starting at `leader`.
///
/// Nothing is drawn or handed out unless the deck reports enough cards for
/// the whole deal.
pub fn deal<D>(deck: &mut D, players: &mut [Player], leader: PlayerId) -> Result<(), DomainError>
where
    D: DeckSource + ?Sized,
{
    let seats = players.len();
    let needed = cards_per_deal(seats);
    let remaining = deck.remaining();
    if remaining < needed {
        return Err(DomainError::DeckExhausted { needed, remaining });
    }

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); seats];
    for _ in 0..HAND_SIZE {
        for offset in 0..seats {
            let seat = (leader as usize + offset) % seats;
            #[allow(clippy::expect_used)]
            let card = deck
                .draw()
                .expect("deck reported enough cards for a full deal but ran dry");
            hands[seat].push(card);
        }
    }

    for (player, hand) in players.iter_mut().zip(hands) {
        player.receive_hand(hand);
    }
    debug!(leader, needed, remaining = deck.remaining(), "Hands dealt");
    Ok(())
}

/// Round progress within a single hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandState {
    round_index: u8,
    hand_leader: PlayerId,
    leader_of_round: PlayerId,
    tricks_won: SideTally<u8>,
    first_decided: Option<Side>,
    results: Vec<TrickResult>,
}

impl HandState {
    pub fn new(hand_leader: PlayerId) -> Self {
        Self {
            round_index: 0,
            hand_leader,
            leader_of_round: hand_leader,
            tricks_won: SideTally::default(),
            first_decided: None,
            results: Vec::with_capacity(ROUNDS_PER_HAND as usize),
        }
    }

    /// Rounds already resolved (0..=3).
    pub fn round_index(&self) -> u8 {
        self.round_index
    }

    /// The mão: who led the first round of this hand.
    pub fn hand_leader(&self) -> PlayerId {
        self.hand_leader
    }

    pub fn leader_of_round(&self) -> PlayerId {
        self.leader_of_round
    }

    pub fn tricks_won(&self) -> SideTally<u8> {
        self.tricks_won
    }

    /// Side that won the first non-parda round, if any.
    pub fn first_decided(&self) -> Option<Side> {
        self.first_decided
    }

    pub fn results(&self) -> &[TrickResult] {
        &self.results
    }

    /// Credit a resolved round and move on to the next one.
    pub fn record_trick(&mut self, result: TrickResult) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::invariant(
                "round recorded after the hand was already decided",
            ));
        }

        match result.outcome {
            TrickOutcome::Won { side, .. } => {
                *self.tricks_won.get_mut(side) += 1;
                self.first_decided.get_or_insert(side);
            }
            TrickOutcome::Parda => {
                self.tricks_won.us += 1;
                self.tricks_won.them += 1;
            }
        }
        self.round_index += 1;
        self.leader_of_round = result.next_leader;
        self.results.push(result);
        Ok(())
    }

    /// A side reached two rounds, or all three rounds were played.
    pub fn is_complete(&self) -> bool {
        self.tricks_won.us >= ROUNDS_TO_WIN
            || self.tricks_won.them >= ROUNDS_TO_WIN
            || self.round_index >= ROUNDS_PER_HAND
    }

    /// Winning side once the hand is complete.
    ///
    /// More rounds wins; on equal tallies the first decided round breaks the
    /// tie, and if every round was parda the mão's side takes the hand.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_complete() {
            return None;
        }
        let SideTally { us, them } = self.tricks_won;
        let side = match us.cmp(&them) {
            std::cmp::Ordering::Greater => Side::Us,
            std::cmp::Ordering::Less => Side::Them,
            std::cmp::Ordering::Equal => self
                .first_decided
                .unwrap_or_else(|| side_of(self.hand_leader)),
        };
        Some(side)
    }
}
