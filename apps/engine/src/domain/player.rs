//! Seat occupant: identity, the cards in hand and per-hand declarations.

use serde::Serialize;

use crate::domain::envido::{envido_points, flor_points, has_flor};
use crate::domain::state::{side_of, PlayerId, Side};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    is_bot: bool,
    hand: Vec<Card>,
    /// The hand as dealt; envido and flor are counted from it.
    dealt: Vec<Card>,
    declared_flor: bool,
    envido_called: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_bot,
            hand: Vec::new(),
            dealt: Vec::new(),
            declared_flor: false,
            envido_called: false,
        }
    }

    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self::new(id, name, false)
    }

    pub fn bot(id: PlayerId, name: impl Into<String>) -> Self {
        Self::new(id, name, true)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn side(&self) -> Side {
        side_of(self.id)
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Replace the hand with freshly dealt cards.
    pub fn receive_hand(&mut self, cards: Vec<Card>) {
        self.dealt = cards.clone();
        self.hand = cards;
    }

    pub fn dealt_hand(&self) -> &[Card] {
        &self.dealt
    }

    /// Remove and return the card at `index`.
    pub fn play_card_at(&mut self, index: usize) -> Result<Card, DomainError> {
        if index >= self.hand.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardIndex,
                format!(
                    "Card index {index} out of range for hand of {}",
                    self.hand.len()
                ),
            ));
        }
        Ok(self.hand.remove(index))
    }

    /// Remove `card` from the hand by value.
    pub fn play_card(&mut self, card: Card) -> Result<Card, DomainError> {
        let index = self.hand.iter().position(|&held| held == card).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotHeld,
                format!("Player {} does not hold {card}", self.id),
            )
        })?;
        Ok(self.hand.remove(index))
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Clear the hand and every per-hand declaration.
    pub fn reset_for_new_hand(&mut self) {
        self.clear_hand();
        self.dealt.clear();
        self.declared_flor = false;
        self.envido_called = false;
    }

    pub fn envido_points(&self) -> u8 {
        envido_points(&self.dealt)
    }

    pub fn has_flor(&self) -> bool {
        has_flor(&self.dealt)
    }

    pub fn flor_points(&self) -> u8 {
        flor_points(&self.dealt)
    }

    pub fn declared_flor(&self) -> bool {
        self.declared_flor
    }

    pub fn envido_called(&self) -> bool {
        self.envido_called
    }

    pub(crate) fn mark_flor_declared(&mut self) {
        self.declared_flor = true;
    }

    pub(crate) fn mark_envido_called(&mut self) {
        self.envido_called = true;
    }
}
