//! Deck with a scripted draw order.

use std::collections::VecDeque;

use truco_engine::domain::rules::HAND_SIZE;
use truco_engine::{Card, DeckSource, PlayerId};

use crate::fixtures::cards;

/// `DeckSource` that deals scripted cards instead of shuffled ones.
///
/// Holds one script per hand. `reset` loads the next script (wrapping
/// around), `shuffle` does nothing and `draw` takes from the front.
#[derive(Debug, Clone)]
pub struct StackedDeck {
    deals: Vec<Vec<Card>>,
    next_deal: usize,
    cards: VecDeque<Card>,
    resets: usize,
}

impl StackedDeck {
    /// One script, in draw order, repeated for every hand.
    pub fn new(draw_order: Vec<Card>) -> Self {
        Self::with_deals(vec![draw_order])
    }

    /// One script per hand, in draw order.
    pub fn with_deals(deals: Vec<Vec<Card>>) -> Self {
        assert!(!deals.is_empty(), "StackedDeck needs at least one deal");
        let cards = deals[0].iter().copied().collect();
        Self {
            deals,
            next_deal: 0,
            cards,
            resets: 0,
        }
    }

    /// Script that deals `hands[seat]` to each seat when `leader` is mão.
    pub fn from_hands(hands: &[[&str; HAND_SIZE]], leader: PlayerId) -> Self {
        Self::new(draw_order(hands, leader))
    }

    /// Hands for consecutive deals, each with its own mão.
    pub fn from_hand_sequence(deals: &[(&[[&str; HAND_SIZE]], PlayerId)]) -> Self {
        Self::with_deals(
            deals
                .iter()
                .map(|(hands, leader)| draw_order(hands, *leader))
                .collect(),
        )
    }

    /// How many times the deck was reset, i.e. how many deals were attempted.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

/// Draw order that makes a round-robin deal from `leader` produce `hands`.
pub fn draw_order(hands: &[[&str; HAND_SIZE]], leader: PlayerId) -> Vec<Card> {
    let seats = hands.len();
    let mut order = Vec::with_capacity(seats * HAND_SIZE);
    for pass in 0..HAND_SIZE {
        for offset in 0..seats {
            let seat = (leader as usize + offset) % seats;
            order.extend(cards(&[hands[seat][pass]]));
        }
    }
    order
}

impl DeckSource for StackedDeck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn shuffle(&mut self) {}

    fn reset(&mut self) {
        let deal = &self.deals[self.next_deal % self.deals.len()];
        self.cards = deal.iter().copied().collect();
        self.next_deal += 1;
        self.resets += 1;
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
