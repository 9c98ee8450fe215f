// Proptest generators for domain types.
// Card generators stay inside the 40-card Truco deck unless stated otherwise.

use proptest::prelude::*;

use crate::domain::deck::{canonical_order, DeckMode};
use crate::domain::{BetCall, Card, PlayerId, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Swords),
        Just(Suit::Clubs),
        Just(Suit::Coins),
        Just(Suit::Cups),
    ]
}

/// Generate a Rank that exists in the Truco deck (no 8 or 9)
pub fn truco_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(
        Rank::ALL
            .iter()
            .copied()
            .filter(|r| !matches!(r, Rank::Eight | Rank::Nine))
            .collect::<Vec<_>>(),
    )
}

/// Generate a single Truco-deck Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), truco_rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate N distinct cards from the Truco deck
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(canonical_order(DeckMode::Truco))
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// Generate a seat (0..=3)
pub fn seat() -> impl Strategy<Value = PlayerId> {
    0u8..4
}

/// Generate any ladder move
pub fn bet_call() -> impl Strategy<Value = BetCall> {
    prop_oneof![
        Just(BetCall::Truco),
        Just(BetCall::Retruco),
        Just(BetCall::ValeQuatro),
        Just(BetCall::Accept),
        Just(BetCall::Decline),
    ]
}

/// Generate a script of ladder moves with their callers
pub fn bet_script() -> impl Strategy<Value = Vec<(BetCall, PlayerId)>> {
    prop::collection::vec((bet_call(), seat()), 0..12)
}
