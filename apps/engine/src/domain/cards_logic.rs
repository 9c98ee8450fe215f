//! Card game logic: trick strength (manilhas) and envido values

use super::cards_types::{Card, Rank, Suit};

/// Strength of a card when contesting a round (1..=14, higher wins).
///
/// Order: 1 of Swords, 1 of Clubs, 7 of Swords, 7 of Coins (the manilhas),
/// then 3s, 2s, the remaining Aces, Kings, Knights, Jacks, the remaining 7s,
/// 6s, 5s and 4s. Eights and nines only exist in the full deck and rank 0.
pub fn trick_strength(card: Card) -> u8 {
    match (card.rank, card.suit) {
        (Rank::Ace, Suit::Swords) => 14,
        (Rank::Ace, Suit::Clubs) => 13,
        (Rank::Seven, Suit::Swords) => 12,
        (Rank::Seven, Suit::Coins) => 11,
        (Rank::Three, _) => 10,
        (Rank::Two, _) => 9,
        (Rank::Ace, _) => 8,
        (Rank::King, _) => 7,
        (Rank::Knight, _) => 6,
        (Rank::Jack, _) => 5,
        (Rank::Seven, _) => 4,
        (Rank::Six, _) => 3,
        (Rank::Five, _) => 2,
        (Rank::Four, _) => 1,
        (Rank::Eight, _) | (Rank::Nine, _) => 0,
    }
}

/// True when `card` is one of the four elevated cards.
pub fn is_manilha(card: Card) -> bool {
    trick_strength(card) >= 11
}

/// Envido value of a single card: its face value up to 7, zero otherwise.
pub fn envido_value(card: Card) -> u8 {
    let value = card.rank.value();
    if value <= 7 {
        value
    } else {
        0
    }
}

/// `a` strictly beats `b` in a round.
pub fn card_beats(a: Card, b: Card) -> bool {
    trick_strength(a) > trick_strength(b)
}
