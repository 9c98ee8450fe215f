//! Core card-related types: Card, Rank, Suit

use std::fmt;

/// Spanish-deck suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    /// Espadas
    Swords,
    /// Paus / Bastos
    Clubs,
    /// Ouros
    Coins,
    /// Copas
    Cups,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Swords, Suit::Clubs, Suit::Coins, Suit::Cups];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Swords => "Swords",
            Suit::Clubs => "Clubs",
            Suit::Coins => "Coins",
            Suit::Cups => "Cups",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Sota (10)
    Jack,
    /// Cavalo (11)
    Knight,
    /// Rei (12)
    King,
}

impl Rank {
    /// Every rank of the 48-card Spanish deck, in face-value order.
    pub const ALL: [Rank; 12] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Jack,
        Rank::Knight,
        Rank::King,
    ];

    /// Face value printed on the card (1..=12).
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Jack => 10,
            Rank::Knight => 11,
            Rank::King => 12,
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Figures (10, 11, 12) are worth nothing for envido.
    pub fn is_figure(self) -> bool {
        matches!(self, Rank::Jack | Rank::Knight | Rank::King)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { suit, rank }
    }
}

// Note: Ord on Card is only for stable sorting (suit, then face value).
// Trick resolution goes through `trick_strength`, never through this order.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.value(), self.suit.name())
    }
}
