//! Card parsing from compact tokens (e.g., "1S", "12H")
//!
//! A token is the face value followed by the French-suit letter of the
//! equivalent Spanish suit: `S` Swords, `C` Clubs, `D` Coins, `H` Cups.

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub(crate) fn suit_letter(suit: Suit) -> char {
    match suit {
        Suit::Swords => 'S',
        Suit::Clubs => 'C',
        Suit::Coins => 'D',
        Suit::Cups => 'H',
    }
}

/// Compact token for a card ("7D" for the 7 of Coins).
pub fn card_token(card: Card) -> String {
    format!("{}{}", card.rank.value(), suit_letter(card.suit))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let suit_ch = s.chars().last().ok_or_else(parse_err)?;
        let value_part = &s[..s.len() - suit_ch.len_utf8()];
        let value: u8 = value_part.parse().map_err(|_| parse_err())?;
        let rank = Rank::from_value(value).ok_or_else(parse_err)?;
        let suit = match suit_ch.to_ascii_uppercase() {
            'S' => Suit::Swords,
            'C' => Suit::Clubs,
            'D' => Suit::Coins,
            'H' => Suit::Cups,
            _ => return Err(parse_err()),
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns the first parse error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
