//! Envido and flor scoring over a hand of cards.

use crate::domain::cards_logic::envido_value;
use crate::domain::rules::{ENVIDO_SUIT_BONUS, HAND_SIZE};
use crate::domain::{Card, Suit};

/// Envido points of a hand.
///
/// - Two or more cards of one suit: the two highest envido values of that
///   suit plus 20 (with three, the lowest is discarded).
/// - Otherwise: the highest single envido value (figures count 0).
pub fn envido_points(hand: &[Card]) -> u8 {
    let best_suited = Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let mut values: Vec<u8> = hand
                .iter()
                .filter(|c| c.suit == suit)
                .map(|&c| envido_value(c))
                .collect();
            if values.len() < 2 {
                return None;
            }
            values.sort_unstable_by(|a, b| b.cmp(a));
            Some(values[0] + values[1] + ENVIDO_SUIT_BONUS)
        })
        .max();

    best_suited.unwrap_or_else(|| hand.iter().map(|&c| envido_value(c)).max().unwrap_or(0))
}

/// A full hand whose three cards share one suit.
pub fn has_flor(hand: &[Card]) -> bool {
    match hand.split_first() {
        Some((first, rest)) if hand.len() == HAND_SIZE => {
            rest.iter().all(|c| c.suit == first.suit)
        }
        _ => false,
    }
}

/// Flor points: the envido count of the whole hand.
///
/// Without flor this falls back to the plain envido count.
pub fn flor_points(hand: &[Card]) -> u8 {
    envido_points(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;

    fn hand(tokens: &[&str]) -> Vec<Card> {
        try_parse_cards(tokens).expect("hardcoded valid card tokens")
    }

    #[test]
    fn no_matching_suits_takes_highest_value() {
        assert_eq!(envido_points(&hand(&["7D", "5C", "1H"])), 7);
        assert_eq!(envido_points(&hand(&["12D", "11C", "10H"])), 0);
        assert_eq!(envido_points(&hand(&["12D", "6C", "2H"])), 6);
    }

    #[test]
    fn same_value_different_suits_does_not_add() {
        assert_eq!(envido_points(&hand(&["3C", "3H", "1D"])), 3);
    }

    #[test]
    fn two_same_suit_cards_add_twenty() {
        assert_eq!(envido_points(&hand(&["7D", "5D", "1H"])), 32);
        assert_eq!(envido_points(&hand(&["12D", "6D", "1H"])), 26);
        assert_eq!(envido_points(&hand(&["10C", "11C", "7S"])), 20);
        assert_eq!(envido_points(&hand(&["7S", "12S", "1D"])), 27);
    }

    #[test]
    fn three_same_suit_cards_drop_the_lowest() {
        assert_eq!(envido_points(&hand(&["7D", "5D", "3D"])), 32);
        assert_eq!(envido_points(&hand(&["7D", "5D", "12D"])), 32);
        assert_eq!(envido_points(&hand(&["7D", "10D", "12D"])), 27);
        assert_eq!(envido_points(&hand(&["10D", "11D", "12D"])), 20);
    }

    #[test]
    fn flor_needs_three_cards_of_one_suit() {
        assert!(has_flor(&hand(&["1D", "5D", "12D"])));
        assert!(has_flor(&hand(&["10C", "11C", "3C"])));
        assert!(!has_flor(&hand(&["1D", "5D", "12S"])));
        assert!(!has_flor(&hand(&["1D", "5H", "12S"])));
        assert!(!has_flor(&hand(&["1D", "5D"])));
        assert!(!has_flor(&[]));
    }

    #[test]
    fn flor_points_match_envido_rules() {
        assert_eq!(flor_points(&hand(&["7D", "5D", "12D"])), 32);
        assert_eq!(flor_points(&hand(&["10C", "11C", "3C"])), 23);
        assert_eq!(flor_points(&hand(&["7D", "5D", "1H"])), 32);
        assert_eq!(flor_points(&hand(&["7D", "5C", "1H"])), 7);
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(envido_points(&[]), 0);
    }
}
