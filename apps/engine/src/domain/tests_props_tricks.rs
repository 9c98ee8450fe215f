//! Property tests for round resolution (pure domain).
//!
//! Properties tested:
//! - A won round goes to the holder of the strictly strongest card
//! - Parda happens exactly when the strongest value is shared
//! - Parda keeps the round leader, a win hands the lead to the winner

use proptest::prelude::*;

use crate::domain::state::nth_from;
use crate::domain::tricks::{resolve_trick, TrickOutcome};
use crate::domain::{side_of, test_gens, test_prelude, trick_strength, Card, PlayerId};

fn plays_from(leader: PlayerId, cards: &[Card]) -> Vec<(PlayerId, Card)> {
    cards
        .iter()
        .enumerate()
        .map(|(i, &card)| (nth_from(leader, i as u8), card))
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_winner_holds_the_strongest_card(
        cards in test_gens::unique_cards(4),
        leader in test_gens::seat(),
    ) {
        let plays = plays_from(leader, &cards);
        let max = cards.iter().map(|&c| trick_strength(c)).max().unwrap();
        let holders = plays.iter().filter(|(_, c)| trick_strength(*c) == max).count();

        let result = resolve_trick(&plays, leader).unwrap();
        match result.outcome {
            TrickOutcome::Won { winner, side } => {
                prop_assert_eq!(holders, 1);
                let (_, card) = plays.iter().find(|(p, _)| *p == winner).unwrap();
                prop_assert_eq!(trick_strength(*card), max);
                prop_assert_eq!(side, side_of(winner));
                prop_assert_eq!(result.next_leader, winner);
            }
            TrickOutcome::Parda => {
                prop_assert!(holders > 1);
                prop_assert_eq!(result.next_leader, leader);
            }
        }
    }
}
