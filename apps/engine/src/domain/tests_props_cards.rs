//! Property tests for card ranking, envido and the deck.
//!
//! Properties tested:
//! - Truco-deck strengths stay within 1..=14
//! - `card_beats` is a strict order consistent with `trick_strength`
//! - Envido points never exceed 33 and flor implies envido above 20
//! - Seeded shuffles are permutations of the canonical deck

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::deck::{canonical_order, Deck, DeckMode, DeckSource};
use crate::domain::{card_beats, envido_points, has_flor, test_gens, test_prelude, trick_strength};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_strength_in_range(card in test_gens::card()) {
        let s = trick_strength(card);
        prop_assert!((1..=14).contains(&s), "strength {} out of range for {}", s, card);
    }

    #[test]
    fn prop_beats_is_strict(a in test_gens::card(), b in test_gens::card()) {
        prop_assert!(!(card_beats(a, b) && card_beats(b, a)));
        prop_assert_eq!(card_beats(a, b), trick_strength(a) > trick_strength(b));
        prop_assert!(!card_beats(a, a));
    }

    #[test]
    fn prop_envido_bounds(hand in test_gens::unique_cards(3)) {
        let points = envido_points(&hand);
        prop_assert!(points <= 33);
        if has_flor(&hand) {
            prop_assert!(points >= 20);
        }
    }

    #[test]
    fn prop_seeded_shuffle_is_permutation(seed in any::<u64>()) {
        let mut deck = Deck::with_seed(DeckMode::Truco, seed);
        deck.shuffle();
        prop_assert_eq!(deck.remaining(), 40);
        let shuffled: HashSet<_> = deck.cards().iter().copied().collect();
        let canonical: HashSet<_> = canonical_order(DeckMode::Truco).into_iter().collect();
        prop_assert_eq!(shuffled, canonical);
    }
}
