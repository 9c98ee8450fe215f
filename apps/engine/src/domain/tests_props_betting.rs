//! Property tests for the betting ladder.
//!
//! Properties tested:
//! - Points are always 1..=4
//! - While not declined, points follow the rung: 1, 2, 3, 4
//! - After a decline, points are one rung below the declined raise
//! - Rejected calls leave the ladder untouched
//! - Consecutive raises alternate sides

use proptest::prelude::*;

use crate::domain::state::side_of;
use crate::domain::{test_gens, test_prelude, BetCall, BettingLadder, LadderState};

fn rung_points(state: LadderState) -> Option<u8> {
    match state {
        LadderState::NotCalled => Some(1),
        LadderState::Truco => Some(2),
        LadderState::Retruco => Some(3),
        LadderState::ValeQuatro => Some(4),
        LadderState::Declined => None,
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_ladder_points_track_state(script in test_gens::bet_script()) {
        let mut ladder = BettingLadder::new();
        let mut last_raiser = None;

        for (call, player) in script {
            let before = ladder.clone();
            match ladder.call(call, player) {
                Ok(()) => {
                    if call.raise_level().is_some() {
                        if let Some(prev) = last_raiser {
                            prop_assert_ne!(side_of(prev), side_of(player));
                        }
                        last_raiser = Some(player);
                    }
                }
                Err(_) => prop_assert_eq!(&ladder, &before),
            }

            prop_assert!((1..=4).contains(&ladder.points()));
            match rung_points(ladder.state()) {
                Some(points) => prop_assert_eq!(ladder.points(), points),
                None => {
                    let declined = ladder.level().map(|l| l.points_before());
                    prop_assert_eq!(Some(ladder.points()), declined);
                    prop_assert!(!ladder.is_awaiting_response());
                }
            }
        }
    }

    #[test]
    fn prop_decline_pays_last_caller(raises in 1usize..=3, opener in test_gens::seat()) {
        let mut ladder = BettingLadder::new();
        let calls = [BetCall::Truco, BetCall::Retruco, BetCall::ValeQuatro];
        let mut player = opener;
        for call in calls.iter().take(raises) {
            ladder.call(*call, player).unwrap();
            player = crate::domain::next_player(player);
        }
        let caller = ladder.last_caller();
        ladder.call(BetCall::Decline, player).unwrap();
        prop_assert_eq!(ladder.points() as usize, raises);
        prop_assert_eq!(ladder.last_caller(), caller);
    }
}
