//! Match scoreboard.

use serde::Serialize;
use tracing::debug;

use crate::domain::rules::MATCH_TARGET;
use crate::domain::state::{Side, SideTally};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    totals: SideTally<u16>,
    /// Running value of the hand in progress.
    hand_points: u16,
    target: u16,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(MATCH_TARGET)
    }
}

impl Scoreboard {
    pub fn new(target: u16) -> Self {
        Self {
            totals: SideTally::default(),
            hand_points: 0,
            target,
        }
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    /// Award match points. Totals only ever grow.
    pub fn add_points(&mut self, side: Side, points: u16) {
        let total = self.totals.get_mut(side);
        *total = total.saturating_add(points);
        debug!(?side, points, us = self.totals.us, them = self.totals.them, "Points added");
    }

    pub fn totals(&self) -> SideTally<u16> {
        self.totals
    }

    /// First side at or above the target. `Us` is checked first.
    pub fn winner(&self) -> Option<Side> {
        if self.totals.us >= self.target {
            Some(Side::Us)
        } else if self.totals.them >= self.target {
            Some(Side::Them)
        } else {
            None
        }
    }

    /// Start a new match: both totals and the hand counter go back to zero.
    pub fn reset(&mut self) {
        self.totals = SideTally::default();
        self.hand_points = 0;
    }

    pub fn add_hand_points(&mut self, points: u16) {
        self.hand_points = self.hand_points.saturating_add(points);
    }

    pub fn hand_points(&self) -> u16 {
        self.hand_points
    }

    pub fn reset_hand_points(&mut self) {
        self.hand_points = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let board = Scoreboard::default();
        assert_eq!(board.totals(), SideTally { us: 0, them: 0 });
        assert_eq!(board.hand_points(), 0);
        assert_eq!(board.target(), 30);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn points_accumulate_per_side() {
        let mut board = Scoreboard::default();
        board.add_points(Side::Us, 3);
        board.add_points(Side::Them, 1);
        board.add_points(Side::Us, 2);
        assert_eq!(board.totals(), SideTally { us: 5, them: 1 });
    }

    #[test]
    fn hand_counter_adds_and_resets() {
        let mut board = Scoreboard::default();
        board.add_hand_points(1);
        board.add_hand_points(2);
        assert_eq!(board.hand_points(), 3);
        board.reset_hand_points();
        assert_eq!(board.hand_points(), 0);
    }

    #[test]
    fn reset_clears_totals() {
        let mut board = Scoreboard::default();
        board.add_points(Side::Us, 15);
        board.add_points(Side::Them, 10);
        board.reset();
        assert_eq!(board.totals(), SideTally { us: 0, them: 0 });
    }

    #[test]
    fn winner_needs_the_target() {
        let mut board = Scoreboard::default();
        board.add_points(Side::Us, 10);
        board.add_points(Side::Them, 15);
        assert_eq!(board.winner(), None);
        board.add_points(Side::Us, 19);
        assert_eq!(board.winner(), None);
        board.add_points(Side::Us, 1);
        assert_eq!(board.winner(), Some(Side::Us));
    }

    #[test]
    fn them_can_win() {
        let mut board = Scoreboard::default();
        board.add_points(Side::Them, 29);
        assert_eq!(board.winner(), None);
        board.add_points(Side::Them, 1);
        assert_eq!(board.winner(), Some(Side::Them));
    }

    #[test]
    fn us_is_checked_first_when_both_cross() {
        let mut board = Scoreboard::default();
        board.add_points(Side::Them, 31);
        board.add_points(Side::Us, 30);
        assert_eq!(board.winner(), Some(Side::Us));
    }

    #[test]
    fn custom_target_is_respected() {
        let mut board = Scoreboard::new(12);
        board.add_points(Side::Them, 12);
        assert_eq!(board.winner(), Some(Side::Them));
    }
}
