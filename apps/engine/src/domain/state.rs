use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;

pub type PlayerId = u8; // 0..=3, also the seat number

/// The two partnerships. Seats 0 and 2 play as `Us`, seats 1 and 3 as `Them`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Us,
    Them,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Us => Side::Them,
            Side::Them => Side::Us,
        }
    }
}

/// Partnership a seat belongs to.
#[inline]
pub fn side_of(player: PlayerId) -> Side {
    if player % 2 == 0 {
        Side::Us
    } else {
        Side::Them
    }
}

/// Per-side counter (rounds won, points, ...).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SideTally<T> {
    pub us: T,
    pub them: T,
}

impl<T: Copy> SideTally<T> {
    pub fn get(&self, side: Side) -> T {
        match side {
            Side::Us => self.us,
            Side::Them => self.them,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Us => &mut self.us,
            Side::Them => &mut self.them,
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Every layer shares these for rotation and "who acts next".
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Returns the previous player counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_player(p: PlayerId) -> PlayerId {
    seat_offset(p, -1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    seat_offset(start, n as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(next_player(3), 0);
        assert_eq!(prev_player(0), 3);
        assert_eq!(nth_from(2, 3), 1);
    }

    #[test]
    fn partners_share_a_side() {
        assert_eq!(side_of(0), side_of(2));
        assert_eq!(side_of(1), side_of(3));
        assert_ne!(side_of(0), side_of(1));
        for p in 0..4 {
            assert_ne!(side_of(p), side_of(next_player(p)));
        }
    }

    #[test]
    fn tally_reads_and_writes_by_side() {
        let mut tally = SideTally::<u8>::default();
        *tally.get_mut(Side::Them) += 2;
        assert_eq!(tally.get(Side::Them), 2);
        assert_eq!(tally.get(Side::Us), 0);
        assert_eq!(Side::Us.opponent(), Side::Them);
    }
}
