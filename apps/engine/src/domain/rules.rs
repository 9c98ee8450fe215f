pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 3;
pub const ROUNDS_PER_HAND: u8 = 3;
/// Rounds a side needs to take the hand outright.
pub const ROUNDS_TO_WIN: u8 = 2;
pub const MATCH_TARGET: u16 = 30;

/// Points a hand is worth before anyone calls truco.
pub const BASE_HAND_POINTS: u8 = 1;

pub const ENVIDO_ACCEPTED_POINTS: u8 = 2;
pub const ENVIDO_DECLINED_POINTS: u8 = 1;
pub const FLOR_POINTS: u8 = 3;
/// Bonus added to the envido sum of two same-suit cards.
pub const ENVIDO_SUIT_BONUS: u8 = 20;

/// Cards needed to deal a full hand to every seat.
pub const fn cards_per_deal(players: usize) -> usize {
    players * HAND_SIZE
}
