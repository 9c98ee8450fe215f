//! Card and table fixtures.

use truco_engine::domain::cards_parsing::try_parse_cards;
use truco_engine::{Card, MatchConfig, Player};

/// Parse one card token ("7D").
pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// Parse card tokens in order.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

/// Four players; `bots[seat]` marks the bot seats.
pub fn table(bots: [bool; 4]) -> Vec<Player> {
    const NAMES: [&str; 4] = ["Ana", "Bruno", "Carla", "Davi"];
    (0u8..4)
        .map(|seat| Player::new(seat, NAMES[seat as usize], bots[seat as usize]))
        .collect()
}

pub fn four_humans() -> Vec<Player> {
    table([false; 4])
}

pub fn four_bots() -> Vec<Player> {
    table([true; 4])
}

/// Seat 0 human against three bots.
pub fn human_vs_bots() -> Vec<Player> {
    table([false, true, true, true])
}

/// Seeded configuration so decks and bots repeat between runs.
pub fn seeded_config(seed: u64) -> MatchConfig {
    MatchConfig {
        seed: Some(seed),
        ..MatchConfig::default()
    }
}

/// Reference table used across the integration tests, by seat.
///
/// Seat 0 holds the 1 of Swords and seat 2 the 1 of Clubs; seat 3 holds
/// only figures.
pub const REFERENCE_HANDS: [[&str; 3]; 4] = [
    ["1S", "7S", "3H"],
    ["2C", "4D", "5H"],
    ["1C", "7D", "6H"],
    ["10S", "11D", "12H"],
];
