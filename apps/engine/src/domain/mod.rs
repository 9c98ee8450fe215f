//! Domain layer: pure Truco rules, types and helpers.

pub mod actions;
pub mod betting;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod envido;
pub mod hand;
pub mod player;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_betting;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use actions::Action;
pub use betting::{BetCall, BetLevel, BettingLadder, LadderState};
pub use cards_logic::{card_beats, envido_value, is_manilha, trick_strength};
pub use cards_types::{Card, Rank, Suit};
pub use deck::{Deck, DeckMode, DeckSource};
pub use envido::{envido_points, flor_points, has_flor};
pub use hand::{deal, HandState};
pub use player::Player;
pub use player_view::BotContext;
pub use scoring::Scoreboard;
pub use state::{next_player, side_of, PlayerId, Side, SideTally};
pub use tricks::{resolve_trick, TrickOutcome, TrickResult};
