//! Engine test support utilities
//!
//! Collaborators with predictable behavior for driving a `MatchOrchestrator`
//! in tests: a scripted deck, scripted bots, an observer that records every
//! notification, card fixtures and unified logging initialization.

pub mod fixtures;
pub mod recording_observer;
pub mod scripted_bot;
pub mod stacked_deck;
pub mod test_logging;

pub use recording_observer::{ObserverEvent, RecordingObserver};
pub use scripted_bot::{FirstLegalBot, ScriptedBot};
pub use stacked_deck::StackedDeck;
