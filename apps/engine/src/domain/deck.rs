//! Spanish deck with shuffle, deal-from-top and reset.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Card, Rank, Suit};

/// Which cards make up the deck.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckMode {
    /// 40 cards: eights and nines removed.
    #[default]
    Truco,
    /// All 48 cards of the Spanish deck.
    Full,
}

/// Card source consumed by the dealer.
///
/// `draw` returns `None` once empty. Implementations must hand out at least
/// `remaining()` cards before returning `None`.
pub trait DeckSource {
    fn draw(&mut self) -> Option<Card>;
    fn shuffle(&mut self);
    fn reset(&mut self);
    fn remaining(&self) -> usize;
}

/// Canonical, unshuffled card order for a mode: suit by suit, ascending face value.
pub fn canonical_order(mode: DeckMode) -> Vec<Card> {
    let ranks = Rank::ALL.iter().copied().filter(|rank| match mode {
        DeckMode::Truco => !matches!(rank, Rank::Eight | Rank::Nine),
        DeckMode::Full => true,
    });
    let ranks: Vec<Rank> = ranks.collect();

    let mut deck = Vec::with_capacity(Suit::ALL.len() * ranks.len());
    for suit in Suit::ALL {
        for &rank in &ranks {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// The standard deck. The top card is the last element of `cards`.
#[derive(Debug, Clone)]
pub struct Deck {
    mode: DeckMode,
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Unshuffled deck with an OS-seeded shuffler.
    pub fn new(mode: DeckMode) -> Self {
        Self::with_rng(mode, ChaCha8Rng::from_os_rng())
    }

    /// Unshuffled deck whose shuffles are reproducible from `seed`.
    pub fn with_seed(mode: DeckMode, seed: u64) -> Self {
        Self::with_rng(mode, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(mode: DeckMode, rng: ChaCha8Rng) -> Self {
        Self {
            mode,
            cards: canonical_order(mode),
            rng,
        }
    }

    pub fn mode(&self) -> DeckMode {
        self.mode
    }

    /// Cards still in the deck, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl DeckSource for Deck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "Deck shuffled");
    }

    fn reset(&mut self) {
        self.cards = canonical_order(self.mode);
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
