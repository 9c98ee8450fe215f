use serde::Serialize;

use crate::domain::cards_logic::trick_strength;
use crate::domain::state::{side_of, PlayerId, Side};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// How a round came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrickOutcome {
    /// A single player holds the strongest card.
    Won { winner: PlayerId, side: Side },
    /// Tie on the strongest card; each side is credited the round.
    Parda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrickResult {
    pub outcome: TrickOutcome,
    /// Who leads the next round.
    pub next_leader: PlayerId,
}

impl TrickResult {
    pub fn winning_side(&self) -> Option<Side> {
        match self.outcome {
            TrickOutcome::Won { side, .. } => Some(side),
            TrickOutcome::Parda => None,
        }
    }

    pub fn is_parda(&self) -> bool {
        matches!(self.outcome, TrickOutcome::Parda)
    }
}

/// Resolve a round from its plays (in play order) and the round's leader.
///
/// The strongest card held by one player wins the round and its holder leads
/// next. When two or more players tie on the strongest value the round is a
/// parda and `leader` keeps the lead.
pub fn resolve_trick(
    plays: &[(PlayerId, Card)],
    leader: PlayerId,
) -> Result<TrickResult, DomainError> {
    let Some(max) = plays.iter().map(|&(_, card)| trick_strength(card)).max() else {
        return Err(DomainError::invariant("cannot resolve a round with no plays"));
    };

    let holders: Vec<PlayerId> = plays
        .iter()
        .filter(|&&(_, card)| trick_strength(card) == max)
        .map(|&(player, _)| player)
        .collect();

    match holders.as_slice() {
        [winner] => Ok(TrickResult {
            outcome: TrickOutcome::Won {
                winner: *winner,
                side: side_of(*winner),
            },
            next_leader: *winner,
        }),
        _ => Ok(TrickResult {
            outcome: TrickOutcome::Parda,
            next_leader: leader,
        }),
    }
}
