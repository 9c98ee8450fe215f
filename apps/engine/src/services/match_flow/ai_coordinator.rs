use tracing::{debug, warn};

use super::{ActionOutcome, MatchOrchestrator, MatchPhase};
use crate::ai::BotDecisionProvider;
use crate::domain::player_view::BotContext;
use crate::domain::state::{side_of, PlayerId};
use crate::domain::DeckSource;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::observer::GameObserver;

impl<D, B, O> MatchOrchestrator<D, B, O>
where
    D: DeckSource,
    B: BotDecisionProvider,
    O: GameObserver,
{
    /// The seat to act is a bot and a hand is in progress.
    pub fn is_bot_turn(&self) -> bool {
        self.phase == MatchPhase::Playing
            && self
                .players
                .get(self.current_turn as usize)
                .is_some_and(|p| p.is_bot())
    }

    /// What `player` sees right now, including the actions it may take.
    pub fn bot_context(&self, player: PlayerId) -> BotContext {
        BotContext {
            player,
            side: side_of(player),
            hand: self
                .players
                .get(player as usize)
                .map(|p| p.hand().to_vec())
                .unwrap_or_default(),
            current_trick: self.trick.clone(),
            round_index: self.hand.round_index(),
            hand_leader: self.hand.hand_leader(),
            tricks_won: self.hand.tricks_won(),
            ladder_state: self.ladder.state(),
            hand_points: self.ladder.points(),
            last_caller: self.ladder.last_caller(),
            bet_pending: self.ladder.is_awaiting_response(),
            envido_pending: self.envido_pending(),
            scores: self.scoreboard.totals(),
            target_score: self.scoreboard.target(),
            legal_actions: self.legal_actions(player),
        }
    }

    /// Ask the bot holding the turn for a decision and submit it.
    ///
    /// Fails with `NotBotTurn` when a human holds the turn. A decision the
    /// rules reject is returned as that error, with nothing applied.
    pub fn execute_bot_turn(&mut self) -> Result<ActionOutcome, DomainError> {
        if self.phase != MatchPhase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("No hand in progress ({:?})", self.phase),
            ));
        }
        let player = self.current_turn;
        if !self.is_bot_turn() {
            return Err(DomainError::validation(
                ValidationKind::NotBotTurn,
                format!("Player {player} is not a bot"),
            ));
        }

        let ctx = self.bot_context(player);
        let action = self.bot.decide(&ctx)?;
        debug!(
            player,
            action = action.label(),
            options = ctx.legal_actions.len(),
            "Bot decided"
        );

        self.submit_action(player, action).inspect_err(|e| {
            warn!(player, action = action.label(), error = %e, "Bot decision rejected");
        })
    }

    /// Play bot turns until a human is to act, the hand pauses for a deal,
    /// the match ends, or `config.max_bot_steps` actions have been taken.
    pub fn run_bots(&mut self) -> Result<Vec<ActionOutcome>, DomainError> {
        let mut outcomes = Vec::new();
        for _ in 0..self.config.max_bot_steps {
            if !self.is_bot_turn() {
                break;
            }
            outcomes.push(self.execute_bot_turn()?);
        }
        if self.is_bot_turn() {
            debug!(
                steps = outcomes.len(),
                player = self.current_turn,
                "Bot step limit reached"
            );
        }
        Ok(outcomes)
    }
}
