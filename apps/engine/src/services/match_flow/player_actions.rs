use tracing::debug;

use super::{
    ActionOutcome, BonusAward, BonusKind, EnvidoState, HandEndReason, MatchOrchestrator,
    MatchPhase,
};
use crate::ai::BotDecisionProvider;
use crate::domain::rules::{ENVIDO_ACCEPTED_POINTS, ENVIDO_DECLINED_POINTS, FLOR_POINTS, PLAYERS};
use crate::domain::state::{next_player, side_of, PlayerId, Side};
use crate::domain::{resolve_trick, Action, BetCall, DeckSource, LadderState};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::observer::GameObserver;

impl<D, B, O> MatchOrchestrator<D, B, O>
where
    D: DeckSource,
    B: BotDecisionProvider,
    O: GameObserver,
{
    /// Submit one action for `player`.
    ///
    /// The action is checked against phase, turn and the rules before any
    /// state changes; on `Err` nothing has moved. If the deal that follows a
    /// scored hand fails, the action still succeeds with `deal_pending` set.
    pub fn submit_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, DomainError> {
        self.check_action(player, action)?;
        debug!(player, action = action.label(), "Applying action");
        self.observer.show_action(player, action);

        match action {
            Action::PlayCard(index) => self.apply_play(player, index),
            Action::Truco | Action::Retruco | Action::ValeQuatro => {
                self.apply_raise(player, action)
            }
            Action::Accept | Action::Decline if self.envido_pending() => {
                self.apply_envido_answer(player, action)
            }
            Action::Accept => self.apply_bet_accept(player),
            Action::Decline => self.apply_bet_decline(player),
            Action::Envido => self.apply_envido(player),
            Action::Flor => self.apply_flor(player),
        }
    }

    /// Every action `player` could submit right now.
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        let hand_len = self
            .players
            .get(player as usize)
            .map_or(0, |p| p.hand().len());
        (0..hand_len)
            .map(Action::PlayCard)
            .chain([
                Action::Truco,
                Action::Retruco,
                Action::ValeQuatro,
                Action::Accept,
                Action::Decline,
                Action::Envido,
                Action::Flor,
            ])
            .filter(|&action| self.check_action(player, action).is_ok())
            .collect()
    }

    /// Full validation of an action without touching any state.
    pub fn check_action(&self, player: PlayerId, action: Action) -> Result<(), DomainError> {
        if self.phase != MatchPhase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("No hand in progress ({:?})", self.phase),
            ));
        }
        if player != self.current_turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!(
                    "Out of turn: player {player} acted, player {} is to act",
                    self.current_turn
                ),
            ));
        }

        match action {
            Action::PlayCard(index) => {
                self.require_no_pending_answer()?;
                let hand_len = self.players[player as usize].hand().len();
                if index >= hand_len {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidCardIndex,
                        format!("Card index {index} out of range for hand of {hand_len}"),
                    ));
                }
                Ok(())
            }
            Action::Truco
            | Action::Retruco
            | Action::ValeQuatro
            | Action::Accept
            | Action::Decline => {
                if self.envido_pending() {
                    return match action {
                        Action::Accept | Action::Decline => Ok(()),
                        _ => Err(DomainError::validation(
                            ValidationKind::ResponsePending,
                            "Answer the envido before raising",
                        )),
                    };
                }
                let Some(call) = action.bet_call() else {
                    return Err(DomainError::invariant("truco action without a ladder move"));
                };
                let mut trial = self.ladder.clone();
                trial.call(call, player)?;
                if self.ladder.is_awaiting_response() && self.resume_turn.is_none() {
                    return Err(DomainError::invariant("pending bet without a turn to resume"));
                }
                Ok(())
            }
            Action::Envido => {
                self.require_no_pending_answer()?;
                if self.envido != EnvidoState::Open {
                    return Err(DomainError::validation(
                        ValidationKind::EnvidoUnavailable,
                        "Envido was already played this hand",
                    ));
                }
                if self.ladder.state() != LadderState::NotCalled {
                    return Err(DomainError::validation(
                        ValidationKind::EnvidoUnavailable,
                        "Envido must come before truco",
                    ));
                }
                self.require_first_round_before_play(player, ValidationKind::EnvidoUnavailable)
            }
            Action::Flor => {
                self.require_no_pending_answer()?;
                let seat = &self.players[player as usize];
                if !seat.has_flor() {
                    return Err(DomainError::validation(
                        ValidationKind::FlorUnavailable,
                        "Flor needs three cards of one suit",
                    ));
                }
                if seat.declared_flor() {
                    return Err(DomainError::validation(
                        ValidationKind::FlorUnavailable,
                        "Flor already declared",
                    ));
                }
                self.require_first_round_before_play(player, ValidationKind::FlorUnavailable)
            }
        }
    }

    fn require_no_pending_answer(&self) -> Result<(), DomainError> {
        if self.ladder.is_awaiting_response() || self.envido_pending() {
            return Err(DomainError::validation(
                ValidationKind::ResponsePending,
                "An answer to a call is pending",
            ));
        }
        Ok(())
    }

    fn require_first_round_before_play(
        &self,
        player: PlayerId,
        kind: ValidationKind,
    ) -> Result<(), DomainError> {
        if self.hand.round_index() != 0 || self.trick.iter().any(|&(p, _)| p == player) {
            return Err(DomainError::validation(
                kind,
                "Only allowed in the first round before playing a card",
            ));
        }
        Ok(())
    }

    fn apply_play(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<ActionOutcome, DomainError> {
        let mut outcome = ActionOutcome::new(player, Action::PlayCard(index));
        let card = self.players[player as usize].play_card_at(index)?;
        self.trick.push((player, card));
        self.current_turn = next_player(player);
        self.observer.card_played(player, card);
        outcome.card = Some(card);

        if self.trick.len() < PLAYERS {
            return Ok(outcome);
        }

        let result = resolve_trick(&self.trick, self.hand.leader_of_round())?;
        self.hand.record_trick(result)?;
        self.trick.clear();
        self.observer.round_resolved(&result);
        debug!(
            round = self.hand.round_index(),
            outcome = ?result.outcome,
            next_leader = result.next_leader,
            "Round resolved"
        );
        outcome.round = Some(result);

        if self.hand.is_complete() {
            self.finish_hand(HandEndReason::Tricks, &mut outcome)?;
        } else {
            self.current_turn = result.next_leader;
        }
        Ok(outcome)
    }

    fn apply_raise(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, DomainError> {
        let call = action
            .bet_call()
            .ok_or_else(|| DomainError::invariant("raise without a ladder move"))?;
        let countered = self
            .ladder
            .is_awaiting_response()
            .then(|| self.ladder.last_caller())
            .flatten();
        self.ladder.call(call, player)?;
        if self.resume_turn.is_none() {
            self.resume_turn = Some(self.current_turn);
        }
        // A counter-raise goes back to whoever made the raise it answers.
        self.current_turn = countered.unwrap_or_else(|| next_player(player));
        debug!(
            player,
            points = self.ladder.points(),
            responder = self.current_turn,
            "Truco raised"
        );
        Ok(ActionOutcome::new(player, action))
    }

    fn apply_bet_accept(&mut self, player: PlayerId) -> Result<ActionOutcome, DomainError> {
        self.ladder.call(BetCall::Accept, player)?;
        self.sync_hand_points();
        self.current_turn = self.take_resume_turn();
        Ok(ActionOutcome::new(player, Action::Accept))
    }

    fn apply_bet_decline(&mut self, player: PlayerId) -> Result<ActionOutcome, DomainError> {
        self.ladder.call(BetCall::Decline, player)?;
        let mut outcome = ActionOutcome::new(player, Action::Decline);
        self.finish_hand(HandEndReason::TrucoDeclined, &mut outcome)?;
        Ok(outcome)
    }

    fn apply_envido(&mut self, player: PlayerId) -> Result<ActionOutcome, DomainError> {
        self.players[player as usize].mark_envido_called();
        self.envido = EnvidoState::Pending { caller: player };
        self.resume_turn = Some(self.current_turn);
        self.current_turn = next_player(player);
        debug!(player, responder = self.current_turn, "Envido called");
        Ok(ActionOutcome::new(player, Action::Envido))
    }

    fn apply_envido_answer(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, DomainError> {
        let EnvidoState::Pending { caller } = self.envido else {
            return Err(DomainError::invariant("envido answer without a pending envido"));
        };

        let bonus = if action == Action::Accept {
            let us = self.best_envido(Side::Us);
            let them = self.best_envido(Side::Them);
            let side = match us.cmp(&them) {
                std::cmp::Ordering::Greater => Side::Us,
                std::cmp::Ordering::Less => Side::Them,
                std::cmp::Ordering::Equal => side_of(self.hand.hand_leader()),
            };
            debug!(us, them, ?side, "Envido shown");
            BonusAward {
                kind: BonusKind::EnvidoAccepted,
                side,
                points: ENVIDO_ACCEPTED_POINTS,
            }
        } else {
            BonusAward {
                kind: BonusKind::EnvidoDeclined,
                side: side_of(caller),
                points: ENVIDO_DECLINED_POINTS,
            }
        };

        self.envido = EnvidoState::Closed;
        self.current_turn = self.take_resume_turn();
        let mut outcome = ActionOutcome::new(player, action);
        outcome.bonus = Some(bonus);
        outcome.match_winner = self.award_bonus(bonus.side, bonus.points);
        Ok(outcome)
    }

    fn apply_flor(&mut self, player: PlayerId) -> Result<ActionOutcome, DomainError> {
        self.players[player as usize].mark_flor_declared();
        self.envido = EnvidoState::Closed;
        let bonus = BonusAward {
            kind: BonusKind::Flor,
            side: side_of(player),
            points: FLOR_POINTS,
        };
        debug!(
            player,
            flor = self.players[player as usize].flor_points(),
            "Flor declared"
        );
        let mut outcome = ActionOutcome::new(player, Action::Flor);
        outcome.bonus = Some(bonus);
        outcome.match_winner = self.award_bonus(bonus.side, bonus.points);
        Ok(outcome)
    }

    fn best_envido(&self, side: Side) -> u8 {
        self.players
            .iter()
            .filter(|p| p.side() == side)
            .map(|p| p.envido_points())
            .max()
            .unwrap_or(0)
    }
}
