use tracing::{debug, info, warn};

use super::{
    ActionOutcome, EnvidoState, HandEndReason, HandSummary, MatchOrchestrator, MatchPhase,
    StandardMatch,
};
use crate::ai::{BotDecisionProvider, RandomBot};
use crate::config::MatchConfig;
use crate::domain::rules::{cards_per_deal, PLAYERS};
use crate::domain::state::{next_player, side_of, PlayerId, Side};
use crate::domain::{deal, BettingLadder, Deck, DeckSource, HandState, Player, Scoreboard};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::observer::{GameObserver, TracingObserver};

impl StandardMatch {
    /// Orchestrator with a `Deck` and a `RandomBot`, both seeded from
    /// `config.seed` when set, reporting through `TracingObserver`.
    pub fn standard(config: MatchConfig, players: Vec<Player>) -> Result<Self, DomainError> {
        let deck = match config.seed {
            Some(seed) => Deck::with_seed(config.deck_mode, seed),
            None => Deck::new(config.deck_mode),
        };
        let bot = RandomBot::new(config.seed);
        MatchOrchestrator::new(config, players, deck, bot, TracingObserver)
    }
}

impl<D, B, O> MatchOrchestrator<D, B, O>
where
    D: DeckSource,
    B: BotDecisionProvider,
    O: GameObserver,
{
    /// Build a match. Players must occupy seats 0..=3 in order.
    ///
    /// No cards are dealt until `start_new_hand`.
    pub fn new(
        config: MatchConfig,
        players: Vec<Player>,
        deck: D,
        bot: B,
        observer: O,
    ) -> Result<Self, DomainError> {
        if players.len() != PLAYERS {
            return Err(DomainError::validation_other(format!(
                "A match needs exactly {PLAYERS} players, got {}",
                players.len()
            )));
        }
        if let Some((seat, player)) = players
            .iter()
            .enumerate()
            .find(|(seat, p)| p.id() as usize != *seat)
        {
            return Err(DomainError::validation_other(format!(
                "Player {} sits at seat {seat}; ids must match seats",
                player.id()
            )));
        }
        if config.first_leader as usize >= PLAYERS {
            return Err(DomainError::validation_other(format!(
                "First leader {} is not a seat",
                config.first_leader
            )));
        }

        let leader = config.first_leader;
        Ok(Self {
            scoreboard: Scoreboard::new(config.target_score),
            config,
            players,
            deck,
            bot,
            observer,
            ladder: BettingLadder::new(),
            hand: HandState::new(leader),
            trick: Vec::with_capacity(PLAYERS),
            current_turn: leader,
            resume_turn: None,
            envido: EnvidoState::Open,
            hand_leader: leader,
            phase: MatchPhase::AwaitingDeal,
        })
    }

    /// Reset, shuffle and deal a new hand led by the current mão.
    ///
    /// Only valid while no hand is in progress. On `DeckExhausted` the match
    /// stays in `AwaitingDeal` and the players keep whatever they held.
    pub fn start_new_hand(&mut self) -> Result<(), DomainError> {
        if self.phase != MatchPhase::AwaitingDeal {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot deal a new hand while {:?}", self.phase),
            ));
        }

        let leader = self.hand_leader;
        self.deck.reset();
        let needed = cards_per_deal(PLAYERS);
        let remaining = self.deck.remaining();
        if remaining < needed {
            return Err(DomainError::DeckExhausted { needed, remaining });
        }
        self.deck.shuffle();
        for player in &mut self.players {
            player.reset_for_new_hand();
        }
        deal(&mut self.deck, &mut self.players, leader)?;

        self.ladder.reset();
        self.hand = HandState::new(leader);
        self.trick.clear();
        self.sync_hand_points();
        self.envido = EnvidoState::Open;
        self.resume_turn = None;
        self.current_turn = leader;
        self.phase = MatchPhase::Playing;

        info!(leader, "Hand started");
        self.observer.start_new_hand();
        let hands: [Vec<_>; PLAYERS] =
            std::array::from_fn(|seat| self.players[seat].hand().to_vec());
        self.observer.show_hands(&hands);
        Ok(())
    }

    /// Start over: zero the scoreboard, hand the first lead back to
    /// `config.first_leader` and deal.
    pub fn new_match(&mut self) -> Result<(), DomainError> {
        self.scoreboard.reset();
        self.hand_leader = self.config.first_leader;
        self.phase = MatchPhase::AwaitingDeal;
        let totals = self.scoreboard.totals();
        self.observer.update_scoreboard(totals.us, totals.them);
        info!(leader = self.hand_leader, "Match started");
        self.start_new_hand()
    }

    /// Score the finished hand into `outcome`, then either end the match or
    /// deal the next hand.
    ///
    /// The hand is already scored when the next deal runs, so a failed deal is
    /// reported through `outcome.deal_pending` rather than as an error.
    pub(super) fn finish_hand(
        &mut self,
        reason: HandEndReason,
        outcome: &mut ActionOutcome,
    ) -> Result<(), DomainError> {
        let winner = match reason {
            HandEndReason::Tricks => self
                .hand
                .winner()
                .ok_or_else(|| DomainError::invariant("hand scored before it was decided"))?,
            HandEndReason::TrucoDeclined => self
                .ladder
                .last_caller()
                .map(side_of)
                .ok_or_else(|| DomainError::invariant("declined truco without a caller"))?,
        };
        let points = self.ladder.points();

        self.sync_hand_points();
        self.scoreboard.add_points(winner, u16::from(points));
        let totals = self.scoreboard.totals();
        let summary = HandSummary {
            winner,
            points,
            reason,
            tricks_won: self.hand.tricks_won(),
            totals,
        };

        info!(
            ?winner,
            points,
            ?reason,
            us = totals.us,
            them = totals.them,
            "Hand finished"
        );
        self.observer.hand_ended(&summary);
        self.observer.update_scoreboard(totals.us, totals.them);

        self.phase = MatchPhase::AwaitingDeal;
        self.resume_turn = None;
        outcome.hand = Some(summary);
        outcome.match_winner = self.check_match_end();
        if outcome.match_winner.is_none() {
            self.hand_leader = next_player(self.hand_leader);
            if let Err(err) = self.start_new_hand() {
                warn!(error = %err, leader = self.hand_leader, "Next hand could not be dealt");
                outcome.deal_pending = true;
            }
        }
        Ok(())
    }

    /// Award bonus points mid-hand and report the new totals.
    pub(super) fn award_bonus(&mut self, side: Side, points: u8) -> Option<Side> {
        self.scoreboard.add_points(side, u16::from(points));
        let totals = self.scoreboard.totals();
        self.observer.update_scoreboard(totals.us, totals.them);
        self.check_match_end()
    }

    /// Finish the match if a side reached the target.
    fn check_match_end(&mut self) -> Option<Side> {
        let winner = self.scoreboard.winner()?;
        self.phase = MatchPhase::Finished { winner };
        self.resume_turn = None;
        info!(?winner, totals = ?self.scoreboard.totals(), "Match finished");
        self.observer.match_ended(winner);
        Some(winner)
    }

    /// Point the scoreboard's hand counter at the ladder's current stake.
    pub(super) fn sync_hand_points(&mut self) {
        self.scoreboard.reset_hand_points();
        self.scoreboard.add_hand_points(u16::from(self.ladder.points()));
    }

    /// Seat whose turn resumes after a negotiation.
    pub(super) fn take_resume_turn(&mut self) -> PlayerId {
        let turn = self.resume_turn.take().unwrap_or(self.current_turn);
        debug!(turn, "Turn resumes");
        turn
    }
}
