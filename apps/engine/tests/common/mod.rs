#![allow(dead_code)]

// tests/common/mod.rs
use engine_test_support::fixtures::{four_humans, REFERENCE_HANDS};
use engine_test_support::{RecordingObserver, ScriptedBot, StackedDeck};
use truco_engine::{
    ActionOutcome, BettingLadder, Card, DeckSource, DomainError, GameObserver, MatchConfig,
    MatchOrchestrator, Player, PlayerId, SideTally, ValidationKind,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::test_logging::init();
}

pub type TestMatch = MatchOrchestrator<StackedDeck, ScriptedBot, RecordingObserver>;

/// Dealt match with the given collaborators and a `RecordingObserver`.
pub fn started<D, B>(
    config: MatchConfig,
    players: Vec<Player>,
    deck: D,
    bot: B,
) -> MatchOrchestrator<D, B, RecordingObserver>
where
    D: DeckSource,
    B: truco_engine::BotDecisionProvider,
{
    let mut game = MatchOrchestrator::new(config, players, deck, bot, RecordingObserver::new())
        .expect("valid match setup");
    game.new_match().expect("first deal");
    game
}

/// Four humans holding `hands`, seat 0 as mão.
pub fn match_with_hands(config: MatchConfig, hands: &[[&str; 3]; 4]) -> TestMatch {
    started(
        config,
        four_humans(),
        StackedDeck::from_hands(hands, 0),
        ScriptedBot::default(),
    )
}

/// Four humans holding `REFERENCE_HANDS`, seat 0 as mão.
pub fn reference_match() -> TestMatch {
    match_with_hands(MatchConfig::default(), &REFERENCE_HANDS)
}

/// Submit card plays in order and return the last outcome.
pub fn play_cards<D, B, O>(
    game: &mut MatchOrchestrator<D, B, O>,
    plays: &[(PlayerId, usize)],
) -> ActionOutcome
where
    D: DeckSource,
    B: truco_engine::BotDecisionProvider,
    O: GameObserver,
{
    let mut last = None;
    for &(player, index) in plays {
        let outcome = game
            .submit_action(player, truco_engine::Action::PlayCard(index))
            .unwrap_or_else(|e| panic!("player {player} playing card {index}: {e}"));
        last = Some(outcome);
    }
    last.expect("at least one play")
}

pub fn assert_kind<T: std::fmt::Debug>(result: Result<T, DomainError>, kind: ValidationKind) {
    let err = result.expect_err("action should be rejected");
    assert_eq!(err.kind(), Some(&kind), "unexpected error: {err}");
}

/// Everything a rejected action must leave untouched.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    turn: PlayerId,
    players: Vec<Player>,
    ladder: BettingLadder,
    totals: SideTally<u16>,
    trick: Vec<(PlayerId, Card)>,
    envido_open: bool,
    envido_pending: bool,
    events: usize,
}

pub fn snapshot(game: &TestMatch) -> Snapshot {
    Snapshot {
        turn: game.current_turn(),
        players: game.players().to_vec(),
        ladder: game.ladder().clone(),
        totals: game.scoreboard().totals(),
        trick: game.current_trick().to_vec(),
        envido_open: game.envido_open(),
        envido_pending: game.envido_pending(),
        events: game.observer().events().len(),
    }
}
