mod common;

use common::{assert_kind, snapshot, started};
use engine_test_support::fixtures::{four_bots, human_vs_bots, seeded_config, REFERENCE_HANDS};
use engine_test_support::{FirstLegalBot, ScriptedBot, StackedDeck};
use serde_json::json;
use truco_engine::{
    create_ai, Action, BotDecisionProvider, Deck, DeckMode, DomainError, LadderState,
    MatchConfig, MatchOrchestrator, MatchPhase, Side, StandardMatch, TracingObserver,
    ValidationKind,
};

fn scripted_table(actions: Vec<Action>) -> common::TestMatch {
    started(
        MatchConfig::default(),
        human_vs_bots(),
        StackedDeck::from_hands(&REFERENCE_HANDS, 0),
        ScriptedBot::new(actions),
    )
}

#[test]
fn bots_play_until_a_human_holds_the_turn() {
    let mut game = scripted_table(vec![Action::PlayCard(0); 3]);
    assert!(!game.is_bot_turn());
    assert_kind(game.execute_bot_turn(), ValidationKind::NotBotTurn);

    game.submit_action(0, Action::PlayCard(0)).unwrap();
    let outcomes = game.run_bots().unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes.iter().map(|o| o.player).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    let round = outcomes[2].round.expect("third bot play closes the round");
    assert_eq!(round.next_leader, 0);
    assert_eq!(game.current_turn(), 0);
    assert_eq!(game.bot().remaining(), 0);
}

#[test]
fn bots_see_their_hand_and_legal_actions() {
    let mut game = scripted_table(vec![Action::Truco]);
    game.submit_action(0, Action::PlayCard(0)).unwrap();

    let ctx = game.bot_context(1);
    assert_eq!(ctx.player, 1);
    assert_eq!(ctx.side, Side::Them);
    assert_eq!(ctx.hand.len(), 3);
    assert_eq!(ctx.current_trick.len(), 1);
    assert_eq!(ctx.hand_points, 1);
    assert_eq!(
        ctx.legal_actions,
        vec![
            Action::PlayCard(0),
            Action::PlayCard(1),
            Action::PlayCard(2),
            Action::Truco,
            Action::Envido,
        ]
    );

    let outcome = game.execute_bot_turn().unwrap();
    assert_eq!(outcome.action, Action::Truco);
    assert_eq!(game.ladder().state(), LadderState::Truco);
    // Seat 2 answers for Us; it is a bot too but has no script left.
    assert!(game.is_bot_turn());
    assert_eq!(game.bot().seen().len(), 1);
    assert_eq!(game.bot().seen()[0], ctx);
}

#[test]
fn rejected_bot_decision_leaves_the_match_untouched() {
    let mut game = started(
        MatchConfig::default(),
        four_bots(),
        StackedDeck::from_hands(&REFERENCE_HANDS, 0),
        ScriptedBot::new([Action::Accept]),
    );
    let before = snapshot(&game);

    assert_kind(game.execute_bot_turn(), ValidationKind::InvalidEscalation);
    assert_eq!(snapshot(&game), before);

    let err = game.execute_bot_turn().unwrap_err();
    assert!(matches!(err, DomainError::Ai(_)));
    assert_eq!(snapshot(&game), before);
}

#[test]
fn run_bots_stops_at_the_step_limit() {
    let config = MatchConfig {
        max_bot_steps: 2,
        ..MatchConfig::default()
    };
    let mut game = started(
        config,
        four_bots(),
        StackedDeck::from_hands(&REFERENCE_HANDS, 0),
        FirstLegalBot,
    );

    let outcomes = game.run_bots().unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(game.is_bot_turn());
    assert_eq!(game.current_turn(), 2);
}

#[test]
fn first_legal_bots_finish_a_match() {
    let config = MatchConfig {
        max_bot_steps: 1_000,
        ..MatchConfig::default()
    };
    let mut game = started(
        config,
        four_bots(),
        StackedDeck::from_hands(&REFERENCE_HANDS, 0),
        FirstLegalBot,
    );

    for _ in 0..100 {
        if game.winner().is_some() {
            break;
        }
        game.run_bots().unwrap();
    }

    let winner = game.winner().expect("match finishes");
    assert_eq!(game.scoreboard().winner(), Some(winner));
    assert!(game.scoreboard().totals().get(winner) >= 30);
    assert!(game.scoreboard().totals().get(winner.opponent()) < 30);
    assert!(!game.is_bot_turn());
    assert_kind(game.execute_bot_turn(), ValidationKind::PhaseMismatch);
    assert_eq!(game.observer().match_winner(), Some(winner));
}

fn play_seeded_match(seed: u64) -> (Side, u16, u16) {
    let config = MatchConfig {
        max_bot_steps: 10_000,
        ..seeded_config(seed)
    };
    let mut game = StandardMatch::standard(config, four_bots()).unwrap();
    game.new_match().unwrap();
    for _ in 0..1_000 {
        if game.winner().is_some() {
            break;
        }
        game.run_bots().unwrap();
    }
    let totals = game.scoreboard().totals();
    (game.winner().expect("match finishes"), totals.us, totals.them)
}

#[test]
fn seeded_random_bots_replay_the_same_match() {
    let first = play_seeded_match(42);
    assert_eq!(play_seeded_match(42), first);
    assert!(first.1 >= 30 || first.2 >= 30);
}

#[test]
fn boxed_bot_from_config_drives_a_table() {
    let bot = create_ai("random", Some(&json!({"seed": 3}))).expect("known bot");
    let mut game: MatchOrchestrator<Deck, Box<dyn BotDecisionProvider>, TracingObserver> =
        MatchOrchestrator::new(
            seeded_config(3),
            human_vs_bots(),
            Deck::with_seed(DeckMode::Full, 3),
            bot,
            TracingObserver,
        )
        .unwrap();
    game.new_match().unwrap();
    game.submit_action(0, Action::PlayCard(0)).unwrap();

    let outcomes = game.run_bots().unwrap();

    assert!(!outcomes.is_empty());
    assert_eq!(game.phase(), MatchPhase::Playing);
    assert!(!game.is_bot_turn());
    assert_eq!(game.current_turn(), 0);
}
