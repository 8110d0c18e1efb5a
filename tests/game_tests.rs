//! Whole-game tests through the public turn-engine surface.

use pandemic_sim::core::{Difficulty, EpidemicPolicy, GameConfig, GameError, PlayerId};
use pandemic_sim::game::{Controller, Game, GameBuilder, RandomController, TurnPhase};
use pandemic_sim::map::parse_cities;
use pandemic_sim::rules::{Action, GameResult};
use pandemic_sim::cards::PlayerCard;

/// Always takes the first option.
struct FirstChoice;

impl Controller for FirstChoice {
    fn choose_action(&mut self, _game: &Game, _actions: &[Action]) -> usize {
        0
    }

    fn choose_discard(&mut self, _game: &Game, _player: PlayerId, _hand: &[PlayerCard]) -> usize {
        0
    }
}

/// Random playouts always reach a result, for every player count.
#[test]
fn test_random_playouts_terminate() {
    for players in 2..=4 {
        for seed in 1..=10 {
            let mut game = GameBuilder::new().players(players).seed(seed).build().unwrap();
            let result = game.run(&mut RandomController::new(seed));

            assert_eq!(game.result(), Some(result));
            assert_eq!(game.phase(), TurnPhase::GameOver(result));
            assert!(game.legal_actions().is_empty());
        }
    }
}

/// Same seed and same choices replay the same game.
#[test]
fn test_playout_is_deterministic() {
    let play = |seed| {
        let mut game = GameBuilder::new()
            .players(3)
            .difficulty(Difficulty::Heroic)
            .seed(seed)
            .build()
            .unwrap();
        let result = game.run(&mut RandomController::new(99));
        (result, game.round(), game.board().outbreaks())
    };

    assert_eq!(play(12), play(12));
}

/// Driving the engine one choice at a time keeps every invariant.
#[test]
fn test_step_by_step_invariants() {
    for seed in 1..=5 {
        let mut game = GameBuilder::new()
            .with_config(GameConfig::new().with_players(4).with_seed(seed))
            .epidemic_policy(EpidemicPolicy::Rulebook)
            .build()
            .unwrap();
        let mut controller = RandomController::new(seed + 100);
        let mut outbreaks = 0;
        let mut rate = 0;

        while !game.is_over() {
            match game.phase() {
                TurnPhase::AwaitingAction { remaining } => {
                    assert!((1..=4).contains(&remaining));
                    for (_, player) in game.players().iter() {
                        assert!(player.hand().len() <= 7);
                    }
                    let actions = game.legal_actions();
                    if actions.is_empty() {
                        game.skip_actions().unwrap();
                    } else {
                        let choice = controller.choose_action(&game, &actions);
                        game.apply_action_index(choice).unwrap();
                    }
                }
                TurnPhase::Discarding { player, .. } => {
                    assert_eq!(game.player(player).hand().len(), 8);
                    let choice = controller.choose_discard(&game, player, game.discard_options());
                    game.discard(choice).unwrap();
                }
                TurnPhase::GameOver(_) => unreachable!(),
            }

            let board = game.board();
            assert!(board.outbreaks() >= outbreaks);
            assert!(board.infection_rate_index() >= rate);
            outbreaks = board.outbreaks();
            rate = board.infection_rate_index();
            for city in board.graph().iter() {
                for disease in city.cube_types() {
                    assert!(city.cubes(disease) <= 3);
                }
            }
            for disease in board.cures().iter().map(|c| c.disease) {
                if board.is_cure_eradicated(disease) {
                    assert!(board.is_cure_discovered(disease));
                }
            }
        }
    }
}

/// A player who only ever drives never cures anything, so the game is lost.
#[test]
fn test_passive_players_lose() {
    let mut game = GameBuilder::new().seed(4).build().unwrap();
    let result = game.run(&mut FirstChoice);

    assert!(matches!(result, GameResult::Defeat(_)));
    game.log_status();
}

/// Play continues from a city with no neighbours by skipping the actions.
#[test]
fn test_isolated_start_city() {
    let text: String = std::iter::once("*0 lonely\n".to_string())
        .chain((0..12).map(|i| format!("1 c{i} c{}\n", (i + 1) % 12)))
        .collect();
    let graph = parse_cities(&text).unwrap();
    let mut game = GameBuilder::new().map(graph).seed(2).build().unwrap();

    let result = game.run(&mut RandomController::new(2));

    assert!(matches!(result, GameResult::Defeat(_)));
}

/// Setup errors come back as values.
#[test]
fn test_bad_configuration() {
    assert!(GameBuilder::new().players(1).build().is_err());
    assert!(GameBuilder::new().players(5).build().is_err());
}

/// Errors at the API surface leave the game untouched.
#[test]
fn test_errors_leave_state_alone() {
    let mut game = GameBuilder::new().seed(6).build().unwrap();
    let before = game.phase();
    let len = game.legal_actions().len();

    assert_eq!(
        game.apply_action_index(len),
        Err(GameError::ChoiceOutOfRange { index: len, len })
    );
    assert_eq!(game.discard(0), Err(GameError::NotDiscarding));
    assert_eq!(game.phase(), before);
    assert_eq!(game.current_player(), PlayerId::new(0));
}
