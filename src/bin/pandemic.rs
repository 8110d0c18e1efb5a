use clap::Parser;
use dialoguer::Select;
use log::{error, info, LevelFilter};
use std::path::PathBuf;

use pandemic_sim::cards::PlayerCard;
use pandemic_sim::core::{Difficulty, GameConfig, PlayerId, SetupError};
use pandemic_sim::game::{Controller, Game, GameBuilder, RandomController, TurnPhase};
use pandemic_sim::map::{load_cities, CityGraph};
use pandemic_sim::rules::Action;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (2-4)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Difficulty (introductory, standard, heroic)
    #[arg(short, long, default_value = "introductory")]
    difficulty: Difficulty,

    /// City definition file; the bundled world map if omitted
    #[arg(long)]
    cities: Option<PathBuf>,

    /// RNG seed, 0 for the current time
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Let a random controller play instead of prompting
    #[arg(long)]
    auto: bool,
}

/// Prompts on the terminal for every choice.
struct Console;

impl Console {
    fn select(prompt: String, items: &[String]) -> dialoguer::Result<usize> {
        Select::new().with_prompt(prompt).items(items).default(0).interact()
    }

    /// A game without a terminal to prompt on cannot go on.
    fn select_or_exit(prompt: String, items: &[String]) -> usize {
        Self::select(prompt, items).unwrap_or_else(|err| {
            error!("cannot read a choice from the terminal: {err}");
            std::process::exit(1)
        })
    }
}

impl Controller for Console {
    fn choose_action(&mut self, game: &Game, actions: &[Action]) -> usize {
        let TurnPhase::AwaitingAction { remaining } = game.phase() else {
            return 0;
        };
        if remaining == 4 {
            game.log_status();
        }
        let graph = game.board().graph();
        let current = game.current_player();
        let items: Vec<String> = actions.iter().map(|a| a.describe(graph)).collect();
        let prompt = format!(
            "{} ({}) in {}, {} action(s) left",
            current,
            game.player(current).role(),
            graph.name(game.player(current).location()),
            remaining
        );
        Self::select_or_exit(prompt, &items)
    }

    fn choose_discard(&mut self, game: &Game, player: PlayerId, hand: &[PlayerCard]) -> usize {
        let graph = game.board().graph();
        let items: Vec<String> = hand.iter().map(|c| c.describe(graph)).collect();
        Self::select_or_exit(format!("{player} holds too many cards, discard one"), &items)
    }
}

fn main() -> Result<(), SetupError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp(None)
        .init();

    let graph = match &args.cities {
        Some(path) => load_cities(path)?,
        None => CityGraph::standard(),
    };
    let config = GameConfig::new()
        .with_players(args.players)
        .with_difficulty(args.difficulty)
        .with_seed(args.seed);

    let mut game = GameBuilder::new().with_config(config).map(graph).build()?;
    let seed = game.config().seed;

    let result = if args.auto {
        game.run(&mut RandomController::new(seed))
    } else {
        game.run(&mut Console)
    };

    game.log_status();
    info!("{} (seed {})", result, seed);
    Ok(())
}
