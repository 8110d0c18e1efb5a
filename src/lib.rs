//! # pandemic-sim
//!
//! Engine for a cooperative disease-containment board game: four diseases
//! spread across a graph of cities while two to four players race to cure
//! them.
//!
//! ## Design Principles
//!
//! 1. **One owner**: the `Board` owns every city, deck and counter. Players
//!    are the only other mutable state, and all mutation goes through the
//!    turn engine.
//!
//! 2. **Deterministic**: all randomness flows from one seeded `GameRng`, so
//!    a seed plus a sequence of choices replays a game exactly.
//!
//! 3. **Arena graph**: cities live in a `Vec` and refer to each other by
//!    `CityId`, never by pointer.
//!
//! ## Modules
//!
//! - `core`: RNG, players and roles, configuration, errors
//! - `map`: cities, diseases, cures, the city-file parser
//! - `cards`: player and infection cards, piles
//! - `board`: setup, infection, epidemics, outbreak cascades
//! - `rules`: actions, legal-action enumeration, end conditions
//! - `game`: the turn state machine, its builder and controllers
//!
//! ## Example
//!
//! ```
//! use pandemic_sim::{GameBuilder, RandomController};
//!
//! let mut game = GameBuilder::new().players(2).seed(3).build().unwrap();
//! let result = game.run(&mut RandomController::new(3));
//! assert_eq!(game.result(), Some(result));
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod map;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EpidemicPolicy, GameConfig, GameError, GameRng, ParseError, Player, PlayerId,
    PlayerMap, Role, SetupError,
};

pub use crate::map::{City, CityGraph, CityId, DiseaseType};

pub use crate::cards::{EventKind, InfectionCard, Pile, PlayerCard};

pub use crate::board::Board;

pub use crate::rules::{Action, BaseRules, DefeatCause, GameResult, RulesEngine};

pub use crate::game::{Controller, Game, GameBuilder, RandomController, TurnPhase};
