//! Setting up and playing a game.
//!
//! ## Key Types
//!
//! - `GameBuilder`: validates the configuration and runs setup
//! - `Game`: the turn state machine, driven one choice at a time or by `run`
//! - `Controller`: source of choices for `Game::run`

pub mod builder;
pub mod controller;
pub mod turn;

pub use builder::GameBuilder;
pub use controller::{Controller, RandomController};
pub use turn::{Game, Resume, TurnPhase};
