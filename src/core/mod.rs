//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the leaf building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Difficulty, EpidemicPolicy, GameConfig};
pub use error::{GameError, ParseError, SetupError};
pub use player::{Player, PlayerId, PlayerMap, Role};
pub use rng::GameRng;
