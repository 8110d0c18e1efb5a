//! Error types.
//!
//! Setup problems (bad city file, bad configuration) and caller mistakes at
//! the turn-engine surface are returned as values. Broken invariants inside
//! the engine are bugs and panic instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::rules::Action;

/// A malformed city-definition file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected `<disease> <name> [neighbours...]`")]
    MissingField { line: usize },
    #[error("line {line}: disease type `{value}` is not a number")]
    NotANumber { line: usize, value: String },
    #[error("line {line}: disease type {value} is outside 0-3")]
    InvalidDisease { line: usize, value: i64 },
    #[error("line {line}: a second start city was marked")]
    DuplicateStartCity { line: usize },
    #[error("no start city marked with `*`")]
    MissingStartCity,
    #[error("line {line}: city `{name}` is defined twice")]
    DuplicateCity { line: usize, name: String },
    #[error("city `{city}` lists unknown neighbour `{neighbour}`")]
    UnknownNeighbour { city: String, neighbour: String },
    #[error("line {line}: more than {max} cities")]
    TooManyCities { line: usize, max: usize },
}

/// Anything that stops a game from being set up.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to read city file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid city definitions: {0}")]
    Parse(#[from] ParseError),
    #[error("{0} players requested, 2-4 supported")]
    InvalidPlayerCount(usize),
    #[error("map has {found} cities, at least {needed} are needed")]
    TooFewCities { needed: usize, found: usize },
}

/// A request the turn engine refused; the game state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("not waiting for an action")]
    NotAwaitingAction,
    #[error("not waiting for a discard")]
    NotDiscarding,
    #[error("choice {index} is out of range ({len} options)")]
    ChoiceOutOfRange { index: usize, len: usize },
    #[error("action is not legal now: {0:?}")]
    IllegalAction(Action),
}
