//! Game configuration and rule constants.
//!
//! A front end hands the engine a `GameConfig` (player count, difficulty,
//! seed) alongside a parsed city graph. Everything else about the rules is
//! fixed and lives in the constants below.

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Disease cubes of one type a city can hold before it outbreaks.
pub const MAX_CUBES_PER_CITY: u8 = 3;

/// Total cubes of each disease in the box. Needing more is a loss.
pub const CUBE_SUPPLY: usize = 24;

/// The game is lost once the outbreak counter exceeds this.
pub const MAX_OUTBREAKS: u32 = 8;

/// Infection rate track, advanced by one step per epidemic.
pub const INFECTION_RATES: [usize; 7] = [2, 2, 2, 3, 3, 4, 4];

pub const HAND_LIMIT: usize = 7;
pub const ACTIONS_PER_TURN: u8 = 4;
pub const PLAYER_CARDS_PER_TURN: u8 = 2;
pub const CARDS_TO_CURE: usize = 5;
pub const EVENT_CARDS: usize = 5;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Setup infection: three waves of three cities, getting 3, 2 and 1 cubes.
pub const SETUP_INFECTION_WAVES: [u8; 3] = [3, 2, 1];
pub const CITIES_PER_SETUP_WAVE: usize = 3;

/// Difficulty level; controls how many epidemic cards are shuffled in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Introductory,
    Standard,
    Heroic,
}

impl Difficulty {
    /// Number of epidemic cards (and so player-deck sub-piles).
    #[must_use]
    pub const fn epidemic_cards(self) -> usize {
        match self {
            Difficulty::Introductory => 4,
            Difficulty::Standard => 5,
            Difficulty::Heroic => 6,
        }
    }
}

/// How the bulk infection of an epidemic treats a city that already holds
/// cubes of its own disease.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpidemicPolicy {
    /// Top the city up to three cubes; never outbreak from the bulk add.
    #[default]
    FillToThree,
    /// Printed-rules variant: if the city already had cubes of its type,
    /// fill it to three and then outbreak it.
    Rulebook,
}

/// Numeric game configuration.
///
/// ```
/// use pandemic_sim::core::{Difficulty, GameConfig};
///
/// let config = GameConfig::new()
///     .with_players(3)
///     .with_difficulty(Difficulty::Heroic)
///     .with_seed(7);
/// assert_eq!(config.starting_hand_size(), 3);
/// assert_eq!(config.difficulty.epidemic_cards(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// 2 to 4 players.
    pub player_count: usize,

    pub difficulty: Difficulty,

    /// RNG seed; 0 means derive one from the wall clock.
    pub seed: u64,

    pub epidemic_policy: EpidemicPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            difficulty: Difficulty::default(),
            seed: 1,
            epidemic_policy: EpidemicPolicy::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_epidemic_policy(mut self, policy: EpidemicPolicy) -> Self {
        self.epidemic_policy = policy;
        self
    }

    /// Cards dealt to each player at setup: 4, 3 or 2.
    #[must_use]
    pub fn starting_hand_size(&self) -> usize {
        6usize.saturating_sub(self.player_count)
    }

    /// Whether the player count is within the supported range.
    #[must_use]
    pub fn valid_player_count(&self) -> bool {
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count)
    }
}
