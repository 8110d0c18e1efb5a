//! Players: identification, per-player storage, roles and hands.
//!
//! ## PlayerId
//!
//! Seat index, 0-based, in turn order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! Role, current city and hand of one participant.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum_macros::{Display, EnumCount, EnumIter};

use super::config::HAND_LIMIT;
use crate::cards::PlayerCard;
use crate::map::CityId;

/// Player identifier (seat in turn order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use pandemic_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use pandemic_sim::core::{PlayerId, PlayerMap};
///
/// let mut actions: PlayerMap<u8> = PlayerMap::new(4, |_| 4);
/// actions[PlayerId::new(1)] -= 1;
/// assert_eq!(actions[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Wrap already-built per-seat values; seat `i` gets `values[i]`.
    pub fn from_vec(values: Vec<T>) -> Self {
        assert!(!values.is_empty(), "Must have at least 1 player");
        assert!(values.len() <= 255, "At most 255 players supported");
        Self { data: values }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// The seven base-game roles. No two players share one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, Serialize, Deserialize,
)]
pub enum Role {
    #[strum(serialize = "Contingency Planner")]
    ContingencyPlanner,
    Dispatcher,
    Medic,
    #[strum(serialize = "Operations Expert")]
    OperationsExpert,
    #[strum(serialize = "Quarantine Specialist")]
    QuarantineSpecialist,
    Researcher,
    Scientist,
}

impl Role {
    /// Builds a research station without spending a city card.
    #[must_use]
    pub fn builds_stations_free(self) -> bool {
        self == Role::OperationsExpert
    }

    /// City cards of one disease needed to discover its cure.
    #[must_use]
    pub fn cards_to_cure(self) -> usize {
        match self {
            Role::Scientist => super::config::CARDS_TO_CURE - 1,
            _ => super::config::CARDS_TO_CURE,
        }
    }
}

/// One participant: role, location and hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    role: Role,
    location: CityId,
    hand: Vec<PlayerCard>,
}

impl Player {
    #[must_use]
    pub fn new(role: Role, location: CityId) -> Self {
        Self {
            role,
            location,
            hand: Vec::new(),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn location(&self) -> CityId {
        self.location
    }

    pub fn move_to(&mut self, city: CityId) {
        self.location = city;
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[PlayerCard] {
        &self.hand
    }

    #[must_use]
    pub fn holds(&self, card: PlayerCard) -> bool {
        self.hand.contains(&card)
    }

    /// Whether the hand currently exceeds the limit and a discard is owed.
    #[must_use]
    pub fn over_hand_limit(&self) -> bool {
        self.hand.len() > HAND_LIMIT
    }

    pub fn add_card(&mut self, card: PlayerCard) {
        self.hand.push(card);
    }

    /// Remove a specific card from the hand.
    ///
    /// # Panics
    ///
    /// Panics if the card is not in the hand; callers only remove cards
    /// the action enumerator saw there.
    pub fn remove_card(&mut self, card: PlayerCard) -> PlayerCard {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .unwrap_or_else(|| panic!("{} does not hold {:?}", self.role, card));
        self.hand.remove(pos)
    }

    /// Remove the card at `index` in the hand, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<PlayerCard> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }
}
