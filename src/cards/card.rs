//! Player and infection cards.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::map::{CityGraph, CityId};

/// The five base-game event cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum EventKind {
    #[strum(serialize = "Resilient Population")]
    ResilientPopulation,
    Airlift,
    Forecast,
    #[strum(serialize = "One Quiet Night")]
    OneQuietNight,
    #[strum(serialize = "Government Grant")]
    GovernmentGrant,
}

/// A card of the player deck.
///
/// Every card in a game is distinct: one `City` card per city, one
/// `Event` card per kind, and epidemics numbered by the sub-pile they were
/// shuffled into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerCard {
    City(CityId),
    Epidemic(u8),
    Event(EventKind),
}

impl PlayerCard {
    /// The city this card names, for city cards.
    #[must_use]
    pub fn city(self) -> Option<CityId> {
        match self {
            PlayerCard::City(city) => Some(city),
            PlayerCard::Epidemic(_) | PlayerCard::Event(_) => None,
        }
    }

    #[must_use]
    pub fn is_epidemic(self) -> bool {
        matches!(self, PlayerCard::Epidemic(_))
    }

    /// Human-readable card name.
    #[must_use]
    pub fn describe(self, graph: &CityGraph) -> String {
        match self {
            PlayerCard::City(city) => graph.name(city).to_string(),
            PlayerCard::Epidemic(_) => "--Epidemic--".to_string(),
            PlayerCard::Event(kind) => format!("Event: {kind}"),
        }
    }
}

/// A card of the infection deck. One exists per city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfectionCard(pub CityId);

impl InfectionCard {
    #[must_use]
    pub fn city(self) -> CityId {
        self.0
    }
}
