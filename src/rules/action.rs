//! Player actions.
//!
//! One closed enum; each variant carries only what it needs. The acting
//! player is implicit (the current player of the turn engine), except for
//! `ShareKnowledge` where either side may be the current player.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::map::{CityGraph, CityId, DiseaseType};

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move to a neighbouring city.
    Drive { to: CityId },
    /// Discard the card of `to` and fly there.
    DirectFlight { to: CityId },
    /// Discard the card of the current city and fly anywhere.
    CharterFlight { to: CityId },
    /// Fly between two research stations.
    ShuttleFlight { to: CityId },
    /// Build a station in the current city.
    BuildResearchStation,
    /// Remove cubes of one disease from the current city.
    TreatDisease { disease: DiseaseType },
    /// Hand the current city's card from `giver` to `receiver`.
    ShareKnowledge {
        card: CityId,
        giver: PlayerId,
        receiver: PlayerId,
    },
    /// Discard matching city cards at a station to cure a disease.
    DiscoverCure { disease: DiseaseType },
}

impl Action {
    /// Destination city for movement actions.
    #[must_use]
    pub fn destination(&self) -> Option<CityId> {
        match *self {
            Action::Drive { to }
            | Action::DirectFlight { to }
            | Action::CharterFlight { to }
            | Action::ShuttleFlight { to } => Some(to),
            _ => None,
        }
    }

    /// Human-readable description for menus and logs.
    #[must_use]
    pub fn describe(&self, graph: &CityGraph) -> String {
        match *self {
            Action::Drive { to } => format!("Drive to {}", graph.name(to)),
            Action::DirectFlight { to } => format!("Direct flight to {}", graph.name(to)),
            Action::CharterFlight { to } => format!("Charter flight to {}", graph.name(to)),
            Action::ShuttleFlight { to } => format!("Shuttle flight to {}", graph.name(to)),
            Action::BuildResearchStation => "Build research station".to_string(),
            Action::TreatDisease { disease } => format!("Treat {disease} disease"),
            Action::ShareKnowledge { card, giver, receiver } => {
                format!("{giver} gives {} to {receiver}", graph.name(card))
            }
            Action::DiscoverCure { disease } => format!("Discover cure for {disease}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination() {
        let to = CityId::new(3);
        assert_eq!(Action::Drive { to }.destination(), Some(to));
        assert_eq!(Action::ShuttleFlight { to }.destination(), Some(to));
        assert_eq!(Action::BuildResearchStation.destination(), None);
    }

    #[test]
    fn test_describe() {
        let graph = CityGraph::standard();
        let paris = graph.id_of("Paris");

        assert_eq!(Action::Drive { to: paris }.describe(&graph), "Drive to Paris");
        assert_eq!(
            Action::TreatDisease { disease: DiseaseType::Blue }.describe(&graph),
            "Treat Blue disease"
        );
        let share = Action::ShareKnowledge {
            card: paris,
            giver: PlayerId::new(0),
            receiver: PlayerId::new(1),
        };
        assert_eq!(share.describe(&graph), "Player 1 gives Paris to Player 2");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::DiscoverCure { disease: DiseaseType::Black };

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
