//! Legal-action enumeration.
//!
//! A pure function of the board and the players. The order of the list is
//! stable (movement, station, treatment, sharing, cures) so a menu built
//! from it reads the same turn to turn; it carries no game meaning.

use strum::IntoEnumIterator;

use super::action::Action;
use crate::board::Board;
use crate::cards::PlayerCard;
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::map::DiseaseType;

/// Every action `current` may take right now.
///
/// Empty only if the player stands in a city with no neighbours and no
/// other action applies.
#[must_use]
pub fn legal_actions(board: &Board, players: &PlayerMap<Player>, current: PlayerId) -> Vec<Action> {
    let player = &players[current];
    let here = player.location();
    let city = board.city(here);
    let mut actions = Vec::new();

    for &to in city.neighbours() {
        actions.push(Action::Drive { to });
    }

    for card in player.hand() {
        if let Some(to) = card.city() {
            if to != here {
                actions.push(Action::DirectFlight { to });
            }
        }
    }

    let holds_here = player.holds(PlayerCard::City(here));
    if holds_here {
        for to in board.graph().ids().filter(|&to| to != here) {
            actions.push(Action::CharterFlight { to });
        }
    }

    if city.has_research_station() {
        for to in board.graph().research_stations().filter(|&to| to != here) {
            actions.push(Action::ShuttleFlight { to });
        }
    } else if holds_here || player.role().builds_stations_free() {
        actions.push(Action::BuildResearchStation);
    }

    for disease in city.cube_types() {
        actions.push(Action::TreatDisease { disease });
    }

    for (other_id, other) in players.iter() {
        if other_id == current || other.location() != here {
            continue;
        }
        if holds_here {
            actions.push(Action::ShareKnowledge {
                card: here,
                giver: current,
                receiver: other_id,
            });
        }
        if other.holds(PlayerCard::City(here)) {
            actions.push(Action::ShareKnowledge {
                card: here,
                giver: other_id,
                receiver: current,
            });
        }
    }

    if city.has_research_station() {
        for disease in DiseaseType::iter() {
            if !board.is_cure_discovered(disease)
                && cure_cards(board, player, disease) >= player.role().cards_to_cure()
            {
                actions.push(Action::DiscoverCure { disease });
            }
        }
    }

    actions
}

/// City cards of `disease` in the player's hand.
#[must_use]
pub fn cure_cards(board: &Board, player: &Player, disease: DiseaseType) -> usize {
    player
        .hand()
        .iter()
        .filter_map(|card| card.city())
        .filter(|&city| board.city(city).disease() == disease)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Role;
    use crate::core::{EpidemicPolicy, GameRng};
    use crate::map::{parse_cities, CityGraph};

    fn setup(graph: CityGraph, roles: &[Role]) -> (Board, PlayerMap<Player>) {
        let start = graph.start();
        let board = Board::new(graph, GameRng::new(1), EpidemicPolicy::default());
        let players = PlayerMap::from_vec(roles.iter().map(|&r| Player::new(r, start)).collect());
        (board, players)
    }

    fn city_card(board: &Board, name: &str) -> PlayerCard {
        PlayerCard::City(board.graph().id_of(name))
    }

    #[test]
    fn test_start_of_game_at_atlanta() {
        let (board, players) = setup(CityGraph::standard(), &[Role::Medic, Role::Dispatcher]);

        let actions = legal_actions(&board, &players, PlayerId::new(0));

        // Chicago, Miami, Washington; Atlanta is the only station
        let drives = actions.iter().filter(|a| matches!(a, Action::Drive { .. })).count();
        assert_eq!(drives, 3);
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn test_direct_and_charter_flights() {
        let (board, mut players) = setup(CityGraph::standard(), &[Role::Medic, Role::Dispatcher]);
        let p0 = PlayerId::new(0);
        players[p0].add_card(city_card(&board, "Paris"));
        players[p0].add_card(city_card(&board, "Atlanta"));

        let actions = legal_actions(&board, &players, p0);

        let paris = board.graph().id_of("Paris");
        let atlanta = board.graph().id_of("Atlanta");
        assert!(actions.contains(&Action::DirectFlight { to: paris }));
        assert!(!actions.contains(&Action::DirectFlight { to: atlanta }));
        let charters = actions.iter().filter(|a| matches!(a, Action::CharterFlight { .. })).count();
        assert_eq!(charters, 47);
        // Atlanta already has a station
        assert!(!actions.contains(&Action::BuildResearchStation));
    }

    #[test]
    fn test_build_station() {
        let graph = parse_cities("*0 A B\n0 B A").unwrap();
        let (board, mut players) = setup(graph, &[Role::Medic, Role::OperationsExpert]);
        let b = board.graph().id_of("B");
        players[PlayerId::new(0)].move_to(b);
        players[PlayerId::new(1)].move_to(b);

        // no card, no free build
        assert!(!legal_actions(&board, &players, PlayerId::new(0))
            .contains(&Action::BuildResearchStation));
        // operations expert builds without the card
        assert!(legal_actions(&board, &players, PlayerId::new(1))
            .contains(&Action::BuildResearchStation));

        players[PlayerId::new(0)].add_card(PlayerCard::City(b));
        let actions = legal_actions(&board, &players, PlayerId::new(0));
        assert_eq!(actions.iter().filter(|a| **a == Action::BuildResearchStation).count(), 1);
    }

    #[test]
    fn test_shuttle_flights() {
        let (mut board, players) = setup(CityGraph::standard(), &[Role::Medic, Role::Dispatcher]);
        let paris = board.graph().id_of("Paris");
        let tokyo = board.graph().id_of("Tokyo");
        board.build_research_station(paris);
        board.build_research_station(tokyo);

        let actions = legal_actions(&board, &players, PlayerId::new(0));

        assert!(actions.contains(&Action::ShuttleFlight { to: paris }));
        assert!(actions.contains(&Action::ShuttleFlight { to: tokyo }));
        assert!(!actions.contains(&Action::ShuttleFlight { to: board.graph().start() }));
    }

    #[test]
    fn test_treat_one_per_disease_present() {
        let (mut board, players) = setup(CityGraph::standard(), &[Role::Medic, Role::Dispatcher]);
        let atlanta = board.graph().start();
        board.city_mut(atlanta).add_cube(DiseaseType::Blue);
        board.city_mut(atlanta).add_cube(DiseaseType::Blue);
        board.city_mut(atlanta).add_cube(DiseaseType::Black);

        let actions = legal_actions(&board, &players, PlayerId::new(0));

        let treats: Vec<_> = actions
            .iter()
            .filter_map(|a| match a {
                Action::TreatDisease { disease } => Some(*disease),
                _ => None,
            })
            .collect();
        assert_eq!(treats, vec![DiseaseType::Blue, DiseaseType::Black]);
    }

    #[test]
    fn test_share_knowledge_both_directions() {
        let roles = [Role::Medic, Role::Dispatcher, Role::Researcher];
        let (board, mut players) = setup(CityGraph::standard(), &roles);
        let atlanta = board.graph().start();
        let (p0, p1, p2) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));
        players[p2].move_to(board.graph().id_of("Chicago"));

        players[p0].add_card(PlayerCard::City(atlanta));
        let give = Action::ShareKnowledge { card: atlanta, giver: p0, receiver: p1 };
        let actions = legal_actions(&board, &players, p0);
        assert!(actions.contains(&give));
        // player 3 is elsewhere
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::ShareKnowledge { receiver, .. } if *receiver == p2)));

        let actions = legal_actions(&board, &players, p1);
        assert!(actions.contains(&give));
    }

    #[test]
    fn test_discover_cure_thresholds() {
        let (board, mut players) = setup(CityGraph::standard(), &[Role::Medic, Role::Scientist]);
        let blue = ["Chicago", "Montreal", "New York", "Washington"];
        for name in blue {
            players[PlayerId::new(0)].add_card(city_card(&board, name));
            players[PlayerId::new(1)].add_card(city_card(&board, name));
        }
        let cure = Action::DiscoverCure { disease: DiseaseType::Blue };

        assert!(!legal_actions(&board, &players, PlayerId::new(0)).contains(&cure));
        assert!(legal_actions(&board, &players, PlayerId::new(1)).contains(&cure));

        players[PlayerId::new(0)].add_card(city_card(&board, "London"));
        assert!(legal_actions(&board, &players, PlayerId::new(0)).contains(&cure));
    }

    #[test]
    fn test_no_cure_away_from_station() {
        let (board, mut players) = setup(CityGraph::standard(), &[Role::Scientist, Role::Medic]);
        let p0 = PlayerId::new(0);
        for name in ["Chicago", "Montreal", "New York", "Washington", "London"] {
            players[p0].add_card(city_card(&board, name));
        }
        players[p0].move_to(board.graph().id_of("Chicago"));

        let actions = legal_actions(&board, &players, p0);

        assert!(!actions.iter().any(|a| matches!(a, Action::DiscoverCure { .. })));
    }

    #[test]
    fn test_isolated_city_has_no_actions() {
        let graph = parse_cities("*0 A\n0 B").unwrap();
        let (board, players) = setup(graph, &[Role::Medic, Role::Dispatcher]);

        let actions = legal_actions(&board, &players, PlayerId::new(0));

        assert!(actions.is_empty());
    }

    #[test]
    fn test_cure_cards_count() {
        let (board, mut players) = setup(CityGraph::standard(), &[Role::Medic, Role::Dispatcher]);
        let p0 = PlayerId::new(0);
        players[p0].add_card(city_card(&board, "Paris"));
        players[p0].add_card(city_card(&board, "Cairo"));
        players[p0].add_card(PlayerCard::Epidemic(0));

        assert_eq!(cure_cards(&board, &players[p0], DiseaseType::Blue), 1);
        assert_eq!(cure_cards(&board, &players[p0], DiseaseType::Black), 1);
        assert_eq!(cure_cards(&board, &players[p0], DiseaseType::Red), 0);
    }
}
