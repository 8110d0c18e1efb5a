//! Game setup.

use log::info;
use strum::IntoEnumIterator;

use super::turn::Game;
use crate::board::Board;
use crate::core::config::{GameConfig, CITIES_PER_SETUP_WAVE, SETUP_INFECTION_WAVES};
use crate::core::error::SetupError;
use crate::core::player::{Player, PlayerMap, Role};
use crate::core::rng::GameRng;
use crate::map::CityGraph;

/// Builder for a new game.
///
/// ```
/// use pandemic_sim::core::Difficulty;
/// use pandemic_sim::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .players(3)
///     .difficulty(Difficulty::Standard)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.players().player_count(), 3);
/// assert_eq!(game.round(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    graph: Option<CityGraph>,
}

impl GameBuilder {
    /// Defaults: two players, introductory difficulty, seed 1, the bundled
    /// world map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn players(mut self, count: usize) -> Self {
        self.config = self.config.with_players(count);
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: crate::core::Difficulty) -> Self {
        self.config = self.config.with_difficulty(difficulty);
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    #[must_use]
    pub fn epidemic_policy(mut self, policy: crate::core::EpidemicPolicy) -> Self {
        self.config = self.config.with_epidemic_policy(policy);
        self
    }

    /// Play on `graph` instead of the bundled map.
    #[must_use]
    pub fn map(mut self, graph: CityGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Set up the board, players and decks.
    pub fn build(self) -> Result<Game, SetupError> {
        let mut config = self.config;
        if !config.valid_player_count() {
            return Err(SetupError::InvalidPlayerCount(config.player_count));
        }
        let graph = self.graph.unwrap_or_else(CityGraph::standard);

        // setup infection draws nine cards and must leave the deck non-empty
        let needed = SETUP_INFECTION_WAVES.len() * CITIES_PER_SETUP_WAVE + 1;
        if graph.len() < needed {
            return Err(SetupError::TooFewCities { needed, found: graph.len() });
        }

        config.seed = GameRng::resolve_seed(config.seed);
        info!(
            "New game: {} players, {:?}, seed {}",
            config.player_count, config.difficulty, config.seed
        );

        let start = graph.start();
        let mut board = Board::new(graph, GameRng::new(config.seed), config.epidemic_policy);
        board.create_city_cards();
        board.init_infections();
        board.insert_event_cards();

        let mut roles: Vec<Role> = Role::iter().collect();
        board.rng_mut().shuffle(&mut roles);
        let mut players = PlayerMap::from_vec(
            roles
                .into_iter()
                .take(config.player_count)
                .map(|role| Player::new(role, start))
                .collect(),
        );
        for (id, player) in players.iter() {
            info!("{} is the {}", id, player.role());
        }

        board.deal_player_cards(&mut players, config.starting_hand_size());
        board.insert_epidemic_cards(config.difficulty.epidemic_cards());

        Ok(Game::new(config, board, players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, PlayerId};
    use crate::map::parse_cities;
    use crate::game::TurnPhase;

    #[test]
    fn test_standard_setup() {
        let game = GameBuilder::new()
            .players(4)
            .difficulty(Difficulty::Heroic)
            .seed(9)
            .build()
            .unwrap();
        let board = game.board();

        assert_eq!(game.players().player_count(), 4);
        for (_, player) in game.players().iter() {
            assert_eq!(player.hand().len(), 2);
            assert_eq!(player.location(), board.graph().start());
            assert!(player.hand().iter().all(|c| !c.is_epidemic()));
        }
        // 48 cities + 5 events - 8 dealt + 6 epidemics
        assert_eq!(board.player_deck().len(), 51);
        assert_eq!(board.player_deck().iter().filter(|c| c.is_epidemic()).count(), 6);
        assert_eq!(board.infection_discard().len(), 9);
        assert_eq!(board.research_station_cities(), vec![board.graph().start()]);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.phase(), TurnPhase::AwaitingAction { remaining: 4 });
    }

    #[test]
    fn test_roles_are_unique() {
        for seed in 1..20 {
            let game = GameBuilder::new().players(4).seed(seed).build().unwrap();
            let mut roles: Vec<Role> = game.players().iter().map(|(_, p)| p.role()).collect();
            roles.sort_by_key(|r| *r as u8);
            roles.dedup();
            assert_eq!(roles.len(), 4);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameBuilder::new().players(3).seed(77).build().unwrap();
        let b = GameBuilder::new().players(3).seed(77).build().unwrap();

        let deck_a: Vec<_> = a.board().player_deck().iter().copied().collect();
        let deck_b: Vec<_> = b.board().player_deck().iter().copied().collect();
        assert_eq!(deck_a, deck_b);
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_invalid_player_count() {
        let err = GameBuilder::new().players(5).build().unwrap_err();
        assert!(matches!(err, SetupError::InvalidPlayerCount(5)));
    }

    #[test]
    fn test_too_few_cities() {
        let graph = parse_cities("*0 A B\n0 B A").unwrap();
        let err = GameBuilder::new().map(graph).build().unwrap_err();
        assert!(matches!(err, SetupError::TooFewCities { needed: 10, found: 2 }));
    }

    #[test]
    fn test_zero_seed_is_resolved() {
        let game = GameBuilder::new().seed(0).build().unwrap();
        assert_ne!(game.config().seed, 0);
    }
}
