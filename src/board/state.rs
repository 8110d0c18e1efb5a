//! The board: every piece of shared game state except the players.
//!
//! `Board` owns the city graph, both decks and discard piles, the cure
//! tracker, the outbreak counter and the infection-rate marker, plus the
//! single `GameRng` every shuffle goes through.

use log::{debug, info};
use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

use crate::cards::{EventKind, InfectionCard, Pile, PlayerCard};
use crate::core::config::{
    EpidemicPolicy, CITIES_PER_SETUP_WAVE, CUBE_SUPPLY, INFECTION_RATES, SETUP_INFECTION_WAVES,
};
use crate::core::player::{Player, PlayerMap};
use crate::core::rng::GameRng;
use crate::map::{City, CityGraph, CityId, CureTracker, DiseaseType};

/// Aggregate root of the shared game state.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) graph: CityGraph,
    pub(super) player_deck: Pile<PlayerCard>,
    pub(super) player_discard: Pile<PlayerCard>,
    pub(super) infection_deck: Pile<InfectionCard>,
    pub(super) infection_discard: Pile<InfectionCard>,
    pub(super) cures: CureTracker,
    pub(super) outbreaks: u32,
    pub(super) infection_rate_index: usize,
    pub(super) player_deck_exhausted: bool,
    pub(super) policy: EpidemicPolicy,
    pub(super) rng: GameRng,
    /// Cities that already outbroke during the current cascade. Empty
    /// between top-level infection calls.
    pub(super) outbroken: FxHashSet<CityId>,
}

impl Board {
    /// A board over `graph` with empty decks and no cures.
    ///
    /// The graph's start city already carries the first research station.
    #[must_use]
    pub fn new(graph: CityGraph, rng: GameRng, policy: EpidemicPolicy) -> Self {
        Self {
            graph,
            player_deck: Pile::new(),
            player_discard: Pile::new(),
            infection_deck: Pile::new(),
            infection_discard: Pile::new(),
            cures: CureTracker::new(),
            outbreaks: 0,
            infection_rate_index: 0,
            player_deck_exhausted: false,
            policy,
            rng,
            outbroken: FxHashSet::default(),
        }
    }

    // === Setup ===

    /// One city card per city into the player deck and one infection card
    /// per city into the infection deck, in city order.
    pub fn create_city_cards(&mut self) {
        for id in self.graph.ids() {
            self.player_deck.place_on_bottom(PlayerCard::City(id));
            self.infection_deck.place_on_bottom(InfectionCard(id));
        }
        debug!("Created {} city and infection cards", self.graph.len());
    }

    /// Shuffle the infection deck and run the three setup waves: three
    /// cities each get 3, then 2, then 1 cubes of their own disease.
    ///
    /// # Panics
    ///
    /// Panics if the infection deck holds fewer than nine cards; the game
    /// builder rejects such maps.
    pub fn init_infections(&mut self) {
        self.infection_deck.shuffle(&mut self.rng);

        for cubes in SETUP_INFECTION_WAVES {
            for _ in 0..CITIES_PER_SETUP_WAVE {
                let Some(card) = self.infection_deck.draw_top() else {
                    panic!("infection deck ran out during setup");
                };
                for _ in 0..cubes {
                    self.add_disease(card.city());
                }
                info!("Setup: {} gets {} cube(s)", self.graph.name(card.city()), cubes);
                self.infection_discard.place_on_top(card);
            }
        }
    }

    /// Add one card of each event kind to the bottom of the player deck.
    pub fn insert_event_cards(&mut self) {
        for kind in EventKind::iter() {
            self.player_deck.place_on_bottom(PlayerCard::Event(kind));
        }
    }

    /// Shuffle the player deck and deal `hand_size` cards to each player
    /// in seat order.
    pub fn deal_player_cards(&mut self, players: &mut PlayerMap<Player>, hand_size: usize) {
        self.player_deck.shuffle(&mut self.rng);
        for id in players.player_ids() {
            for _ in 0..hand_size {
                let Some(card) = self.player_deck.draw_top() else {
                    panic!("player deck ran out while dealing");
                };
                debug!("Dealt {} to {}", card.describe(&self.graph), id);
                players[id].add_card(card);
            }
        }
    }

    /// Interleave `count` epidemic cards into the player deck.
    pub fn insert_epidemic_cards(&mut self, count: usize) {
        let sizes = self.player_deck.insert_epidemics(count, &mut self.rng);
        info!("Inserted {} epidemics, sub-piles {:?}", count, sizes);
    }

    // === Player deck ===

    /// Draw the top player card. `None` means the deck is exhausted, which
    /// loses the game.
    pub fn draw_player_card(&mut self) -> Option<PlayerCard> {
        let card = self.player_deck.draw_top();
        if card.is_none() {
            self.player_deck_exhausted = true;
        }
        card
    }

    pub fn discard_player_card(&mut self, card: PlayerCard) {
        debug!("Discarded {}", card.describe(&self.graph));
        self.player_discard.place_on_top(card);
    }

    #[must_use]
    pub fn player_deck(&self) -> &Pile<PlayerCard> {
        &self.player_deck
    }

    #[must_use]
    pub fn player_discard(&self) -> &Pile<PlayerCard> {
        &self.player_discard
    }

    /// Whether a draw has already come up empty.
    #[must_use]
    pub fn player_deck_exhausted(&self) -> bool {
        self.player_deck_exhausted
    }

    // === Infection track ===

    #[must_use]
    pub fn infection_deck(&self) -> &Pile<InfectionCard> {
        &self.infection_deck
    }

    #[must_use]
    pub fn infection_discard(&self) -> &Pile<InfectionCard> {
        &self.infection_discard
    }

    /// Cards to draw in the infection phase.
    #[must_use]
    pub fn infection_rate(&self) -> usize {
        INFECTION_RATES[self.infection_rate_index]
    }

    #[must_use]
    pub fn infection_rate_index(&self) -> usize {
        self.infection_rate_index
    }

    /// Advance the rate marker one step, stopping at the end of the track.
    pub fn increase_infection_rate(&mut self) {
        if self.infection_rate_index + 1 < INFECTION_RATES.len() {
            self.infection_rate_index += 1;
        }
    }

    #[must_use]
    pub fn outbreaks(&self) -> u32 {
        self.outbreaks
    }

    #[must_use]
    pub fn epidemic_policy(&self) -> EpidemicPolicy {
        self.policy
    }

    // === Cures ===

    /// Mark a cure discovered; idempotent.
    pub fn discover_cure(&mut self, disease: DiseaseType) {
        if self.cures.discover(disease) {
            info!("Cure discovered for {}", disease);
        }
    }

    #[must_use]
    pub fn is_cure_discovered(&self, disease: DiseaseType) -> bool {
        self.cures.is_discovered(disease)
    }

    /// Discovered and no cube of the disease left anywhere on the map.
    #[must_use]
    pub fn is_cure_eradicated(&self, disease: DiseaseType) -> bool {
        self.is_cure_discovered(disease) && self.graph.cubes_on_map(disease) == 0
    }

    #[must_use]
    pub fn num_discovered_cures(&self) -> usize {
        self.cures.discovered_count()
    }

    #[must_use]
    pub fn cures(&self) -> &CureTracker {
        &self.cures
    }

    // === Map ===

    #[must_use]
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> &City {
        self.graph.city(id)
    }

    pub fn city_mut(&mut self, id: CityId) -> &mut City {
        self.graph.city_mut(id)
    }

    /// Place a research station.
    ///
    /// # Panics
    ///
    /// Panics if the city already has one.
    pub fn build_research_station(&mut self, id: CityId) {
        let city = self.graph.city_mut(id);
        assert!(!city.has_research_station(), "{} already has a research station", city.name());
        city.set_research_station(true);
        info!("Research station built in {}", self.graph.name(id));
    }

    pub fn research_station_cities(&self) -> Vec<CityId> {
        self.graph.research_stations().collect()
    }

    #[must_use]
    pub fn cubes_on_map(&self, disease: DiseaseType) -> usize {
        self.graph.cubes_on_map(disease)
    }

    /// First disease with more cubes on the map than the box holds.
    #[must_use]
    pub fn disease_cubes_exhausted(&self) -> Option<DiseaseType> {
        DiseaseType::iter().find(|&d| self.cubes_on_map(d) > CUBE_SUPPLY)
    }

    /// Cities holding at least one cube, in city order.
    pub fn infected_cities(&self) -> impl Iterator<Item = &City> {
        self.graph.iter().filter(|c| c.total_cubes() > 0)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}
