//! City graph: an arena of cities addressed by `CityId`.
//!
//! Adjacency is undirected. `connect` always writes both directions, so
//! `a.is_neighbour(b) == b.is_neighbour(a)` holds for every pair.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::city::{City, CityId};
use super::disease::DiseaseType;
use super::parser;

/// `CityId` is a `u16`, and `ids()` counts up to `len()` in that type.
pub const MAX_CITIES: usize = u16::MAX as usize;

/// The bundled 48-city world map.
pub const STANDARD_MAP: &str = include_str!("../../data/cities.txt");

/// All cities of a game plus the designated start city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityGraph {
    cities: Vec<City>,
    by_name: FxHashMap<String, CityId>,
    start: CityId,
}

impl CityGraph {
    /// Empty graph; the parser fills it and marks the start city.
    pub(crate) fn empty() -> Self {
        Self {
            cities: Vec::new(),
            by_name: FxHashMap::default(),
            start: CityId::new(0),
        }
    }

    /// Build the bundled world map.
    ///
    /// # Panics
    ///
    /// Panics if the bundled data fails to parse, which the test suite
    /// rules out.
    #[must_use]
    pub fn standard() -> Self {
        match parser::parse_cities(STANDARD_MAP) {
            Ok(graph) => graph,
            Err(err) => panic!("bundled city map is invalid: {err}"),
        }
    }

    /// Append a city. Returns `None` if the name is already taken.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `MAX_CITIES` cities.
    pub(crate) fn add_city(&mut self, name: String, disease: DiseaseType) -> Option<CityId> {
        if self.by_name.contains_key(&name) {
            return None;
        }
        let index = u16::try_from(self.cities.len())
            .ok()
            .filter(|&ix| usize::from(ix) < MAX_CITIES)
            .unwrap_or_else(|| panic!("city graph is full ({MAX_CITIES} cities)"));
        let id = CityId::new(index);
        self.by_name.insert(name.clone(), id);
        self.cities.push(City::new(id, name, disease));
        Some(id)
    }

    /// Mark the start city; it receives the first research station.
    pub(crate) fn set_start(&mut self, city: CityId) {
        self.start = city;
        self.city_mut(city).set_research_station(true);
    }

    /// Add a symmetric edge. Re-adding an existing edge is a no-op.
    pub fn connect(&mut self, a: CityId, b: CityId) {
        self.city_mut(a).add_neighbour(b);
        self.city_mut(b).add_neighbour(a);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> CityId {
        self.start
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub fn city_mut(&mut self, id: CityId) -> &mut City {
        &mut self.cities[id.index()]
    }

    /// Look a city up by its normalised name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Look a city up by name, treating an unknown name as a bug.
    ///
    /// # Panics
    ///
    /// Panics if no city has that name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> CityId {
        self.find(name).unwrap_or_else(|| panic!("no city named `{name}`"))
    }

    #[must_use]
    pub fn name(&self, id: CityId) -> &str {
        self.city(id).name()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CityId> {
        (0..self.cities.len() as u16).map(CityId::new)
    }

    #[must_use]
    pub fn neighbours(&self, id: CityId) -> &[CityId] {
        self.city(id).neighbours()
    }

    /// Cities holding a research station, in city order.
    pub fn research_stations(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities
            .iter()
            .filter(|c| c.has_research_station())
            .map(City::id)
    }

    /// Cubes of one disease across the whole map.
    #[must_use]
    pub fn cubes_on_map(&self, disease: DiseaseType) -> usize {
        self.cities.iter().map(|c| c.cubes(disease) as usize).sum()
    }
}
