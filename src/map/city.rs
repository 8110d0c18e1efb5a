//! Cities: disease cubes, research station, adjacency.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use super::disease::{DiseaseType, NUM_DISEASES};
use crate::core::config::MAX_CUBES_PER_CITY;

/// Stable handle of a city inside its `CityGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u16);

impl CityId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the city graph.
///
/// Neighbours are stored as handles; the graph keeps them symmetric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    id: CityId,
    name: String,
    disease: DiseaseType,
    research_station: bool,
    cubes: [u8; NUM_DISEASES],
    neighbours: SmallVec<[CityId; 6]>,
}

impl City {
    #[must_use]
    pub fn new(id: CityId, name: impl Into<String>, disease: DiseaseType) -> Self {
        Self {
            id,
            name: name.into(),
            disease,
            research_station: false,
            cubes: [0; NUM_DISEASES],
            neighbours: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Native disease, fixed at creation.
    #[must_use]
    pub fn disease(&self) -> DiseaseType {
        self.disease
    }

    #[must_use]
    pub fn has_research_station(&self) -> bool {
        self.research_station
    }

    pub fn set_research_station(&mut self, present: bool) {
        self.research_station = present;
    }

    #[must_use]
    pub fn neighbours(&self) -> &[CityId] {
        &self.neighbours
    }

    #[must_use]
    pub fn is_neighbour(&self, other: CityId) -> bool {
        self.neighbours.contains(&other)
    }

    /// One direction of an edge; `CityGraph::connect` adds both.
    pub(crate) fn add_neighbour(&mut self, other: CityId) -> bool {
        if other == self.id || self.neighbours.contains(&other) {
            return false;
        }
        self.neighbours.push(other);
        true
    }

    /// Add one cube of `disease`.
    ///
    /// Returns true, leaving the count at the cap, when the city already
    /// holds the maximum: the caller owns the outbreak.
    pub fn add_cube(&mut self, disease: DiseaseType) -> bool {
        let count = &mut self.cubes[disease.index()];
        if *count >= MAX_CUBES_PER_CITY {
            return true;
        }
        *count += 1;
        false
    }

    /// Remove one cube of `disease`; no-op at zero. Returns whether a cube
    /// was removed.
    pub fn remove_cube(&mut self, disease: DiseaseType) -> bool {
        let count = &mut self.cubes[disease.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Remove every cube of `disease`, returning how many there were.
    pub fn clear_cubes(&mut self, disease: DiseaseType) -> u8 {
        std::mem::take(&mut self.cubes[disease.index()])
    }

    #[must_use]
    pub fn cubes(&self, disease: DiseaseType) -> u8 {
        self.cubes[disease.index()]
    }

    #[must_use]
    pub fn total_cubes(&self) -> u8 {
        self.cubes.iter().sum()
    }

    /// Diseases with at least one cube here, in disease order.
    pub fn cube_types(&self) -> impl Iterator<Item = DiseaseType> + '_ {
        DiseaseType::iter().filter(move |&d| self.cubes(d) > 0)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
