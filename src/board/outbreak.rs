//! Disease placement and outbreak cascades.
//!
//! Adding a cube to a city already holding three of that disease outbreaks
//! the city: the outbreak counter goes up and every neighbour receives one
//! cube of the same disease, which may outbreak in turn. A city outbreaks
//! at most once per cascade; later pushes into it are dropped.
//!
//! The cascade runs on an explicit worklist. Traversal order only affects
//! log order, never the resulting cube counts or outbreak total.

use log::{debug, info, trace};

use super::state::Board;
use crate::map::{CityId, DiseaseType};

impl Board {
    /// Add one cube of the city's own disease, cascading outbreaks.
    ///
    /// Returns the number of outbreaks this placement caused.
    pub fn add_disease(&mut self, city: CityId) -> u32 {
        let disease = self.graph.city(city).disease();
        self.add_disease_of(city, disease)
    }

    /// Add one cube of `disease` to `city`, cascading outbreaks.
    ///
    /// Returns the number of outbreaks this placement caused.
    pub fn add_disease_of(&mut self, city: CityId, disease: DiseaseType) -> u32 {
        trace!("Adding {} to {}", disease, self.graph.name(city));
        let before = self.outbreaks;
        self.spread(vec![city], disease);
        self.outbroken.clear();
        self.outbreaks - before
    }

    /// Outbreak `city` directly, without placing a cube first.
    pub(super) fn force_outbreak(&mut self, city: CityId, disease: DiseaseType) -> u32 {
        let before = self.outbreaks;
        let mut pending = Vec::new();
        self.outbreak(city, disease, &mut pending);
        self.spread(pending, disease);
        self.outbroken.clear();
        self.outbreaks - before
    }

    fn spread(&mut self, mut pending: Vec<CityId>, disease: DiseaseType) {
        while let Some(city) = pending.pop() {
            if self.outbroken.contains(&city) {
                trace!("{} already outbroke, skipping", self.graph.name(city));
                continue;
            }

            if self.graph.city_mut(city).add_cube(disease) {
                self.outbreak(city, disease, &mut pending);
            } else {
                debug!(
                    "{} now has {} {} cube(s)",
                    self.graph.name(city),
                    self.graph.city(city).cubes(disease),
                    disease
                );
            }
        }
    }

    fn outbreak(&mut self, city: CityId, disease: DiseaseType, pending: &mut Vec<CityId>) {
        self.outbreaks += 1;
        self.outbroken.insert(city);
        info!(
            "Outbreak of {} in {} (outbreaks: {})",
            disease,
            self.graph.name(city),
            self.outbreaks
        );
        pending.extend_from_slice(self.graph.neighbours(city));
    }
}
