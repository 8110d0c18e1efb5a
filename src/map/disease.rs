//! Disease types and cure tracking.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

pub const NUM_DISEASES: usize = 4;

/// The four diseases. Discriminants match the city-file disease index.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum DiseaseType {
    Yellow = 0,
    Red = 1,
    Blue = 2,
    Black = 3,
}

impl DiseaseType {
    /// Map a city-file index (0-3) to a disease.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Cure state of one disease. Eradication is derived from the map, see
/// `Board::is_cure_eradicated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cure {
    pub disease: DiseaseType,
    pub discovered: bool,
}

/// One `Cure` per disease, all undiscovered at game start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CureTracker {
    cures: Vec<Cure>,
}

impl Default for CureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cures: DiseaseType::iter()
                .map(|disease| Cure { disease, discovered: false })
                .collect(),
        }
    }

    /// Mark a cure discovered. Returns false if it already was.
    pub fn discover(&mut self, disease: DiseaseType) -> bool {
        let cure = &mut self.cures[disease.index()];
        let newly = !cure.discovered;
        cure.discovered = true;
        newly
    }

    #[must_use]
    pub fn is_discovered(&self, disease: DiseaseType) -> bool {
        self.cures[disease.index()].discovered
    }

    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.cures.iter().filter(|c| c.discovered).count()
    }

    #[must_use]
    pub fn all_discovered(&self) -> bool {
        self.discovered_count() == self.cures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cure> {
        self.cures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_disease_indices() {
        assert_eq!(DiseaseType::COUNT, NUM_DISEASES);
        assert_eq!(DiseaseType::from_index(0), Some(DiseaseType::Yellow));
        assert_eq!(DiseaseType::from_index(1), Some(DiseaseType::Red));
        assert_eq!(DiseaseType::from_index(3), Some(DiseaseType::Black));
        assert_eq!(DiseaseType::from_index(4), None);
        for disease in DiseaseType::iter() {
            assert_eq!(DiseaseType::from_index(disease.index()), Some(disease));
        }
    }

    #[test]
    fn test_disease_names() {
        assert_eq!(DiseaseType::Yellow.to_string(), "Yellow");
        assert_eq!(format!("{}", DiseaseType::Black), "Black");
    }

    #[test]
    fn test_discover_cures() {
        let mut cures = CureTracker::new();
        assert_eq!(cures.discovered_count(), 0);

        assert!(cures.discover(DiseaseType::Red));
        assert!(cures.is_discovered(DiseaseType::Red));
        assert_eq!(cures.discovered_count(), 1);

        // Idempotent
        assert!(!cures.discover(DiseaseType::Red));
        assert_eq!(cures.discovered_count(), 1);
    }

    #[test]
    fn test_all_discovered_only_at_four() {
        let mut cures = CureTracker::new();
        for (i, disease) in DiseaseType::iter().enumerate() {
            assert!(!cures.all_discovered());
            cures.discover(disease);
            assert_eq!(cures.discovered_count(), i + 1);
        }
        assert!(cures.all_discovered());
    }
}
