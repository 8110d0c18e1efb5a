//! The world map: cities, their adjacency, disease cubes and cures.
//!
//! ## Key Types
//!
//! - `CityGraph`: arena of `City` nodes addressed by `CityId`
//! - `DiseaseType`: the four diseases
//! - `CureTracker`: discovered/undiscovered state per disease
//!
//! Maps come from the text format in `parser`, or `CityGraph::standard()`.

pub mod city;
pub mod disease;
pub mod graph;
pub mod parser;

pub use city::{City, CityId};
pub use disease::{Cure, CureTracker, DiseaseType, NUM_DISEASES};
pub use graph::{CityGraph, STANDARD_MAP};
pub use parser::{load_cities, parse_cities, title_case};
