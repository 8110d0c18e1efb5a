//! The shared game state and everything that mutates it outside of player
//! actions: setup, infection, epidemics and outbreak cascades.
//!
//! ## Key Types
//!
//! - `Board`: aggregate root owning the map, decks, cures and counters

pub mod infection;
pub mod outbreak;
pub mod state;

pub use state::Board;
