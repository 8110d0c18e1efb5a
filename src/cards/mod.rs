//! Cards and card piles.
//!
//! ## Key Types
//!
//! - `PlayerCard`: city, epidemic or event card of the player deck
//! - `InfectionCard`: one per city, drives normal infection
//! - `Pile`: ordered deck or discard pile, top at index 0

pub mod card;
pub mod pile;

pub use card::{EventKind, InfectionCard, PlayerCard};
pub use pile::Pile;
