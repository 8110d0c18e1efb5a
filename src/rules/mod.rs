//! Game rules: actions, legal-action enumeration and end conditions.
//!
//! ## Key Types
//!
//! - `Action`: closed sum type of the eight player actions
//! - `RulesEngine`: trait the turn engine drives; `BaseRules` implements it
//! - `GameResult`: shared victory or a `DefeatCause`

pub mod action;
pub mod engine;
pub mod legal;

pub use action::Action;
pub use engine::{BaseRules, DefeatCause, GameResult, RulesEngine};
pub use legal::{cure_cards, legal_actions};
