//! Rules engine trait and the base-game rules.
//!
//! The turn engine calls into a `RulesEngine` to:
//! - enumerate legal actions
//! - apply an action to the board and players
//! - decide whether the game has ended

use log::info;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::legal;
use crate::board::Board;
use crate::cards::PlayerCard;
use crate::core::config::MAX_OUTBREAKS;
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::map::{DiseaseType, NUM_DISEASES};

/// Why the players lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefeatCause {
    /// The outbreak counter passed its limit.
    OutbreakLimit,
    /// A player card had to be drawn from an empty deck.
    PlayerDeckExhausted,
    /// More cubes of a disease were needed than the supply holds.
    CubesExhausted(DiseaseType),
}

/// Result of a completed game. Everyone wins or loses together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// All four cures discovered.
    Victory,
    Defeat(DefeatCause),
}

impl GameResult {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameResult::Victory)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Victory => f.write_str("all cures discovered, the players win"),
            GameResult::Defeat(DefeatCause::OutbreakLimit) => {
                f.write_str("too many outbreaks, the players lose")
            }
            GameResult::Defeat(DefeatCause::PlayerDeckExhausted) => {
                f.write_str("the player deck ran out, the players lose")
            }
            GameResult::Defeat(DefeatCause::CubesExhausted(d)) => {
                write!(f, "ran out of {d} cubes, the players lose")
            }
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: return empty if the player can't act
/// - `apply_action`: only called with an action `legal_actions` returned;
///   must be deterministic
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Legal actions for `player` in the current state.
    fn legal_actions(
        &self,
        board: &Board,
        players: &PlayerMap<Player>,
        player: PlayerId,
    ) -> Vec<Action>;

    /// Apply an action taken by `player`.
    ///
    /// Returns the player who must now discard down to the hand limit, if
    /// the action pushed someone over it.
    fn apply_action(
        &self,
        board: &mut Board,
        players: &mut PlayerMap<Player>,
        player: PlayerId,
        action: &Action,
    ) -> Option<PlayerId>;

    /// Check if the game is over.
    fn is_terminal(&self, board: &Board) -> Option<GameResult>;
}

/// Base-game rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseRules;

impl RulesEngine for BaseRules {
    fn legal_actions(
        &self,
        board: &Board,
        players: &PlayerMap<Player>,
        player: PlayerId,
    ) -> Vec<Action> {
        legal::legal_actions(board, players, player)
    }

    fn apply_action(
        &self,
        board: &mut Board,
        players: &mut PlayerMap<Player>,
        player: PlayerId,
        action: &Action,
    ) -> Option<PlayerId> {
        let here = players[player].location();
        info!("{} ({}): {}", player, players[player].role(), action.describe(board.graph()));

        match *action {
            Action::Drive { to } | Action::ShuttleFlight { to } => {
                players[player].move_to(to);
            }
            Action::DirectFlight { to } => {
                spend(board, &mut players[player], PlayerCard::City(to));
                players[player].move_to(to);
            }
            Action::CharterFlight { to } => {
                spend(board, &mut players[player], PlayerCard::City(here));
                players[player].move_to(to);
            }
            Action::BuildResearchStation => {
                if !players[player].role().builds_stations_free() {
                    spend(board, &mut players[player], PlayerCard::City(here));
                }
                board.build_research_station(here);
            }
            Action::TreatDisease { disease } => {
                if board.is_cure_discovered(disease) {
                    board.city_mut(here).clear_cubes(disease);
                } else {
                    board.city_mut(here).remove_cube(disease);
                }
            }
            Action::ShareKnowledge { card, giver, receiver } => {
                let card = players[giver].remove_card(PlayerCard::City(card));
                players[receiver].add_card(card);
                if players[receiver].over_hand_limit() {
                    return Some(receiver);
                }
            }
            Action::DiscoverCure { disease } => {
                let needed = players[player].role().cards_to_cure();
                let spent: Vec<PlayerCard> = players[player]
                    .hand()
                    .iter()
                    .copied()
                    .filter(|card| card.city().is_some_and(|c| board.city(c).disease() == disease))
                    .take(needed)
                    .collect();
                assert_eq!(spent.len(), needed, "not enough {disease} cards to cure");
                for card in spent {
                    spend(board, &mut players[player], card);
                }
                board.discover_cure(disease);
            }
        }
        None
    }

    fn is_terminal(&self, board: &Board) -> Option<GameResult> {
        if board.outbreaks() > MAX_OUTBREAKS {
            return Some(GameResult::Defeat(DefeatCause::OutbreakLimit));
        }
        if board.player_deck_exhausted() {
            return Some(GameResult::Defeat(DefeatCause::PlayerDeckExhausted));
        }
        if let Some(disease) = board.disease_cubes_exhausted() {
            return Some(GameResult::Defeat(DefeatCause::CubesExhausted(disease)));
        }
        if board.num_discovered_cures() == NUM_DISEASES {
            return Some(GameResult::Victory);
        }
        None
    }
}

/// Move a card from the hand to the player discard pile.
fn spend(board: &mut Board, player: &mut Player, card: PlayerCard) {
    let card = player.remove_card(card);
    board.discard_player_card(card);
}
