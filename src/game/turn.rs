//! The turn engine.
//!
//! `Game` walks each player through the fixed turn protocol:
//!
//! 1. four actions, each chosen from `legal_actions()`
//! 2. two player-card draws; an epidemic resolves on the spot and a hand
//!    over the limit pauses the turn for a discard
//! 3. infection, one card per step of the infection rate
//!
//! End conditions are checked at the top of every turn and after every
//! action, so a cure that completes the set wins immediately. Once the
//! phase is `GameOver` nothing moves again.

use log::info;
use serde::{Deserialize, Serialize};

use super::controller::Controller;
use crate::board::Board;
use crate::cards::PlayerCard;
use crate::core::config::{GameConfig, ACTIONS_PER_TURN, PLAYER_CARDS_PER_TURN};
use crate::core::error::GameError;
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::rules::{Action, BaseRules, GameResult, RulesEngine};

/// Where the turn resumes once a pending discard is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resume {
    /// Back to the action phase with this many actions left.
    Actions { remaining: u8 },
    /// Back to the draw phase with this many draws left.
    Drawing { remaining: u8 },
}

/// Turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current player's next action.
    AwaitingAction { remaining: u8 },
    /// `player` holds more than the hand limit and must discard.
    Discarding { player: PlayerId, resume: Resume },
    GameOver(GameResult),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    rules: BaseRules,
    current: PlayerId,
    round: u32,
    phase: TurnPhase,
}

impl Game {
    /// Wrap a fully set-up board; player 0 starts round 1.
    pub(super) fn new(config: GameConfig, board: Board, players: PlayerMap<Player>) -> Self {
        let mut game = Self {
            config,
            board,
            players,
            rules: BaseRules,
            current: PlayerId::new(0),
            round: 1,
            phase: TurnPhase::AwaitingAction { remaining: ACTIONS_PER_TURN },
        };
        game.begin_turn();
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// 1-based; a round ends when play wraps back to player 0.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    // === Actions ===

    /// Actions available to the current player. Empty unless the game is
    /// waiting for an action.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            TurnPhase::AwaitingAction { .. } => {
                self.rules.legal_actions(&self.board, &self.players, self.current)
            }
            _ => Vec::new(),
        }
    }

    /// Apply an action for the current player.
    ///
    /// The action must be one `legal_actions()` currently returns. On error
    /// the game is unchanged.
    pub fn apply_action(&mut self, action: &Action) -> Result<(), GameError> {
        let remaining = match self.phase {
            TurnPhase::AwaitingAction { remaining } => remaining,
            TurnPhase::GameOver(_) => return Err(GameError::GameOver),
            TurnPhase::Discarding { .. } => return Err(GameError::NotAwaitingAction),
        };
        if !self.legal_actions().contains(action) {
            return Err(GameError::IllegalAction(*action));
        }

        let discarder = self
            .rules
            .apply_action(&mut self.board, &mut self.players, self.current, action);

        if let Some(result) = self.rules.is_terminal(&self.board) {
            self.finish(result);
            return Ok(());
        }

        let remaining = remaining - 1;
        match discarder {
            Some(player) => {
                self.phase = TurnPhase::Discarding {
                    player,
                    resume: Resume::Actions { remaining },
                };
            }
            None => self.continue_actions(remaining),
        }
        Ok(())
    }

    /// Apply the action at `index` of `legal_actions()`.
    pub fn apply_action_index(&mut self, index: usize) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingAction { .. } => {}
            TurnPhase::GameOver(_) => return Err(GameError::GameOver),
            TurnPhase::Discarding { .. } => return Err(GameError::NotAwaitingAction),
        }
        let actions = self.legal_actions();
        let action = actions.get(index).ok_or(GameError::ChoiceOutOfRange {
            index,
            len: actions.len(),
        })?;
        self.apply_action(action)
    }

    /// Give up the rest of the action phase. Used when no action is legal.
    pub fn skip_actions(&mut self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingAction { .. } => {
                self.draw_phase(PLAYER_CARDS_PER_TURN);
                Ok(())
            }
            TurnPhase::GameOver(_) => Err(GameError::GameOver),
            TurnPhase::Discarding { .. } => Err(GameError::NotAwaitingAction),
        }
    }

    // === Discards ===

    /// The hand to choose from while a discard is pending.
    #[must_use]
    pub fn discard_options(&self) -> &[PlayerCard] {
        match self.phase {
            TurnPhase::Discarding { player, .. } => self.players[player].hand(),
            _ => &[],
        }
    }

    /// Discard the card at `index` of `discard_options()` and carry on.
    pub fn discard(&mut self, index: usize) -> Result<(), GameError> {
        let (player, resume) = match self.phase {
            TurnPhase::Discarding { player, resume } => (player, resume),
            TurnPhase::GameOver(_) => return Err(GameError::GameOver),
            TurnPhase::AwaitingAction { .. } => return Err(GameError::NotDiscarding),
        };
        let len = self.players[player].hand().len();
        let card = self.players[player]
            .remove_at(index)
            .ok_or(GameError::ChoiceOutOfRange { index, len })?;
        self.board.discard_player_card(card);

        if self.players[player].over_hand_limit() {
            return Ok(());
        }
        match resume {
            Resume::Actions { remaining } => self.continue_actions(remaining),
            Resume::Drawing { remaining } => self.draw_phase(remaining),
        }
        Ok(())
    }

    // === Driving ===

    /// Play the game out, asking `controller` for every choice.
    ///
    /// # Panics
    ///
    /// Panics if the controller returns an index outside the options it
    /// was given.
    pub fn run(&mut self, controller: &mut impl Controller) -> GameResult {
        loop {
            match self.phase {
                TurnPhase::GameOver(result) => return result,
                TurnPhase::AwaitingAction { .. } => {
                    let actions = self.legal_actions();
                    let outcome = if actions.is_empty() {
                        self.skip_actions()
                    } else {
                        let choice = controller.choose_action(self, &actions);
                        self.apply_action_index(choice)
                    };
                    if let Err(err) = outcome {
                        panic!("controller made an invalid choice: {err}");
                    }
                }
                TurnPhase::Discarding { player, .. } => {
                    let choice = controller.choose_discard(self, player, self.discard_options());
                    if let Err(err) = self.discard(choice) {
                        panic!("controller made an invalid discard: {err}");
                    }
                }
            }
        }
    }

    /// Log players, hands and the infected cities.
    pub fn log_status(&self) {
        let graph = self.board.graph();
        info!(
            "Round {}, {}'s turn; outbreaks {}, infection rate {}, cures {}",
            self.round,
            self.current,
            self.board.outbreaks(),
            self.board.infection_rate(),
            self.board.num_discovered_cures()
        );
        for (id, player) in self.players.iter() {
            let hand: Vec<String> = player.hand().iter().map(|c| c.describe(graph)).collect();
            info!(
                "{} ({}) in {}: [{}]",
                id,
                player.role(),
                graph.name(player.location()),
                hand.join(", ")
            );
        }
        for city in self.board.infected_cities() {
            let cubes: Vec<String> = city
                .cube_types()
                .map(|d| format!("{} {}", city.cubes(d), d))
                .collect();
            info!("  {}: {}", city.name(), cubes.join(", "));
        }
    }

    // === Internals ===

    fn continue_actions(&mut self, remaining: u8) {
        if remaining > 0 {
            self.phase = TurnPhase::AwaitingAction { remaining };
        } else {
            self.draw_phase(PLAYER_CARDS_PER_TURN);
        }
    }

    fn draw_phase(&mut self, mut remaining: u8) {
        while remaining > 0 {
            remaining -= 1;
            let Some(card) = self.board.draw_player_card() else {
                info!("{} cannot draw, the player deck is empty", self.current);
                self.end_turn();
                return;
            };

            if card.is_epidemic() {
                info!("{} drew an epidemic", self.current);
                self.board.resolve_epidemic();
                self.board.discard_player_card(card);
                continue;
            }

            info!("{} drew {}", self.current, card.describe(self.board.graph()));
            let player = &mut self.players[self.current];
            player.add_card(card);
            if player.over_hand_limit() {
                self.phase = TurnPhase::Discarding {
                    player: self.current,
                    resume: Resume::Drawing { remaining },
                };
                return;
            }
        }

        self.infect_phase();
    }

    fn infect_phase(&mut self) {
        for _ in 0..self.board.infection_rate() {
            if self.board.infect().is_none() {
                break;
            }
        }
        self.end_turn();
    }

    fn end_turn(&mut self) {
        self.current = self.current.next(self.players.player_count());
        if self.current.index() == 0 {
            self.round += 1;
        }
        self.begin_turn();
    }

    fn begin_turn(&mut self) {
        if let Some(result) = self.rules.is_terminal(&self.board) {
            self.finish(result);
            return;
        }
        info!("Round {}: {}'s turn", self.round, self.current);
        self.phase = TurnPhase::AwaitingAction { remaining: ACTIONS_PER_TURN };
    }

    fn finish(&mut self, result: GameResult) {
        info!("Game over after {} round(s): {}", self.round, result);
        self.phase = TurnPhase::GameOver(result);
    }
}
