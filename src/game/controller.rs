//! Decision makers for the turn engine.

use crate::cards::PlayerCard;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::rules::Action;

use super::turn::Game;

/// Supplies every choice `Game::run` needs.
///
/// Both methods return an index into the slice they are given, which is
/// never empty.
pub trait Controller {
    /// Pick one of the current player's legal actions.
    fn choose_action(&mut self, game: &Game, actions: &[Action]) -> usize;

    /// Pick a card for `player` to discard down to the hand limit.
    fn choose_discard(&mut self, game: &Game, player: PlayerId, hand: &[PlayerCard]) -> usize;
}

/// Uniformly random choices from its own seeded stream.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: GameRng,
}

impl RandomController {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Controller for RandomController {
    fn choose_action(&mut self, _game: &Game, actions: &[Action]) -> usize {
        self.rng.gen_range_usize(0..actions.len())
    }

    fn choose_discard(&mut self, _game: &Game, _player: PlayerId, hand: &[PlayerCard]) -> usize {
        self.rng.gen_range_usize(0..hand.len())
    }
}
