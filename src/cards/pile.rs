//! Ordered card piles.
//!
//! A `Pile` is drawn from the top and discarded onto the top. Index 0 is
//! the top card. Backed by `im::Vector` so a board snapshot clones in
//! O(1) per pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::PlayerCard;
use crate::core::rng::GameRng;

/// A deck or discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<T: Clone> {
    cards: Vector<T>,
}

impl<T: Clone> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for Pile<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Pile<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vector::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }

    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.cards.front()
    }

    /// Draw the top card, or `None` when the pile is empty.
    pub fn draw_top(&mut self) -> Option<T> {
        self.cards.pop_front()
    }

    pub fn draw_bottom(&mut self) -> Option<T> {
        self.cards.pop_back()
    }

    /// Discard onto the top; the most recent discard is drawn first.
    pub fn place_on_top(&mut self, card: T) {
        self.cards.push_front(card);
    }

    pub fn place_on_bottom(&mut self, card: T) {
        self.cards.push_back(card);
    }

    /// Put a whole stack on top of this pile, keeping the stack's order
    /// (its first card becomes the new top).
    pub fn stack_on_top(&mut self, mut stack: Pile<T>) {
        stack.cards.append(std::mem::take(&mut self.cards));
        self.cards = stack.cards;
    }

    /// Empty the pile, returning it.
    pub fn take(&mut self) -> Pile<T> {
        std::mem::take(self)
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<T> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}

impl Pile<PlayerCard> {
    /// Shuffle epidemic cards into the deck.
    ///
    /// The deck is shuffled and split into `count` contiguous sub-piles
    /// whose sizes differ by at most one (larger piles first). One
    /// epidemic is added to each sub-pile, each sub-pile is shuffled on its
    /// own, and the sub-piles are stacked back in order. Exactly one
    /// epidemic therefore surfaces in each stretch of the draw deck.
    ///
    /// Returns the final sub-pile sizes, top first.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn insert_epidemics(&mut self, count: usize, rng: &mut GameRng) -> Vec<usize> {
        assert!(count > 0, "at least one epidemic card is required");

        self.shuffle(rng);
        let base = self.len() / count;
        let mut remainder = self.len() % count;
        let mut rest = self.cards.iter().cloned().collect::<Vec<_>>().into_iter();

        let mut deck = Vector::new();
        let mut sizes = Vec::with_capacity(count);
        for ix in 0..count {
            let mut take = base;
            if remainder > 0 {
                remainder -= 1;
                take += 1;
            }

            let mut sub_pile: Vec<PlayerCard> = rest.by_ref().take(take).collect();
            sub_pile.push(PlayerCard::Epidemic(ix as u8));
            rng.shuffle(&mut sub_pile);

            sizes.push(sub_pile.len());
            deck.extend(sub_pile);
        }

        self.cards = deck;
        sizes
    }
}
