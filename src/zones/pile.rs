//! Owned card collections with move-only transfer.
//!
//! Every place a card can be during a round (pool, hands, crib, run,
//! played pile) is a `Pile`. Cards only move between piles through
//! [`Pile::move_card`], which removes from the source and adds to the
//! destination in one step, so a card is never in two piles at once.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{cards_as_string, Card};
use crate::core::GameRng;

/// Ordered collection of cards.
///
/// Insertion order is preserved; the run relies on it. SmallVec keeps
/// hands, the crib, and the run off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: SmallVec<[Card; 8]>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile holding the given cards, in order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Sum of counting values.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// Move `card` from this pile onto the end of `to`.
    ///
    /// Returns `false` and leaves both piles untouched if this pile does
    /// not hold the card.
    #[must_use]
    pub fn move_card(&mut self, card: Card, to: &mut Pile) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                to.cards.push(self.cards.remove(idx));
                true
            }
            None => false,
        }
    }

    /// Move every card onto the end of `to`, keeping order.
    pub fn move_all(&mut self, to: &mut Pile) {
        to.cards.extend(self.cards.drain(..));
    }

    /// Remove a uniformly chosen card.
    ///
    /// Removal preserves the order of the remaining cards so the same seed
    /// always draws the same sequence.
    pub fn take_random(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..self.cards.len());
        Some(self.cards.remove(idx))
    }

    /// Move a uniformly chosen card onto the end of `to`.
    pub fn deal_random(&mut self, rng: &mut GameRng, to: &mut Pile) -> Option<Card> {
        let card = self.take_random(rng)?;
        to.cards.push(card);
        Some(card)
    }

    /// Remove all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cards_as_string(&self.cards))
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
