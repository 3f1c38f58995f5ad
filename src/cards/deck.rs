//! The canonical 52-card deck.
//!
//! Built once at compile time and never mutated. Rounds work from a fresh
//! `Pile` snapshot of it (see [`crate::zones::Pile`]).

use super::card::{Card, Rank, Suit};

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 52;

/// The canonical deck, ordered by (rank, suit).
pub static STANDARD_DECK: Deck = Deck::standard();

/// An immutable, ordered set of all 52 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Build the standard deck in (rank, suit) order.
    #[must_use]
    pub const fn standard() -> Self {
        let mut cards = [Card::new(Rank::Ace, Suit::Clubs); DECK_SIZE];
        let mut r = 0;
        while r < Rank::ALL.len() {
            let mut s = 0;
            while s < Suit::ALL.len() {
                cards[r * Suit::ALL.len() + s] = Card::new(Rank::ALL[r], Suit::ALL[s]);
                s += 1;
            }
            r += 1;
        }
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        DECK_SIZE
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Every card in the deck that is not in `exclude`.
    pub fn without<'a>(&'a self, exclude: &'a [Card]) -> impl Iterator<Item = Card> + 'a {
        self.iter().filter(move |card| !exclude.contains(card))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Deck::standard();
        let unique: FxHashSet<Card> = deck.iter().collect();

        assert_eq!(deck.len(), 52);
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_standard_deck_is_sorted() {
        let deck = Deck::standard();
        assert!(deck.cards().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Hearts));
    }

    #[test]
    fn test_value_distribution() {
        let tens = STANDARD_DECK.iter().filter(|c| c.value() == 10).count();
        assert_eq!(tens, 16);
    }

    #[test]
    fn test_without() {
        let hand = Card::parse_many("5C 7D 10S 3S JH QH").unwrap();
        let rest: Vec<_> = STANDARD_DECK.without(&hand).collect();

        assert_eq!(rest.len(), 46);
        assert!(hand.iter().all(|c| !rest.contains(c)));
    }
}
