//! Cards and the standard deck.
//!
//! - `Card`: immutable rank + suit value with a cribbage counting value
//! - `Deck`: the canonical 52-card set, built once

pub mod card;
pub mod deck;

pub use card::{cards_as_string, Card, CardParseError, Rank, Suit};
pub use deck::{Deck, DECK_SIZE, STANDARD_DECK};
