//! Playing card identity.
//!
//! A `Card` is a plain `Copy` value: rank and suit. Ordering is by rank
//! first, then suit, which gives the deterministic order every strategy
//! and test relies on. The cribbage value (faces count 10) is derived
//! from the rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit, in the engine's canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    /// Unicode symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' | 'c' | '♣' => Some(Suit::Clubs),
            'D' | 'd' | '♦' => Some(Suit::Diamonds),
            'S' | 's' | '♠' => Some(Suit::Spades),
            'H' | 'h' | '♥' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal position, 1 (ace) through 13 (king). Used for sequences.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Rank for an ordinal 1..=13.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Counting value: ace is 1, faces are 10.
    #[must_use]
    pub const fn value(self) -> u32 {
        let n = self as u32;
        if n > 10 {
            10
        } else {
            n
        }
    }

    /// Short label used for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "A" | "1" => Some(Rank::Ace),
            "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            other => other.parse::<u8>().ok().filter(|n| (2..=10).contains(n)).and_then(Self::from_number),
        }
    }
}

/// A playing card.
///
/// Field order matters: the derived ordering compares rank, then suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Counting value (1-10).
    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank.value()
    }

    /// Parse a whitespace-separated list such as `"5C 7D 10S"`.
    pub fn parse_many(input: &str) -> Result<Vec<Card>, CardParseError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Error parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("empty card text")]
    Empty,
    #[error("unknown rank in {0:?}")]
    Rank(String),
    #[error("unknown suit in {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Accepts a rank label followed by a suit letter or symbol:
    /// `"5C"`, `"10d"`, `"TD"`, `"Q♥"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let suit_char = text.chars().last().ok_or(CardParseError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| CardParseError::Suit(text.to_string()))?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_text).ok_or_else(|| CardParseError::Rank(text.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Render cards as a comma-separated list, e.g. `5♣,7♦,10♠`.
pub fn cards_as_string<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards.into_iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}
