//! Hand and crib counting.
//!
//! Counts a four-card hand together with the shared start card. The five
//! cards are small enough to enumerate every subset directly: each subset
//! is a 5-bit mask over `[hand[0], .., hand[3], start]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::{is_sequence, FIFTEEN};
use crate::cards::{Card, Rank};
use crate::core::CribFlushRule;

const COUNTED: usize = 5;
const ALL_SUBSETS: u32 = 1 << COUNTED;

/// Which flush rule applies to the four cards being counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandKind {
    Hand,
    Crib(CribFlushRule),
}

/// Points for one hand, by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandScore {
    /// 1 per jack in hand matching the start card's suit.
    pub nobs: u32,
    /// 0, 4 or 5.
    pub flush: u32,
    /// 2 per subset summing to 15.
    pub fifteens: u32,
    /// 2 per pair of equal ranks.
    pub pairs: u32,
    /// Sum of the lengths of maximal sequences.
    pub runs: u32,
}

impl HandScore {
    /// Count `hand` with `start`.
    #[must_use]
    pub fn evaluate(hand: &[Card; 4], start: Card, kind: HandKind) -> Self {
        let mut all = [start; COUNTED];
        all[..4].copy_from_slice(hand);

        let score = Self {
            nobs: nobs(hand, start),
            flush: flush(hand, start, kind),
            fifteens: fifteens(&all),
            pairs: pairs(&all),
            runs: runs(&all),
        };
        trace!(?hand, %start, ?score, "counted hand");
        score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.nobs + self.flush + self.fifteens + self.pairs + self.runs
    }
}

/// Count a hand (four-card flush allowed).
///
/// ```
/// use cribbage_engine::cards::Card;
/// use cribbage_engine::scoring::score_hand;
///
/// let hand = Card::parse_many("5C 7D 10S 3S").unwrap();
/// let hand: [Card; 4] = hand.try_into().unwrap();
/// assert_eq!(score_hand(&hand, "2S".parse().unwrap()), 6);
/// ```
#[must_use]
pub fn score_hand(hand: &[Card; 4], start: Card) -> u32 {
    HandScore::evaluate(hand, start, HandKind::Hand).total()
}

/// Count a crib under the given flush rule.
#[must_use]
pub fn score_crib(crib: &[Card; 4], start: Card, rule: CribFlushRule) -> u32 {
    HandScore::evaluate(crib, start, HandKind::Crib(rule)).total()
}

fn nobs(hand: &[Card; 4], start: Card) -> u32 {
    hand.iter()
        .filter(|c| c.rank() == Rank::Jack && c.suit() == start.suit())
        .count() as u32
}

fn flush(hand: &[Card; 4], start: Card, kind: HandKind) -> u32 {
    let suit = hand[0].suit();
    if hand.iter().any(|c| c.suit() != suit) {
        return 0;
    }
    let start_matches = start.suit() == suit;
    match (start_matches, kind) {
        (true, _) => 5,
        (false, HandKind::Hand) | (false, HandKind::Crib(CribFlushRule::AllowFourCard)) => 4,
        (false, HandKind::Crib(CribFlushRule::RequireStartMatch)) => 0,
    }
}

fn subset(cards: &[Card; COUNTED], mask: u32) -> impl Iterator<Item = Card> + '_ {
    cards
        .iter()
        .enumerate()
        .filter(move |(i, _)| mask & (1 << i) != 0)
        .map(|(_, &c)| c)
}

fn fifteens(cards: &[Card; COUNTED]) -> u32 {
    let count = (0..ALL_SUBSETS)
        .filter(|mask| mask.count_ones() >= 2)
        .filter(|&mask| subset(cards, mask).map(|c| c.value()).sum::<u32>() == FIFTEEN)
        .count() as u32;
    count * 2
}

fn pairs(cards: &[Card; COUNTED]) -> u32 {
    let mut count = 0;
    for i in 0..COUNTED {
        for j in (i + 1)..COUNTED {
            if cards[i].rank() == cards[j].rank() {
                count += 1;
            }
        }
    }
    count * 2
}

/// Largest sequences first; a sequence inside an accepted one is not
/// counted again, but disjoint or overlapping-but-distinct ones are.
fn runs(cards: &[Card; COUNTED]) -> u32 {
    let mut accepted: SmallVec<[u32; 4]> = SmallVec::new();
    let mut points = 0;

    for size in (3..=COUNTED as u32).rev() {
        for mask in (0..ALL_SUBSETS).filter(|m| m.count_ones() == size) {
            if accepted.iter().any(|&big| mask & big == mask) {
                continue;
            }
            let mut ranks: SmallVec<[u8; COUNTED]> = subset(cards, mask).map(|c| c.rank().number()).collect();
            if is_sequence(&mut ranks) {
                accepted.push(mask);
                points += size;
            }
        }
    }
    points
}
