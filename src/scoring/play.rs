//! Play-phase scoring.
//!
//! Scores one card laid onto the run. The run passed in is the state
//! *before* the card is appended, oldest card first.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{is_sequence, total_value, FIFTEEN, MAX_RUN_TOTAL};
use crate::cards::Card;

/// Points for a single run play, by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlayScore {
    /// 2 when the new total is exactly 15 or 31.
    pub fifteen_or_thirty_one: u32,
    /// Pair ladder: 2, 6 or 12 for a pair, triple or quadruple.
    pub pairs: u32,
    /// Length of the longest trailing sequence (3+), else 0.
    pub sequence: u32,
}

impl RunPlayScore {
    /// Score `card` played onto `run`.
    #[must_use]
    pub fn evaluate(run: &[Card], card: Card) -> Self {
        let total = total_value(run) + card.value();
        let fifteen_or_thirty_one = if total == FIFTEEN || total == MAX_RUN_TOTAL { 2 } else { 0 };

        let matching = run.iter().rev().take_while(|c| c.rank() == card.rank()).count();
        let pairs = match matching {
            0 => 0,
            1 => 2,
            2 => 6,
            _ => 12,
        };

        let score = Self {
            fifteen_or_thirty_one,
            pairs,
            sequence: trailing_sequence(run, card),
        };
        trace!(%card, total, ?score, "scored run play");
        score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.fifteen_or_thirty_one + self.pairs + self.sequence
    }
}

/// Points for playing `card` onto `run`.
///
/// ```
/// use cribbage_engine::cards::Card;
/// use cribbage_engine::scoring::score_run_play;
///
/// let run = Card::parse_many("5C 7D").unwrap();
/// assert_eq!(score_run_play(&run, "6S".parse().unwrap()), 3);
/// ```
#[must_use]
pub fn score_run_play(run: &[Card], card: Card) -> u32 {
    RunPlayScore::evaluate(run, card).total()
}

/// Longest window ending at the new card whose ranks form a sequence.
///
/// Windows shrink from the front; the first one that passes is the only
/// one scored.
fn trailing_sequence(run: &[Card], card: Card) -> u32 {
    let ranks: Vec<u8> = run
        .iter()
        .chain(std::iter::once(&card))
        .map(|c| c.rank().number())
        .collect();

    for start in 0..ranks.len() {
        let mut window = ranks[start..].to_vec();
        if window.len() < 3 {
            break;
        }
        if is_sequence(&mut window) {
            return window.len() as u32;
        }
    }
    0
}
