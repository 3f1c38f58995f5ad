//! Pure scoring functions.
//!
//! - [`play`]: points for laying one card onto the run during play
//! - [`hand`]: points for a four-card hand or crib plus the start card
//!
//! Both are side-effect free; the game state machine and the greedy
//! strategy call them with borrowed cards.

pub mod play;
pub mod hand;

pub use play::{score_run_play, RunPlayScore};
pub use hand::{score_crib, score_hand, HandKind, HandScore};

use crate::cards::Card;

/// Total that scores two points during play and in hand counting.
pub const FIFTEEN: u32 = 15;

/// Highest run total allowed during play.
pub const MAX_RUN_TOTAL: u32 = 31;

/// Sum of counting values.
pub fn total_value<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(|c| c.value()).sum()
}

/// True when the rank numbers sort into a gap-free, duplicate-free sequence.
pub(crate) fn is_sequence(ranks: &mut [u8]) -> bool {
    ranks.sort_unstable();
    ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sequence() {
        assert!(is_sequence(&mut [5, 7, 6]));
        assert!(is_sequence(&mut [13, 11, 12, 10]));
        assert!(!is_sequence(&mut [5, 5, 6]));
        assert!(!is_sequence(&mut [2, 4, 5]));
    }

    #[test]
    fn test_total_value() {
        let cards = Card::parse_many("KC 5D AS").unwrap();
        assert_eq!(total_value(&cards), 16);
    }
}
