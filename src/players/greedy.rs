//! Greedy heuristic strategy.
//!
//! Play: score every legal card with the run-play scorer, nudge the score
//! with a few positional adjustments, take the best. Ties go to the highest
//! counting value so low cards are kept for later.
//!
//! Discard: for every way to throw two cards, average the kept hand's
//! count over every possible start card and keep the best average. This
//! is an exhaustive expectation search (15 discards x 46 starts).

use tracing::debug;

use super::trait_def::{Player, PlayerError};
use crate::cards::{Card, STANDARD_DECK};
use crate::scoring::{score_hand, score_run_play, FIFTEEN};

/// Run totals below this are hard for the opponent to score on.
const LOW_TOTAL: u32 = 5;

/// Deterministic greedy player.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    pub const NAME: &'static str = "greedy";
    pub const VERSION: &'static str = "1.0.0";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Raw play score plus positional adjustments.
    fn adjusted_play_score(run: &[Card], run_total: u32, card: Card) -> f64 {
        let resulting = run_total + card.value();
        let mut points = f64::from(score_run_play(run, card));

        if resulting < LOW_TOTAL {
            points += 0.5;
        } else if resulting == LOW_TOTAL {
            points -= 0.5;
        } else if resulting == FIFTEEN {
            points -= 0.3;
        }

        // jumping past 15 takes fifteen-two away from the opponent
        if run_total < FIFTEEN && FIFTEEN < resulting {
            points += 0.5;
        }
        points
    }

    /// Average count of `kept` over every start card not in `hand`.
    fn expected_hand_score(kept: &[Card; 4], hand: &[Card]) -> f64 {
        let (total, starts) = STANDARD_DECK
            .without(hand)
            .fold((0u32, 0u32), |(total, n), start| (total + score_hand(kept, start), n + 1));
        if starts == 0 {
            return 0.0;
        }
        f64::from(total) / f64::from(starts)
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn discard(&mut self, hand: &[Card]) -> Result<(Card, Card), PlayerError> {
        if hand.len() < 2 {
            return Err(PlayerError::HandTooSmall(hand.len()));
        }

        let mut best: Option<((Card, Card), f64)> = None;
        for i in 0..hand.len() {
            for j in (i + 1)..hand.len() {
                let kept: Vec<Card> = hand
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &c)| c)
                    .collect();
                // only a six-card hand leaves a countable four
                let average = match <[Card; 4]>::try_from(kept.as_slice()) {
                    Ok(kept) => Self::expected_hand_score(&kept, hand),
                    Err(_) => 0.0,
                };
                if best.map_or(true, |(_, score)| average > score) {
                    best = Some(((hand[i], hand[j]), average));
                }
            }
        }

        let ((first, second), average) = best.ok_or(PlayerError::HandTooSmall(hand.len()))?;
        debug!(%first, %second, average, "greedy discard");
        Ok((first, second))
    }

    fn choose_run_card(&mut self, legal: &[Card], run: &[Card], run_total: u32) -> Result<Card, PlayerError> {
        let mut best: Option<(Card, f64)> = None;
        for &card in legal {
            let points = Self::adjusted_play_score(run, run_total, card);
            let better = match best {
                None => true,
                Some((held, score)) => points > score || (points == score && card.value() > held.value()),
            };
            if better {
                best = Some((card, points));
            }
        }

        let (card, points) = best.ok_or(PlayerError::NoLegalCards)?;
        debug!(%card, points, run_total, "greedy play");
        Ok(card)
    }
}
