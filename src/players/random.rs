//! Uniform-random baseline strategy.

use tracing::debug;

use super::trait_def::{Player, PlayerError};
use crate::cards::Card;
use crate::core::GameRng;

/// Chooses uniformly among legal discards and plays.
///
/// Seeded, so the same seed against the same deals reproduces a game.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed).for_context(Self::NAME))
    }

    /// Use an existing stream, e.g. a fork of the engine's.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn discard(&mut self, hand: &[Card]) -> Result<(Card, Card), PlayerError> {
        if hand.len() < 2 {
            return Err(PlayerError::HandTooSmall(hand.len()));
        }
        let first = self.rng.gen_range_usize(0..hand.len());
        let mut second = self.rng.gen_range_usize(0..hand.len() - 1);
        if second >= first {
            second += 1;
        }
        debug!(first = %hand[first], second = %hand[second], "random discard");
        Ok((hand[first], hand[second]))
    }

    fn choose_run_card(&mut self, legal: &[Card], _run: &[Card], _run_total: u32) -> Result<Card, PlayerError> {
        let card = self.rng.choose(legal).copied().ok_or(PlayerError::NoLegalCards)?;
        debug!(%card, "random play");
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(text: &str) -> Vec<Card> {
        Card::parse_many(text).unwrap()
    }

    #[test]
    fn test_discard_is_two_distinct_held_cards() {
        let hand = cards("AC 2D 3S 4H 5C 6D");
        let mut player = RandomPlayer::new(7);

        for _ in 0..50 {
            let (a, b) = player.discard(&hand).unwrap();
            assert_ne!(a, b);
            assert!(hand.contains(&a));
            assert!(hand.contains(&b));
        }
    }

    #[test]
    fn test_discard_from_tiny_hand() {
        let mut player = RandomPlayer::new(7);
        assert_eq!(player.discard(&cards("AC")), Err(PlayerError::HandTooSmall(1)));
    }

    #[test]
    fn test_play_is_legal() {
        let legal = cards("AC 9D");
        let mut player = RandomPlayer::new(3);

        for _ in 0..20 {
            let card = player.choose_run_card(&legal, &[], 0).unwrap();
            assert!(legal.contains(&card));
        }
    }

    #[test]
    fn test_play_without_options() {
        let mut player = RandomPlayer::new(3);
        assert_eq!(player.choose_run_card(&[], &[], 30), Err(PlayerError::NoLegalCards));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let hand = cards("AC 2D 3S 4H 5C 6D");
        let mut p1 = RandomPlayer::new(11);
        let mut p2 = RandomPlayer::new(11);

        for _ in 0..10 {
            assert_eq!(p1.discard(&hand), p2.discard(&hand));
        }
    }
}
