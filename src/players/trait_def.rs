//! Player capability trait.

use thiserror::Error;

use crate::cards::Card;

/// Errors a player can report instead of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Asked to play with no legal cards.
    #[error("no legal cards to choose from")]
    NoLegalCards,
    /// Asked to discard from a hand smaller than two cards.
    #[error("cannot discard two cards from a hand of {0}")]
    HandTooSmall(usize),
}

/// Decision boundary between the game and a strategy.
///
/// The game owns all state and passes what a decision needs as explicit
/// arguments. Both calls must return immediately. The game validates every
/// answer: a card the player does not hold, or an illegal play, is a
/// contract violation.
pub trait Player: Send {
    /// Registry name of the strategy.
    fn name(&self) -> &'static str;

    /// Pick two distinct cards from `hand` to put in the crib.
    fn discard(&mut self, hand: &[Card]) -> Result<(Card, Card), PlayerError>;

    /// Pick one of `legal` to lay on the run.
    ///
    /// `legal` holds only cards that keep the run total at or under 31;
    /// `run` is the current street, oldest card first.
    fn choose_run_card(&mut self, legal: &[Card], run: &[Card], run_total: u32) -> Result<Card, PlayerError>;
}
