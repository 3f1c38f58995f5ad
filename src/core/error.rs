//! Engine error type.
//!
//! Every error is a synchronously discovered logic error; nothing here is
//! retryable. A driver decides whether to abandon or restart a round.

use thiserror::Error;

use super::side::Side;
use crate::players::PlayerError;
use crate::rules::Phase;

/// Errors surfaced by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CribbageError {
    /// An operation was invoked before its prerequisite phase.
    #[error("cannot {operation} during the {phase} phase")]
    StateSequence {
        operation: &'static str,
        phase: Phase,
    },

    /// A player returned a card it does not hold or an illegal play.
    #[error("{side} broke the player contract: {reason}")]
    ContractViolation { side: Side, reason: String },

    /// A player could not produce a decision.
    #[error("{side} failed to decide")]
    Player {
        side: Side,
        #[source]
        source: PlayerError,
    },

    /// Internal bookkeeping mismatch.
    #[error("invariant broken: {0}")]
    Invariant(String),
}

impl CribbageError {
    pub(crate) fn contract(side: Side, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            side,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}
