//! Round phases.

use serde::{Deserialize, Serialize};

/// Where a game is within its round.
///
/// ```text
/// Idle -> Dealt -> Discarded -> Cut -> Playing* -> PoneCounted
///      -> DealerCounted -> Scored -> (Dealt | Finished)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No round dealt yet.
    Idle,
    /// Six cards in each hand.
    Dealt,
    /// Four cards in each hand, four in the crib.
    Discarded,
    /// Start card cut, nothing played.
    Cut,
    /// At least one play made.
    Playing,
    /// Pone's hand counted.
    PoneCounted,
    /// Dealer's hand counted.
    DealerCounted,
    /// Crib counted; ready for the next deal.
    Scored,
    /// A side reached the target score.
    Finished,
}

impl Phase {
    /// True during the play loop (including just after the cut).
    #[must_use]
    pub const fn is_play(self) -> bool {
        matches!(self, Phase::Cut | Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Dealt => "dealt",
            Phase::Discarded => "discarded",
            Phase::Cut => "cut",
            Phase::Playing => "playing",
            Phase::PoneCounted => "pone counted",
            Phase::DealerCounted => "dealer counted",
            Phase::Scored => "scored",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}
