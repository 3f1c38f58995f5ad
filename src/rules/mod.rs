//! Round sequencing.
//!
//! `Engine` holds the deck and configuration and creates games. `Game`
//! owns all mutable round state and exposes one operation per step of a
//! round; `Phase` records which step comes next.

pub mod engine;
pub mod game;
pub mod phase;

pub use engine::Engine;
pub use game::{Game, PlayOutcome, RoundSummary};
pub use phase::Phase;
