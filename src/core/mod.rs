//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks every other module leans on. None of them
//! know anything about cards.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{CribFlushRule, GameConfig, DEFAULT_TARGET_SCORE};
pub use error::CribbageError;
