//! Players: the pluggable decision boundary.
//!
//! - `Player`: the two-operation capability the game calls into
//! - `RandomPlayer`: uniform-random baseline (seedable)
//! - `GreedyPlayer`: scores every option and takes the best
//! - registry: construct a strategy by name

mod greedy;
mod random;
pub mod registry;
mod trait_def;

pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_strategies, StrategyFactory};
pub use trait_def::{Player, PlayerError};
