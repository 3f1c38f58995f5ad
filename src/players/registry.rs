//! Named strategy registry.
//!
//! To add a strategy: implement `Player`, then add a `StrategyFactory`
//! entry with a stable `name` and `version`. Keep the list ordered and the
//! constructors free of side effects; the same seed must give the same
//! behavior.

use super::{GreedyPlayer, Player, RandomPlayer};

/// Factory for constructing a registered strategy.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: u64) -> Box<dyn Player>,
}

static STRATEGIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random,
    },
    StrategyFactory {
        name: GreedyPlayer::NAME,
        version: GreedyPlayer::VERSION,
        make: make_greedy,
    },
];

/// All registered strategies.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGIES
}

/// Look a strategy up by name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies().iter().find(|factory| factory.name == name)
}

fn make_random(seed: u64) -> Box<dyn Player> {
    Box::new(RandomPlayer::new(seed))
}

fn make_greedy(_seed: u64) -> Box<dyn Player> {
    Box::new(GreedyPlayer::new())
}
