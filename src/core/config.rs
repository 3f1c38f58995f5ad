//! Game configuration.
//!
//! Rule knobs that vary between tables live here rather than in the
//! state machine. Fixed rule constants (heels, last card, 31) live with
//! the code that applies them.

use serde::{Deserialize, Serialize};

/// Score at which a conventional game of cribbage is won.
pub const DEFAULT_TARGET_SCORE: u32 = 121;

/// How a four-card flush in the crib is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CribFlushRule {
    /// The crib only scores a flush when the start card matches too (5 points).
    #[default]
    RequireStartMatch,
    /// The crib scores like a hand: 4 for four cards, 5 with a matching start.
    AllowFourCard,
}

/// Configuration for a game of cribbage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A game finishes once either side reaches this score at the end of a round.
    pub target_score: u32,

    /// Seed for the engine's random stream.
    /// Same seed produces the same sequence of deals and cuts.
    pub seed: u64,

    /// Crib flush rule.
    pub crib_flush: CribFlushRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            seed: 42,
            crib_flush: CribFlushRule::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom target score.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom crib flush rule.
    #[must_use]
    pub fn with_crib_flush(mut self, rule: CribFlushRule) -> Self {
        self.crib_flush = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.target_score, 121);
        assert_eq!(config.seed, 42);
        assert_eq!(config.crib_flush, CribFlushRule::RequireStartMatch);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_target_score(61)
            .with_seed(7)
            .with_crib_flush(CribFlushRule::AllowFourCard);

        assert_eq!(config.target_score, 61);
        assert_eq!(config.seed, 7);
        assert_eq!(config.crib_flush, CribFlushRule::AllowFourCard);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
