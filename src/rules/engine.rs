//! Engine: owns the canonical deck and hands out games.

use tracing::info;

use super::game::Game;
use crate::cards::{Deck, STANDARD_DECK};
use crate::core::{GameConfig, GameRng};
use crate::players::Player;

/// Entry point. Build one engine, then ask it for games.
///
/// ```
/// use cribbage_engine::players::{GreedyPlayer, RandomPlayer};
/// use cribbage_engine::rules::Engine;
///
/// let mut engine = Engine::new();
/// let mut game = engine.new_game(Box::new(RandomPlayer::new(1)), Box::new(GreedyPlayer::new()));
/// game.deal_cards().unwrap();
/// assert_eq!(game.hand(cribbage_engine::core::Side::One).len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    deck: Deck,
    config: GameConfig,
    rng: GameRng,
}

impl Engine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        info!(seed = config.seed, target = config.target_score, "engine initialized");
        Self {
            deck: STANDARD_DECK,
            rng: GameRng::new(config.seed),
            config,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game between two players.
    ///
    /// Each game draws from its own fork of the engine's random stream, so
    /// games are independent and the sequence of games is reproducible.
    pub fn new_game(&mut self, player_one: Box<dyn Player>, player_two: Box<dyn Player>) -> Game {
        let rng = self.rng.fork();
        info!(
            player_one = player_one.name(),
            player_two = player_two.name(),
            game_seed = rng.seed(),
            "new game"
        );
        Game::new(self.deck, self.config.clone(), rng, player_one, player_two)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::GreedyPlayer;
    use crate::rules::Phase;

    #[test]
    fn test_engine_owns_standard_deck() {
        let engine = Engine::new();
        assert_eq!(engine.deck(), &STANDARD_DECK);
        assert_eq!(engine.config(), &GameConfig::default());
    }

    #[test]
    fn test_new_game_starts_idle() {
        let mut engine = Engine::new();
        let game = engine.new_game(Box::new(GreedyPlayer::new()), Box::new(GreedyPlayer::new()));

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.scores().iter().map(|(_, s)| *s).sum::<u32>(), 0);
        assert_eq!(game.pool().len(), 52);
    }

    #[test]
    fn test_games_from_same_seed_match() {
        let deal = |seed: u64| {
            let mut engine = Engine::with_config(GameConfig::default().with_seed(seed));
            let mut game = engine.new_game(Box::new(GreedyPlayer::new()), Box::new(GreedyPlayer::new()));
            game.deal_cards().unwrap();
            game.hand(crate::core::Side::One).clone()
        };

        assert_eq!(deal(5), deal(5));
        assert_ne!(deal(5), deal(6));
    }
}
