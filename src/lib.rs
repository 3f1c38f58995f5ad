//! # cribbage-engine
//!
//! A two-player cribbage rules engine.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: the `Game` owns every card location. Players see
//!    borrowed slices and answer with a card; the game validates and moves it.
//!
//! 2. **Cards move, never copy**: pool, hands, crib, run and played pile are
//!    `Pile`s, and cards only travel between them by `move_card`.
//!
//! 3. **Reproducible**: all randomness flows from `GameConfig::seed` through
//!    forked ChaCha streams.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `cards`: suits, ranks, cards and the standard deck
//! - `zones`: owned card piles
//! - `scoring`: pure scoring for run plays and counted hands
//! - `rules`: engine, game state machine and phases
//! - `players`: the player trait, built-in strategies and their registry
//!
//! ## Example
//!
//! ```
//! use cribbage_engine::{Engine, GameConfig, GreedyPlayer, RandomPlayer};
//!
//! let mut engine = Engine::with_config(GameConfig::default().with_seed(7));
//! let mut game = engine.new_game(Box::new(GreedyPlayer::new()), Box::new(RandomPlayer::new(7)));
//! let summary = game.play_round().unwrap();
//! assert_eq!(summary.round, 1);
//! ```

pub mod cards;
pub mod core;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{CribFlushRule, CribbageError, GameConfig, GameRng, Side, SideMap, DEFAULT_TARGET_SCORE};

pub use crate::cards::{cards_as_string, Card, CardParseError, Deck, Rank, Suit, STANDARD_DECK};

pub use crate::zones::Pile;

pub use crate::scoring::{score_crib, score_hand, score_run_play, HandKind, HandScore, RunPlayScore};

pub use crate::rules::{Engine, Game, Phase, PlayOutcome, RoundSummary};

pub use crate::players::{by_name, registered_strategies, GreedyPlayer, Player, PlayerError, RandomPlayer, StrategyFactory};
