//! Player integration tests: the decision contract for every registered
//! strategy, and greedy strength against the random baseline.

use cribbage_engine::{registered_strategies, Card, Engine, GameConfig, GreedyPlayer, RandomPlayer, Side, STANDARD_DECK};
use proptest::prelude::*;

fn six_cards() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(STANDARD_DECK.cards().to_vec(), 6).prop_shuffle()
}

// =============================================================================
// Contract
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_strategy_discards_two_held_cards(hand in six_cards(), seed in any::<u64>()) {
        for factory in registered_strategies() {
            let mut player = (factory.make)(seed);
            let (a, b) = player.discard(&hand).unwrap();

            prop_assert_ne!(a, b, "{} discarded one card twice", factory.name);
            prop_assert!(hand.contains(&a) && hand.contains(&b), "{} discarded a card it does not hold", factory.name);
        }
    }

    #[test]
    fn prop_every_strategy_plays_a_legal_card(
        legal in proptest::sample::subsequence(STANDARD_DECK.cards().to_vec(), 1..=4),
        seed in any::<u64>(),
    ) {
        for factory in registered_strategies() {
            let mut player = (factory.make)(seed);
            let card = player.choose_run_card(&legal, &[], 0).unwrap();

            prop_assert!(legal.contains(&card), "{} played {} outside {:?}", factory.name, card, legal);
        }
    }
}

#[test]
fn test_strategies_have_versions() {
    for factory in registered_strategies() {
        assert!(!factory.version.is_empty());
        assert_eq!((factory.make)(0).name(), factory.name);
    }
}

// =============================================================================
// Strength
// =============================================================================

#[test]
fn test_greedy_beats_random() {
    let mut engine = Engine::with_config(GameConfig::default().with_seed(99));
    let mut greedy_wins = 0;

    for game_index in 0..10 {
        let mut game = engine.new_game(Box::new(GreedyPlayer::new()), Box::new(RandomPlayer::new(game_index)));
        if game.play_to_finish().unwrap() == Some(Side::One) {
            greedy_wins += 1;
        }
    }

    assert!(greedy_wins >= 6, "greedy won only {greedy_wins} of 10");
}
