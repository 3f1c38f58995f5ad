//! Game state machine.
//!
//! `Game` owns every piece of mutable round state: the remaining pool,
//! both hands, the crib, the run and the scores. Players only ever see
//! borrowed slices passed into their decision calls.
//!
//! A round is driven by calling, in order:
//!
//! 1. `deal_cards`
//! 2. `discard_to_crib`
//! 3. `cut_start_card`
//! 4. `play_next_run_card` while `is_more_run_cards`
//! 5. `score_pone_hand`, `score_dealer_hand`, `score_dealer_crib`
//!
//! Calling an operation out of order is a `StateSequence` error.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::phase::Phase;
use crate::cards::{Card, Deck, Rank};
use crate::core::{CribbageError, GameConfig, GameRng, Side, SideMap};
use crate::players::Player;
use crate::scoring::{score_run_play, HandKind, HandScore, MAX_RUN_TOTAL};
use crate::zones::Pile;

/// Cards dealt to each side per round.
pub const CARDS_DEALT: usize = 6;

/// Cards each side keeps after discarding.
pub const CARDS_KEPT: usize = 4;

/// Dealer's points when the start card is a jack.
pub const HEELS_POINTS: u32 = 1;

/// Points the opponent gets when a side first calls go.
pub const GO_POINTS: u32 = 1;

/// Points for playing the last card of the round. Stacks on 31.
pub const LAST_CARD_POINTS: u32 = 1;

/// Result of one `play_next_run_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Side that acted.
    pub turn: Side,
    /// The side could not play and called go.
    pub is_go: bool,
    pub card_played: Option<Card>,
    /// Run total after the action (0 after a reset).
    pub run_total: u32,
    /// Points for the acting side, including the last-card point.
    pub points_earned: u32,
    /// Points the go gave the opponent.
    pub opponent_points: u32,
    /// This was the final card of the round.
    pub is_last_card: bool,
}

/// Counting results for one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub dealer: Side,
    pub pone_hand: u32,
    pub dealer_hand: u32,
    pub crib: u32,
}

/// A game of cribbage between two players.
pub struct Game {
    config: GameConfig,
    deck: Deck,
    rng: GameRng,
    players: SideMap<Box<dyn Player>>,

    phase: Phase,
    round: u32,
    scores: SideMap<u32>,
    dealer: Option<Side>,
    turn: Side,
    go: Option<Side>,

    pool: Pile,
    hands: SideMap<Pile>,
    play_hands: SideMap<Pile>,
    crib: Pile,
    run: Pile,
    played: Pile,
    start_card: Option<Card>,
}

impl Game {
    pub(crate) fn new(
        deck: Deck,
        config: GameConfig,
        rng: GameRng,
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
    ) -> Self {
        Self {
            pool: Pile::from_cards(deck.iter()),
            config,
            deck,
            rng,
            players: SideMap::from_pair(player_one, player_two),
            phase: Phase::Idle,
            round: 0,
            scores: SideMap::with_value(0),
            dealer: None,
            turn: Side::One,
            go: None,
            hands: SideMap::default(),
            play_hands: SideMap::default(),
            crib: Pile::new(),
            run: Pile::new(),
            played: Pile::new(),
            start_card: None,
        }
    }

    // === Round operations ===

    /// Refresh the pool, alternate the dealer and deal six cards to each side.
    pub fn deal_cards(&mut self) -> Result<(), CribbageError> {
        self.expect_phase("deal cards", &[Phase::Idle, Phase::Scored])?;

        let dealer = self.dealer.map_or(Side::One, Side::other);
        self.dealer = Some(dealer);
        self.turn = dealer.other();
        self.go = None;
        self.start_card = None;

        self.pool = Pile::from_cards(self.deck.iter());
        for side in Side::BOTH {
            self.hands[side].clear();
            self.play_hands[side].clear();
        }
        self.crib.clear();
        self.run.clear();
        self.played.clear();

        for _ in 0..CARDS_DEALT {
            for side in Side::BOTH {
                self.pool
                    .deal_random(&mut self.rng, &mut self.hands[side])
                    .ok_or_else(|| CribbageError::invariant("pool ran out while dealing"))?;
            }
        }

        self.round += 1;
        self.phase = Phase::Dealt;
        debug!(
            round = self.round,
            %dealer,
            hand_one = %self.hands[Side::One],
            hand_two = %self.hands[Side::Two],
            "hands dealt"
        );
        self.verify_conservation()
    }

    /// Ask each player for two cards and move them into the crib.
    ///
    /// Both answers are validated before any card moves.
    pub fn discard_to_crib(&mut self) -> Result<(), CribbageError> {
        self.expect_phase("discard to the crib", &[Phase::Dealt])?;

        let mut discards = SideMap::with_value(None);
        for side in Side::BOTH {
            let (first, second) = self.players[side]
                .discard(self.hands[side].as_slice())
                .map_err(|source| CribbageError::Player { side, source })?;
            if first == second {
                return Err(CribbageError::contract(side, format!("discarded {first} twice")));
            }
            if let Some(card) = [first, second].into_iter().find(|&c| !self.hands[side].contains(c)) {
                return Err(CribbageError::contract(side, format!("discarded {card}, which it does not hold")));
            }
            discards[side] = Some((first, second));
        }

        for side in Side::BOTH {
            let (first, second) = discards[side]
                .ok_or_else(|| CribbageError::invariant(format!("no discard recorded for {side}")))?;
            for card in [first, second] {
                if !self.hands[side].move_card(card, &mut self.crib) {
                    return Err(CribbageError::invariant(format!("{card} left {side}'s hand early")));
                }
            }
        }

        self.phase = Phase::Discarded;
        debug!(
            hand_one = %self.hands[Side::One],
            hand_two = %self.hands[Side::Two],
            crib = %self.crib,
            "discarded to crib"
        );
        self.verify_conservation()
    }

    /// Cut the start card. A jack gives the dealer his heels.
    pub fn cut_start_card(&mut self) -> Result<(), CribbageError> {
        self.expect_phase("cut the start card", &[Phase::Discarded])?;
        let dealer = self.require_dealer()?;

        let start = self
            .pool
            .take_random(&mut self.rng)
            .ok_or_else(|| CribbageError::invariant("pool is empty at the cut"))?;
        self.start_card = Some(start);
        debug!(%start, "start card cut");

        if start.rank() == Rank::Jack {
            self.award(dealer, HEELS_POINTS);
            info!(%dealer, score = self.scores[dealer], "dealer gets his heels");
        }

        // play from copies so the counted hands stay whole
        self.play_hands = self.hands.clone();
        self.phase = Phase::Cut;
        self.verify_conservation()
    }

    /// True while either side still holds a card to play.
    #[must_use]
    pub fn is_more_run_cards(&self) -> bool {
        self.play_hands.iter().any(|(_, hand)| !hand.is_empty())
    }

    /// Let the side to act play a card or call go.
    pub fn play_next_run_card(&mut self) -> Result<PlayOutcome, CribbageError> {
        if !self.phase.is_play() || !self.is_more_run_cards() {
            return Err(CribbageError::StateSequence {
                operation: "play a run card",
                phase: self.phase,
            });
        }

        let side = self.turn;
        let run_total = self.run.total_value();
        let legal: SmallVec<[Card; CARDS_KEPT]> = self.play_hands[side]
            .iter()
            .filter(|c| run_total + c.value() <= MAX_RUN_TOTAL)
            .collect();

        let mut outcome = PlayOutcome {
            turn: side,
            is_go: legal.is_empty(),
            card_played: None,
            run_total,
            points_earned: 0,
            opponent_points: 0,
            is_last_card: false,
        };

        if legal.is_empty() {
            outcome.opponent_points = self.call_go(side);
        } else {
            let card = self.players[side]
                .choose_run_card(&legal, self.run.as_slice(), run_total)
                .map_err(|source| CribbageError::Player { side, source })?;
            if !legal.contains(&card) {
                let reason = if self.play_hands[side].contains(card) {
                    format!("played {card}, which takes the run past {MAX_RUN_TOTAL}")
                } else {
                    format!("played {card}, which it does not hold")
                };
                return Err(CribbageError::contract(side, reason));
            }

            let points = score_run_play(self.run.as_slice(), card);
            if !self.play_hands[side].move_card(card, &mut self.run) {
                return Err(CribbageError::invariant(format!("{card} vanished from {side}'s hand")));
            }
            self.award(side, points);
            outcome.card_played = Some(card);
            outcome.points_earned = points;
            debug!(%side, %card, points, run = %self.run, "run card played");
        }

        if !self.is_more_run_cards() {
            self.award(side, LAST_CARD_POINTS);
            outcome.points_earned += LAST_CARD_POINTS;
            outcome.is_last_card = true;
            debug!(%side, score = self.scores[side], "last card");
        }

        self.turn = side.other();
        self.phase = Phase::Playing;
        outcome.run_total = self.run.total_value();
        self.verify_conservation()?;
        Ok(outcome)
    }

    /// Count the pone's hand.
    pub fn score_pone_hand(&mut self) -> Result<u32, CribbageError> {
        self.expect_play_complete("count the pone's hand")?;
        let pone = self.require_dealer()?.other();

        let points = self.count(&self.hands[pone], HandKind::Hand)?;
        self.award(pone, points);
        self.phase = Phase::PoneCounted;
        debug!(%pone, points, hand = %self.hands[pone], "pone hand counted");
        Ok(points)
    }

    /// Count the dealer's hand.
    pub fn score_dealer_hand(&mut self) -> Result<u32, CribbageError> {
        self.expect_phase("count the dealer's hand", &[Phase::PoneCounted])?;
        let dealer = self.require_dealer()?;

        let points = self.count(&self.hands[dealer], HandKind::Hand)?;
        self.award(dealer, points);
        self.phase = Phase::DealerCounted;
        debug!(%dealer, points, hand = %self.hands[dealer], "dealer hand counted");
        Ok(points)
    }

    /// Count the crib for the dealer and close the round.
    pub fn score_dealer_crib(&mut self) -> Result<u32, CribbageError> {
        self.expect_phase("count the crib", &[Phase::DealerCounted])?;
        let dealer = self.require_dealer()?;

        let points = self.count(&self.crib, HandKind::Crib(self.config.crib_flush))?;
        self.award(dealer, points);
        debug!(%dealer, points, crib = %self.crib, "crib counted");

        let target = self.config.target_score;
        self.phase = if self.scores.iter().any(|(_, &s)| s >= target) {
            Phase::Finished
        } else {
            Phase::Scored
        };
        info!(
            round = self.round,
            score_one = self.scores[Side::One],
            score_two = self.scores[Side::Two],
            phase = %self.phase,
            "round complete"
        );
        Ok(points)
    }

    /// Drive one full round.
    pub fn play_round(&mut self) -> Result<RoundSummary, CribbageError> {
        self.deal_cards()?;
        self.discard_to_crib()?;
        self.cut_start_card()?;
        while self.is_more_run_cards() {
            self.play_next_run_card()?;
        }
        let pone_hand = self.score_pone_hand()?;
        let dealer_hand = self.score_dealer_hand()?;
        let crib = self.score_dealer_crib()?;

        Ok(RoundSummary {
            round: self.round,
            dealer: self.require_dealer()?,
            pone_hand,
            dealer_hand,
            crib,
        })
    }

    /// Play rounds until a side reaches the target score.
    pub fn play_to_finish(&mut self) -> Result<Option<Side>, CribbageError> {
        while self.phase != Phase::Finished {
            self.play_round()?;
        }
        Ok(self.winner())
    }

    // === Views ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds dealt so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn scores(&self) -> &SideMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    /// Dealer of the current round, once a round has been dealt.
    #[must_use]
    pub fn dealer(&self) -> Option<Side> {
        self.dealer
    }

    #[must_use]
    pub fn pone(&self) -> Option<Side> {
        self.dealer.map(Side::other)
    }

    /// Side to act next during play.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Side that has called go on the current street.
    #[must_use]
    pub fn go_side(&self) -> Option<Side> {
        self.go
    }

    /// Discard-phase hand, kept intact through play for counting.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Pile {
        &self.hands[side]
    }

    /// Cards the side has not yet played this round.
    #[must_use]
    pub fn play_hand(&self, side: Side) -> &Pile {
        &self.play_hands[side]
    }

    #[must_use]
    pub fn crib(&self) -> &Pile {
        &self.crib
    }

    /// Current street, oldest card first.
    #[must_use]
    pub fn run(&self) -> &Pile {
        &self.run
    }

    #[must_use]
    pub fn run_total(&self) -> u32 {
        self.run.total_value()
    }

    /// Cards from streets that have been reset.
    #[must_use]
    pub fn played(&self) -> &Pile {
        &self.played
    }

    /// Undealt cards.
    #[must_use]
    pub fn pool(&self) -> &Pile {
        &self.pool
    }

    #[must_use]
    pub fn start_card(&self) -> Option<Card> {
        self.start_card
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Higher score once the game is finished; `None` before that or on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }
        let (one, two) = (self.scores[Side::One], self.scores[Side::Two]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Check that every card is accounted for exactly once.
    ///
    /// - pool, both hands, crib and start card make up the deck;
    /// - after the cut, unplayed cards, the run and the played pile make up
    ///   both hands.
    pub fn verify_conservation(&self) -> Result<(), CribbageError> {
        let located = self
            .pool
            .iter()
            .chain(self.hands[Side::One].iter())
            .chain(self.hands[Side::Two].iter())
            .chain(self.crib.iter())
            .chain(self.start_card);

        let mut seen: FxHashSet<Card> = FxHashSet::default();
        for card in located {
            if !seen.insert(card) {
                return Err(CribbageError::invariant(format!("{card} is in two places")));
            }
        }
        if seen.len() != self.deck.len() || !self.deck.iter().all(|c| seen.contains(&c)) {
            return Err(CribbageError::invariant(format!(
                "{} of {} cards accounted for",
                seen.len(),
                self.deck.len()
            )));
        }

        let mut in_play: Vec<Card> = self
            .play_hands
            .iter()
            .flat_map(|(_, hand)| hand.iter())
            .chain(self.run.iter())
            .chain(self.played.iter())
            .collect();
        let mut expected: Vec<Card> = if self.start_card.is_some() {
            self.hands.iter().flat_map(|(_, hand)| hand.iter()).collect()
        } else {
            Vec::new()
        };
        in_play.sort_unstable();
        expected.sort_unstable();
        if in_play != expected {
            return Err(CribbageError::invariant(format!(
                "play piles hold {} cards, hands hold {}",
                in_play.len(),
                expected.len()
            )));
        }
        Ok(())
    }

    // === Internals ===

    fn expect_phase(&self, operation: &'static str, allowed: &[Phase]) -> Result<(), CribbageError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(CribbageError::StateSequence {
                operation,
                phase: self.phase,
            })
        }
    }

    fn expect_play_complete(&self, operation: &'static str) -> Result<(), CribbageError> {
        if self.phase.is_play() && !self.is_more_run_cards() {
            Ok(())
        } else {
            Err(CribbageError::StateSequence {
                operation,
                phase: self.phase,
            })
        }
    }

    fn require_dealer(&self) -> Result<Side, CribbageError> {
        self.dealer
            .ok_or_else(|| CribbageError::invariant("no dealer chosen for this round"))
    }

    fn award(&mut self, side: Side, points: u32) {
        self.scores[side] += points;
    }

    fn count(&self, cards: &Pile, kind: HandKind) -> Result<u32, CribbageError> {
        let start = self
            .start_card
            .ok_or_else(|| CribbageError::invariant("counting before the cut"))?;
        let four: &[Card; CARDS_KEPT] = cards.as_slice().try_into().map_err(|_| {
            CribbageError::invariant(format!("expected {CARDS_KEPT} cards to count, found {}", cards.len()))
        })?;
        Ok(HandScore::evaluate(four, start, kind).total())
    }

    /// Handle a side that cannot play. Returns the points given away.
    fn call_go(&mut self, side: Side) -> u32 {
        match self.go {
            None => {
                self.go = Some(side);
                self.award(side.other(), GO_POINTS);
                debug!(%side, run_total = self.run.total_value(), "go");
                GO_POINTS
            }
            Some(caller) if caller != side => {
                // both stuck: start a new street
                self.run.move_all(&mut self.played);
                self.go = None;
                debug!("run reset");
                0
            }
            Some(_) => 0,
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("scores", &self.scores)
            .field("dealer", &self.dealer)
            .field("turn", &self.turn)
            .field("go", &self.go)
            .field("run", &self.run)
            .field("start_card", &self.start_card)
            .finish_non_exhaustive()
    }
}
