//! The match state machine: private hands plus the public [`Board`].

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::board::{Board, PlayerId};
use crate::domain::dealing::{deal, full_deck, shuffle_deck};
use crate::domain::rules::{
    deck_size, default_round_count, DEFAULT_JESTERS, DEFAULT_PLAYERS, DEFAULT_WIZARDS,
    MAX_SPECIAL_CARDS,
};
use crate::domain::scoring::prediction_scores;
use crate::domain::tricks::resolve_trick;
use crate::domain::{Card, Hand, Suit};
use crate::errors::domain::{ensure, DomainError, ValidationKind};

/// Table setup for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub n_player: usize,
    pub n_wizard: usize,
    pub n_jester: usize,
    /// Defaults to `(deck_size - 1) / n_player`.
    pub n_round: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_player: DEFAULT_PLAYERS,
            n_wizard: DEFAULT_WIZARDS,
            n_jester: DEFAULT_JESTERS,
            n_round: None,
        }
    }
}

impl GameConfig {
    pub fn deck_size(&self) -> usize {
        deck_size(self.n_wizard, self.n_jester)
    }

    /// Check the counts and resolve the number of rounds.
    pub fn resolve_round_count(&self) -> Result<usize, DomainError> {
        let invalid = ValidationKind::InvalidConfig;
        ensure(self.n_player > 0, invalid, || "n_player should be positive".into())?;
        ensure(self.n_wizard > 0, invalid, || "n_wizard should be positive".into())?;
        ensure(self.n_jester > 0, invalid, || "n_jester should be positive".into())?;
        ensure(self.n_round != Some(0), invalid, || {
            "n_round should be positive".into()
        })?;
        ensure(self.n_wizard <= MAX_SPECIAL_CARDS, invalid, || {
            format!("n_wizard should be at most {MAX_SPECIAL_CARDS}")
        })?;
        ensure(self.n_jester <= MAX_SPECIAL_CARDS, invalid, || {
            format!("n_jester should be at most {MAX_SPECIAL_CARDS}")
        })?;

        let deck_size = self.deck_size();
        let n_round = self
            .n_round
            .unwrap_or_else(|| default_round_count(deck_size, self.n_player));
        ensure(n_round > 0, invalid, || {
            format!(
                "{} players cannot each receive a card from {deck_size} cards",
                self.n_player
            )
        })?;
        let fits = n_round
            .checked_mul(self.n_player)
            .is_some_and(|dealt| dealt <= deck_size);
        ensure(fits, invalid, || {
            format!(
                "{n_round} rounds for {} players need more than {deck_size} cards",
                self.n_player
            )
        })?;
        Ok(n_round)
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    AwaitingPredictions,
    RoundInProgress { round: usize },
    Finished,
}

/// What a successful play changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether this card filled the last slot of the round.
    pub round_completed: bool,
    /// Winner of the round this card completed.
    pub round_winner: Option<PlayerId>,
    /// Whether every round has now been played.
    pub all_finished: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    n_player: usize,
    n_round: usize,
    trump: Option<Suit>,
    /// Initial deal, never modified.
    hands: Vec<Hand>,
    /// Cards not yet played; always a subset of `hands`.
    remained_hands: Vec<Hand>,
    board: Board,
}

impl Game {
    /// Shuffle, deal and pick the first leader from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, DomainError> {
        let n_round = config.resolve_round_count()?;
        let mut deck = full_deck(config.n_wizard, config.n_jester);
        shuffle_deck(&mut deck, rng);
        let leader = rng.random_range(0..config.n_player);
        Self::from_deck(config.n_player, n_round, &deck, leader)
    }

    /// Reproducible match for a given seed.
    pub fn from_seed(config: &GameConfig, seed: u64) -> Result<Self, DomainError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    /// Deal an already ordered deck, with a fixed first leader.
    pub fn from_deck(
        n_player: usize,
        n_round: usize,
        deck: &[Card],
        leader: PlayerId,
    ) -> Result<Self, DomainError> {
        let invalid = ValidationKind::InvalidConfig;
        ensure(n_player > 0, invalid, || "n_player should be positive".into())?;
        ensure(n_round > 0, invalid, || "n_round should be positive".into())?;
        let fits = n_player
            .checked_mul(n_round)
            .is_some_and(|dealt| dealt <= deck.len());
        ensure(fits, invalid, || {
            format!("deck of {} cards is too small", deck.len())
        })?;
        ensure(leader < n_player, invalid, || {
            format!("leader {leader} is not a player")
        })?;
        let unique: HashSet<&Card> = deck.iter().collect();
        ensure(unique.len() == deck.len(), invalid, || {
            "deck holds duplicate cards".into()
        })?;

        let dealt = deal(deck, n_player, n_round);
        debug!(
            n_player,
            n_round,
            leader,
            trump = ?dealt.trump,
            "dealt new game"
        );

        Ok(Self {
            n_player,
            n_round,
            trump: dealt.trump,
            remained_hands: dealt.hands.clone(),
            hands: dealt.hands,
            board: Board::with_leader(n_player, n_round, dealt.trump, leader),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn n_player(&self) -> usize {
        self.n_player
    }

    pub fn players(&self) -> std::ops::Range<PlayerId> {
        0..self.n_player
    }

    pub fn n_round(&self) -> usize {
        self.n_round
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn remained_hands(&self) -> &[Hand] {
        &self.remained_hands
    }

    pub fn remained_hand(&self, player: PlayerId) -> Option<&Hand> {
        self.remained_hands.get(player)
    }

    pub fn phase(&self) -> Phase {
        if self.board.predictions().is_none() {
            Phase::AwaitingPredictions
        } else if self.board.is_all_finished() {
            Phase::Finished
        } else {
            Phase::RoundInProgress {
                round: self.board.cur_round(),
            }
        }
    }

    /// Record every player's bid, in player order. Allowed exactly once.
    pub fn predict(&mut self, predictions: &[i32]) -> Result<(), DomainError> {
        ensure(
            self.board.predictions().is_none(),
            ValidationKind::AlreadyPredicted,
            || "Predictions have been set".into(),
        )?;
        ensure(
            predictions.len() == self.n_player,
            ValidationKind::WrongPlayerCount,
            || {
                format!(
                    "Wrong player count {} (expected {})",
                    predictions.len(),
                    self.n_player
                )
            },
        )?;
        if let Some(player) = predictions.iter().position(|&p| p < 0) {
            return Err(DomainError::validation(
                ValidationKind::NegativePrediction,
                format!("Prediction of player {player} should be non-negative"),
            ));
        }

        debug!(?predictions, "predictions set");
        self.board.set_predictions(predictions.to_vec());
        Ok(())
    }

    /// Play `card` for `player`, closing the round when it is the last slot.
    pub fn play(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, DomainError> {
        ensure(
            self.board.predictions().is_some(),
            ValidationKind::PredictionsNotSet,
            || "Predictions have not been set".into(),
        )?;
        ensure(
            self.board.n_finished_round() < self.n_round,
            ValidationKind::GameFinished,
            || "All rounds have been played".into(),
        )?;

        let cur_player = self.board.cur_player();
        if cur_player != Some(player) {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!("Wrong player {player} (current player is {cur_player:?})"),
            ));
        }

        let hand = &self.remained_hands[player];
        ensure(hand.contains(&card), ValidationKind::CardNotInHand, || {
            format!("Card {card} is not in remained hand of player {player}")
        })?;
        if !self.board.can_play_suit(card.suit(), hand) {
            let leading = self
                .board
                .cur_leading_suit()
                .map_or_else(|| "leading".to_string(), |s| s.to_string());
            return Err(DomainError::validation(
                ValidationKind::IllegalSuit,
                format!("Player {player} should play a {leading} card"),
            ));
        }

        self.board.record_play(player, card);
        self.remained_hands[player].remove(&card);
        debug!(player, %card, round = self.board.cur_round(), "card played");

        if !self.board.is_round_play_finished() {
            return Ok(PlayOutcome {
                round_completed: false,
                round_winner: None,
                all_finished: false,
            });
        }

        let plays: Vec<Card> = self.board.cur_round_plays().iter().flatten().copied().collect();
        let winner = resolve_trick(&self.board.cur_round_play_order(), &plays, self.trump);
        debug!(round = self.board.cur_round(), winner, "round resolved");
        self.board.next_round(winner);

        Ok(PlayOutcome {
            round_completed: true,
            round_winner: Some(winner),
            all_finished: self.board.is_all_finished(),
        })
    }

    /// Final scores; only once every round has been played.
    pub fn score(&self) -> Result<Vec<i64>, DomainError> {
        let predictions = match self.board.predictions() {
            Some(predictions) if self.board.is_all_finished() => predictions,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::GameNotFinished,
                    "Unable to score an unfinished game",
                ))
            }
        };
        Ok(prediction_scores(predictions, &self.board.rounds_won()))
    }
}
