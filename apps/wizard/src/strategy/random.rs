//! Random player - makes random legal moves.
//!
//! [`RandomPlayer`] is the reference implementation of [`Strategy`](super::Strategy):
//! it predicts uniformly in `0..=n_round` and plays uniformly among the legal
//! cards of its remaining hand. Seeding makes its choices reproducible.

use rand::prelude::*;

use super::trait_def::{SeatView, Strategy, StrategyError};
use crate::domain::{legal_plays, Board, Card, Hand};

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Strategy for RandomPlayer {
    fn prediction(&mut self, seat: &SeatView<'_>) -> Result<i32, StrategyError> {
        let max = i32::try_from(seat.n_round())
            .map_err(|_| StrategyError::Internal("round count out of range".into()))?;
        Ok(self.rng.random_range(0..=max))
    }

    fn play(&mut self, board: &Board, hand: &Hand) -> Result<Card, StrategyError> {
        // Always choose among legal cards, never from the raw hand
        let legal = legal_plays(board, hand);
        legal
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| StrategyError::InvalidMove("No legal plays available".into()))
    }
}
