//! Player-agent trait definition.

use std::io;

use thiserror::Error;

use crate::domain::{Board, Card, Hand, PlayerId, Suit};

/// Errors that can occur while a strategy is deciding.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Strategy encountered an internal error
    #[error("strategy internal error: {0}")]
    Internal(String),
    /// Strategy had no legal move to offer
    #[error("strategy invalid move: {0}")]
    InvalidMove(String),
    /// Interactive input ended before a decision was made
    #[error("input closed")]
    InputClosed,
    #[error("strategy I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What a seat sees when asked for its prediction.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub player: PlayerId,
    pub trump: Option<Suit>,
    /// The initial deal for this seat.
    pub hand: &'a Hand,
}

impl SeatView<'_> {
    /// Every seat holds one card per round.
    pub fn n_round(&self) -> usize {
        self.hand.len()
    }
}

/// Trait for player agents, interactive or automated.
///
/// The driver asks each seat for its prediction once, then asks the current
/// player for a card until every round is played. The game rejects illegal
/// cards regardless of what the strategy returns.
pub trait Strategy {
    /// Choose a non-negative number of rounds this seat expects to win.
    fn prediction(&mut self, seat: &SeatView<'_>) -> Result<i32, StrategyError>;

    /// Choose a card from `hand`, the seat's remaining cards.
    fn play(&mut self, board: &Board, hand: &Hand) -> Result<Card, StrategyError>;
}
