//! Match driver: asks each seat's strategy for decisions and feeds them to
//! the [`Game`] until every round is played.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Game, Suit};
use crate::errors::domain::DomainError;
use crate::strategy::{SeatView, Strategy, StrategyError};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("expected {expected} strategies, got {actual}")]
    SeatCount { expected: usize, actual: usize },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("player {player}: {source}")]
    Strategy {
        player: usize,
        #[source]
        source: StrategyError,
    },
}

/// Result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub trump: Option<Suit>,
    pub predictions: Vec<i32>,
    pub rounds_won: Vec<usize>,
    pub scores: Vec<i64>,
}

/// Play `game` to the end with one strategy per seat, in player order.
///
/// Predictions are collected once, then the current player is asked for a
/// card until the board reports every round finished. A card the game rejects
/// aborts the match.
pub fn run_match(
    game: &mut Game,
    strategies: &mut [Box<dyn Strategy>],
) -> Result<MatchOutcome, MatchError> {
    if strategies.len() != game.n_player() {
        return Err(MatchError::SeatCount {
            expected: game.n_player(),
            actual: strategies.len(),
        });
    }
    info!(
        n_player = game.n_player(),
        n_round = game.n_round(),
        trump = ?game.trump(),
        "match started"
    );

    let mut predictions = Vec::with_capacity(game.n_player());
    for (player, strategy) in strategies.iter_mut().enumerate() {
        let seat = SeatView {
            player,
            trump: game.trump(),
            hand: &game.hands()[player],
        };
        let prediction = strategy
            .prediction(&seat)
            .map_err(|source| MatchError::Strategy { player, source })?;
        predictions.push(prediction);
    }
    game.predict(&predictions)?;

    while let Some(player) = game.board().cur_player() {
        let hand = &game.remained_hands()[player];
        let card = strategies[player]
            .play(game.board(), hand)
            .map_err(|source| MatchError::Strategy { player, source })?;
        let outcome = game.play(player, card)?;
        if let Some(winner) = outcome.round_winner {
            debug!(winner, "round closed");
        }
    }

    let scores = game.score()?;
    info!(?scores, "match finished");
    Ok(MatchOutcome {
        trump: game.trump(),
        predictions,
        rounds_won: game.board().rounds_won(),
        scores,
    })
}
