#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod session;
pub mod strategy;
pub mod telemetry;


// Re-exports for public API
pub use domain::{
    Board, Card, CardRegistry, Game, GameConfig, Hand, Phase, PlayOutcome, PlayerId, Rank, Suit,
    SuitCard,
};
pub use errors::{DomainError, ValidationKind};
pub use session::{run_match, MatchError, MatchOutcome};
pub use strategy::{HumanStrategy, RandomPlayer, SeatView, Strategy, StrategyConfig, StrategyError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
