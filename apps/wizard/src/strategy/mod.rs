//! Player agents: the strategy trait, the reference random player, the
//! interactive human player and the factory registry.

mod config;
mod human;
mod random;
pub mod registry;
mod trait_def;

pub use config::StrategyConfig;
pub use human::{HumanStrategy, TerminalHuman};
pub use random::RandomPlayer;
pub use registry::{by_name, registered_strategies, StrategyFactory};
pub use trait_def::{SeatView, Strategy, StrategyError};
