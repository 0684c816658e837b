//! How to register a strategy
//!
//! 1) Implement `Strategy` for your type in its module.
//! 2) Add a `StrategyFactory` entry to the static list with a stable `name` and `version`.
//! 3) Determinism: same seed, same behavior (where applicable).

use crate::domain::{full_deck, CardRegistry, GameConfig};
use crate::errors::domain::DomainError;
use crate::strategy::{RandomPlayer, Strategy, StrategyConfig, TerminalHuman};

/// Factory definition for constructing strategies for a given table.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(&StrategyConfig, &GameConfig) -> Result<Box<dyn Strategy>, DomainError>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    StrategyFactory {
        name: TerminalHuman::NAME,
        version: TerminalHuman::VERSION,
        make: make_terminal_human,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random_player(
    config: &StrategyConfig,
    _game: &GameConfig,
) -> Result<Box<dyn Strategy>, DomainError> {
    Ok(Box::new(RandomPlayer::new(config.seed())))
}

fn make_terminal_human(
    _config: &StrategyConfig,
    game: &GameConfig,
) -> Result<Box<dyn Strategy>, DomainError> {
    let registry = CardRegistry::from_deck(&full_deck(game.n_wizard, game.n_jester))?;
    Ok(Box::new(TerminalHuman::stdio(registry)))
}
