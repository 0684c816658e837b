//! In-memory match runner for automated strategies.

use tracing::debug;
use wizard::domain::{derive_game_seed, derive_strategy_seed, Game, GameConfig, PlayerId};
use wizard::strategy::{by_name, Strategy, StrategyConfig, TerminalHuman};
use wizard::{run_match, MatchOutcome};

use crate::types::SimulatorError;

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_seed: u64,
    pub n_round: usize,
    pub outcome: MatchOutcome,
    /// Leader of every round, first round included
    pub round_leaders: Vec<PlayerId>,
}

impl GameResult {
    /// Seats sharing the highest score.
    pub fn winners(&self) -> Vec<PlayerId> {
        let best = self.outcome.scores.iter().max().copied().unwrap_or(0);
        self.outcome
            .scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == best)
            .map(|(seat, _)| seat)
            .collect()
    }

    /// Winner of each round in play order.
    pub fn round_winners(&self) -> &[PlayerId] {
        &self.round_leaders[1..]
    }
}

/// Plays seeded matches between registered strategies.
pub struct Simulator {
    config: GameConfig,
    strategy_names: Vec<String>,
    base_seed: u64,
}

impl Simulator {
    /// Validates the strategy names; seats come from their count.
    pub fn new(
        config: GameConfig,
        strategy_names: Vec<String>,
        base_seed: u64,
    ) -> Result<Self, SimulatorError> {
        for name in &strategy_names {
            if by_name(name).is_none() {
                return Err(SimulatorError::UnknownStrategy(name.clone()));
            }
            if name == TerminalHuman::NAME {
                return Err(SimulatorError::Interactive(name.clone()));
            }
        }
        let config = GameConfig {
            n_player: strategy_names.len(),
            ..config
        };
        config.resolve_round_count()?;
        Ok(Self {
            config,
            strategy_names,
            base_seed,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn strategy_names(&self) -> &[String] {
        &self.strategy_names
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    fn strategies(&self, match_no: u32) -> Result<Vec<Box<dyn Strategy>>, SimulatorError> {
        self.strategy_names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let factory =
                    by_name(name).ok_or_else(|| SimulatorError::UnknownStrategy(name.clone()))?;
                let seed = derive_strategy_seed(self.base_seed, match_no, seat);
                Ok((factory.make)(&StrategyConfig::with_seed(seed), &self.config)?)
            })
            .collect()
    }

    /// Deal and play match `match_no`; the same base seed replays it exactly.
    pub fn simulate_game(&self, match_no: u32) -> Result<GameResult, SimulatorError> {
        let game_seed = derive_game_seed(self.base_seed, match_no);
        let mut game = Game::from_seed(&self.config, game_seed)?;
        let mut strategies = self.strategies(match_no)?;
        debug!(match_no, game_seed, "simulating match");

        let outcome = run_match(&mut game, &mut strategies)?;
        Ok(GameResult {
            game_seed,
            n_round: game.n_round(),
            outcome,
            round_leaders: game.board().round_leaders().to_vec(),
        })
    }
}
