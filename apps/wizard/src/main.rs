use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value as JsonValue;
use tracing::info;
use wizard::domain::{derive_strategy_seed, Game, GameConfig};
use wizard::strategy::{by_name, Strategy, StrategyConfig};
use wizard::{run_match, telemetry};

#[derive(Parser, Debug)]
#[command(name = "wizard")]
#[command(about = "Play a match of Wizard at the terminal", long_about = None)]
struct Args {
    /// One strategy per seat, in player order
    #[arg(long = "strategy", num_args = 1.., default_values = ["human", "human", "human", "human"])]
    strategies: Vec<String>,

    /// JSON file holding the table setup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of wizard cards (overrides the config file)
    #[arg(long)]
    wizards: Option<usize>,

    /// Number of jester cards (overrides the config file)
    #[arg(long)]
    jesters: Option<usize>,

    /// Number of rounds (defaults to as many as the deck allows)
    #[arg(long)]
    rounds: Option<usize>,

    /// Seed for dealing and automated players
    #[arg(long, env = "WIZARD_SEED")]
    seed: Option<u64>,

    /// JSON passed to every automated strategy
    #[arg(long)]
    strategy_config: Option<String>,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    config.n_player = args.strategies.len();
    if let Some(n) = args.wizards {
        config.n_wizard = n;
    }
    if let Some(n) = args.jesters {
        config.n_jester = n;
    }
    if args.rounds.is_some() {
        config.n_round = args.rounds;
    }
    Ok(config)
}

fn build_strategies(
    args: &Args,
    config: &GameConfig,
) -> Result<Vec<Box<dyn Strategy>>, Box<dyn Error>> {
    let shared: Option<JsonValue> = args
        .strategy_config
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;

    let mut strategies = Vec::with_capacity(args.strategies.len());
    for (seat, name) in args.strategies.iter().enumerate() {
        let factory = by_name(name).ok_or_else(|| format!("Unknown strategy: {name}"))?;
        let mut strategy_config = StrategyConfig::from_json(shared.as_ref());
        if strategy_config.seed.is_none() {
            strategy_config.seed = args.seed.map(|s| derive_strategy_seed(s, 0, seat));
        }
        strategies.push((factory.make)(&strategy_config, config)?);
    }
    Ok(strategies)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose, args.log_json);

    let config = load_config(&args)?;
    let mut game = match args.seed {
        Some(seed) => Game::from_seed(&config, seed)?,
        None => Game::new(&config, &mut rand::rng())?,
    };
    info!(?config, seed = ?args.seed, strategies = ?args.strategies, "starting match");

    let mut strategies = build_strategies(&args, &config)?;
    let outcome = run_match(&mut game, &mut strategies)?;

    println!("==============================");
    println!("Scores:");
    for (player, score) in outcome.scores.iter().enumerate() {
        println!("Player {player}: {score}");
    }
    Ok(())
}
