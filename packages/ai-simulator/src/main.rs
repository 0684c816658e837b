//! Simulator CLI - plays seeded matches between automated strategies and
//! records per-match metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use metrics::{build_game_metrics, hex_seed, MatchConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};
use wizard::domain::GameConfig;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory match simulator for automated strategies")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy for each seat, in player order
    #[arg(long = "strategy", num_args = 1.., default_values = ["random", "random", "random", "random"])]
    strategies: Vec<String>,

    /// Number of wizard cards
    #[arg(long, default_value = "4")]
    wizards: usize,

    /// Number of jester cards
    #[arg(long, default_value = "4")]
    jesters: usize,

    /// Rounds per match (defaults to as many as the deck allows)
    #[arg(long)]
    rounds: Option<usize>,

    /// Base seed; per-match and per-seat seeds are derived from it
    #[arg(long, env = "WIZARD_SEED")]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig {
        n_player: args.strategies.len(),
        n_wizard: args.wizards,
        n_jester: args.jesters,
        n_round: args.rounds,
    };
    let simulator = Simulator::new(config, args.strategies.clone(), base_seed)?;
    info!(
        games = args.games,
        config = ?simulator.config(),
        strategies = ?simulator.strategy_names(),
        base_seed = %hex_seed(simulator.base_seed()),
        "starting simulator"
    );

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        match simulator.simulate_game(game_num) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let match_config = MatchConfig {
                    strategies: args.strategies.clone(),
                    n_wizard: args.wizards,
                    n_jester: args.jesters,
                    n_round: result.n_round,
                    total_games: args.games,
                };
                let metrics = build_game_metrics(
                    game_num,
                    match_config,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_num, error = %e, "failed to write metrics");
                }
                info!(game_num, scores = ?result.outcome.scores, "match completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, error = %e, "match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games, args.strategies.len());
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: Duration,
    total: u32,
    n_player: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = vec![0u32; n_player];
    let mut exact = vec![0u32; n_player];
    let mut total_scores = vec![0i64; n_player];
    let mut max_scores = vec![i64::MIN; n_player];
    let mut min_scores = vec![i64::MAX; n_player];

    for result in results {
        let outcome = &result.outcome;
        for (seat, &score) in outcome.scores.iter().enumerate() {
            total_scores[seat] += score;
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
            if outcome.rounds_won[seat] as i64 == i64::from(outcome.predictions[seat]) {
                exact[seat] += 1;
            }
        }
        for seat in result.winners() {
            wins[seat] += 1;
        }
    }

    let n = results.len() as f64;
    println!("\n=== Results by Seat ===");
    for seat in 0..n_player {
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, exact={:.1}%, wins={} ({:.1}%)",
            seat,
            total_scores[seat] as f64 / n,
            min_scores[seat],
            max_scores[seat],
            f64::from(exact[seat]) / n * 100.0,
            wins[seat],
            f64::from(wins[seat]) / n * 100.0
        );
    }
}
