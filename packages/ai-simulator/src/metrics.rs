//! Metrics collection and output for simulation results.

use serde::Serialize;
use wizard::domain::PlayerId;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    /// Dealing seed, big-endian hex
    pub seed: String,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<Vec<RoundMetrics>>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub strategies: Vec<String>,
    pub n_wizard: usize,
    pub n_jester: usize,
    pub n_round: usize,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub trump: Option<String>,
    pub final_scores: Vec<i64>,
    pub winners: Vec<PlayerId>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: usize,
    pub leader: PlayerId,
    pub winner: PlayerId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: PlayerId,
    pub strategy: String,
    pub prediction: i32,
    pub rounds_won: usize,
    pub exact: bool,
    /// Positive when the seat won more rounds than it predicted
    pub miss: i64,
    pub score: i64,
}

pub fn hex_seed(seed: u64) -> String {
    hex::encode(seed.to_be_bytes())
}

/// Build metrics from a finished match.
pub fn build_game_metrics(
    game_id: u32,
    config: MatchConfig,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(
            result
                .round_leaders
                .iter()
                .zip(result.round_winners())
                .enumerate()
                .map(|(round_no, (&leader, &winner))| RoundMetrics {
                    round_no,
                    leader,
                    winner,
                })
                .collect(),
        ),
    };

    let outcome = &result.outcome;
    let player_metrics = config
        .strategies
        .iter()
        .enumerate()
        .map(|(seat, strategy)| {
            let prediction = outcome.predictions[seat];
            let rounds_won = outcome.rounds_won[seat];
            PlayerMetrics {
                seat,
                strategy: strategy.clone(),
                prediction,
                rounds_won,
                exact: rounds_won as i64 == i64::from(prediction),
                miss: rounds_won as i64 - i64::from(prediction),
                score: outcome.scores[seat],
            }
        })
        .collect();

    GameMetrics {
        game_id,
        seed: hex_seed(result.game_seed),
        timestamp,
        config,
        result: GameResultMetrics {
            trump: outcome.trump.map(|t| t.to_string()),
            final_scores: outcome.scores.clone(),
            winners: result.winners(),
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// CSV summary row for quick analysis; per-seat columns are `;`-joined.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub trump: String,
    pub winners: String,
    pub scores: String,
    pub predictions: String,
    pub rounds_won: String,
    pub strategies: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let predictions: Vec<i32> = metrics.player_metrics.iter().map(|p| p.prediction).collect();
        let rounds_won: Vec<usize> = metrics.player_metrics.iter().map(|p| p.rounds_won).collect();
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            trump: metrics.result.trump.clone().unwrap_or_else(|| "None".into()),
            winners: join(&metrics.result.winners),
            scores: join(&metrics.result.final_scores),
            predictions: join(&predictions),
            rounds_won: join(&rounds_won),
            strategies: metrics.config.strategies.join(";"),
        }
    }
}
