//! Shared types for the simulator.

use std::io;

use clap::ValueEnum;
use thiserror::Error;
use wizard::{DomainError, MatchError};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per match plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Adds per-round leaders and winners
    Detailed,
}

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("strategy {0} needs a terminal and cannot be simulated")]
    Interactive(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("output I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}
