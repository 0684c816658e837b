//! Strategy configuration handling.
//!
//! Standard fields are extracted from a JSON object while any other fields
//! are kept in `custom` for the strategy to read.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// Standard configuration for player strategies.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "verbose_prompts": true}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Optional RNG seed for deterministic choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Strategy-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl StrategyConfig {
    /// Build from optional JSON; malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring malformed strategy config");
                Self::empty()
            }),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::empty()
    }
}
