use serde::{Deserialize, Serialize};
use crate::evaluation::EvalWeights;
use crate::types::{DEFAULT_DEPTH, MAX_DEPTH};

/// Search settings for the computer-controlled side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead; the only knob that bounds search time.
    pub depth: u32,
    pub weights: EvalWeights,
}

impl SearchConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// `CHESS_AI_DEPTH` sets the depth, clamped to `1..=MAX_DEPTH`.
    pub fn from_env() -> Self {
        Self::from_depth_var(std::env::var("CHESS_AI_DEPTH").ok().as_deref())
    }

    fn from_depth_var(value: Option<&str>) -> Self {
        let depth = value
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|d| d.clamp(1, MAX_DEPTH))
            .unwrap_or(DEFAULT_DEPTH);
        SearchConfig {
            depth,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            weights: EvalWeights::default(),
        }
    }
}
