//! Session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::player::COMPUTER_NAME;

/// Score that ends the session early
pub const DEFAULT_WIN_THRESHOLD: u32 = 2;

/// Maximum number of decisive rounds
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Configuration for one session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session ends as soon as either player reaches this score
    pub win_threshold: u32,
    /// Session ends after this many decisive rounds
    pub max_rounds: u32,
    /// Display name of the computer player
    pub computer_name: String,
    /// Random seed for the computer's moves (None = random)
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            max_rounds: DEFAULT_MAX_ROUNDS,
            computer_name: COMPUTER_NAME.to_string(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SessionConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set win threshold and round cap
    pub fn with_limits(mut self, win_threshold: u32, max_rounds: u32) -> Self {
        self.win_threshold = win_threshold;
        self.max_rounds = max_rounds;
        self
    }

    /// Reject limits that would make a session meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_threshold == 0 {
            return Err(ConfigError::ZeroWinThreshold);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }
}
