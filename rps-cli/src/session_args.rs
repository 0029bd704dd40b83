//! Session options shared by the play and simulate commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rps_core::SessionConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct SessionArgs {
    /// Session config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Score that ends the session early (overrides config)
    #[arg(long)]
    pub win_threshold: Option<u32>,

    /// Maximum decisive rounds (overrides config)
    #[arg(long)]
    pub max_rounds: Option<u32>,
}

impl SessionArgs {
    /// Build the session config: file first, then flags, then the global seed
    pub fn to_config(&self, seed: Option<u64>) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("Failed to load session config: {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(threshold) = self.win_threshold {
            config.win_threshold = threshold;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        if seed.is_some() {
            config.seed = seed;
        }

        config.validate().context("Invalid session options")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = SessionArgs::default().to_config(None).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = SessionArgs {
            win_threshold: Some(3),
            max_rounds: Some(5),
            ..Default::default()
        };
        let config = args.to_config(Some(9)).unwrap();
        assert_eq!(config.win_threshold, 3);
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_round_cap_rejected() {
        let args = SessionArgs {
            max_rounds: Some(0),
            ..Default::default()
        };
        assert!(args.to_config(None).is_err());
    }
}
