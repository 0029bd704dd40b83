//! Error types

use std::io;
use std::path::PathBuf;

/// Human input that does not name a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("We don't understand {0}")]
    Unrecognized(String),
}

/// Invalid or unreadable session configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("win threshold must be at least 1")]
    ZeroWinThreshold,

    #[error("round cap must be at least 1")]
    ZeroMaxRounds,
}

/// Failures that end a session early
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the session finished")]
    InputClosed,

    #[error("session already finished")]
    AlreadyFinished,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
