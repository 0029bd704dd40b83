//! RPS Core - Rock-Paper-Scissors game engine
//!
//! This crate provides the game logic for a console Rock-Paper-Scissors match:
//! - Moves and their cyclic dominance relation
//! - Players and score keeping
//! - Round resolution (tie / human wins / computer wins)
//! - The session state machine with injected input and random sources
//! - Session configuration (win threshold, round cap, seed)

pub mod moves;
pub mod player;
pub mod round;
pub mod config;
pub mod source;
pub mod session;
pub mod error;

// Re-exports for convenient access
pub use moves::Move;
pub use player::{Player, Role, COMPUTER_NAME};
pub use round::{resolve_round, RoundOutcome, RoundReport};
pub use config::SessionConfig;
pub use source::{InputProvider, MoveSource, RandomMoves, ScriptedInput, ScriptedMoves};
pub use session::{
    write_banner, write_summary, GameSession, MatchWinner, SessionState, SessionSummary,
    NAME_PROMPT, ROUND_PROMPT,
};
pub use error::{ConfigError, MoveParseError, SessionError};
