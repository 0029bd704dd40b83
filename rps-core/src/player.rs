//! Players and score keeping

use serde::{Deserialize, Serialize};

/// Display name of the computer opponent
pub const COMPUTER_NAME: &str = "computer";

/// Seat at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Computer,
}

/// A named participant with a running score
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// The fixed computer opponent
    pub fn computer() -> Self {
        Self::new(COMPUTER_NAME)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add one point. Call exactly once per round won.
    pub fn record_win(&mut self) {
        self.score += 1;
    }
}
