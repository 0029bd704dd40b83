//! Move definitions and the cyclic defeat relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveParseError;

/// One of the three hand signs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in prompt order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one beats
    pub const fn defeats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// True iff this move beats the move called `candidate_name`
    pub fn defeats_move(self, candidate_name: &str) -> bool {
        self.defeats().name() == candidate_name
    }

    /// Typed form of [`Move::defeats_move`]
    pub fn beats(self, other: Move) -> bool {
        self.defeats() == other
    }

    /// Normalize a line of human input.
    ///
    /// Accepts `r`/`p`/`s` and the full words, case-insensitive, ignoring
    /// surrounding whitespace. Rejected input is reported lowercased.
    pub fn parse_input(input: &str) -> Result<Move, MoveParseError> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(MoveParseError::Unrecognized(normalized)),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse_input(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
