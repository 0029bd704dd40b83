//! Round resolution

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::player::Role;

/// Result of one exchange of moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie,
    HumanWins,
    ComputerWins,
}

impl RoundOutcome {
    /// Get winner (None for a tie)
    pub fn winner(self) -> Option<Role> {
        match self {
            RoundOutcome::Tie => None,
            RoundOutcome::HumanWins => Some(Role::Human),
            RoundOutcome::ComputerWins => Some(Role::Computer),
        }
    }

    /// A decisive round counts toward the round cap
    pub fn is_decisive(self) -> bool {
        self != RoundOutcome::Tie
    }
}

/// Decide one round from the human's and the computer's moves.
///
/// Distinct moves never draw: if the computer's move does not defeat the
/// human's, the human's move defeats the computer's.
pub fn resolve_round(human: Move, computer: Move) -> RoundOutcome {
    if human == computer {
        RoundOutcome::Tie
    } else if computer.defeats_move(human.name()) {
        RoundOutcome::ComputerWins
    } else {
        RoundOutcome::HumanWins
    }
}

/// Record of a decisive round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based decisive round number
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
}
