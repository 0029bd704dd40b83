//! Injected capabilities: human input and computer move selection

use std::collections::VecDeque;
use std::io;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::Move;

/// Supplies lines of human input
pub trait InputProvider {
    /// Read one line, without its line terminator. `Ok(None)` means input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Chooses the computer's move each round
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

/// Fixed list of input lines, consumed in order
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Uniformly random moves from a seedable RNG
#[derive(Clone, Debug)]
pub struct RandomMoves {
    rng: ChaCha8Rng,
}

impl RandomMoves {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Create from seed or entropy
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// Deterministic moves, cycling through a fixed list
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    /// An empty list falls back to always playing rock
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let mut moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            moves.push(Move::Rock);
        }
        Self { moves, next: 0 }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }
}
