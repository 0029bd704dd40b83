//! Game session - the round loop between a human and the computer
//!
//! ## Architecture
//!
//! - Level 1: run() - plays rounds until a limit is hit, then reports
//! - Level 2: play_round() - one decisive round, retrying ties and bad input
//! - Level 3: resolve_round(), record_win() - pure rules and scoring
//! - Level 4: console text helpers

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::moves::Move;
use crate::player::{Player, Role};
use crate::round::{resolve_round, RoundReport};
use crate::source::{InputProvider, MoveSource};

/// Prompt shown before each move
pub const ROUND_PROMPT: &str = "[R]ock, [P]aper, or [S]cissors?";

/// Prompt shown once for the human's name
pub const NAME_PROMPT: &str = "What is your name: ";

/// Name used when the human enters a blank name
pub const DEFAULT_HUMAN_NAME: &str = "player";

/// Where the session is in its round cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the human's move
    AwaitingInput,
    /// Both moves chosen, outcome being computed
    Resolving,
    /// Scores updated and counter incremented
    RoundComplete,
    /// A limit was reached; no more rounds
    Finished,
}

/// Who won the whole session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchWinner {
    Human,
    Computer,
    /// Equal final scores
    Draw,
}

impl MatchWinner {
    /// Strictly higher score wins; equal scores are a draw
    pub fn from_scores(human: u32, computer: u32) -> Self {
        if human > computer {
            MatchWinner::Human
        } else if computer > human {
            MatchWinner::Computer
        } else {
            MatchWinner::Draw
        }
    }
}

/// Final state of a finished session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub human: Player,
    pub computer: Player,
    /// Decisive rounds played
    pub rounds: u32,
    /// Tied exchanges that were replayed
    pub ties: u32,
    /// Input lines rejected as unrecognized
    pub invalid_inputs: u32,
    pub winner: MatchWinner,
    pub history: Vec<RoundReport>,
}

impl SessionSummary {
    /// Name of the session winner (None for a draw)
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            MatchWinner::Human => Some(self.human.name.as_str()),
            MatchWinner::Computer => Some(self.computer.name.as_str()),
            MatchWinner::Draw => None,
        }
    }
}

/// One human-vs-computer session
pub struct GameSession<I, M, W> {
    config: SessionConfig,
    human: Player,
    computer: Player,
    input: I,
    moves: M,
    out: W,
    state: SessionState,
    round: u32,
    ties: u32,
    invalid_inputs: u32,
    history: Vec<RoundReport>,
}

impl<I, M, W> GameSession<I, M, W>
where
    I: InputProvider,
    M: MoveSource,
    W: Write,
{
    /// Create a session for a known human name; a blank name becomes `player`
    pub fn new(
        human_name: impl Into<String>,
        config: SessionConfig,
        input: I,
        moves: M,
        out: W,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let human_name = human_name.into();
        let human = match human_name.trim() {
            "" => Player::new(DEFAULT_HUMAN_NAME),
            name => Player::new(name),
        };
        let computer = Player::new(config.computer_name.clone());

        tracing::info!(
            "Session started: {} vs {} (win at {}, max {} rounds)",
            human.name,
            computer.name,
            config.win_threshold,
            config.max_rounds
        );

        Ok(Self {
            config,
            human,
            computer,
            input,
            moves,
            out,
            state: SessionState::AwaitingInput,
            round: 0,
            ties: 0,
            invalid_inputs: 0,
            history: Vec::new(),
        })
    }

    /// Print the banner, ask for the human's name, then create the session
    pub fn start(
        config: SessionConfig,
        mut input: I,
        moves: M,
        mut out: W,
    ) -> Result<Self, SessionError> {
        write_banner(&mut out)?;
        write!(out, "{}", NAME_PROMPT)?;
        out.flush()?;

        let name = input.read_line()?.ok_or(SessionError::InputClosed)?;

        Self::new(name, config, input, moves, out)
    }

    // ========================================================================
    // LEVEL 1 - ORCHESTRATION
    // ========================================================================

    /// Play rounds until a limit is reached, then print the totals
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        while !self.is_finished() {
            self.play_round()?;
        }
        self.state = SessionState::Finished;

        let summary = self.summary();
        write_summary(&mut self.out, &summary)?;
        self.out.flush()?;

        tracing::info!(
            "Session finished after {} rounds ({} ties): {} {} - {} {} ({:?})",
            summary.rounds,
            summary.ties,
            summary.human.name,
            summary.human.score(),
            summary.computer.name,
            summary.computer.score(),
            summary.winner
        );

        Ok(summary)
    }

    // ========================================================================
    // LEVEL 2 - ROUNDS
    // ========================================================================

    /// Play until one decisive round completes.
    ///
    /// Ties and unrecognized input are reported and retried without touching
    /// the scores or the round counter.
    pub fn play_round(&mut self) -> Result<RoundReport, SessionError> {
        if self.is_finished() {
            self.state = SessionState::Finished;
            return Err(SessionError::AlreadyFinished);
        }

        loop {
            self.state = SessionState::AwaitingInput;
            let computer_move = self.moves.next_move();

            write!(self.out, "{}", ROUND_PROMPT)?;
            self.out.flush()?;
            let line = self.input.read_line()?.ok_or(SessionError::InputClosed)?;

            let human_move = match Move::parse_input(&line) {
                Ok(mv) => mv,
                Err(err) => {
                    self.invalid_inputs = self.invalid_inputs.saturating_add(1);
                    tracing::debug!("Rejected input {:?}", line);
                    writeln!(self.out, "{}", err)?;
                    continue;
                }
            };

            self.state = SessionState::Resolving;
            let outcome = resolve_round(human_move, computer_move);

            let Some(winner) = outcome.winner() else {
                self.ties = self.ties.saturating_add(1);
                tracing::debug!("Tie on {}, replaying round {}", human_move, self.round + 1);
                writeln!(self.out, "Same roll try again!")?;
                writeln!(self.out)?;
                continue;
            };

            writeln!(self.out, "{} rolls a {}", self.human.name, human_move)?;
            writeln!(self.out, "{} rolls a {}", self.computer.name, computer_move)?;

            let player = self.player_mut(winner);
            player.record_win();
            let winner_name = player.name.clone();
            writeln!(self.out, "{} wins this round", winner_name)?;
            writeln!(self.out)?;

            self.round += 1;
            let report = RoundReport {
                round: self.round,
                human_move,
                computer_move,
                outcome,
            };
            self.history.push(report);

            tracing::debug!(
                "Round {}: {} vs {} -> {}",
                self.round,
                human_move,
                computer_move,
                winner_name
            );

            self.state = if self.is_finished() {
                SessionState::Finished
            } else {
                SessionState::RoundComplete
            };
            return Ok(report);
        }
    }

    /// Either score reached the threshold or the round cap was hit
    pub fn is_finished(&self) -> bool {
        self.human.score() >= self.config.win_threshold
            || self.computer.score() >= self.config.win_threshold
            || self.round >= self.config.max_rounds
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Decisive rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn invalid_inputs(&self) -> u32 {
        self.invalid_inputs
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Writer the session prints to
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Snapshot of the current scores and history
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            human: self.human.clone(),
            computer: self.computer.clone(),
            rounds: self.round,
            ties: self.ties,
            invalid_inputs: self.invalid_inputs,
            winner: MatchWinner::from_scores(self.human.score(), self.computer.score()),
            history: self.history.clone(),
        }
    }

    fn player_mut(&mut self, role: Role) -> &mut Player {
        match role {
            Role::Human => &mut self.human,
            Role::Computer => &mut self.computer,
        }
    }
}

// ============================================================================
// LEVEL 4 - CONSOLE TEXT
// ============================================================================

/// Print the startup banner
pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "-------------------------")?;
    writeln!(out, " Rock! Paper! Scissors!")?;
    writeln!(out, "-------------------------")?;
    writeln!(out)
}

/// Print the final scores and the session winner
pub fn write_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> std::io::Result<()> {
    writeln!(out, "Total scores are:")?;
    writeln!(out, "{}: {}", summary.human.name, summary.human.score())?;
    writeln!(out, "{}: {}", summary.computer.name, summary.computer.score())?;
    match summary.winner_name() {
        Some(name) => writeln!(out, "{} wins the game!", name),
        None => writeln!(out, "It's a draw!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundOutcome;
    use crate::source::{ScriptedInput, ScriptedMoves};

    type TestSession = GameSession<ScriptedInput, ScriptedMoves, Vec<u8>>;

    fn session(lines: &[&str], moves: &[Move]) -> TestSession {
        GameSession::new(
            "Ada",
            SessionConfig::default(),
            ScriptedInput::new(lines.iter().copied()),
            ScriptedMoves::new(moves.iter().copied()),
            Vec::new(),
        )
        .unwrap()
    }

    fn transcript(session: &TestSession) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    #[test]
    fn test_computer_wins_round() {
        let mut s = session(&["r"], &[Move::Paper]);
        let report = s.play_round().unwrap();

        assert_eq!(report.outcome, RoundOutcome::ComputerWins);
        assert_eq!(s.computer().score(), 1);
        assert_eq!(s.human().score(), 0);
        assert_eq!(s.round(), 1);
        assert_eq!(s.state(), SessionState::RoundComplete);

        let text = transcript(&s);
        assert!(text.contains("Ada rolls a rock"));
        assert!(text.contains("computer rolls a paper"));
        assert!(text.contains("computer wins this round"));
    }

    #[test]
    fn test_tie_is_replayed_without_counting() {
        let mut s = session(&["p", "p"], &[Move::Paper, Move::Rock]);
        let report = s.play_round().unwrap();

        assert_eq!(s.ties(), 1);
        assert_eq!(report.round, 1);
        assert_eq!(report.outcome, RoundOutcome::HumanWins);
        assert_eq!(s.human().score(), 1);
        assert!(transcript(&s).contains("Same roll try again!"));
    }

    #[test]
    fn test_invalid_input_is_retried() {
        let mut s = session(&["x", "", "scissorz", "s"], &[Move::Paper]);
        let report = s.play_round().unwrap();

        assert_eq!(s.invalid_inputs(), 3);
        assert_eq!(report.human_move, Move::Scissors);
        assert_eq!(s.round(), 1);

        let text = transcript(&s);
        assert!(text.contains("We don't understand x"));
        assert!(text.contains("We don't understand scissorz"));
    }

    #[test]
    fn test_input_closed_mid_round() {
        let mut s = session(&["x"], &[Move::Rock]);
        assert!(matches!(s.play_round(), Err(SessionError::InputClosed)));
        assert_eq!(s.round(), 0);
        assert_eq!(s.human().score(), 0);
        assert_eq!(s.computer().score(), 0);
    }

    #[test]
    fn test_run_stops_at_win_threshold() {
        let mut s = session(&["s", "r", "p"], &[Move::Paper, Move::Scissors]);
        let summary = s.run().unwrap();

        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.human.score(), 2);
        assert_eq!(summary.computer.score(), 0);
        assert_eq!(summary.winner, MatchWinner::Human);
        assert_eq!(s.state(), SessionState::Finished);

        let text = transcript(&s);
        assert!(text.contains("Total scores are:\nAda: 2\ncomputer: 0\nAda wins the game!"));
    }

    #[test]
    fn test_play_round_after_finish() {
        let mut s = session(&["s", "s"], &[Move::Paper]);
        s.run().unwrap();
        assert!(matches!(s.play_round(), Err(SessionError::AlreadyFinished)));
    }

    #[test]
    fn test_round_cap_draw() {
        let config = SessionConfig::default().with_limits(5, 2);
        let mut s = GameSession::new(
            "Ada",
            config,
            ScriptedInput::new(["r", "r"]),
            ScriptedMoves::new([Move::Scissors, Move::Paper]),
            Vec::new(),
        )
        .unwrap();

        let summary = s.run().unwrap();
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.winner, MatchWinner::Draw);
        assert_eq!(summary.winner_name(), None);
        assert!(transcript(&s).ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_start_asks_for_name() {
        let s: TestSession = GameSession::start(
            SessionConfig::default(),
            ScriptedInput::new(["  Grace  "]),
            ScriptedMoves::new([Move::Rock]),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(s.human().name, "Grace");
        let text = transcript(&s);
        assert!(text.starts_with("-------------------------\n Rock! Paper! Scissors!\n"));
        assert!(text.ends_with(NAME_PROMPT));
    }

    #[test]
    fn test_start_blank_name_uses_default() {
        let s: TestSession = GameSession::start(
            SessionConfig::default(),
            ScriptedInput::new([""]),
            ScriptedMoves::new([Move::Rock]),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(s.human().name, DEFAULT_HUMAN_NAME);
    }

    #[test]
    fn test_new_blank_name_uses_default() {
        let mut s = session(&["r"], &[Move::Scissors]);
        assert_eq!(s.human().name, "Ada");

        s = GameSession::new(
            "   ",
            SessionConfig::default(),
            ScriptedInput::new(["r"]),
            ScriptedMoves::new([Move::Scissors]),
            Vec::new(),
        )
        .unwrap();
        s.play_round().unwrap();

        assert_eq!(s.human().name, DEFAULT_HUMAN_NAME);
        assert!(transcript(&s).contains("player rolls a rock"));
    }

    #[test]
    fn test_rejected_input_echoed_lowercase() {
        let mut s = session(&["X", "  Scissorz ", "s"], &[Move::Paper]);
        s.play_round().unwrap();

        let text = transcript(&s);
        assert!(text.contains("We don't understand x\n"));
        assert!(text.contains("We don't understand scissorz\n"));
    }

    #[test]
    fn test_retry_counters_saturate() {
        let mut s = session(&["x", "r", "r"], &[Move::Rock, Move::Rock, Move::Scissors]);
        s.invalid_inputs = u32::MAX;
        s.ties = u32::MAX;
        s.play_round().unwrap();

        assert_eq!(s.invalid_inputs(), u32::MAX);
        assert_eq!(s.ties(), u32::MAX);
        assert_eq!(s.round(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = GameSession::new(
            "Ada",
            SessionConfig::default().with_limits(2, 0),
            ScriptedInput::default(),
            ScriptedMoves::new([Move::Rock]),
            Vec::new(),
        );
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn test_match_winner_from_scores() {
        assert_eq!(MatchWinner::from_scores(2, 1), MatchWinner::Human);
        assert_eq!(MatchWinner::from_scores(0, 2), MatchWinner::Computer);
        assert_eq!(MatchWinner::from_scores(1, 1), MatchWinner::Draw);
    }
}
