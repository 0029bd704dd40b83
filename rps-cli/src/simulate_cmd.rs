//! Simulate command - headless sessions against a random human stand-in
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_sessions(), report_results()
//! - Level 3: play_single_session(), compute_statistics()
//! - Level 4: RNG and formatting utilities

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rps_core::{
    GameSession, InputProvider, MatchWinner, Move, RandomMoves, SessionConfig, SessionSummary,
};

use crate::session_args::SessionArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of sessions to play
    #[arg(long, default_value = "100")]
    pub sessions: usize,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregated simulation results
#[derive(Clone, Debug, serde::Serialize)]
struct SimulationResults {
    sessions: usize,
    human_wins: usize,
    computer_wins: usize,
    draws: usize,
    avg_rounds: f32,
    total_ties: u32,
}

/// Human stand-in that types a random move letter each round
struct RandomInput {
    rng: ChaCha8Rng,
}

impl InputProvider for RandomInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mv = Move::ALL[self.rng.gen_range(0..Move::ALL.len())];
        Ok(Some(mv.name()[..1].to_string()))
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let config = args.session.to_config(seed)?;

    tracing::info!(
        "Starting simulation: {} sessions (win at {}, max {} rounds)",
        args.sessions,
        config.win_threshold,
        config.max_rounds
    );

    let summaries = play_sessions(&config, args.sessions)?;
    let results = compute_statistics(&summaries);

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_sessions(config: &SessionConfig, sessions: usize) -> Result<Vec<SessionSummary>> {
    let mut rng = create_rng(config.seed);
    let mut summaries = Vec::with_capacity(sessions);

    for session_num in 0..sessions {
        let summary = play_single_session(config, &mut rng)
            .with_context(|| format!("Session {} failed", session_num + 1))?;

        tracing::debug!(
            "Session {}: {:?} ({} rounds, {} ties)",
            session_num + 1,
            summary.winner,
            summary.rounds,
            summary.ties
        );
        summaries.push(summary);
    }

    Ok(summaries)
}

fn report_results(results: &SimulationResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Each session gets its own seeds drawn from the master RNG
fn play_single_session(config: &SessionConfig, rng: &mut ChaCha8Rng) -> Result<SessionSummary> {
    let moves = RandomMoves::from_seed(Some(rng.gen()));
    let input = RandomInput {
        rng: ChaCha8Rng::seed_from_u64(rng.gen()),
    };

    let mut session = GameSession::new("simulated", config.clone(), input, moves, io::sink())?;
    Ok(session.run()?)
}

fn compute_statistics(summaries: &[SessionSummary]) -> SimulationResults {
    let count = |winner: MatchWinner| summaries.iter().filter(|s| s.winner == winner).count();

    let total_rounds: u32 = summaries.iter().map(|s| s.rounds).sum();
    let avg_rounds = if summaries.is_empty() {
        0.0
    } else {
        total_rounds as f32 / summaries.len() as f32
    };

    SimulationResults {
        sessions: summaries.len(),
        human_wins: count(MatchWinner::Human),
        computer_wins: count(MatchWinner::Computer),
        draws: count(MatchWinner::Draw),
        avg_rounds,
        total_ties: summaries.iter().map(|s| s.ties).sum(),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(results: &SimulationResults) {
    let total = results.sessions;

    println!("\n=== Simulation Results ===");
    println!("Sessions:      {}", total);
    println!(
        "Human wins:    {} ({:.1}%)",
        results.human_wins,
        percent(results.human_wins, total)
    );
    println!(
        "Computer wins: {} ({:.1}%)",
        results.computer_wins,
        percent(results.computer_wins, total)
    );
    println!(
        "Draws:         {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg rounds:    {:.1}", results.avg_rounds);
    println!("Total ties:    {}", results.total_ties);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::Player;

    fn summary(human: u32, computer: u32, ties: u32) -> SessionSummary {
        let mut h = Player::new("h");
        let mut c = Player::computer();
        (0..human).for_each(|_| h.record_win());
        (0..computer).for_each(|_| c.record_win());
        SessionSummary {
            human: h,
            computer: c,
            rounds: human + computer,
            ties,
            invalid_inputs: 0,
            winner: MatchWinner::from_scores(human, computer),
            history: vec![],
        }
    }

    #[test]
    fn test_compute_statistics_empty() {
        let results = compute_statistics(&[]);
        assert_eq!(results.sessions, 0);
        assert_eq!(results.human_wins, 0);
        assert_eq!(results.avg_rounds, 0.0);
    }

    #[test]
    fn test_compute_statistics() {
        let results = compute_statistics(&[summary(2, 0, 1), summary(1, 2, 0), summary(2, 1, 3)]);
        assert_eq!(results.sessions, 3);
        assert_eq!(results.human_wins, 2);
        assert_eq!(results.computer_wins, 1);
        assert_eq!(results.draws, 0);
        assert_eq!(results.total_ties, 4);
        assert!((results.avg_rounds - 8.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_play_sessions_seeded_is_reproducible() {
        let config = SessionConfig::default().with_seed(42);
        let a = play_sessions(&config, 20).unwrap();
        let b = play_sessions(&config, 20).unwrap();
        assert_eq!(a, b);

        for s in &a {
            assert!(s.rounds >= 2 && s.rounds <= 3);
            assert_ne!(s.winner, MatchWinner::Draw);
        }
    }

    #[test]
    fn test_random_input_always_parses() {
        let mut input = RandomInput {
            rng: create_rng(Some(3)),
        };
        for _ in 0..30 {
            let line = input.read_line().unwrap().unwrap();
            assert!(Move::parse_input(&line).is_ok());
        }
    }
}
