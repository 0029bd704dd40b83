//! RPS CLI - Command-line interface
//!
//! Commands:
//! - play: Play an interactive session against the computer
//! - simulate: Play many headless sessions and report statistics

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod console;
mod play_cmd;
mod session_args;
mod simulate_cmd;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock! Paper! Scissors! against the computer")]
struct Cli {
    /// Random seed for reproducible computer moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log session progress to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play(play_cmd::PlayArgs),
    /// Play headless sessions against a random human stand-in
    Simulate(simulate_cmd::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
    }
}

/// Logs go to stderr so game text on stdout stays clean.
/// RUST_LOG takes precedence over --verbose.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
