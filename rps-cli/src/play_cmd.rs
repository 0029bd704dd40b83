//! Play command - one interactive session on the console

use std::io;

use anyhow::{Context, Result};
use clap::Args;

use rps_core::{write_banner, GameSession, RandomMoves, SessionSummary};

use crate::console::ConsoleInput;
use crate::session_args::SessionArgs;

#[derive(Args)]
pub struct PlayArgs {
    /// Your display name (asked for when omitted)
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run play command
///
/// 1. Build the session config
/// 2. Greet the player and play until a limit is hit
/// 3. Optionally dump the summary as JSON
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.session.to_config(seed)?;
    let moves = RandomMoves::from_seed(config.seed);
    let input = ConsoleInput::stdin();
    let mut out = io::stdout();

    let mut session = match args.name {
        Some(name) => {
            write_banner(&mut out)?;
            GameSession::new(name, config, input, moves, out)
        }
        None => GameSession::start(config, input, moves, out),
    }
    .context("Failed to start session")?;

    let summary = session.run().context("Session ended early")?;

    if args.json {
        print_json_summary(&summary)?;
    }

    Ok(())
}

fn print_json_summary(summary: &SessionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{}", json);
    Ok(())
}
