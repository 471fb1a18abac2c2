//! RPSLS terminal game
//!
//! Plays Rock-Paper-Scissors-Lizard-Spock on stdin/stdout against an
//! opponent that picks uniformly at random. Diagnostics go to stderr.

use clap::Parser;
use rpsls_core::{GameConfig, Session};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rpsls",
    about = "Rock-Paper-Scissors-Lizard-Spock against the computer",
    version
)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(GameConfig::default(), rand::thread_rng());
    match session.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(summary) => {
            info!(played = summary.rounds_played(), "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("rpsls: {e}");
            ExitCode::FAILURE
        }
    }
}
