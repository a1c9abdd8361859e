//! Strictly Tic-Tac-Toe - console game for two human players.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_tictactoe::Session;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();
    initialize_tracing();

    info!("Starting Strictly Tic-Tac-Toe");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let game = Session::new(stdin.lock(), stdout.lock()).run()?;

    let record = serde_json::to_string(&game)?;
    debug!(%record, "Final game record");
    Ok(())
}

/// Sends logs to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
