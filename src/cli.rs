//! Command-line interface for strictly_tictactoe.

use clap::Parser;

/// Strictly Tic-Tac-Toe - two players take turns at one console
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(
    about = "Two-player tic-tac-toe on the console",
    long_about = "Two-player tic-tac-toe on the console.\n\n\
        Players X and O take turns typing a square number:\n\n\
        1 | 2 | 3\n---------\n4 | 5 | 6\n---------\n7 | 8 | 9\n\n\
        Logging goes to stderr and is controlled with RUST_LOG (default: warn)."
)]
#[command(version)]
pub struct Cli {}
