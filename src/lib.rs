//! Strictly Tic-Tac-Toe - two players, one console
//!
//! # Architecture
//!
//! - **Games**: board, rules, and the turn engine ([`GameState`])
//! - **Console**: the prompt/validate/apply loop over any reader and writer ([`Session`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameStatus, TicTacToePlayer as Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.play(index)?;
//! }
//! assert_eq!(game.status(), &GameStatus::Won(Player::X));
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;

// Crate-level exports - Console session
pub use console::{
    DRAW_MESSAGE, INVALID_INPUT, MalformedInput, SQUARE_TAKEN, Session, SessionError, WELCOME,
    parse_square, prompt, win_message,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, Mark, Move, MoveError, Position, ROW_SEPARATOR, Square,
    WINNING_LINES, check_winner, is_draw, is_full, Player as TicTacToePlayer,
};
