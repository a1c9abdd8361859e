//! Two-player tic-tac-toe: board, rules, and turn engine.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_draw, is_full};
pub use types::{Board, GameStatus, Player, ROW_SEPARATOR, Square};

/// Alias for clarity when talking about what sits on a square.
pub type Mark = Player;
