//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which
//! player marked which square and make up the game history.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
