//! Game state and turn engine for tic-tac-toe.
//!
//! A [`GameState`] is owned by a single play session. Each turn is
//! [`apply_move`](GameState::apply_move) followed by
//! [`advance`](GameState::advance), which checks for a winner, then a
//! draw, and only then hands the turn to the other player.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{check_winner, is_draw};
use super::types::{Board, GameStatus, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    #[getter(skip)]
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves applied so far, oldest first.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// The turn does not pass to the other player; call
    /// [`advance`](Self::advance) once the move is in.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::InvalidPosition`] if `index` is not in 0-8.
    /// - [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let position = Position::from_index(index).ok_or(MoveError::InvalidPosition(index))?;
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let action = Move::new(self.current_player, position);
        self.board.set(position, Square::Occupied(action.player));
        self.history.push(action);
        debug!(%action, "Move applied");

        Ok(action)
    }

    /// Hands the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Evaluates the board after a move.
    ///
    /// A completed line ends the game as a win; otherwise a full board
    /// ends it as a draw; otherwise the turn passes. Terminal games are
    /// left untouched.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> GameStatus {
        if self.is_over() {
            return self.status;
        }

        if let Some(winner) = check_winner(&self.board) {
            info!(%winner, moves = self.history.len(), "Game won");
            self.status = GameStatus::Won(winner);
        } else if is_draw(&self.board) {
            info!(moves = self.history.len(), "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.switch_player();
        }

        self.status
    }

    /// Applies a move and advances the game in one step.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.apply_move(index)?;
        Ok(self.advance())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
