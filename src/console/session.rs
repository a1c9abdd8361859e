//! Interactive console session.

use super::input::parse_square;
use crate::games::tictactoe::{GameState, GameStatus, Move, MoveError, Player};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Greeting printed once at the start of a session.
pub const WELCOME: &str = "Welcome to Tic Tac Toe! Player X goes first.";
/// Printed when the typed text is not a square 1-9.
pub const INVALID_INPUT: &str = "Please enter a number from 1 to 9.";
/// Printed when the chosen square already holds a mark.
pub const SQUARE_TAKEN: &str = "That square is already taken. Try again.";
/// Final line of a drawn game.
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// Prompt shown before reading a player's choice.
pub fn prompt(player: Player) -> String {
    format!("Player {player}, choose a square (1-9): ")
}

/// Final line of a won game.
pub fn win_message(winner: Player) -> String {
    format!("Player {winner} wins! Congratulations!")
}

/// Errors that end a session before the game does.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ran out before the game reached a result.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine refused a move the session had already validated.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

/// One game played over a line-oriented reader and a writer.
///
/// The session owns its [`GameState`] for the whole game; nothing else
/// reads or writes it while the turn loop runs.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: GameState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: GameState::new(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Plays until the game is won or drawn and returns the final state.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::InputClosed`] if input runs out mid-game,
    /// or [`SessionError::Io`] if the console cannot be read or written.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameState, SessionError> {
        info!("Session started");
        writeln!(self.output, "{WELCOME}\n")?;

        loop {
            self.print_board()?;
            self.take_turn()?;

            match self.game.advance() {
                GameStatus::Won(winner) => {
                    self.print_board()?;
                    writeln!(self.output, "\n{}", win_message(winner))?;
                    break;
                }
                GameStatus::Draw => {
                    self.print_board()?;
                    writeln!(self.output, "\n{DRAW_MESSAGE}")?;
                    break;
                }
                GameStatus::InProgress => {}
            }
        }

        self.output.flush()?;
        info!(status = ?self.game.status(), "Session finished");
        Ok(self.game)
    }

    /// Prompts the current player until a move is accepted.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    fn take_turn(&mut self) -> Result<Move, SessionError> {
        loop {
            write!(self.output, "{}", prompt(self.game.current_player()))?;
            self.output.flush()?;

            let line = self.read_line()?;
            let position = match parse_square(&line) {
                Ok(position) => position,
                Err(err) => {
                    debug!(%err, "Rejected input");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                    continue;
                }
            };

            match self.game.apply_move(position.to_index()) {
                Ok(action) => return Ok(action),
                Err(MoveError::CellOccupied(position)) => {
                    debug!(%position, "Square taken");
                    writeln!(self.output, "{SQUARE_TAKEN}")?;
                }
                Err(MoveError::InvalidPosition(index)) => {
                    debug!(index, "Rejected position");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                }
                Err(err @ MoveError::GameOver) => return Err(err.into()),
            }
        }
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!(moves = self.game.history().len(), "Input closed mid-game");
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }

    fn print_board(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{}", self.game.board())
    }
}
