//! Parsing of typed square choices.

use crate::games::tictactoe::Position;
use tracing::instrument;

/// Input that does not name a square 1-9.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MalformedInput {
    /// The text is not a decimal integer.
    #[display("Not a number: {:?}", _0)]
    NotANumber(String),

    /// The number is outside 1-9.
    #[display("Square {} is outside 1-9", _0)]
    OutOfRange(i64),
}

impl std::error::Error for MalformedInput {}

/// Parses a 1-based square number into a board position.
///
/// Surrounding whitespace is ignored, so a raw line from stdin can be
/// passed straight in.
///
/// # Errors
///
/// Returns [`MalformedInput`] for anything other than an integer 1-9.
#[instrument]
pub fn parse_square(line: &str) -> Result<Position, MalformedInput> {
    let text = line.trim();
    let number: i64 = text
        .parse()
        .map_err(|_| MalformedInput::NotANumber(text.to_string()))?;

    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(Position::from_index)
        .ok_or(MalformedInput::OutOfRange(number))
}
