//! Console front end: reads square choices from a line-oriented
//! reader and writes prompts and boards to a writer.

mod input;
mod session;

pub use input::{MalformedInput, parse_square};
pub use session::{
    DRAW_MESSAGE, INVALID_INPUT, SQUARE_TAKEN, Session, SessionError, WELCOME, prompt,
    win_message,
};
