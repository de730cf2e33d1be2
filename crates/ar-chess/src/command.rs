//! Parsing of the interactive prompt's commands.

use chess_core::Position;
use thiserror::Error;

/// Errors that can occur when parsing a prompt line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("not a square number: '{0}'")]
    InvalidNumber(String),

    #[error("expected RANK FILE, got {0} values")]
    WrongArity(usize),

    #[error("unknown command: '{0}'")]
    Unknown(String),
}

/// Commands typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a square: select a piece, or move the selected piece there.
    Select(Position),
    /// Drop the current selection.
    Unselect,
    /// Redraw the board.
    Board,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses one line of input.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => Err(CommandError::Empty),
            ["u" | "unselect"] => Ok(Command::Unselect),
            ["b" | "board"] => Ok(Command::Board),
            ["h" | "help" | "?"] => Ok(Command::Help),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            [rank, file] => Ok(Command::Select(Position::new(
                parse_coordinate(rank)?,
                parse_coordinate(file)?,
            ))),
            [single] if single.parse::<u8>().is_ok() => Err(CommandError::WrongArity(1)),
            [_] => Err(CommandError::Unknown(input.to_string())),
            many => Err(CommandError::WrongArity(many.len())),
        }
    }
}

fn parse_coordinate(text: &str) -> Result<u8, CommandError> {
    text.parse::<u8>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}
