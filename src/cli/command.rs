//! Parsing of console commands and move input

use std::str::FromStr;

use crate::{
    Error, Result,
    policies::PolicyKind,
    tictactoe::Coordinate,
};

/// A line typed at the `Input command:` prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `start <x> <o>`: X is played by the first seat. Unrecognized labels
    /// play randomly.
    Start { x: PolicyKind, o: PolicyKind },
    /// `exit`
    Exit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let invalid = || Error::InvalidCommand {
            input: line.to_string(),
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["exit"] => Ok(Command::Exit),
            ["start", x, o] => Ok(Command::Start {
                x: PolicyKind::from_label(x),
                o: PolicyKind::from_label(o),
            }),
            _ => Err(invalid()),
        }
    }
}

/// Parse `column row` as typed by a human player.
///
/// Occupancy is not checked here; that needs the board.
///
/// # Errors
///
/// - [`Error::NotNumeric`] unless the line holds exactly two integers
/// - [`Error::CoordinateOutOfRange`] if either value is outside 1-3
pub fn parse_coordinates(line: &str) -> Result<Coordinate> {
    let not_numeric = || Error::NotNumeric {
        input: line.to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [column, row] = tokens.as_slice() else {
        return Err(not_numeric());
    };

    let column: i64 = column.parse().map_err(|_| not_numeric())?;
    let row: i64 = row.parse().map_err(|_| not_numeric())?;
    Coordinate::from_cartesian(column, row)
}
