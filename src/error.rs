//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the tic-tac-toe crate
///
/// The console-facing variants render the exact messages shown to the
/// player, so the game loop can print them unchanged.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Bad parameters!")]
    InvalidCommand { input: String },

    #[error("You should enter numbers!")]
    NotNumeric { input: String },

    #[error("Coordinates should be from 1 to 3!")]
    CoordinateOutOfRange { column: i64, row: i64 },

    #[error("This cell is occupied! Choose another one!")]
    CellOccupied { row: usize, col: usize },

    #[error("coordinate ({row}, {col}) is out of range (must be 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("unknown player type '{label}' (expected one of: user, easy, medium, hard)")]
    UnknownPolicy { label: String },

    #[error("seat {seat} is a human player; matches need two computer players")]
    HumanInArena { seat: char },

    #[error("input closed while waiting for a move")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Whether the error came from bad player input and the prompt should be repeated
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidCommand { .. }
                | Error::NotNumeric { .. }
                | Error::CoordinateOutOfRange { .. }
                | Error::CellOccupied { .. }
        )
    }
}
