//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;
pub mod moves;

pub use board::{Board, CELL_COUNT, Cell, Coordinate, Outcome, Player, SIZE};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::{empty_spaces, legal_moves};
