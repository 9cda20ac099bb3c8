//! Move generation

use super::{Board, Coordinate};

/// Every empty cell, scanned row by row.
///
/// The order is part of the contract: the search breaks ties between equally
/// good moves by taking the first one in this sequence.
pub fn empty_spaces(board: &Board) -> Vec<Coordinate> {
    board.empty_cells()
}

/// Legal moves: the empty cells while the game is still running
pub fn legal_moves(board: &Board) -> Vec<Coordinate> {
    if board.is_terminal() {
        return Vec::new();
    }
    empty_spaces(board)
}
