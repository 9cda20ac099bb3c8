//! Shared helpers for the integration tests.

use std::collections::HashSet;

use tictactoe_ai::tictactoe::{Board, empty_spaces};

/// Every board reachable from the empty grid by legal play, terminal ones included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        for coord in empty_spaces(&board) {
            stack.push(board.with_move(coord).unwrap());
        }
    }
    let mut boards: Vec<Board> = seen.into_iter().collect();
    boards.sort_by_key(|b| b.encode());
    boards
}
