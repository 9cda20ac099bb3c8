//! Heuristic policy (medium)
//!
//! 1. Complete a line if the mover can.
//! 2. Otherwise block a line the opponent could complete next turn.
//! 3. Otherwise play randomly.

use tracing::debug;

use super::random::RandomPolicy;
use crate::{
    Error, Result,
    tictactoe::{Board, Coordinate, LineAnalyzer},
};

#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    fallback: RandomPolicy,
}

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a heuristic policy whose random fallback uses a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomPolicy::with_seed(seed),
        }
    }

    pub fn from_fallback(fallback: RandomPolicy) -> Self {
        Self { fallback }
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.fallback.set_seed(seed);
    }

    /// Winning cell for the mover, or failing that a cell that blocks the opponent
    pub fn find_forcing_move(board: &Board) -> Option<Coordinate> {
        let mover = board.symbol_to_move();
        if let Some(win) = LineAnalyzer::first_winning_move(board, mover) {
            debug!(cell = %win, "heuristic takes winning move");
            return Some(win);
        }
        if let Some(block) = LineAnalyzer::first_winning_move(board, mover.opponent()) {
            debug!(cell = %block, "heuristic blocks opponent");
            return Some(block);
        }
        None
    }

    pub fn select_move(&mut self, board: &Board) -> Result<Coordinate> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        match Self::find_forcing_move(board) {
            Some(coord) => Ok(coord),
            None => self.fallback.select_move(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X to move; both X and O have an open line.
        let board = Board::from_string("XX_OO____").unwrap();
        let mut policy = HeuristicPolicy::with_seed(1);
        assert_eq!(policy.select_move(&board).unwrap(), at(0, 2));
    }

    #[test]
    fn test_blocks_opponent() {
        // O to move, X threatens the left column.
        let board = Board::from_string("XO_X_____").unwrap();
        let mut policy = HeuristicPolicy::with_seed(1);
        assert_eq!(policy.select_move(&board).unwrap(), at(2, 0));
    }

    #[test]
    fn test_blocks_middle_of_column() {
        // O to move, X holds both ends of the middle column.
        let board = Board::from_string("OX_____X_").unwrap();
        let mut policy = HeuristicPolicy::with_seed(9);
        assert_eq!(policy.select_move(&board).unwrap(), at(1, 1));
    }

    #[test]
    fn test_falls_back_to_random() {
        let board = Board::from_string("X___O____").unwrap();
        assert_eq!(HeuristicPolicy::find_forcing_move(&board), None);
        let mut policy = HeuristicPolicy::with_seed(5);
        for _ in 0..50 {
            assert!(board.is_empty(policy.select_move(&board).unwrap()));
        }
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let board = Board::from_string("XXXOO____").unwrap();
        let mut policy = HeuristicPolicy::with_seed(5);
        assert!(matches!(policy.select_move(&board), Err(Error::NoValidMoves)));
    }
}
