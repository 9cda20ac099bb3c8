//! Random policy (easy)

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Coordinate, empty_spaces},
};

/// Picks uniformly among the empty cells.
///
/// The generator is owned by the policy and can be seeded, so a game played
/// with a fixed seed is reproducible.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a random policy seeded from the thread-local generator
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random policy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn select_move(&mut self, board: &Board) -> Result<Coordinate> {
        let moves = empty_spaces(board);
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        debug!(choice = %moves[index], options = moves.len(), "random move");
        Ok(moves[index])
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_returns_empty_cells() {
        let mut policy = RandomPolicy::with_seed(7);
        let board = Board::from_string("XOX_O_X__").unwrap();
        for _ in 0..200 {
            let choice = policy.select_move(&board).unwrap();
            assert!(board.is_empty(choice), "picked occupied cell {choice}");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomPolicy::with_seed(42);
        let mut b = RandomPolicy::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_move(&board).unwrap(), b.select_move(&board).unwrap());
        }
    }

    #[test]
    fn test_eventually_covers_every_cell() {
        let board = Board::new();
        let mut policy = RandomPolicy::with_seed(3);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[policy.select_move(&board).unwrap().index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut policy = RandomPolicy::with_seed(1);
        assert!(matches!(policy.select_move(&board), Err(Error::NoValidMoves)));
    }
}
