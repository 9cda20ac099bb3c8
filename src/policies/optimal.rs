//! Optimal policy (hard): exhaustive minimax search
//!
//! Positions are scored from the point of view of the side that started the
//! search: +1 for a win, 0 for a draw and -1 for a loss. The searcher takes
//! the maximum over its own moves and assumes the opponent takes the minimum.
//! Among equally scored first moves the earliest one in row-major order is
//! kept.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Coordinate, LineAnalyzer, Outcome, Player, empty_spaces},
};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Coordinate,
    /// Guaranteed outcome for the mover under best play
    pub score: i32,
    /// Positions scored, counting transposition hits
    pub nodes: u64,
}

/// Game-tree search for a single searching symbol.
///
/// Each search owns its transposition table; nothing survives between calls,
/// so the policy stays stateless from the caller's point of view. The table is
/// keyed on the board alone because the side to move follows from the board
/// and the searcher is fixed for the lifetime of the search.
struct Search {
    searcher: Player,
    cache: HashMap<Board, i32>,
    nodes: u64,
}

impl Search {
    fn new(searcher: Player) -> Self {
        Self {
            searcher,
            cache: HashMap::new(),
            nodes: 0,
        }
    }

    fn terminal_score(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Win(player) if player == self.searcher => Some(WIN_SCORE),
            Outcome::Win(_) => Some(LOSS_SCORE),
        }
    }

    fn minimax(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(&value) = self.cache.get(board) {
            return value;
        }

        let value = match self.terminal_score(board.outcome()) {
            Some(score) => score,
            None => {
                let is_maximizing = board.symbol_to_move() == self.searcher;
                let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
                for coord in empty_spaces(board) {
                    if let Ok(next) = board.with_move(coord) {
                        let value = self.minimax(&next);
                        best = if is_maximizing {
                            best.max(value)
                        } else {
                            best.min(value)
                        };
                    }
                }
                best
            }
        };

        self.cache.insert(*board, value);
        value
    }

    /// Score each candidate and keep the first strict improvement
    fn best_of(&mut self, board: &Board, candidates: &[Coordinate]) -> Option<(Coordinate, i32)> {
        let mut best: Option<(Coordinate, i32)> = None;
        for &coord in candidates {
            let Ok(next) = board.with_move(coord) else {
                continue;
            };
            let value = self.minimax(&next);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((coord, value));
            }
        }
        best
    }
}

/// Minimax player. Never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Minimax score of every empty cell for the side to move, in row-major order
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Coordinate, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }
        let mut search = Search::new(board.symbol_to_move());
        empty_spaces(board)
            .into_iter()
            .filter_map(|coord| {
                let next = board.with_move(coord).ok()?;
                Some((coord, search.minimax(&next)))
            })
            .collect()
    }

    /// Run the search from `board` for the side to move.
    ///
    /// An immediate win is taken outright. When the opponent threatens to
    /// complete a line, only the blocking cells are searched: every other
    /// move loses on the spot, so this never lowers the guaranteed score but
    /// makes the engine block even in positions that are lost anyway.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the game is already over.
    pub fn search(&self, board: &Board) -> Result<SearchResult> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let mover = board.symbol_to_move();

        if let Some(win) = LineAnalyzer::first_winning_move(board, mover) {
            return Ok(SearchResult {
                best_move: win,
                score: WIN_SCORE,
                nodes: 1,
            });
        }

        let threats = LineAnalyzer::winning_moves(board, mover.opponent());
        let candidates = if threats.is_empty() {
            empty_spaces(board)
        } else {
            threats
        };

        let mut search = Search::new(mover);
        let (best_move, score) = search
            .best_of(board, &candidates)
            .ok_or(Error::NoValidMoves)?;

        Ok(SearchResult {
            best_move,
            score,
            nodes: search.nodes,
        })
    }

    pub fn select_move(&self, board: &Board) -> Result<Coordinate> {
        let result = self.search(board)?;
        debug!(
            player = %board.symbol_to_move(),
            choice = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            "minimax search finished"
        );
        Ok(result.best_move)
    }
}
