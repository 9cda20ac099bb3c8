//! Winning line analysis for Tic-Tac-Toe

use super::{
    Board, Coordinate,
    board::{CELL_COUNT, Cell, Player},
};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Symbol owning the first complete line found (rows, then columns,
    /// then diagonals)
    pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(owner)
        })
    }

    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; CELL_COUNT], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Whether putting `player` on the empty cell `coord` would complete a line.
    ///
    /// The symbol is placed on a copy of the grid regardless of whose turn it
    /// is, so this answers both "can I win here" and "must I block here".
    /// Occupied or off-grid cells never complete a line.
    pub fn completes_line(board: &Board, coord: Coordinate, player: Player) -> bool {
        if !board.is_empty(coord) {
            return false;
        }
        let mut cells = *board.cells();
        cells[coord.index()] = player.to_cell();
        Self::has_won(&cells, player)
    }

    /// All empty cells where `player` would complete a line, in row-major order
    pub fn winning_moves(board: &Board, player: Player) -> Vec<Coordinate> {
        super::moves::empty_spaces(board)
            .into_iter()
            .filter(|&coord| Self::completes_line(board, coord, player))
            .collect()
    }

    /// First row-major cell where `player` would complete a line
    pub fn first_winning_move(board: &Board, player: Player) -> Option<Coordinate> {
        super::moves::empty_spaces(board)
            .into_iter()
            .find(|&coord| Self::completes_line(board, coord, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_no_winner_on_empty_grid() {
        assert_eq!(LineAnalyzer::winner(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_moves() {
        // X_X
        // O__
        // O__
        let board = Board::from_string("X_XO__O__").unwrap();
        assert_eq!(LineAnalyzer::winning_moves(&board, Player::X), vec![at(0, 1)]);
        assert!(LineAnalyzer::winning_moves(&board, Player::O).is_empty());
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX_
        // XO_
        // _O_
        let board = Board::from_string("XX_XO__O_").unwrap();
        let moves = LineAnalyzer::winning_moves(&board, Player::X);
        assert_eq!(moves, vec![at(0, 2), at(2, 0)]);
    }

    #[test]
    fn test_completes_line_through_middle_cells() {
        // Lines where the candidate sits between the other two cells:
        // middle of the top row, middle of the left column, and the centre.
        let board = Board::from_string("X_XO__O__").unwrap();
        assert!(LineAnalyzer::completes_line(&board, at(0, 1), Player::X));

        let board = Board::from_string("XO__O_X__").unwrap();
        assert!(LineAnalyzer::completes_line(&board, at(1, 0), Player::X));

        let board = Board::from_string("XO_O____X").unwrap();
        assert!(LineAnalyzer::completes_line(&board, at(1, 1), Player::X));
    }

    #[test]
    fn test_completes_line_ignores_occupied_cells() {
        let board = Board::from_string("XX_OO____").unwrap();
        assert!(!LineAnalyzer::completes_line(&board, at(1, 0), Player::O));
        assert!(LineAnalyzer::completes_line(&board, at(1, 2), Player::O));
        assert_eq!(
            LineAnalyzer::first_winning_move(&board, Player::O),
            Some(at(1, 2))
        );
    }
}
