//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Width and height of the grid
pub const SIZE: usize = 3;

/// Number of cells on the grid
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used by the row-major board notation (`_` for empty)
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player's symbol. X always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A grid cell in matrix orientation: row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate, rejecting anything outside the 3x3 grid.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::OutOfRange { row, col });
        }
        Ok(Coordinate { row, col })
    }

    /// Convert player-facing Cartesian input to a matrix coordinate.
    ///
    /// Players type `column row`, both 1-indexed with the origin in the
    /// lower-left corner, so `1 1` is the bottom-left cell and `1 3` the
    /// top-left one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_ai::tictactoe::Coordinate;
    ///
    /// let top_left = Coordinate::from_cartesian(1, 3).unwrap();
    /// assert_eq!((top_left.row, top_left.col), (0, 0));
    ///
    /// assert!(Coordinate::from_cartesian(0, 2).is_err());
    /// ```
    pub fn from_cartesian(column: i64, row: i64) -> Result<Self, crate::Error> {
        let range = 1..=SIZE as i64;
        if !range.contains(&column) || !range.contains(&row) {
            return Err(crate::Error::CoordinateOutOfRange { column, row });
        }
        Ok(Coordinate {
            row: SIZE - row as usize,
            col: column as usize - 1,
        })
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Coordinate {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a game as read off the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game not finished"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// The 3x3 grid.
///
/// Only the cells are stored. The move count, the side to move and the
/// outcome are all derived from them, so a board can never disagree with
/// itself about whose turn it is. The type is `Copy` (9 bytes), which makes
/// hypothetical moves in the search a plain value copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from the row-major notation, e.g. `"XX_______"`.
    ///
    /// Whitespace between rows is ignored only when the string is longer than
    /// nine characters, so `"         "` still reads as an empty board. Piece
    /// counts are not checked: the side to move follows from parity alone.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cells
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let mut chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            chars.retain(|c| !c.is_whitespace());
        }
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    fn count_pieces(cells: &[Cell; CELL_COUNT]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell at a coordinate, or `None` when it is off the grid
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        coord.in_bounds().then(|| self.cells[coord.index()])
    }

    /// Check if a coordinate is on the grid and empty
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// Number of occupied cells (0-9)
    pub fn move_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// X moves on an even move count, O on an odd one
    pub fn symbol_to_move(&self) -> Player {
        if self.move_count().is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Place the symbol to move on `coord`.
    ///
    /// Exactly one cell changes and the move count grows by one. The board is
    /// left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`](crate::Error::GameOver) if the game has finished
    /// - [`Error::OutOfRange`](crate::Error::OutOfRange) if `coord` is off the grid
    /// - [`Error::CellOccupied`](crate::Error::CellOccupied) if the cell is taken
    pub fn apply_move(&mut self, coord: Coordinate) -> Result<(), crate::Error> {
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if !coord.in_bounds() {
            return Err(crate::Error::OutOfRange {
                row: coord.row,
                col: coord.col,
            });
        }
        if !self.is_empty(coord) {
            return Err(crate::Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }

        self.cells[coord.index()] = self.symbol_to_move().to_cell();
        Ok(())
    }

    /// Make a move and return a new board, leaving `self` unchanged
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, coord: Coordinate) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.apply_move(coord)?;
        Ok(next)
    }

    /// Get all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coordinate::from_index(i))
            .collect()
    }

    /// Whether the grid has no empty cell left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Read the game state off the grid: a completed line wins, otherwise a
    /// full grid is a draw.
    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            Outcome::Win(player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Row-major notation accepted by [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in self.cells.chunks(SIZE) {
            write!(f, "|")?;
            for &cell in row {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    other => other.to_char(),
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "---------")
    }
}
