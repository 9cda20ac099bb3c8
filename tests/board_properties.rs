//! Invariants of the board state machine over every reachable position.

mod common;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_ai::tictactoe::{
    Board, Cell, Coordinate, Outcome, Player, WINNING_LINES, empty_spaces,
};

#[test]
fn reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions.
    assert_eq!(common::reachable_boards().len(), 5478);
}

#[test]
fn symbol_to_move_follows_parity() {
    for board in common::reachable_boards() {
        let expected = if board.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(board.symbol_to_move(), expected, "board {}", board.encode());
    }
}

#[test]
fn apply_move_changes_exactly_one_cell() {
    for board in common::reachable_boards() {
        if board.is_terminal() {
            continue;
        }
        for coord in empty_spaces(&board) {
            let mut next = board;
            next.apply_move(coord).unwrap();
            assert_eq!(next.move_count(), board.move_count() + 1);

            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.cells()[i] != next.cells()[i])
                .collect();
            assert_eq!(changed, vec![coord.index()]);
            assert_eq!(
                next.cells()[coord.index()],
                board.symbol_to_move().to_cell()
            );
        }
    }
}

#[test]
fn illegal_moves_leave_board_untouched() {
    let mut board = Board::from_string("X________").unwrap();
    let before = board;
    assert!(board.apply_move(Coordinate { row: 0, col: 0 }).is_err());
    assert!(board.apply_move(Coordinate { row: 0, col: 3 }).is_err());
    assert!(board.apply_move(Coordinate { row: 7, col: 1 }).is_err());
    assert_eq!(board, before);
}

fn reference_outcome(cells: &[Cell; 9]) -> Option<Outcome> {
    let owners: Vec<Player> = WINNING_LINES
        .iter()
        .filter_map(|&[a, b, c]| {
            let p = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(p)
        })
        .collect();
    match owners.as_slice() {
        [] if cells.contains(&Cell::Empty) => Some(Outcome::InProgress),
        [] => Some(Outcome::Draw),
        [first, rest @ ..] if rest.iter().all(|p| p == first) => Some(Outcome::Win(*first)),
        // Both symbols own a line: not reachable in a real game.
        _ => None,
    }
}

#[test]
fn terminal_detection_matches_line_scan_on_every_grid() {
    let symbols = ['_', 'X', 'O'];
    let mut checked = 0;
    for mut code in 0..3usize.pow(9) {
        let mut text = String::with_capacity(9);
        for _ in 0..9 {
            text.push(symbols[code % 3]);
            code /= 3;
        }
        let board = Board::from_string(&text).unwrap();
        let Some(expected) = reference_outcome(board.cells()) else {
            continue;
        };
        assert_eq!(board.outcome(), expected, "grid {text}");
        assert_eq!(board.is_terminal(), expected != Outcome::InProgress);
        checked += 1;
    }
    assert!(checked > 4000);
}

#[test]
fn random_playouts_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut board = Board::new();
        while !board.is_terminal() {
            let moves = empty_spaces(&board);
            let coord = moves[rng.random_range(0..moves.len())];
            board.apply_move(coord).unwrap();
        }
        assert!(board.move_count() <= 9);
        assert_ne!(board.outcome(), Outcome::InProgress);
        assert!(board.apply_move(Coordinate { row: 0, col: 0 }).is_err());
    }
}
