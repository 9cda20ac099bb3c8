//! Interactive console session
//!
//! Reads commands and moves line by line and prints boards and results.
//! Generic over the reader and writer so whole sessions can be scripted.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::{
    command::{Command, parse_coordinates},
    config::SessionConfig,
};
use crate::{
    Error, Result,
    policies::{Policy, PolicyKind},
    tictactoe::{Board, Coordinate, Outcome, Player},
};

/// Who is sitting at one side of the board
enum Seat {
    Human,
    Computer(Policy),
}

impl Seat {
    fn new(kind: PolicyKind, seed: Option<u64>) -> Self {
        match Policy::new(kind, seed) {
            Some(policy) => Seat::Computer(policy),
            None => Seat::Human,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    games_played: u64,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
            games_played: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the command loop until `exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt("Input command: ")?;
            let Some(line) = self.read_line()? else {
                debug!("command input closed");
                return Ok(());
            };

            match line.parse::<Command>() {
                Ok(Command::Exit) => return Ok(()),
                Ok(Command::Start { x, o }) => match self.play_game(x, o) {
                    Ok(_) => {}
                    Err(Error::InputClosed) => {
                        warn!("input closed in the middle of a game");
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                },
                Err(e) => {
                    debug!(input = %line.trim(), "rejected command");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Play one game to the end and print the result
    pub fn play_game(&mut self, x: PolicyKind, o: PolicyKind) -> Result<Outcome> {
        let game = self.games_played;
        self.games_played += 1;
        info!(game, %x, %o, "starting game");

        let mut x_seat = Seat::new(x, self.config.seat_seed(game, Player::X));
        let mut o_seat = Seat::new(o, self.config.seat_seed(game, Player::O));

        let mut board = Board::new();
        writeln!(self.output, "{board}")?;

        while !board.is_terminal() {
            let seat = match board.symbol_to_move() {
                Player::X => &mut x_seat,
                Player::O => &mut o_seat,
            };
            let coord = match seat {
                Seat::Human => self.human_move(&board)?,
                Seat::Computer(policy) => {
                    writeln!(self.output, "Making move level \"{}\"", policy.kind())?;
                    policy.select_move(&board)?
                }
            };
            board.apply_move(coord)?;
            writeln!(self.output, "{board}")?;
        }

        let outcome = board.outcome();
        info!(game, %outcome, "game finished");
        writeln!(self.output, "{outcome}")?;
        Ok(outcome)
    }

    /// Ask for coordinates until a legal move is entered
    fn human_move(&mut self, board: &Board) -> Result<Coordinate> {
        loop {
            self.prompt("Enter the coordinates: ")?;
            let line = self.read_line()?.ok_or(Error::InputClosed)?;

            let checked = parse_coordinates(&line).and_then(|coord| {
                if board.is_empty(coord) {
                    Ok(coord)
                } else {
                    Err(Error::CellOccupied {
                        row: coord.row,
                        col: coord.col,
                    })
                }
            });

            match checked {
                Ok(coord) => return Ok(coord),
                Err(e) if e.is_recoverable_input() => {
                    debug!(input = %line.trim(), error = %e, "rejected move");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read console input".to_string(),
            source,
        })?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
