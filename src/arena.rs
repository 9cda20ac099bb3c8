//! Computer-vs-computer matches
//!
//! Plays a series of games between two computer policies and tallies the
//! results, optionally reporting progress through an `indicatif` bar.

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    policies::{Policy, PolicyKind},
    tictactoe::{Board, Coordinate, Outcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Base seed; each game and seat derives its own seed from it
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
        }
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Coordinate>,
    pub outcome: Outcome,
    pub final_board: Board,
}

/// Result of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Policy playing X (moves first)
    pub x: PolicyKind,

    /// Policy playing O
    pub o: PolicyKind,

    /// Total games played
    pub games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl MatchSummary {
    /// Create a summary from raw counts
    pub fn new(x: PolicyKind, o: PolicyKind, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let games = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if games > 0 {
                count as f64 / games as f64
            } else {
                0.0
            }
        };

        Self {
            x,
            o,
            games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save summary to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

/// Two computer seats and the rules for a series of games
pub struct Arena {
    x: Policy,
    o: Policy,
    config: MatchConfig,
    progress: Option<ProgressBar>,
}

impl Arena {
    /// Seat two computer policies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HumanInArena`] if either seat is [`PolicyKind::Human`].
    pub fn new(x: PolicyKind, o: PolicyKind, config: MatchConfig) -> Result<Self> {
        let seat = |kind: PolicyKind, player: Player, offset: u64| {
            Policy::new(kind, config.seed.map(|s| s.wrapping_add(offset))).ok_or(
                Error::HumanInArena {
                    seat: player.symbol(),
                },
            )
        };
        let x = seat(x, Player::X, 0)?;
        let o = seat(o, Player::O, 1)?;
        Ok(Self {
            x,
            o,
            config,
            progress: None,
        })
    }

    /// Report each finished game on `progress`
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    fn reseed(&mut self, game: usize) {
        if let Some(seed) = self.config.seed {
            let base = seed.wrapping_add(2 * game as u64);
            self.x.set_seed(base);
            self.o.set_seed(base.wrapping_add(1));
        }
    }

    /// Play one game from an empty board
    pub fn play_game(&mut self) -> Result<GameRecord> {
        play_out(Board::new(), &mut self.x, &mut self.o)
    }

    /// Play the configured number of games
    pub fn run(&mut self) -> Result<MatchSummary> {
        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
        info!(
            x = %self.x.kind(),
            o = %self.o.kind(),
            games = self.config.games,
            "starting match"
        );

        for game in 0..self.config.games {
            self.reseed(game);
            let record = self.play_game()?;
            match record.outcome {
                Outcome::Win(Player::X) => x_wins += 1,
                Outcome::Win(Player::O) => o_wins += 1,
                Outcome::Draw => draws += 1,
                Outcome::InProgress => {}
            }
            debug!(game, outcome = %record.outcome, moves = record.moves.len(), "game finished");

            if let Some(pb) = &self.progress {
                pb.set_position(game as u64 + 1);
                pb.set_message(format!("X:{x_wins} D:{draws} O:{o_wins}"));
            }
        }

        if let Some(pb) = &self.progress {
            pb.finish_with_message(format!("X:{x_wins} D:{draws} O:{o_wins}"));
        }

        Ok(MatchSummary::new(
            self.x.kind(),
            self.o.kind(),
            x_wins,
            o_wins,
            draws,
        ))
    }
}

/// Let two policies finish the game from `board`
pub fn play_out(mut board: Board, x: &mut Policy, o: &mut Policy) -> Result<GameRecord> {
    let mut moves = Vec::new();
    while !board.is_terminal() {
        let policy = match board.symbol_to_move() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let coord = policy.select_move(&board)?;
        board.apply_move(coord)?;
        moves.push(coord);
    }

    Ok(GameRecord {
        moves,
        outcome: board.outcome(),
        final_board: board,
    })
}
