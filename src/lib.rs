//! Tic-tac-toe with computer opponents
//!
//! This crate provides:
//! - A 3x3 board whose side to move and outcome are derived from the grid
//! - Three computer tiers: random (easy), win-or-block (medium) and
//!   exhaustive minimax (hard)
//! - A line-based console protocol and a computer-vs-computer match runner

pub mod arena;
pub mod cli;
pub mod error;
pub mod policies;
pub mod tictactoe;

pub use arena::{Arena, GameRecord, MatchConfig, MatchSummary, play_out};
pub use error::{Error, Result};
pub use policies::{HeuristicPolicy, OptimalPolicy, Policy, PolicyKind, RandomPolicy};
pub use tictactoe::{Board, Cell, Coordinate, Outcome, Player};
