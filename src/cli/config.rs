//! Shared configuration for CLI commands

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Options common to every command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Random seed for reproducible easy/medium opponents
    pub seed: Option<u64>,

    /// Verbose logging
    pub verbose: bool,
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed for the seat playing `player` in the `game`-th game of a session
    pub fn seat_seed(&self, game: u64, player: Player) -> Option<u64> {
        let offset = match player {
            Player::X => 0,
            Player::O => 1,
        };
        self.seed
            .map(|seed| seed.wrapping_add(game.wrapping_mul(2)).wrapping_add(offset))
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
