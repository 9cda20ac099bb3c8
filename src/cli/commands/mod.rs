//! Subcommands of the `tictactoe` binary

pub mod matchup;
pub mod play;
