//! Play command - interactive console games

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Console, SessionConfig};

#[derive(Parser, Debug, Default)]
#[command(about = "Play games at the console (start <x> <o> | exit)")]
pub struct PlayArgs {}

pub fn execute(_args: PlayArgs, config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    console.run().context("console session failed")
}
