//! Tic-tac-toe at the console against human or computer opponents
//!
//! With no subcommand the interactive console starts:
//! - `start <x> <o>` with each side one of user, easy, medium, hard
//! - `exit` to quit

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_ai::cli::{
    SessionConfig,
    commands::{matchup, play},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with random, heuristic and minimax opponents", long_about = None)]
struct Cli {
    /// Random seed for reproducible easy and medium opponents
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log decisions to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play at the console (default)
    Play(play::PlayArgs),

    /// Play a series of games between two computer players
    Match(matchup::MatchArgs),
}

fn init_logging(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SessionConfig {
        seed: cli.seed,
        verbose: cli.verbose,
    };
    init_logging(&config);

    match cli.command.unwrap_or(Commands::Play(play::PlayArgs::default())) {
        Commands::Play(args) => play::execute(args, config),
        Commands::Match(args) => matchup::execute(args, config),
    }
}
