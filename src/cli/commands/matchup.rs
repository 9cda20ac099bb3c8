//! Match command - pit two computer players against each other

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    arena::{Arena, MatchConfig},
    cli::{
        SessionConfig,
        output::{create_match_progress, format_percent, print_kv, print_section},
    },
    policies::PolicyKind,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two computer players")]
pub struct MatchArgs {
    /// Player for X, moves first (easy, medium, hard)
    pub x: PolicyKind,

    /// Player for O (easy, medium, hard)
    pub o: PolicyKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: MatchArgs, config: SessionConfig) -> Result<()> {
    let match_config = MatchConfig {
        games: args.games,
        seed: config.seed,
    };
    let mut arena = Arena::new(args.x, args.o, match_config)?;
    if !args.quiet {
        arena = arena.with_progress(create_match_progress(args.games as u64)?);
    }

    let summary = arena.run()?;

    print_section(&format!("{} (X) vs {} (O)", summary.x, summary.o));
    print_kv("Games", &summary.games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", summary.x_wins, format_percent(summary.x_win_rate)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", summary.o_wins, format_percent(summary.o_win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, format_percent(summary.draw_rate)),
    );

    if let Some(path) = args.export {
        summary
            .save(&path)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
