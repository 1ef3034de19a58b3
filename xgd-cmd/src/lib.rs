//! Command implementations for the shot dataset CLI.
//!
//! Provides subcommands for validating a shot-event CSV and printing
//! season listings and per-season analysis digests in the terminal.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Validate a shot-event CSV and print basic table facts
    Check {
        /// Path to the shot-event CSV
        #[arg(short = 'f', long)]
        shots_csv: String,
    },

    /// List the seasons in a shot-event CSV with their row counts
    Seasons {
        /// Path to the shot-event CSV
        #[arg(short = 'f', long)]
        shots_csv: String,
    },

    /// Print a per-season digest of all eight analyses
    Summary {
        /// Path to the shot-event CSV
        #[arg(short = 'f', long)]
        shots_csv: String,

        /// Season to summarize (defaults to the earliest in the table)
        #[arg(short, long)]
        season: Option<String>,

        /// Player the player-scoped analyses are run for
        #[arg(short, long, default_value = "Mohamed Salah")]
        player: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { shots_csv } => report::run_check(&shots_csv),
        Command::Seasons { shots_csv } => report::run_seasons(&shots_csv),
        Command::Summary {
            shots_csv,
            season,
            player,
        } => report::run_summary(&shots_csv, season.as_deref(), &player),
    }
}
