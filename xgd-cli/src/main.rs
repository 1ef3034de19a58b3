//! Shot dataset CLI - validate and summarize shot-event tables.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "xgd-cli",
    version,
    about = "Football shot-event dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: xgd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    xgd_cmd::run(cli.command)
}
