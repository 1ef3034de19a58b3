//! Terminal reports over a shot-event CSV.

use std::path::Path;

use anyhow::{ensure, Context};
use log::debug;
use xgd_understat::{Analysis, AnalysisOutput, ShotTable};

/// Validate the CSV and print basic table facts.
pub fn run_check(shots_csv: &str) -> anyhow::Result<()> {
    let table = load(shots_csv)?;
    println!("ok: {} shot events", table.len());
    let dates: Vec<_> = table.shots().iter().map(|shot| shot.date).collect();
    if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
        println!("dates: {} to {}", first, last);
    }
    println!("seasons: {}", table.seasons().join(", "));
    Ok(())
}

/// List seasons with their row counts.
pub fn run_seasons(shots_csv: &str) -> anyhow::Result<()> {
    let table = load(shots_csv)?;
    for season in table.seasons() {
        let rows = table.filter_season(&season).len();
        println!("{}: {} shot events", season, rows);
    }
    Ok(())
}

/// Print a digest of all eight analyses for one season.
pub fn run_summary(shots_csv: &str, season: Option<&str>, player: &str) -> anyhow::Result<()> {
    let table = load(shots_csv)?;
    let seasons = table.seasons();
    ensure!(!seasons.is_empty(), "no seasons in {}", shots_csv);
    let season = match season {
        Some(label) => {
            ensure!(
                seasons.iter().any(|s| s == label),
                "season {} not in table (have: {})",
                label,
                seasons.join(", ")
            );
            label.to_string()
        }
        None => seasons[0].clone(),
    };
    let shots = table.filter_season(&season);

    println!("season {}: {} shot events", season, shots.len());
    for analysis in Analysis::ALL {
        println!();
        println!("{}", analysis.title(&season));
        match analysis.run(&shots, player) {
            Ok(output) => print_output(&output),
            Err(err) => println!("  error: {}", err),
        }
    }
    Ok(())
}

fn print_output(output: &AnalysisOutput) {
    match output {
        AnalysisOutput::GoalsPerSeason(table) => {
            let total: u32 = table.rows.iter().map(|row| row.goals).sum();
            println!("  {} goals on {} match dates", total, table.rows.len());
        }
        AnalysisOutput::TopTeamsConceding(table) => {
            for row in &table.rows {
                println!("  {}: {}", row.team, row.goals);
            }
        }
        AnalysisOutput::GoalDistributionHomeAway(split) => {
            println!("  home {} / away {}", split.home, split.away);
        }
        AnalysisOutput::TopAssistProviders(table) => {
            for row in &table.rows {
                println!(
                    "  {}: {} (avg xG {:.2})",
                    row.player, row.assists, row.avg_xg
                );
            }
        }
        AnalysisOutput::ShotFootDistribution(split) => {
            println!("  left {} / right {}", split.left, split.right);
        }
        AnalysisOutput::ClutchGoals(clutch) => {
            for bucket in &clutch.buckets {
                println!("  {}-{}: {}", bucket.start, bucket.end, bucket.goals);
            }
            println!("  total: {}", clutch.total);
        }
        AnalysisOutput::ShotMap(map) => {
            println!("  {} shots plotted", map.points.len());
        }
        AnalysisOutput::XgOverTime(series) => {
            let total: f64 = series.points.iter().map(|point| point.xg).sum();
            println!("  {} shots, {:.2} total xG", series.points.len(), total);
        }
    }
}

fn load(shots_csv: &str) -> anyhow::Result<ShotTable> {
    debug!("loading shot table from {}", shots_csv);
    ShotTable::from_path(Path::new(shots_csv))
        .with_context(|| format!("failed to load {}", shots_csv))
}
