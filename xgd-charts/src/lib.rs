//! SVG chart rendering for the shot dashboard.
//!
//! Every analysis output has exactly one renderer. Charts are drawn with
//! plotters into an in-memory SVG string, so the UI layer can inject them
//! straight into the page.

pub mod bars;
pub mod pies;
pub mod points;
pub mod style;

use anyhow::Result;
use xgd_understat::AnalysisOutput;

/// Render the chart for one analysis output, titled for the selected season.
pub fn render(output: &AnalysisOutput, season: &str) -> Result<String> {
    let title = output.analysis().title(season);
    match output {
        AnalysisOutput::GoalsPerSeason(table) => bars::goals_per_season_svg(table, &title),
        AnalysisOutput::TopTeamsConceding(table) => bars::conceding_teams_svg(table, &title),
        AnalysisOutput::GoalDistributionHomeAway(split) => pies::venue_split_svg(split, &title),
        AnalysisOutput::TopAssistProviders(table) => bars::assist_providers_svg(table, &title),
        AnalysisOutput::ShotFootDistribution(split) => pies::foot_split_svg(split, &title),
        AnalysisOutput::ClutchGoals(clutch) => bars::clutch_goals_svg(clutch, &title),
        AnalysisOutput::ShotMap(map) => points::shot_map_svg(map, &title),
        AnalysisOutput::XgOverTime(series) => points::xg_over_time_svg(series, &title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xgd_understat::Analysis;

    #[test]
    fn test_render_covers_every_analysis_on_empty_input() {
        for analysis in Analysis::ALL {
            let output = analysis.run(&[], "Mohamed Salah").unwrap();
            let svg = render(&output, "2020").unwrap();
            assert!(svg.contains("<svg"), "{:?} missing svg root", analysis);
        }
    }

    #[test]
    fn test_render_titles_carry_the_season() {
        let output = Analysis::GoalsPerSeason.run(&[], "Mohamed Salah").unwrap();
        let svg = render(&output, "2021").unwrap();
        assert!(svg.contains("Goals in 2021"));
    }
}
