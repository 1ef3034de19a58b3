//! Bar and histogram renderers.

use anyhow::Result;
use plotters::prelude::*;
use xgd_understat::analysis::{
    AssistProviders, ClutchBuckets, ConcedingTeams, GoalsByDate, CLUTCH_MINUTE, CLUTCH_RANGE_END,
};

use crate::style::{ASSIST_BAR, CHART_SIZE, CLUTCH_BAR, CONCEDED_BAR, GOAL_BAR};

/// Vertical bars, one per match date with at least one goal.
pub fn goals_per_season_svg(table: &GoalsByDate, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let rows = &table.rows;
        let x_max = rows.len().max(1) as i32;
        let y_max = rows.iter().map(|row| row.goals).max().unwrap_or(0).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..x_max, 0u32..y_max + 1)?;
        chart
            .configure_mesh()
            .x_desc("Match Date")
            .y_desc("Goals")
            .x_labels(rows.len().clamp(1, 12))
            .x_label_formatter(&|index| {
                rows.get(*index as usize)
                    .map(|row| row.date.format("%b %d").to_string())
                    .unwrap_or_default()
            })
            .draw()?;
        for (index, row) in rows.iter().enumerate() {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(index as i32, 0), (index as i32 + 1, row.goals)],
                GOAL_BAR.filled(),
            )))?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Horizontal bars of goals conceded, biggest victim on top.
pub fn conceding_teams_svg(table: &ConcedingTeams, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let rows = &table.rows;
        let count = rows.len().max(1);
        let x_max = rows.iter().map(|row| row.goals).max().unwrap_or(0).max(1) as f64 * 1.2;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(160)
            .build_cartesian_2d(0f64..x_max, 0usize..count)?;
        chart
            .configure_mesh()
            .x_desc("Goals Scored")
            .y_desc("Team")
            .y_labels(count)
            .y_label_formatter(&|tick| {
                rows.len()
                    .checked_sub(*tick)
                    .and_then(|index| rows.get(index))
                    .map(|row| row.team.clone())
                    .unwrap_or_default()
            })
            .draw()?;
        for (index, row) in rows.iter().enumerate() {
            // Row zero carries the highest count and sits at the top.
            let top = rows.len() - index;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, top), (row.goals as f64, top - 1)],
                CONCEDED_BAR.filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{}", row.goals),
                (row.goals as f64 + x_max * 0.01, top),
                ("sans-serif", 14),
            )))?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Horizontal bars of assist counts, annotated with the mean xG assisted.
pub fn assist_providers_svg(table: &AssistProviders, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let rows = &table.rows;
        let count = rows.len().max(1);
        let x_max = rows.iter().map(|row| row.assists).max().unwrap_or(0).max(1) as f64 * 1.3;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(160)
            .build_cartesian_2d(0f64..x_max, 0usize..count)?;
        chart
            .configure_mesh()
            .x_desc("Number of Assists")
            .y_desc("Player Assisted")
            .y_labels(count)
            .y_label_formatter(&|tick| {
                rows.len()
                    .checked_sub(*tick)
                    .and_then(|index| rows.get(index))
                    .map(|row| row.player.clone())
                    .unwrap_or_default()
            })
            .draw()?;
        for (index, row) in rows.iter().enumerate() {
            let top = rows.len() - index;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, top), (row.assists as f64, top - 1)],
                ASSIST_BAR.filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{} (avg xG {:.2})", row.assists, row.avg_xg),
                (row.assists as f64 + x_max * 0.01, top),
                ("sans-serif", 14),
            )))?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Late-goal histogram over five-minute windows, with the season total overlaid.
pub fn clutch_goals_svg(clutch: &ClutchBuckets, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let y_max = clutch
            .buckets
            .iter()
            .map(|bucket| bucket.goals)
            .max()
            .unwrap_or(0)
            .max(1)
            + 1;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(CLUTCH_MINUTE..CLUTCH_RANGE_END, 0u32..y_max)?;
        chart
            .configure_mesh()
            .x_desc("Minute")
            .y_desc("Number of Goals")
            .x_labels(clutch.buckets.len() + 1)
            .draw()?;
        for bucket in &clutch.buckets {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(bucket.start, 0), (bucket.end, bucket.goals)],
                CLUTCH_BAR.filled(),
            )))?;
        }
        chart.draw_series(std::iter::once(Text::new(
            format!("Total Clutch Goals: {}", clutch.total),
            (CLUTCH_MINUTE + 7, y_max),
            ("sans-serif", 18),
        )))?;
        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use xgd_understat::analysis::{AssistStat, DateGoals, MinuteBucket, TeamGoals};

    #[test]
    fn test_goals_chart_carries_title_and_bars() {
        let table = GoalsByDate {
            rows: vec![
                DateGoals {
                    date: NaiveDate::from_ymd_opt(2020, 9, 12).unwrap(),
                    goals: 2,
                },
                DateGoals {
                    date: NaiveDate::from_ymd_opt(2020, 10, 17).unwrap(),
                    goals: 1,
                },
            ],
        };
        let svg = goals_per_season_svg(&table, "Goals in 2020").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Goals in 2020"));
    }

    #[test]
    fn test_goals_chart_handles_no_rows() {
        let table = GoalsByDate { rows: vec![] };
        let svg = goals_per_season_svg(&table, "Goals in 2019").unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_conceding_chart_lists_teams() {
        let table = ConcedingTeams {
            rows: vec![
                TeamGoals {
                    team: "Leeds United".to_string(),
                    goals: 3,
                },
                TeamGoals {
                    team: "Everton".to_string(),
                    goals: 1,
                },
            ],
        };
        let svg = conceding_teams_svg(&table, "Top Teams Conceding Goals (2020)").unwrap();
        assert!(svg.contains("Leeds United"));
        assert!(svg.contains("Everton"));
    }

    #[test]
    fn test_assist_chart_annotates_avg_xg() {
        let table = AssistProviders {
            rows: vec![AssistStat {
                player: "Sadio Mane".to_string(),
                assists: 4,
                avg_xg: 0.275,
            }],
        };
        let svg = assist_providers_svg(&table, "Top Assist Providers (2020)").unwrap();
        assert!(svg.contains("Sadio Mane"));
        assert!(svg.contains("avg xG 0.28"));
    }

    #[test]
    fn test_clutch_chart_overlays_total() {
        let clutch = ClutchBuckets {
            buckets: vec![
                MinuteBucket {
                    start: 75,
                    end: 80,
                    goals: 1,
                },
                MinuteBucket {
                    start: 80,
                    end: 85,
                    goals: 0,
                },
                MinuteBucket {
                    start: 85,
                    end: 90,
                    goals: 2,
                },
            ],
            total: 3,
        };
        let svg = clutch_goals_svg(&clutch, "Clutch Goals After 75th Minute (2020)").unwrap();
        assert!(svg.contains("Total Clutch Goals: 3"));
    }
}
