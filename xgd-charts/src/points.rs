//! Scatter and line renderers for per-shot data.

use std::ops::Range;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use xgd_understat::analysis::{ShotMapPoints, XgSeries};
use xgd_understat::shot::ShotResult;

use crate::style::{point_radius, result_color, CHART_SIZE, XG_LINE};

/// Shot scatter in pitch coordinates, one series per outcome.
pub fn shot_map_svg(map: &ShotMapPoints, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            // The y axis runs top-down, matching pitch coordinates.
            .build_cartesian_2d(0f64..1f64, 1f64..0f64)?;
        chart
            .configure_mesh()
            .x_desc("Pitch X")
            .y_desc("Pitch Y")
            .draw()?;
        for result in ShotResult::ALL {
            let color = result_color(result);
            let group: Vec<_> = map
                .points
                .iter()
                .filter(|point| point.result == result)
                .collect();
            if group.is_empty() {
                continue;
            }
            chart
                .draw_series(group.iter().map(|point| {
                    Circle::new((point.x, point.y), point_radius(point.xg), color.filled())
                }))?
                .label(result.label())
                .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }
    Ok(svg)
}

/// Per-shot xG across the season as a marked line over match dates.
pub fn xg_over_time_svg(series: &XgSeries, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        if series.points.is_empty() {
            root.draw_text(
                "No data in this selection.",
                &TextStyle::from(("sans-serif", 20).into_font()).color(&BLACK),
                (CHART_SIZE.0 as i32 / 2 - 110, CHART_SIZE.1 as i32 / 2),
            )?;
        } else {
            let start = series.points[0].date;
            // Pad one day so a single-match series still spans a range.
            let end = series.points[series.points.len() - 1].date + Duration::days(1);
            let date_range = Range { start, end };
            let ranged_date: RangedDate<NaiveDate> = date_range.into();
            let y_max = series
                .points
                .iter()
                .map(|point| point.xg)
                .fold(0.0f64, f64::max);
            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 30))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(ranged_date, 0f64..(y_max * 1.2).max(0.1))?;
            chart
                .configure_mesh()
                .x_labels(10)
                .x_desc("Match Date")
                .y_desc("Expected Goals (xG)")
                .draw()?;
            chart.draw_series(LineSeries::new(
                series.points.iter().map(|point| (point.date, point.xg)),
                XG_LINE.stroke_width(2),
            ))?;
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|point| Circle::new((point.date, point.xg), 3, XG_LINE.filled())),
            )?;
        }
        root.present()?;
    }
    Ok(svg)
}
