//! Pie renderers, drawn as polygon fans on the raw drawing area.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use xgd_understat::analysis::{FootSplit, VenueSplit};

use crate::style::{AWAY_SLICE, CHART_SIZE, HOME_SLICE, LEFT_FOOT_SLICE, RIGHT_FOOT_SLICE};

const PIE_CENTER: (i32, i32) = (300, 290);
const PIE_RADIUS: f64 = 170.0;
const LEGEND_X: i32 = 560;
const LEGEND_Y: i32 = 230;

/// Home/away goal share.
pub fn venue_split_svg(split: &VenueSplit, title: &str) -> Result<String> {
    let slices = [
        ("Home", split.home, HOME_SLICE),
        ("Away", split.away, AWAY_SLICE),
    ];
    two_slice_pie(&slices, split.total(), title)
}

/// Left/right foot shot share.
pub fn foot_split_svg(split: &FootSplit, title: &str) -> Result<String> {
    let slices = [
        ("Left", split.left, LEFT_FOOT_SLICE),
        ("Right", split.right, RIGHT_FOOT_SLICE),
    ];
    two_slice_pie(&slices, split.total(), title)
}

fn two_slice_pie(slices: &[(&str, u32, RGBColor); 2], total: u32, title: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        root.draw_text(
            title,
            &TextStyle::from(("sans-serif", 30).into_font()).color(&BLACK),
            (40, 20),
        )?;
        if total == 0 {
            root.draw_text(
                "No data in this selection.",
                &TextStyle::from(("sans-serif", 20).into_font()).color(&BLACK),
                (PIE_CENTER.0 - 110, PIE_CENTER.1),
            )?;
        } else {
            // Slices start at twelve o'clock and sweep clockwise.
            let mut start_angle = -90.0;
            for (_, value, color) in slices {
                let sweep_angle = f64::from(*value) / f64::from(total) * 360.0;
                pie_slice(&root, PIE_CENTER, PIE_RADIUS, start_angle, sweep_angle, *color)?;
                start_angle += sweep_angle;
            }
            for (index, (label, value, color)) in slices.iter().enumerate() {
                let y = LEGEND_Y + index as i32 * 40;
                root.draw(&Rectangle::new(
                    [(LEGEND_X, y), (LEGEND_X + 20, y + 20)],
                    color.filled(),
                ))?;
                let share = f64::from(*value) / f64::from(total) * 100.0;
                root.draw_text(
                    &format!("{}: {} ({:.1}%)", label, value, share),
                    &TextStyle::from(("sans-serif", 16).into_font()),
                    (LEGEND_X + 30, y + 3),
                )?;
            }
        }
        root.present()?;
    }
    Ok(svg)
}

fn pie_slice(
    root: &DrawingArea<SVGBackend, Shift>,
    center: (i32, i32),
    radius: f64,
    start_angle: f64,
    sweep_angle: f64,
    color: RGBColor,
) -> Result<()> {
    let steps = 100;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start_angle + sweep_angle * i as f64 / steps as f64;
        let rad = angle.to_radians();
        let x = center.0 + (radius * rad.cos()) as i32;
        let y = center.1 + (radius * rad.sin()) as i32;
        points.push((x, y));
    }
    root.draw(&Polygon::new(points, color.filled()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_pie_legend_shares() {
        let split = VenueSplit { home: 3, away: 1 };
        let svg = venue_split_svg(&split, "Goal Distribution: Home vs Away (2020)").unwrap();
        assert!(svg.contains("Home: 3 (75.0%)"));
        assert!(svg.contains("Away: 1 (25.0%)"));
    }

    #[test]
    fn test_foot_pie_legend_shares() {
        let split = FootSplit { left: 6, right: 2 };
        let svg = foot_split_svg(&split, "Shot Distribution by Foot (2020)").unwrap();
        assert!(svg.contains("Left: 6 (75.0%)"));
        assert!(svg.contains("Right: 2 (25.0%)"));
    }

    #[test]
    fn test_empty_split_renders_placeholder() {
        let split = VenueSplit { home: 0, away: 0 };
        let svg = venue_split_svg(&split, "Goal Distribution: Home vs Away (2019)").unwrap();
        assert!(svg.contains("No data in this selection."));
    }
}
