//! Shared visual vocabulary: the palette plus chart and marker sizing.

use plotters::style::RGBColor;
use xgd_understat::shot::ShotResult;

/// Pixel size of every rendered chart.
pub const CHART_SIZE: (u32, u32) = (860, 520);

/// Goals-by-date bars, steel blue (#4682B4).
pub const GOAL_BAR: RGBColor = RGBColor(70, 130, 180);
/// Conceding-teams bars (#B73779).
pub const CONCEDED_BAR: RGBColor = RGBColor(183, 55, 121);
/// Assist-provider bars (#3E72B2).
pub const ASSIST_BAR: RGBColor = RGBColor(62, 114, 178);
/// Home slice of the venue pie (#66B3FF).
pub const HOME_SLICE: RGBColor = RGBColor(102, 179, 255);
/// Away slice of the venue pie (#FF9999).
pub const AWAY_SLICE: RGBColor = RGBColor(255, 153, 153);
/// Left-foot slice (#FF7F0E).
pub const LEFT_FOOT_SLICE: RGBColor = RGBColor(255, 127, 14);
/// Right-foot slice (#1F77B4).
pub const RIGHT_FOOT_SLICE: RGBColor = RGBColor(31, 119, 180);
/// Clutch-goal histogram bars (#E63946).
pub const CLUTCH_BAR: RGBColor = RGBColor(230, 57, 70);
/// xG line, royal blue (#4169E1).
pub const XG_LINE: RGBColor = RGBColor(65, 105, 225);

const GOAL_GREEN: RGBColor = RGBColor(0, 128, 0);
const MISS_RED: RGBColor = RGBColor(255, 0, 0);
const BLOCK_ORANGE: RGBColor = RGBColor(255, 165, 0);
const SAVE_BLUE: RGBColor = RGBColor(0, 0, 255);
const NEUTRAL_GRAY: RGBColor = RGBColor(128, 128, 128);

/// Marker color for a shot outcome on the shot map.
pub fn result_color(result: ShotResult) -> RGBColor {
    match result {
        ShotResult::Goal => GOAL_GREEN,
        ShotResult::MissedShots => MISS_RED,
        ShotResult::BlockedShot => BLOCK_ORANGE,
        ShotResult::SavedShot => SAVE_BLUE,
        ShotResult::ShotOnPost | ShotResult::OwnGoal => NEUTRAL_GRAY,
    }
}

/// Marker radius scaled by chance quality.
pub fn point_radius(xg: f64) -> i32 {
    (2.0 + xg * 14.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_radius_grows_with_xg() {
        assert!(point_radius(0.05) < point_radius(0.76));
        assert!(point_radius(0.0) >= 2);
    }

    #[test]
    fn test_result_colors_distinguish_main_outcomes() {
        let goal = result_color(ShotResult::Goal);
        let miss = result_color(ShotResult::MissedShots);
        let save = result_color(ShotResult::SavedShot);
        assert_ne!(goal, miss);
        assert_ne!(goal, save);
        assert_ne!(miss, save);
    }
}
