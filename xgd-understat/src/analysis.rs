//! The eight canned analyses: aggregation pipelines and their derived tables.
//!
//! Every pipeline is a pure function from a season-filtered slice of shot
//! events to a small typed summary. [`Analysis`] enumerates the catalog and
//! dispatches through one exhaustive match, so adding an analysis without
//! wiring its pipeline and chart is a compile error.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::error::AnalysisError;
use crate::shot::{Foot, ShotEvent, ShotResult, Venue};

/// Minute after which a goal counts as clutch.
pub const CLUTCH_MINUTE: u32 = 75;
/// Upper edge of the clutch histogram range, in minutes.
pub const CLUTCH_RANGE_END: u32 = 90;
/// Width of one clutch histogram bucket, in minutes.
pub const CLUTCH_BUCKET_MINUTES: u32 = 5;
/// Row cap for the top-N aggregations.
pub const TOP_LIMIT: usize = 10;

/// The eight canned analyses offered by the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Analysis {
    GoalsPerSeason,
    TopTeamsConceding,
    GoalDistributionHomeAway,
    TopAssistProviders,
    ShotFootDistribution,
    ClutchGoals,
    ShotMap,
    XgOverTime,
}

impl Analysis {
    /// All analyses, in display order.
    pub const ALL: [Analysis; 8] = [
        Analysis::GoalsPerSeason,
        Analysis::TopTeamsConceding,
        Analysis::GoalDistributionHomeAway,
        Analysis::TopAssistProviders,
        Analysis::ShotFootDistribution,
        Analysis::ClutchGoals,
        Analysis::ShotMap,
        Analysis::XgOverTime,
    ];

    /// Selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Analysis::GoalsPerSeason => "Goals per Season",
            Analysis::TopTeamsConceding => "Top Teams Conceding Goals",
            Analysis::GoalDistributionHomeAway => "Goal Distribution (Home vs Away)",
            Analysis::TopAssistProviders => "Top Assist Providers",
            Analysis::ShotFootDistribution => "Shot Foot Distribution",
            Analysis::ClutchGoals => "Clutch Goals (Last-Minute Goals)",
            Analysis::ShotMap => "Shot Map",
            Analysis::XgOverTime => "xG Over Time",
        }
    }

    /// Chart title for the selected season.
    pub fn title(&self, season: &str) -> String {
        match self {
            Analysis::GoalsPerSeason => format!("Goals in {}", season),
            Analysis::TopTeamsConceding => {
                format!("Top Teams Conceding Goals ({})", season)
            }
            Analysis::GoalDistributionHomeAway => {
                format!("Goal Distribution: Home vs Away ({})", season)
            }
            Analysis::TopAssistProviders => format!("Top Assist Providers ({})", season),
            Analysis::ShotFootDistribution => {
                format!("Shot Distribution by Foot ({})", season)
            }
            Analysis::ClutchGoals => {
                format!("Clutch Goals After 75th Minute ({})", season)
            }
            Analysis::ShotMap => format!("Shot Map ({})", season),
            Analysis::XgOverTime => {
                format!("Expected Goals (xG) Over Time ({})", season)
            }
        }
    }

    /// Narrative caption shown under the chart.
    pub fn caption(&self) -> &'static str {
        match self {
            Analysis::GoalsPerSeason => {
                "Goals scored on each match date of the selected season. \
                 A quick read on scoring consistency across the campaign."
            }
            Analysis::TopTeamsConceding => {
                "The teams that conceded the most goals to the player in the \
                 selected season, most vulnerable first."
            }
            Analysis::GoalDistributionHomeAway => {
                "How the player's goals split between home and away fixtures."
            }
            Analysis::TopAssistProviders => {
                "The teammates who set up the player's shots most often, with \
                 the average quality (xG) of the chances they created."
            }
            Analysis::ShotFootDistribution => {
                "How the player's shots split between the left and the right foot."
            }
            Analysis::ClutchGoals => {
                "Goals scored after the 75th minute, grouped in five-minute \
                 windows. A measure of late-game contribution."
            }
            Analysis::ShotMap => {
                "Every shot by pitch location. Marker size reflects chance \
                 quality (xG), color the outcome."
            }
            Analysis::XgOverTime => {
                "Per-shot expected goals across the season, in match order. \
                 Peaks are big chances; the trend shows how often the player \
                 reached good positions."
            }
        }
    }

    /// Run this analysis over a season-filtered table.
    pub fn run(&self, shots: &[ShotEvent], player: &str) -> Result<AnalysisOutput, AnalysisError> {
        match self {
            Analysis::GoalsPerSeason => Ok(AnalysisOutput::GoalsPerSeason(goals_per_season(shots))),
            Analysis::TopTeamsConceding => {
                Ok(AnalysisOutput::TopTeamsConceding(top_teams_conceding(shots)))
            }
            Analysis::GoalDistributionHomeAway => Ok(AnalysisOutput::GoalDistributionHomeAway(
                goal_distribution_home_away(shots, player),
            )),
            Analysis::TopAssistProviders => {
                Ok(AnalysisOutput::TopAssistProviders(top_assist_providers(shots)))
            }
            Analysis::ShotFootDistribution => Ok(AnalysisOutput::ShotFootDistribution(
                shot_foot_distribution(shots, player)?,
            )),
            Analysis::ClutchGoals => Ok(AnalysisOutput::ClutchGoals(clutch_goals(shots))),
            Analysis::ShotMap => Ok(AnalysisOutput::ShotMap(shot_map(shots, player))),
            Analysis::XgOverTime => Ok(AnalysisOutput::XgOverTime(xg_over_time(shots, player))),
        }
    }
}

/// Tagged result of running one analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutput {
    GoalsPerSeason(GoalsByDate),
    TopTeamsConceding(ConcedingTeams),
    GoalDistributionHomeAway(VenueSplit),
    TopAssistProviders(AssistProviders),
    ShotFootDistribution(FootSplit),
    ClutchGoals(ClutchBuckets),
    ShotMap(ShotMapPoints),
    XgOverTime(XgSeries),
}

impl AnalysisOutput {
    /// The analysis this output came from.
    pub fn analysis(&self) -> Analysis {
        match self {
            AnalysisOutput::GoalsPerSeason(_) => Analysis::GoalsPerSeason,
            AnalysisOutput::TopTeamsConceding(_) => Analysis::TopTeamsConceding,
            AnalysisOutput::GoalDistributionHomeAway(_) => Analysis::GoalDistributionHomeAway,
            AnalysisOutput::TopAssistProviders(_) => Analysis::TopAssistProviders,
            AnalysisOutput::ShotFootDistribution(_) => Analysis::ShotFootDistribution,
            AnalysisOutput::ClutchGoals(_) => Analysis::ClutchGoals,
            AnalysisOutput::ShotMap(_) => Analysis::ShotMap,
            AnalysisOutput::XgOverTime(_) => Analysis::XgOverTime,
        }
    }

    /// Whether the underlying derived table has no rows.
    pub fn is_empty(&self) -> bool {
        match self {
            AnalysisOutput::GoalsPerSeason(table) => table.rows.is_empty(),
            AnalysisOutput::TopTeamsConceding(table) => table.rows.is_empty(),
            AnalysisOutput::GoalDistributionHomeAway(split) => split.total() == 0,
            AnalysisOutput::TopAssistProviders(table) => table.rows.is_empty(),
            AnalysisOutput::ShotFootDistribution(split) => split.total() == 0,
            AnalysisOutput::ClutchGoals(buckets) => buckets.total == 0,
            AnalysisOutput::ShotMap(map) => map.points.is_empty(),
            AnalysisOutput::XgOverTime(series) => series.points.is_empty(),
        }
    }
}

/// Goals per match date, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalsByDate {
    pub rows: Vec<DateGoals>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateGoals {
    pub date: NaiveDate,
    pub goals: u32,
}

/// Opposing teams ranked by goals conceded, capped at [`TOP_LIMIT`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConcedingTeams {
    pub rows: Vec<TeamGoals>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamGoals {
    pub team: String,
    pub goals: u32,
}

/// Home/away split of the target player's goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueSplit {
    pub home: u32,
    pub away: u32,
}

impl VenueSplit {
    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

/// Assist providers ranked by assist count, capped at [`TOP_LIMIT`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssistProviders {
    pub rows: Vec<AssistStat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistStat {
    pub player: String,
    pub assists: u32,
    /// Mean xG of the shots this player assisted.
    pub avg_xg: f64,
}

/// Left/right split of the target player's foot shots, fixed {Left, Right} order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootSplit {
    pub left: u32,
    pub right: u32,
}

impl FootSplit {
    pub fn total(&self) -> u32 {
        self.left + self.right
    }
}

/// Clutch goals in five-minute buckets, ascending, plus the season total.
#[derive(Debug, Clone, PartialEq)]
pub struct ClutchBuckets {
    pub buckets: Vec<MinuteBucket>,
    pub total: u32,
}

/// One `[start, end)` histogram bucket; the final bucket also absorbs
/// stoppage-time minutes past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteBucket {
    pub start: u32,
    pub end: u32,
    pub goals: u32,
}

/// Raw per-shot scatter input for the shot map.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotMapPoints {
    pub points: Vec<ShotPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPoint {
    pub x: f64,
    pub y: f64,
    pub result: ShotResult,
    pub xg: f64,
}

/// Per-shot xG for the target player, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct XgSeries {
    pub points: Vec<XgPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XgPoint {
    pub date: NaiveDate,
    pub xg: f64,
}

/// Goals per match date, ascending.
pub fn goals_per_season(shots: &[ShotEvent]) -> GoalsByDate {
    let mut by_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for shot in shots {
        if shot.result == ShotResult::Goal {
            *by_date.entry(shot.date).or_insert(0) += 1;
        }
    }
    GoalsByDate {
        rows: by_date
            .into_iter()
            .map(|(date, goals)| DateGoals { date, goals })
            .collect(),
    }
}

/// Opposing teams by goals conceded, descending, capped at [`TOP_LIMIT`].
pub fn top_teams_conceding(shots: &[ShotEvent]) -> ConcedingTeams {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();
    for shot in shots {
        if shot.result != ShotResult::Goal {
            continue;
        }
        let team = shot.opposing_team();
        if !counts.contains_key(team) {
            order.push(team.to_string());
        }
        *counts.entry(team.to_string()).or_insert(0) += 1;
    }
    let mut rows: Vec<TeamGoals> = order
        .into_iter()
        .map(|team| {
            let goals = counts[&team];
            TeamGoals { team, goals }
        })
        .collect();
    // Stable sort: ties keep first-appearance order.
    rows.sort_by(|a, b| b.goals.cmp(&a.goals));
    rows.truncate(TOP_LIMIT);
    ConcedingTeams { rows }
}

/// Home/away split of the target player's goals.
pub fn goal_distribution_home_away(shots: &[ShotEvent], player: &str) -> VenueSplit {
    let mut split = VenueSplit { home: 0, away: 0 };
    for shot in shots {
        if shot.player != player || shot.result != ShotResult::Goal {
            continue;
        }
        match shot.venue {
            Venue::Home => split.home += 1,
            Venue::Away => split.away += 1,
        }
    }
    split
}

/// Assist providers by assist count, descending, capped at [`TOP_LIMIT`].
///
/// Unassisted shots carry no provider and are excluded.
pub fn top_assist_providers(shots: &[ShotEvent]) -> AssistProviders {
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, (u32, f64)> = HashMap::new();
    for shot in shots {
        let assister = match shot.player_assisted.as_deref() {
            Some(name) => name,
            None => continue,
        };
        if !tallies.contains_key(assister) {
            order.push(assister.to_string());
        }
        let tally = tallies.entry(assister.to_string()).or_insert((0, 0.0));
        tally.0 += 1;
        tally.1 += shot.xg;
    }
    let mut rows: Vec<AssistStat> = order
        .into_iter()
        .map(|player| {
            let (assists, xg_sum) = tallies[&player];
            AssistStat {
                player,
                assists,
                avg_xg: xg_sum / f64::from(assists),
            }
        })
        .collect();
    // Stable sort: ties keep first-appearance order.
    rows.sort_by(|a, b| b.assists.cmp(&a.assists));
    rows.truncate(TOP_LIMIT);
    AssistProviders { rows }
}

/// Left/right foot split for the target player's shots.
///
/// A table with no rows for the player is the empty-result case and returns a
/// zero split; a non-empty one missing either foot category is an error.
pub fn shot_foot_distribution(
    shots: &[ShotEvent],
    player: &str,
) -> Result<FootSplit, AnalysisError> {
    let mut split = FootSplit { left: 0, right: 0 };
    let mut player_rows = 0usize;
    for shot in shots {
        if shot.player != player {
            continue;
        }
        player_rows += 1;
        match shot.body_part.foot() {
            Some(Foot::Left) => split.left += 1,
            Some(Foot::Right) => split.right += 1,
            None => {}
        }
    }
    if player_rows == 0 {
        return Ok(split);
    }
    if split.left == 0 {
        return Err(AnalysisError::MissingFootCategory(Foot::Left));
    }
    if split.right == 0 {
        return Err(AnalysisError::MissingFootCategory(Foot::Right));
    }
    Ok(split)
}

/// Clutch goals bucketed by five-minute windows after [`CLUTCH_MINUTE`].
///
/// Minutes past [`CLUTCH_RANGE_END`] land in the final bucket, so the bucket
/// counts always sum to `total`.
pub fn clutch_goals(shots: &[ShotEvent]) -> ClutchBuckets {
    let bucket_count = ((CLUTCH_RANGE_END - CLUTCH_MINUTE) / CLUTCH_BUCKET_MINUTES) as usize;
    let mut buckets: Vec<MinuteBucket> = (0..bucket_count as u32)
        .map(|i| MinuteBucket {
            start: CLUTCH_MINUTE + i * CLUTCH_BUCKET_MINUTES,
            end: CLUTCH_MINUTE + (i + 1) * CLUTCH_BUCKET_MINUTES,
            goals: 0,
        })
        .collect();
    let mut total = 0;
    for shot in shots {
        if shot.result != ShotResult::Goal || shot.minute <= CLUTCH_MINUTE {
            continue;
        }
        let index = (((shot.minute - CLUTCH_MINUTE) / CLUTCH_BUCKET_MINUTES) as usize)
            .min(bucket_count - 1);
        buckets[index].goals += 1;
        total += 1;
    }
    ClutchBuckets { buckets, total }
}

/// Raw scatter input for the target player's shot map, in row order.
pub fn shot_map(shots: &[ShotEvent], player: &str) -> ShotMapPoints {
    let points = shots
        .iter()
        .filter(|shot| shot.player == player)
        .map(|shot| ShotPoint {
            x: shot.x,
            y: shot.y,
            result: shot.result,
            xg: shot.xg,
        })
        .collect();
    ShotMapPoints { points }
}

/// Per-shot xG for the target player, ascending by date.
pub fn xg_over_time(shots: &[ShotEvent], player: &str) -> XgSeries {
    let mut points: Vec<XgPoint> = shots
        .iter()
        .filter(|shot| shot.player == player)
        .map(|shot| XgPoint {
            date: shot.date,
            xg: shot.xg,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    XgSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::BodyPart;

    const PLAYER: &str = "Mohamed Salah";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 10, d).unwrap()
    }

    fn base_shot() -> ShotEvent {
        ShotEvent {
            season: "2020".to_string(),
            date: day(1),
            result: ShotResult::Goal,
            player: PLAYER.to_string(),
            player_assisted: None,
            h_team: "Liverpool".to_string(),
            a_team: "Everton".to_string(),
            venue: Venue::Home,
            minute: 30,
            xg: 0.3,
            body_part: BodyPart::RightFoot,
            x: 0.85,
            y: 0.5,
        }
    }

    fn goal_on(date: NaiveDate) -> ShotEvent {
        ShotEvent {
            date,
            ..base_shot()
        }
    }

    #[test]
    fn test_goals_per_season_groups_by_date_ascending() {
        let shots = vec![
            goal_on(day(17)),
            goal_on(day(3)),
            ShotEvent {
                result: ShotResult::SavedShot,
                date: day(3),
                ..base_shot()
            },
            goal_on(day(3)),
        ];
        let table = goals_per_season(&shots);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].date, day(3));
        assert_eq!(table.rows[0].goals, 2);
        assert_eq!(table.rows[1].date, day(17));
        assert_eq!(table.rows[1].goals, 1);
    }

    #[test]
    fn test_top_teams_conceding_uses_opponent_for_venue() {
        let shots = vec![
            // Home: the opponent is the away team.
            ShotEvent {
                a_team: "Arsenal".to_string(),
                venue: Venue::Home,
                ..base_shot()
            },
            // Away: the opponent is the home team.
            ShotEvent {
                h_team: "Chelsea".to_string(),
                venue: Venue::Away,
                ..base_shot()
            },
            ShotEvent {
                a_team: "Arsenal".to_string(),
                venue: Venue::Home,
                ..base_shot()
            },
        ];
        let table = top_teams_conceding(&shots);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].team, "Arsenal");
        assert_eq!(table.rows[0].goals, 2);
        assert_eq!(table.rows[1].team, "Chelsea");
        assert_eq!(table.rows[1].goals, 1);
    }

    #[test]
    fn test_top_teams_capped_with_stable_ties() {
        let mut shots = Vec::new();
        for i in 0..12 {
            shots.push(ShotEvent {
                a_team: format!("Team {:02}", i),
                ..base_shot()
            });
        }
        let table = top_teams_conceding(&shots);
        assert_eq!(table.rows.len(), TOP_LIMIT);
        // All tied at one goal: first appearance wins.
        assert_eq!(table.rows[0].team, "Team 00");
        assert_eq!(table.rows[9].team, "Team 09");
        assert!(table
            .rows
            .windows(2)
            .all(|pair| pair[0].goals >= pair[1].goals));
    }

    #[test]
    fn test_goal_distribution_filters_player_and_result() {
        let shots = vec![
            base_shot(),
            ShotEvent {
                venue: Venue::Away,
                ..base_shot()
            },
            ShotEvent {
                result: ShotResult::MissedShots,
                ..base_shot()
            },
            ShotEvent {
                player: "Diogo Jota".to_string(),
                ..base_shot()
            },
        ];
        let split = goal_distribution_home_away(&shots, PLAYER);
        assert_eq!(split.home, 1);
        assert_eq!(split.away, 1);
        assert_eq!(split.total(), 2);
    }

    #[test]
    fn test_assists_exclude_unassisted_rows() {
        let shots = vec![
            ShotEvent {
                player_assisted: Some("A".to_string()),
                xg: 0.2,
                ..base_shot()
            },
            ShotEvent {
                player_assisted: Some("A".to_string()),
                xg: 0.4,
                ..base_shot()
            },
            ShotEvent {
                player_assisted: None,
                ..base_shot()
            },
        ];
        let table = top_assist_providers(&shots);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].player, "A");
        assert_eq!(table.rows[0].assists, 2);
        assert!((table.rows[0].avg_xg - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_assists_rank_descending() {
        let shots = vec![
            ShotEvent {
                player_assisted: Some("B".to_string()),
                ..base_shot()
            },
            ShotEvent {
                player_assisted: Some("C".to_string()),
                ..base_shot()
            },
            ShotEvent {
                player_assisted: Some("C".to_string()),
                ..base_shot()
            },
        ];
        let table = top_assist_providers(&shots);
        assert_eq!(table.rows[0].player, "C");
        assert_eq!(table.rows[1].player, "B");
    }

    #[test]
    fn test_foot_split_counts_both_feet() {
        let shots = vec![
            ShotEvent {
                body_part: BodyPart::LeftFoot,
                ..base_shot()
            },
            ShotEvent {
                body_part: BodyPart::LeftFoot,
                ..base_shot()
            },
            ShotEvent {
                body_part: BodyPart::RightFoot,
                ..base_shot()
            },
            // Headers count toward neither foot.
            ShotEvent {
                body_part: BodyPart::Head,
                ..base_shot()
            },
        ];
        let split = shot_foot_distribution(&shots, PLAYER).unwrap();
        assert_eq!(split.left, 2);
        assert_eq!(split.right, 1);
    }

    #[test]
    fn test_foot_split_missing_category_is_an_error() {
        let left_only = vec![ShotEvent {
            body_part: BodyPart::LeftFoot,
            ..base_shot()
        }];
        assert_eq!(
            shot_foot_distribution(&left_only, PLAYER),
            Err(AnalysisError::MissingFootCategory(Foot::Right))
        );

        let headers_only = vec![ShotEvent {
            body_part: BodyPart::Head,
            ..base_shot()
        }];
        assert_eq!(
            shot_foot_distribution(&headers_only, PLAYER),
            Err(AnalysisError::MissingFootCategory(Foot::Left))
        );
    }

    #[test]
    fn test_foot_split_no_player_rows_is_empty_not_error() {
        let shots = vec![ShotEvent {
            player: "Diogo Jota".to_string(),
            ..base_shot()
        }];
        let split = shot_foot_distribution(&shots, PLAYER).unwrap();
        assert_eq!(split.total(), 0);
    }

    #[test]
    fn test_clutch_goals_scenario() {
        let shots = vec![
            ShotEvent {
                minute: 80,
                ..base_shot()
            },
            ShotEvent {
                minute: 44,
                ..base_shot()
            },
        ];
        let clutch = clutch_goals(&shots);
        assert_eq!(clutch.total, 1);
        assert_eq!(clutch.buckets.len(), 3);
        assert_eq!(clutch.buckets[1].start, 80);
        assert_eq!(clutch.buckets[1].goals, 1);
        assert_eq!(clutch.buckets[0].goals, 0);
        assert_eq!(clutch.buckets[2].goals, 0);
    }

    #[test]
    fn test_clutch_bucket_sums_match_total() {
        let shots = vec![
            ShotEvent {
                minute: 76,
                ..base_shot()
            },
            ShotEvent {
                minute: 84,
                ..base_shot()
            },
            ShotEvent {
                minute: 89,
                ..base_shot()
            },
            // Stoppage time folds into the final bucket.
            ShotEvent {
                minute: 93,
                ..base_shot()
            },
            // Exactly 75 is not clutch.
            ShotEvent {
                minute: 75,
                ..base_shot()
            },
            // Non-goals never count.
            ShotEvent {
                minute: 88,
                result: ShotResult::BlockedShot,
                ..base_shot()
            },
        ];
        let clutch = clutch_goals(&shots);
        assert_eq!(clutch.total, 4);
        let bucket_sum: u32 = clutch.buckets.iter().map(|b| b.goals).sum();
        assert_eq!(bucket_sum, clutch.total);
        assert_eq!(clutch.buckets[0].goals, 1);
        assert_eq!(clutch.buckets[1].goals, 1);
        assert_eq!(clutch.buckets[2].goals, 2);
    }

    #[test]
    fn test_shot_map_keeps_player_rows_in_order() {
        let shots = vec![
            ShotEvent {
                x: 0.7,
                xg: 0.1,
                ..base_shot()
            },
            ShotEvent {
                player: "Diogo Jota".to_string(),
                ..base_shot()
            },
            ShotEvent {
                x: 0.9,
                xg: 0.6,
                result: ShotResult::SavedShot,
                ..base_shot()
            },
        ];
        let map = shot_map(&shots, PLAYER);
        assert_eq!(map.points.len(), 2);
        assert_eq!(map.points[0].x, 0.7);
        assert_eq!(map.points[1].result, ShotResult::SavedShot);
    }

    #[test]
    fn test_xg_over_time_sorts_by_date() {
        let shots = vec![
            ShotEvent {
                date: day(20),
                xg: 0.5,
                ..base_shot()
            },
            ShotEvent {
                date: day(2),
                xg: 0.1,
                ..base_shot()
            },
        ];
        let series = xg_over_time(&shots, PLAYER);
        assert_eq!(series.points[0].date, day(2));
        assert_eq!(series.points[1].date, day(20));
    }

    #[test]
    fn test_every_analysis_handles_an_empty_table() {
        for analysis in Analysis::ALL {
            let output = analysis.run(&[], PLAYER).unwrap();
            assert!(output.is_empty(), "{:?} not empty", analysis);
            assert_eq!(output.analysis(), analysis);
        }
    }

    #[test]
    fn test_run_dispatch_propagates_foot_error() {
        let shots = vec![ShotEvent {
            body_part: BodyPart::LeftFoot,
            ..base_shot()
        }];
        let err = Analysis::ShotFootDistribution.run(&shots, PLAYER).unwrap_err();
        assert_eq!(err, AnalysisError::MissingFootCategory(Foot::Right));
    }
}
