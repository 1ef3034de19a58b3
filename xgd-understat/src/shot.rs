//! Typed shot-event records and CSV parsing.
//!
//! One [`ShotEvent`] is one row of the source table, using the Understat
//! column vocabulary (`result`, `shotType`, `h_a`, `xG`, `X`, `Y`). Rows are
//! deserialized by header name, so column order in the file is immaterial.

use csv::ReaderBuilder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;

/// Column names of the source table, in fixture order.
pub const CSV_COLUMNS: [&str; 13] = [
    "season",
    "date",
    "result",
    "player",
    "player_assisted",
    "h_team",
    "a_team",
    "h_a",
    "minute",
    "xG",
    "shotType",
    "X",
    "Y",
];

/// Outcome of a shot, as recorded by the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotResult {
    Goal,
    OwnGoal,
    MissedShots,
    BlockedShot,
    SavedShot,
    ShotOnPost,
}

impl ShotResult {
    /// All outcomes, in legend order.
    pub const ALL: [ShotResult; 6] = [
        ShotResult::Goal,
        ShotResult::MissedShots,
        ShotResult::BlockedShot,
        ShotResult::SavedShot,
        ShotResult::ShotOnPost,
        ShotResult::OwnGoal,
    ];

    /// Human-readable outcome name.
    pub fn label(&self) -> &'static str {
        match self {
            ShotResult::Goal => "Goal",
            ShotResult::OwnGoal => "Own goal",
            ShotResult::MissedShots => "Missed",
            ShotResult::BlockedShot => "Blocked",
            ShotResult::SavedShot => "Saved",
            ShotResult::ShotOnPost => "On post",
        }
    }
}

/// Whether the subject team played at home or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    #[serde(rename = "h")]
    Home,
    #[serde(rename = "a")]
    Away,
}

impl Venue {
    pub fn label(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

/// Body part a shot was taken with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    LeftFoot,
    RightFoot,
    Head,
    OtherBodyPart,
}

impl BodyPart {
    /// The foot category, for the "Foot"-suffixed variants.
    pub fn foot(&self) -> Option<Foot> {
        match self {
            BodyPart::LeftFoot => Some(Foot::Left),
            BodyPart::RightFoot => Some(Foot::Right),
            BodyPart::Head | BodyPart::OtherBodyPart => None,
        }
    }
}

/// Foot category derived from [`BodyPart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foot {
    Left,
    Right,
}

impl Foot {
    pub fn label(&self) -> &'static str {
        match self {
            Foot::Left => "Left",
            Foot::Right => "Right",
        }
    }
}

/// One row of the shot-event table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub season: String,
    pub date: NaiveDate,
    pub result: ShotResult,
    pub player: String,
    /// None for unassisted shots (empty CSV field).
    pub player_assisted: Option<String>,
    pub h_team: String,
    pub a_team: String,
    #[serde(rename = "h_a")]
    pub venue: Venue,
    pub minute: u32,
    #[serde(rename = "xG")]
    pub xg: f64,
    #[serde(rename = "shotType")]
    pub body_part: BodyPart,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

impl ShotEvent {
    /// Team the shot was taken against.
    pub fn opposing_team(&self) -> &str {
        match self.venue {
            Venue::Home => &self.a_team,
            Venue::Away => &self.h_team,
        }
    }
}

/// Parse a headered CSV string into shot events.
///
/// Fails on the first malformed or invariant-violating row; the 1-based file
/// row number is carried in the error.
pub fn parse_shots_csv(csv_object: &str) -> Result<Vec<ShotEvent>, DataLoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    let mut shots: Vec<ShotEvent> = Vec::new();
    for (index, record) in rdr.deserialize::<ShotEvent>().enumerate() {
        let shot = record?;
        // Header occupies file row 1.
        let row = index + 2;
        if shot.season.is_empty() {
            return Err(DataLoadError::EmptySeason { row });
        }
        if shot.xg < 0.0 {
            return Err(DataLoadError::NegativeXg { row, value: shot.xg });
        }
        shots.push(shot);
    }
    Ok(shots)
}
