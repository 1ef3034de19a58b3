//! The in-memory shot table: loading plus season enumeration and filtering.
//!
//! The table is loaded once per process and never mutated afterwards; every
//! analysis works on views derived from it.

use std::collections::BTreeSet;
use std::path::Path;

use log::info;

use crate::error::DataLoadError;
use crate::shot::{parse_shots_csv, ShotEvent};

/// The full shot-event table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShotTable {
    shots: Vec<ShotEvent>,
}

impl ShotTable {
    /// Parse a headered CSV string into a table.
    pub fn from_csv(csv_object: &str) -> Result<Self, DataLoadError> {
        let shots = parse_shots_csv(csv_object)?;
        info!("loaded {} shot events", shots.len());
        Ok(ShotTable { shots })
    }

    /// Read and parse a CSV file from disk.
    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        let csv_object = std::fs::read_to_string(path)?;
        ShotTable::from_csv(&csv_object)
    }

    /// All rows, in file order.
    pub fn shots(&self) -> &[ShotEvent] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Distinct season labels, ascending.
    pub fn seasons(&self) -> Vec<String> {
        self.shots
            .iter()
            .map(|shot| shot.season.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Rows whose season equals `season`, in original order.
    pub fn filter_season(&self, season: &str) -> Vec<ShotEvent> {
        filter_season(&self.shots, season)
    }
}

/// Rows whose season equals `season`, in original order.
pub fn filter_season(shots: &[ShotEvent], season: &str) -> Vec<ShotEvent> {
    shots
        .iter()
        .filter(|shot| shot.season == season)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_TABLE: &str = "season,date,result,player,player_assisted,h_team,a_team,h_a,minute,xG,shotType,X,Y
2021,2021-08-14,Goal,Mohamed Salah,Trent Alexander-Arnold,Norwich,Liverpool,a,26,0.24,RightFoot,0.87,0.49
2020,2020-09-12,Goal,Mohamed Salah,,Liverpool,Leeds,h,4,0.76,LeftFoot,0.885,0.5
2020,2020-09-12,SavedShot,Mohamed Salah,Sadio Mane,Liverpool,Leeds,h,31,0.09,RightFoot,0.8,0.56
2021,2021-08-21,MissedShots,Mohamed Salah,,Liverpool,Burnley,h,39,0.07,LeftFoot,0.82,0.41
2019,2019-08-09,Goal,Mohamed Salah,Roberto Firmino,Liverpool,Norwich,h,19,0.33,LeftFoot,0.86,0.44
";

    #[test]
    fn test_seasons_are_distinct_and_ascending() {
        let table = ShotTable::from_csv(STR_TABLE).unwrap();
        assert_eq!(table.seasons(), vec!["2019", "2020", "2021"]);
    }

    #[test]
    fn test_filter_preserves_row_order() {
        let table = ShotTable::from_csv(STR_TABLE).unwrap();
        let filtered = table.filter_season("2020");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].minute, 4);
        assert_eq!(filtered[1].minute, 31);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let table = ShotTable::from_csv(STR_TABLE).unwrap();
        for season in table.seasons() {
            let once = filter_season(table.shots(), &season);
            let twice = filter_season(&once, &season);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_unknown_season_is_empty() {
        let table = ShotTable::from_csv(STR_TABLE).unwrap();
        assert!(table.filter_season("1999").is_empty());
    }

    #[test]
    fn test_header_only_csv_is_an_empty_table() {
        let header = "season,date,result,player,player_assisted,h_team,a_team,h_a,minute,xG,shotType,X,Y\n";
        let table = ShotTable::from_csv(header).unwrap();
        assert!(table.is_empty());
        assert!(table.seasons().is_empty());
    }
}
