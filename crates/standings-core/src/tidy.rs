// Reshape the wide placement table into tidy (season, rank, manager) records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{PlacementTable, Roster};
use crate::season::{Rank, Season};

/// One observation: a manager's final rank in one season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandingRecord {
    #[serde(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Rank")]
    pub rank: Rank,
    #[serde(rename = "Manager")]
    pub manager: String,
}

/// Melt the wide table into tidy records, keeping only occupied slots whose
/// manager is on the current roster.
///
/// Managers who left the league are dropped from every season, including the
/// seasons they played in. Records come out season-major, best rank first.
pub fn reshape(table: &PlacementTable, roster: &Roster) -> Vec<StandingRecord> {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for column in table.columns() {
        let mut entrants: Vec<(Rank, &str)> = column.entrants().collect();
        entrants.sort_by_key(|(rank, _)| *rank);

        for (rank, manager) in entrants {
            if !roster.contains(manager) {
                dropped += 1;
                continue;
            }
            records.push(StandingRecord {
                season: column.season(),
                rank,
                manager: manager.to_string(),
            });
        }
    }

    debug!(
        kept = records.len(),
        dropped, "reshaped placement table into tidy records"
    );
    records
}

/// One manager's line on the chart: their ranks in season order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSeries {
    pub manager: String,
    pub points: Vec<(Season, Rank)>,
}

impl ManagerSeries {
    /// Rank in `season`, if the manager played that year.
    pub fn rank_in(&self, season: Season) -> Option<Rank> {
        self.points
            .iter()
            .find(|(s, _)| *s == season)
            .map(|(_, rank)| *rank)
    }
}

/// Group tidy records into one series per manager, ordered by manager name,
/// each series ordered by season.
pub fn series_by_manager(records: &[StandingRecord]) -> Vec<ManagerSeries> {
    let mut grouped: BTreeMap<&str, Vec<(Season, Rank)>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.manager.as_str())
            .or_default()
            .push((record.season, record.rank));
    }

    grouped
        .into_iter()
        .map(|(manager, mut points)| {
            points.sort_by_key(|(season, _)| *season);
            ManagerSeries {
                manager: manager.to_string(),
                points,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn tidy() -> Vec<StandingRecord> {
        let data = data::load().unwrap();
        reshape(data.table(), data.roster())
    }

    #[test]
    fn every_record_is_on_the_roster() {
        let data = data::load().unwrap();
        let records = reshape(data.table(), data.roster());
        assert!(!records.is_empty());
        for record in &records {
            assert!(
                data.roster().contains(&record.manager),
                "{} is not on the roster",
                record.manager
            );
        }
    }

    #[test]
    fn former_managers_are_excluded() {
        let records = tidy();
        for gone in ["Brandon L", "mell2real", "Hoffman", "Harry G"] {
            assert!(
                records.iter().all(|r| r.manager != gone),
                "{gone} should have been filtered out"
            );
        }
    }

    #[test]
    fn record_counts_per_season() {
        let records = tidy();
        let count = |season| records.iter().filter(|r| r.season == season).count();
        // 2022: 14 entrants minus Brandon L, mell2real, Hoffman
        assert_eq!(count(Season::Y2022), 11);
        // 2023: 18 entrants minus Harry G
        assert_eq!(count(Season::Y2023), 17);
        assert_eq!(count(Season::Y2024), 18);
        assert_eq!(count(Season::Y2025), 18);
    }

    #[test]
    fn records_are_season_major_best_first() {
        let records = tidy();
        let first = &records[0];
        assert_eq!(first.season, Season::Y2022);
        assert_eq!(first.rank, Rank::BEST);
        assert_eq!(first.manager, "Mat");

        let keys: Vec<(Season, Rank)> = records.iter().map(|r| (r.season, r.rank)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn empty_roster_yields_no_records() {
        let data = data::load().unwrap();
        let records = reshape(data.table(), &Roster::default());
        assert!(records.is_empty());
        assert!(series_by_manager(&records).is_empty());
    }

    #[test]
    fn series_follow_season_order() {
        let series = series_by_manager(&tidy());
        assert_eq!(series.len(), 18);

        let cj = series.iter().find(|s| s.manager == "CJ").unwrap();
        let ranks: Vec<u8> = cj.points.iter().map(|(_, r)| r.get()).collect();
        assert_eq!(ranks, vec![6, 6, 17, 9]);
        assert_eq!(cj.rank_in(Season::Y2024).map(Rank::get), Some(17));

        let jordan = series.iter().find(|s| s.manager == "Jordan").unwrap();
        assert_eq!(jordan.rank_in(Season::Y2022), None);
        assert_eq!(jordan.points.len(), 2);
    }

    #[test]
    fn series_are_sorted_by_manager() {
        let names: Vec<String> = series_by_manager(&tidy())
            .into_iter()
            .map(|s| s.manager)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
