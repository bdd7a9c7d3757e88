// Per-manager summary: seasons played and finishing-tier counts.
//
// The tier predicates are plain functions of (rank, season) so each rule can be
// tested on its own. The bottom tier depends on the season: the legacy season
// had 14 teams, so its bottom four are ranks 11-14 rather than 15-18.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::season::{Rank, Season};
use crate::tidy::StandingRecord;

/// Number of places in the top and bottom tiers.
pub const TIER_SIZE: u8 = 4;

// ---------------------------------------------------------------------------
// Tier predicates
// ---------------------------------------------------------------------------

/// Finished in the top four.
pub fn is_top4(rank: Rank, _season: Season) -> bool {
    rank.get() <= TIER_SIZE
}

/// Won the season.
pub fn is_first_place(rank: Rank, _season: Season) -> bool {
    rank == Rank::BEST
}

/// Finished in the bottom four of the teams that actually competed.
///
/// 2022: ranks 11-14. Every other season: ranks 15-18.
pub fn is_bottom4(rank: Rank, season: Season) -> bool {
    let last = season.active_slots();
    let first = last - (TIER_SIZE - 1);
    (first..=last).contains(&rank.get())
}

// ---------------------------------------------------------------------------
// Summary rows
// ---------------------------------------------------------------------------

/// One row of the summary table. Field order is the table's column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSummary {
    #[serde(rename = "Manager")]
    pub manager: String,
    pub seasons_played: u32,
    pub top4_finishes: u32,
    pub first_place: u32,
    pub bottom4_finishes: u32,
}

impl ManagerSummary {
    fn tally(&mut self, record: &StandingRecord) {
        self.seasons_played += 1;
        if is_top4(record.rank, record.season) {
            self.top4_finishes += 1;
        }
        if is_first_place(record.rank, record.season) {
            self.first_place += 1;
        }
        if is_bottom4(record.rank, record.season) {
            self.bottom4_finishes += 1;
        }
    }

    /// Key for the table order; compared in descending order.
    fn sort_key(&self) -> (u32, u32, u32) {
        (self.top4_finishes, self.first_place, self.seasons_played)
    }
}

/// Aggregate tidy records into one summary row per manager.
///
/// Rows are ordered by top-4 finishes, then first places, then seasons
/// played, all descending. Rows still tied keep manager-name order.
pub fn summarize(records: &[StandingRecord]) -> Vec<ManagerSummary> {
    let mut grouped: BTreeMap<&str, ManagerSummary> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.manager.as_str())
            .or_insert_with(|| ManagerSummary {
                manager: record.manager.clone(),
                ..ManagerSummary::default()
            })
            .tally(record);
    }

    let mut rows: Vec<ManagerSummary> = grouped.into_values().collect();
    // `sort_by` is stable, so name order survives among full ties.
    rows.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    debug!(managers = rows.len(), "summarized tidy records");
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(value: u8) -> Rank {
        Rank::new(value).unwrap()
    }

    fn record(season: Season, place: u8, manager: &str) -> StandingRecord {
        StandingRecord {
            season,
            rank: rank(place),
            manager: manager.to_string(),
        }
    }

    #[test]
    fn top4_boundary() {
        assert!(is_top4(rank(1), Season::Y2023));
        assert!(is_top4(rank(4), Season::Y2022));
        assert!(!is_top4(rank(5), Season::Y2025));
    }

    #[test]
    fn first_place_only_rank_one() {
        assert!(is_first_place(rank(1), Season::Y2024));
        assert!(!is_first_place(rank(2), Season::Y2024));
    }

    #[test]
    fn bottom4_uses_legacy_range_in_2022() {
        assert!(is_bottom4(rank(12), Season::Y2022));
        assert!(is_bottom4(rank(11), Season::Y2022));
        assert!(is_bottom4(rank(14), Season::Y2022));
        assert!(!is_bottom4(rank(10), Season::Y2022));
        assert!(!is_bottom4(rank(15), Season::Y2022));
    }

    #[test]
    fn bottom4_uses_full_range_after_2022() {
        assert!(!is_bottom4(rank(12), Season::Y2023));
        assert!(is_bottom4(rank(16), Season::Y2023));
        for season in [Season::Y2023, Season::Y2024, Season::Y2025] {
            assert!(!is_bottom4(rank(14), season));
            assert!(is_bottom4(rank(15), season));
            assert!(is_bottom4(rank(18), season));
        }
    }

    #[test]
    fn tallies_each_tier() {
        let records = vec![
            record(Season::Y2022, 1, "A"),
            record(Season::Y2023, 3, "A"),
            record(Season::Y2024, 16, "A"),
            record(Season::Y2022, 12, "B"),
        ];
        let rows = summarize(&records);
        assert_eq!(
            rows[0],
            ManagerSummary {
                manager: "A".into(),
                seasons_played: 3,
                top4_finishes: 2,
                first_place: 1,
                bottom4_finishes: 1,
            }
        );
        assert_eq!(
            rows[1],
            ManagerSummary {
                manager: "B".into(),
                seasons_played: 1,
                top4_finishes: 0,
                first_place: 0,
                bottom4_finishes: 1,
            }
        );
    }

    #[test]
    fn sort_breaks_ties_with_first_place_then_seasons() {
        let records = vec![
            // Two top-4s, no wins, two seasons
            record(Season::Y2023, 2, "Tie"),
            record(Season::Y2024, 3, "Tie"),
            // Two top-4s, one win
            record(Season::Y2023, 1, "Winner"),
            record(Season::Y2024, 4, "Winner"),
            // Two top-4s, no wins, three seasons
            record(Season::Y2022, 2, "Veteran"),
            record(Season::Y2023, 3, "Veteran"),
            record(Season::Y2024, 9, "Veteran"),
            // Identical to Tie; name order decides
            record(Season::Y2023, 4, "Also"),
            record(Season::Y2025, 2, "Also"),
        ];
        let names: Vec<String> = summarize(&records).into_iter().map(|r| r.manager).collect();
        assert_eq!(names, vec!["Winner", "Veteran", "Also", "Tie"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn serializes_with_table_column_names() {
        let row = ManagerSummary {
            manager: "Mat".into(),
            seasons_played: 4,
            top4_finishes: 3,
            first_place: 2,
            bottom4_finishes: 0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Manager"], "Mat");
        assert_eq!(json["top4_finishes"], 3);
    }
}
