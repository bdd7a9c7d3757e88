// Data provider: the season-by-season placement table and the current roster.
//
// The standings are compiled into the binary. `load()` builds them into a
// validated, read-only `LeagueData`; any structural defect in the constants is
// reported as a `DataError` before the rest of the pipeline runs.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::season::{Rank, Season, SLOTS_PER_SEASON};

// ---------------------------------------------------------------------------
// Raw standings
// ---------------------------------------------------------------------------

/// Placement columns, worst-first: index 0 is rank 18, index 17 is rank 1.
/// An empty string marks a slot with no entrant.
const PLACEMENTS: [(Season, [&str; SLOTS_PER_SEASON]); 4] = [
    (
        Season::Y2022,
        [
            "", "", "", "", "Jimmy", "Brandon L", "Ian", "mell2real", "Leo", "Kevin", "Jeff",
            "Jon", "CJ", "Brandon", "Harry", "Jonathan", "Hoffman", "Mat",
        ],
    ),
    (
        Season::Y2023,
        [
            "Harry", "Harry G", "Myles", "Ed", "Shea", "Jon", "Jimmy", "Mat", "Kevin", "Brandon",
            "Ian", "Nick", "CJ", "Kyle", "Jonathan", "Hunter", "Jeff", "Leo",
        ],
    ),
    (
        Season::Y2024,
        [
            "Ed", "CJ", "Harry", "Brandon", "Jimmy", "Hunter", "Jon", "Shea", "Jonathan", "Leo",
            "Myles", "Jordan", "Ian", "Kyle", "Kevin", "Nick", "Mat", "Jeff",
        ],
    ),
    (
        Season::Y2025,
        [
            "Ian", "Jimmy", "Shea", "Hunter", "Harry", "Jordan", "Leo", "Jon", "Kyle", "CJ", "Ed",
            "Jeff", "Kevin", "Myles", "Nick", "Brandon", "Jonathan", "Mat",
        ],
    ),
];

/// Managers who took part in the most recent season.
const CURRENT_ROSTER: [&str; 18] = [
    "Ian", "Jimmy", "Shea", "Hunter", "Harry", "Jordan", "Leo", "Jon", "Kyle", "CJ", "Ed", "Jeff",
    "Kevin", "Myles", "Nick", "Brandon", "Jonathan", "Mat",
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("season {season} has {found} slots, expected 18")]
    WrongSlotCount { season: Season, found: usize },

    #[error("manager `{manager}` appears more than once in season {season}")]
    DuplicateManager { season: Season, manager: String },

    #[error("season {season} is missing from the placement table")]
    MissingSeason { season: Season },

    #[error("season {season} is duplicated or out of order in the placement table")]
    MisorderedSeason { season: Season },

    #[error("roster manager `{manager}` does not appear exactly once in season {season}")]
    RosterNotInLatestSeason { season: Season, manager: String },

    #[error("manager `{manager}` played in season {season} but is not on the roster")]
    MissingFromRoster { season: Season, manager: String },
}

// ---------------------------------------------------------------------------
// Placement table (wide form)
// ---------------------------------------------------------------------------

/// One season's column of the wide placement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonColumn {
    season: Season,
    slots: Vec<String>,
}

impl SeasonColumn {
    pub fn season(&self) -> Season {
        self.season
    }

    /// Raw slots in storage order (worst-first).
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Iterate `(rank, manager)` for every slot, including empty ones.
    pub fn cells(&self) -> impl Iterator<Item = (Rank, &str)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, name)| {
            Rank::from_slot_index(i).map(|rank| (rank, name.as_str()))
        })
    }

    /// Iterate `(rank, manager)` for occupied slots only.
    pub fn entrants(&self) -> impl Iterator<Item = (Rank, &str)> + '_ {
        self.cells().filter(|(_, name)| !name.is_empty())
    }
}

/// Validated wide table: one column per season, in season order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementTable {
    columns: Vec<SeasonColumn>,
}

impl PlacementTable {
    /// Build a table from `(season, slots)` pairs, failing fast on any
    /// structural defect.
    pub fn new(columns: Vec<(Season, Vec<String>)>) -> Result<Self, DataError> {
        let mut expected = Season::ALL.iter();
        let mut built = Vec::with_capacity(columns.len());

        for (season, slots) in columns {
            match expected.next() {
                Some(&want) if want == season => {}
                Some(&want) if want < season => {
                    return Err(DataError::MissingSeason { season: want });
                }
                _ => return Err(DataError::MisorderedSeason { season }),
            }

            if slots.len() != SLOTS_PER_SEASON {
                return Err(DataError::WrongSlotCount {
                    season,
                    found: slots.len(),
                });
            }

            let mut seen = HashSet::new();
            for name in slots.iter().filter(|n| !n.is_empty()) {
                if !seen.insert(name.as_str()) {
                    return Err(DataError::DuplicateManager {
                        season,
                        manager: name.clone(),
                    });
                }
            }

            built.push(SeasonColumn { season, slots });
        }

        if let Some(&season) = expected.next() {
            return Err(DataError::MissingSeason { season });
        }

        Ok(PlacementTable { columns: built })
    }

    pub fn columns(&self) -> &[SeasonColumn] {
        &self.columns
    }

    pub fn column(&self, season: Season) -> Option<&SeasonColumn> {
        self.columns.iter().find(|c| c.season == season)
    }

    /// Column of the most recent season. Always present after validation.
    pub fn latest(&self) -> Option<&SeasonColumn> {
        self.columns.last()
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Managers eligible for display. Ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    managers: BTreeSet<String>,
}

impl Roster {
    pub fn new<I, S>(managers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Roster {
            managers: managers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, manager: &str) -> bool {
        self.managers.contains(manager)
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.managers.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// LeagueData
// ---------------------------------------------------------------------------

/// The validated inputs of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueData {
    table: PlacementTable,
    roster: Roster,
}

impl LeagueData {
    /// Pair a table with its roster, checking that the roster is exactly the
    /// set of entrants of the most recent season.
    pub fn new(table: PlacementTable, roster: Roster) -> Result<Self, DataError> {
        if let Some(latest) = table.latest() {
            let season = latest.season();
            for manager in roster.iter() {
                let appearances = latest.entrants().filter(|(_, m)| *m == manager).count();
                if appearances != 1 {
                    return Err(DataError::RosterNotInLatestSeason {
                        season,
                        manager: manager.to_string(),
                    });
                }
            }
            if let Some((_, manager)) = latest.entrants().find(|(_, m)| !roster.contains(m)) {
                return Err(DataError::MissingFromRoster {
                    season,
                    manager: manager.to_string(),
                });
            }
        }

        Ok(LeagueData { table, roster })
    }

    pub fn table(&self) -> &PlacementTable {
        &self.table
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

/// Build the compiled-in standings and validate them.
pub fn load() -> Result<LeagueData, DataError> {
    let columns: Vec<(Season, Vec<String>)> = PLACEMENTS
        .iter()
        .map(|(season, slots)| (*season, slots.iter().map(|s| s.to_string()).collect()))
        .collect();
    let table = PlacementTable::new(columns)?;
    let roster = Roster::new(CURRENT_ROSTER);
    let data = LeagueData::new(table, roster)?;

    debug!(
        seasons = data.table.columns().len(),
        roster = data.roster.len(),
        "placement table validated"
    );
    Ok(data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
