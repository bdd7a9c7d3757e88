// Season and rank types: the fixed schema of the standings table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ranked slots in every season column (rank 1 through rank 18).
pub const SLOTS_PER_SEASON: usize = 18;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// One year of competition. Variants are declared in chronological order, so
/// the derived `Ord` matches the category order of the chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "2022")]
    Y2022,
    #[serde(rename = "2023")]
    Y2023,
    #[serde(rename = "2024")]
    Y2024,
    #[serde(rename = "2025")]
    Y2025,
}

impl Season {
    /// All seasons in category order.
    pub const ALL: [Season; 4] = [Season::Y2022, Season::Y2023, Season::Y2024, Season::Y2025];

    /// The first season of the league, played with a smaller field.
    pub const LEGACY: Season = Season::Y2022;

    /// The most recent season; its participants form the current roster.
    pub const LATEST: Season = Season::Y2025;

    /// Display label used on the chart axis and in exports.
    pub fn label(self) -> &'static str {
        match self {
            Season::Y2022 => "2022",
            Season::Y2023 => "2023",
            Season::Y2024 => "2024",
            Season::Y2025 => "2025",
        }
    }

    /// Number of teams that actually competed in the season. The legacy
    /// season ran with 14 teams; ranks 15-18 of its column are empty.
    pub fn active_slots(self) -> u8 {
        if self.is_legacy() {
            14
        } else {
            SLOTS_PER_SEASON as u8
        }
    }

    pub fn is_legacy(self) -> bool {
        self == Season::LEGACY
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Final standing within a season: 1 is best, 18 is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const BEST: Rank = Rank(1);
    pub const WORST: Rank = Rank(SLOTS_PER_SEASON as u8);

    /// Returns `None` when `value` is outside 1..=18.
    pub fn new(value: u8) -> Option<Rank> {
        if (1..=SLOTS_PER_SEASON as u8).contains(&value) {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Convert a slot index of a wide season column into a rank.
    ///
    /// Columns are stored worst-first: index 0 is rank 18 and index 17 is
    /// rank 1.
    pub fn from_slot_index(index: usize) -> Option<Rank> {
        if index >= SLOTS_PER_SEASON {
            return None;
        }
        Some(Rank((SLOTS_PER_SEASON - index) as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank must be between 1 and 18, got {value}"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
