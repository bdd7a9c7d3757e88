// Presentation payload: everything a renderer needs to draw the standings
// chart and the summary table.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::LeagueData;
use crate::season::Season;
use crate::summary::{summarize, ManagerSummary};
use crate::tidy::{reshape, series_by_manager, ManagerSeries, StandingRecord};

/// Tidy relation columns, in export order.
pub const STANDINGS_COLUMNS: [&str; 3] = ["Season", "Rank", "Manager"];

/// Summary table columns, in display order.
pub const SUMMARY_COLUMNS: [&str; 5] = [
    "Manager",
    "seasons_played",
    "top4_finishes",
    "first_place",
    "bottom4_finishes",
];

/// How the chart axes must be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Season categories in the order they appear along the x axis. The axis
    /// is categorical: no positions exist between two seasons.
    pub season_order: Vec<Season>,
    /// Rank 1 is drawn at the top of the y axis.
    pub rank_reversed: bool,
}

impl Default for AxisSpec {
    fn default() -> Self {
        AxisSpec {
            season_order: Season::ALL.to_vec(),
            rank_reversed: true,
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsReport {
    pub axes: AxisSpec,
    /// Tidy relation behind the chart: one series per manager.
    pub standings: Vec<StandingRecord>,
    /// Summary table, already sorted.
    pub summary: Vec<ManagerSummary>,
}

impl StandingsReport {
    /// Chart series, one per manager, ordered by manager name.
    pub fn series(&self) -> Vec<ManagerSeries> {
        series_by_manager(&self.standings)
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

/// Run the reshape and aggregate stages over validated league data.
pub fn build_report(data: &LeagueData) -> StandingsReport {
    let standings = reshape(data.table(), data.roster());
    let summary = summarize(&standings);

    info!(
        records = standings.len(),
        managers = summary.len(),
        "standings report built"
    );

    StandingsReport {
        axes: AxisSpec::default(),
        standings,
        summary,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
