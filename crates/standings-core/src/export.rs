// Export the report to disk: tidy standings and the summary table as CSV, and
// the full presentation payload as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::report::{StandingsReport, STANDINGS_COLUMNS, SUMMARY_COLUMNS};

pub const STANDINGS_CSV: &str = "standings.csv";
pub const SUMMARY_CSV: &str = "summary.csv";
pub const REPORT_JSON: &str = "report.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Write every export file into `dir`, creating it if needed. Existing files
/// are overwritten. Returns the paths written, in a fixed order.
pub fn write_all(report: &StandingsReport, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let standings = dir.join(STANDINGS_CSV);
    write_csv(&standings, &STANDINGS_COLUMNS, &report.standings)?;

    let summary = dir.join(SUMMARY_CSV);
    write_csv(&summary, &SUMMARY_COLUMNS, &report.summary)?;

    let json = dir.join(REPORT_JSON);
    write_json(&json, report)?;

    info!(dir = %dir.display(), "exported standings report");
    Ok(vec![standings, summary, json])
}

/// Serialize `rows` to a CSV file under an explicit `header` row.
///
/// The header is written even when `rows` is empty. Its names must match the
/// serialized field names of `T`.
pub fn write_csv<T: serde::Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<(), ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(header).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn write_json(path: &Path, report: &StandingsReport) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(report).map_err(|e| ExportError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, text).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
