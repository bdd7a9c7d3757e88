// Configuration loading and parsing (standings.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the dashboard config, under both `defaults/` and `config/`.
pub const CONFIG_FILE: &str = "standings.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// standings.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub report: ReportConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    pub export: ExportConfig,
}

/// Titles shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub title: String,
    pub chart_title: String,
    pub legend_title: String,
    pub summary_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub marker: MarkerStyle,
    /// Draw a marker at each season point on top of the line.
    #[serde(default = "default_true")]
    pub show_points: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            marker: MarkerStyle::default(),
            show_points: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Braille,
    Dot,
    Block,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory that receives exported CSV and JSON files, relative to the
    /// working directory unless absolute.
    pub dir: String,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/standings.toml` relative to `base_dir`.
///
/// This does not copy defaults. Prefer `load_config()` which handles default
/// initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/standings.toml` from `defaults/` when it does not exist yet.
///
/// Returns the path written, or `None` when the user already has a config
/// file. An existing file is never overwritten.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    let copy_err = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!(
            "cannot seed {} from {}: {e}",
            target.display(),
            source.display()
        ),
    };

    let content = std::fs::read(&source).map_err(copy_err)?;
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(copy_err)?;
    }
    std::fs::write(&target, content).map_err(copy_err)?;

    Ok(Some(target))
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let required: &[(&str, &str)] = &[
        ("report.title", config.report.title.as_str()),
        ("report.chart_title", config.report.chart_title.as_str()),
        ("report.legend_title", config.report.legend_title.as_str()),
        ("report.summary_title", config.report.summary_title.as_str()),
        ("export.dir", config.export.dir.as_str()),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
