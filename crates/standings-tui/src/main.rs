// Standings dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load and validate the built-in standings
// 4. Build the report (reshape, filter, aggregate)
// 5. Run the TUI until the user quits

use standings_core::config;
use standings_core::data;
use standings_core::report;
use standings_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Standings dashboard starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!("Config loaded: title={:?}", config.report.title);

    let league = match data::load() {
        Ok(league) => league,
        Err(e) => {
            error!("Standings data failed validation: {}", e);
            return Err(e).context("invalid built-in standings");
        }
    };
    info!(
        "Loaded {} seasons, {} current managers",
        league.table().columns().len(),
        league.roster().len()
    );

    let report = report::build_report(&league);
    if report.is_empty() {
        info!("No current managers appear in the standings; rendering empty views");
    }

    tui::run(report, &config).await.context("TUI error")?;

    info!("Standings dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("standings.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("standings=info,standings_tui=info,standings_core=info,warn")
        }))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
