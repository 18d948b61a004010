//! Binary entry point that glues the SQLite-backed catalog to the TUI: set up
//! file logging, bring up the database, run the initial search, and drive the
//! Ratatui event loop until the user exits.

use std::fs::{self, File};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use songbook::{data_dir, ensure_schema, run_app, App};

/// Log file name inside the application data directory. The TUI owns the
/// terminal, so diagnostics go to a file instead of stderr.
const LOG_FILE_NAME: &str = "songbook.log";

fn init_logging() -> Result<()> {
    let dir = data_dir()?;
    fs::create_dir_all(&dir).context("failed to create data directory")?;
    let log_file =
        Arc::new(File::create(dir.join(LOG_FILE_NAME)).context("failed to create log file")?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(log_file)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")?;
    Ok(())
}

/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unwritable data directory) to the terminal instead of crashing silently.
fn main() -> Result<()> {
    init_logging()?;
    info!("songbook starting");

    let conn = ensure_schema()?;
    let mut app = App::new(conn);
    app.reload()?;
    run_app(&mut app)
}
