use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;
use tracing::info;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".songbook";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "songbook.sqlite";

/// Ensure the database file exists, apply the schema, and return a live
/// connection. The schema is a single fixed version; `CREATE ... IF NOT
/// EXISTS` keeps the call safe to repeat on every start.
pub fn ensure_schema() -> Result<Connection> {
    let db_path = data_dir()?.join(DB_FILE_NAME);

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    apply_schema(&conn)?;
    info!(path = %db_path.display(), "database ready");
    Ok(conn)
}

/// Create the `songtexts` table and its query indexes on an open connection.
/// Split out from [`ensure_schema`] so tests can run against an in-memory
/// database.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS songtexts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            artist TEXT NOT NULL,
            title TEXT NOT NULL,
            format TEXT NOT NULL DEFAULT 'html',
            data TEXT NOT NULL DEFAULT ''
        )",
        [],
    )
    .context("failed to create songtexts table")?;

    // artist and title back the range/equality queries and the re-sort after
    // a search, matching the index fields of the stored collection.
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_songtexts_artist ON songtexts(artist)",
        [],
    )
    .context("failed to create artist index")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_songtexts_title ON songtexts(title)",
        [],
    )
    .context("failed to create title index")?;

    Ok(())
}

/// Resolve the absolute path to the application data directory inside the
/// user's home. The database and the log file both live here.
pub fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
