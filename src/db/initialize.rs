use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id          INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        name        TEXT    NOT NULL,
        autostart   INTEGER NOT NULL DEFAULT 0,
        visibility  INTEGER NOT NULL DEFAULT 1,
        position    INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS historydata (
        id          INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        project_id  INTEGER NOT NULL,
        date        DATETIME NOT NULL,
        time        INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS dailylog (
        id          INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        date        DATETIME NOT NULL,
        start       DATETIME NOT NULL,
        "end"       DATETIME NOT NULL
    );
"#;

/// Create the three tables. Safe to run against an existing schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Bootstrap the store file on first run.
///
/// A zero-length file counts as new. Returns `Ok(true)` when the schema was
/// created, `Ok(false)` when an existing database was left untouched.
pub fn bootstrap(path: &Path) -> AppResult<bool> {
    if path.exists() && fs::metadata(path)?.len() > 0 {
        return Ok(false);
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let conn = Connection::open(path)?;
    init_db(&conn)?;
    Ok(true)
}
