use crate::cli::config_path;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;

/// Handle the `init` command
///
/// Writes the configuration file (skipped with `--test`) and creates the
/// database tables. Running it again is harmless. Nothing is written in
/// read-only mode.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cfg.read_only {
        warning("Read-only mode: nothing initialized");
        return Ok(());
    }

    let path = config_path(cli);
    let db_path = Config::init_all(cli.db.as_deref(), &path, cli.test)?;

    info("Initializing timekeeper…");
    if !cli.test {
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    if let Some(dir) = db_path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
