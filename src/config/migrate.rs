//! One-time rename of files left behind by the application's former name.
//!
//! `timesheetinator.db` becomes `timekeeper.db` and `timesheetinator.conf`
//! becomes `timekeeper.conf`. Existing targets are never overwritten.

use super::{CONFIG_FILE_NAME, Config, DATABASE_FILE_NAME};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LEGACY_DATABASE_FILE_NAME: &str = "timesheetinator.db";
pub const LEGACY_CONFIG_FILE_NAME: &str = "timesheetinator.conf";

/// Move `from` to `to`.
/// - source missing → no-op
/// - target present → no-op
/// - rename failing (e.g. across devices) → copy + remove original
fn move_or_copy(from: &Path, to: &Path) -> io::Result<bool> {
    if !from.exists() || to.exists() {
        return Ok(false);
    }

    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        let _ = fs::remove_file(from);
    }

    Ok(true)
}

fn is_legacy_db_name(db_path: &Path) -> bool {
    db_path
        .file_name()
        .map(|s| s.to_string_lossy().eq_ignore_ascii_case(LEGACY_DATABASE_FILE_NAME))
        .unwrap_or(false)
}

/// Point the config's `database` entry at the new file name, keeping the
/// directory part. Returns `true` when the file was rewritten.
fn update_db_reference(conf: &Path) -> io::Result<bool> {
    let content = fs::read_to_string(conf)?;

    let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content) else {
        return Ok(false);
    };
    let Some(map) = yaml.as_mapping_mut() else {
        return Ok(false);
    };

    let key = Value::String("database".to_string());
    let Some(dbstr) = map.get(&key).and_then(Value::as_str) else {
        return Ok(false);
    };

    if !is_legacy_db_name(Path::new(dbstr)) {
        return Ok(false);
    }

    let new_db = PathBuf::from(dbstr)
        .with_file_name(DATABASE_FILE_NAME)
        .to_string_lossy()
        .to_string();
    map.insert(key, Value::String(new_db));

    let serialized = serde_yaml::to_string(&yaml)
        .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
    fs::write(conf, serialized)?;

    Ok(true)
}

/// Run the migration against the standard configuration directory.
pub fn run_legacy_migration() -> io::Result<Vec<String>> {
    run_legacy_migration_in(&Config::config_dir())
}

/// Same as `run_legacy_migration`, against an injected directory.
/// Returns a description of every action performed.
pub fn run_legacy_migration_in(dir: &Path) -> io::Result<Vec<String>> {
    let mut actions = Vec::new();

    let old_db = dir.join(LEGACY_DATABASE_FILE_NAME);
    let new_db = dir.join(DATABASE_FILE_NAME);
    if move_or_copy(&old_db, &new_db)? {
        actions.push(format!("Renamed database {:?} → {:?}", old_db, new_db));
    }

    let old_conf = dir.join(LEGACY_CONFIG_FILE_NAME);
    let new_conf = dir.join(CONFIG_FILE_NAME);
    if move_or_copy(&old_conf, &new_conf)? {
        actions.push(format!("Renamed config file {:?} → {:?}", old_conf, new_conf));
    }

    if new_conf.exists() && update_db_reference(&new_conf)? {
        actions.push("Updated config database reference".into());
    }

    Ok(actions)
}
