pub mod config;
pub mod history;
pub mod init;
pub mod project;
pub mod track;

use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database, honouring the read-only flag.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database, cfg.read_only)
}
