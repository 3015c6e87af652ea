pub mod daily_log;
pub mod history;
pub mod initialize;
pub mod pool;
pub mod projects;
pub mod queries;
pub mod store;

pub use store::{DailyLogStore, HistoryStore, ProjectStore, Store};

use crate::errors::{AppError, AppResult};
use pool::DbPool;
use std::path::Path;

/// `Store` backed by a local SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Bootstrap the schema if the file is new and return a store for it.
    ///
    /// A read-only store never creates anything: a missing file is
    /// `AppError::DatabaseMissing`.
    pub fn open<P: AsRef<Path>>(path: P, read_only: bool) -> AppResult<Self> {
        let path = path.as_ref();
        if read_only {
            if !path.is_file() {
                return Err(AppError::DatabaseMissing(path.display().to_string()));
            }
        } else {
            initialize::bootstrap(path)?;
        }
        Ok(Self::from_pool(DbPool::new(path).with_read_only(read_only)))
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn is_read_only(&self) -> bool {
        self.pool.is_read_only()
    }
}
