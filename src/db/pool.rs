//! SQLite connection handling.
//!
//! Nothing is pooled: every logical operation opens the database file, runs
//! its statement and closes the connection again when it goes out of scope.

use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DbPool {
    path: PathBuf,
    read_only: bool,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            read_only: false,
        }
    }

    /// When set, write operations must return before reaching storage.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Read-only pools open with `SQLITE_OPEN_READ_ONLY`, which never
    /// creates the file.
    pub fn connect(&self) -> AppResult<Connection> {
        if self.read_only {
            let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            return Ok(Connection::open_with_flags(&self.path, flags)?);
        }
        Ok(Connection::open(&self.path)?)
    }

    /// Open a connection, hand it to `func`, close it.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = self.connect()?;
        func(&conn)
    }
}
