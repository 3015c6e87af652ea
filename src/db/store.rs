//! Persistence capabilities consumed by the core.
//!
//! The core never talks to SQLite directly; it is handed something that
//! implements these traits (`SqliteStore` in production, an in-memory double
//! in tests).

use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::models::history_data::HistoryData;
use crate::models::project::Project;
use chrono::NaiveDate;
use std::collections::HashMap;

pub trait ProjectStore {
    fn all_projects(&self) -> AppResult<Vec<Project>>;

    fn project_by_id(&self, id: i64) -> AppResult<Option<Project>>;

    /// Insert (placeholder id) or update; returns the project with its identity.
    fn save_project(&self, project: &Project) -> AppResult<Project>;

    /// `false` when nothing was deleted (unsaved project, read-only mode).
    fn delete_project(&self, project: &Project) -> AppResult<bool>;
}

pub trait HistoryStore {
    fn all_history(&self) -> AppResult<Vec<HistoryData>>;

    /// Records of one day keyed by project id.
    fn history_for_date(&self, date: NaiveDate) -> AppResult<HashMap<i64, HistoryData>>;

    fn save_history(&self, record: &HistoryData) -> AppResult<HistoryData>;

    fn delete_history_for_project(&self, project: &Project) -> AppResult<bool>;
}

pub trait DailyLogStore {
    fn daily_log_for_date(&self, date: NaiveDate) -> AppResult<Option<DailyLog>>;

    fn save_daily_log(&self, log: &DailyLog) -> AppResult<DailyLog>;
}

/// Everything the application needs from a backing store.
pub trait Store: ProjectStore + HistoryStore + DailyLogStore {}

impl<T: ProjectStore + HistoryStore + DailyLogStore> Store for T {}
