#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use timekeeper::db::{DailyLogStore, HistoryStore, ProjectStore};
use timekeeper::errors::{AppError, AppResult};
use timekeeper::models::daily_log::DailyLog;
use timekeeper::models::history_data::HistoryData;
use timekeeper::models::project::Project;

pub fn tk() -> Command {
    cargo_bin_cmd!("timekeeper")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config file path in the temp dir that does not exist yet
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory under the temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Run a CLI command against an isolated database and config file
pub fn tk_with(db_path: &str, conf: &str, args: &[&str]) -> Command {
    let mut cmd = tk();
    cmd.args(["--db", db_path, "--config", conf, "--test"]);
    cmd.args(args);
    cmd
}

/// Initialize DB and add two projects
pub fn init_db_with_projects(db_path: &str, conf: &str) {
    tk_with(db_path, conf, &["init"]).assert().success();
    tk_with(db_path, conf, &["project", "add", "Alpha"]).assert().success();
    tk_with(db_path, conf, &["project", "add", "Beta"]).assert().success();
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// In-memory store used to exercise the core without SQLite.
#[derive(Default)]
pub struct MemoryStore {
    pub projects: RefCell<Vec<Project>>,
    pub history: RefCell<Vec<HistoryData>>,
    pub logs: RefCell<Vec<DailyLog>>,
    pub fail_history_writes: Cell<bool>,
    next_id: Cell<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(names: &[&str]) -> Self {
        let store = Self::new();
        for (i, name) in names.iter().enumerate() {
            store
                .save_project(&Project::new(-1, name, false, true, i as i64))
                .expect("save project");
        }
        store
    }

    fn next(&self) -> i64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub fn time_of(&self, project_id: i64, date: NaiveDate) -> Option<i64> {
        self.history
            .borrow()
            .iter()
            .find(|d| d.project_id == project_id && d.date == date)
            .map(|d| d.time)
    }
}

impl ProjectStore for MemoryStore {
    fn all_projects(&self) -> AppResult<Vec<Project>> {
        Ok(self.projects.borrow().clone())
    }

    fn project_by_id(&self, id: i64) -> AppResult<Option<Project>> {
        Ok(self.projects.borrow().iter().find(|p| p.id == id).cloned())
    }

    fn save_project(&self, project: &Project) -> AppResult<Project> {
        let mut saved = project.clone();
        let mut projects = self.projects.borrow_mut();
        if let Some(existing) = projects.iter_mut().find(|p| p.id == project.id && p.id >= 0) {
            *existing = saved.clone();
        } else {
            saved.id = self.next();
            projects.push(saved.clone());
        }
        Ok(saved)
    }

    fn delete_project(&self, project: &Project) -> AppResult<bool> {
        let mut projects = self.projects.borrow_mut();
        let before = projects.len();
        projects.retain(|p| p.id != project.id);
        Ok(projects.len() != before)
    }
}

impl HistoryStore for MemoryStore {
    fn all_history(&self) -> AppResult<Vec<HistoryData>> {
        Ok(self.history.borrow().clone())
    }

    fn history_for_date(&self, date: NaiveDate) -> AppResult<HashMap<i64, HistoryData>> {
        Ok(self
            .history
            .borrow()
            .iter()
            .filter(|d| d.date == date)
            .map(|d| (d.project_id, d.clone()))
            .collect())
    }

    fn save_history(&self, record: &HistoryData) -> AppResult<HistoryData> {
        if self.fail_history_writes.get() {
            return Err(AppError::InvalidArgument("history writes disabled".into()));
        }

        let mut saved = record.clone();
        let mut history = self.history.borrow_mut();
        match record.id.and_then(|id| history.iter_mut().find(|d| d.id == Some(id))) {
            Some(existing) => *existing = saved.clone(),
            None => {
                saved.id = Some(self.next());
                history.push(saved.clone());
            }
        }
        Ok(saved)
    }

    fn delete_history_for_project(&self, project: &Project) -> AppResult<bool> {
        self.history
            .borrow_mut()
            .retain(|d| d.project_id != project.id);
        Ok(true)
    }
}

impl DailyLogStore for MemoryStore {
    fn daily_log_for_date(&self, date: NaiveDate) -> AppResult<Option<DailyLog>> {
        Ok(self.logs.borrow().iter().find(|l| l.date == date).cloned())
    }

    fn save_daily_log(&self, log: &DailyLog) -> AppResult<DailyLog> {
        let mut saved = log.clone();
        let mut logs = self.logs.borrow_mut();
        match log.id.and_then(|id| logs.iter_mut().find(|l| l.id == Some(id))) {
            Some(existing) => *existing = saved.clone(),
            None => {
                saved.id = Some(self.next());
                logs.push(saved.clone());
            }
        }
        Ok(saved)
    }
}
