//! A tracking session: today's projects, their timers and the daily log.

use crate::core::timer::TimerRegistry;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::models::history_data::HistoryData;
use crate::models::project::{Project, sort_by_position};
use crate::ui::messages::{error, info};
use crate::utils::time::{format_hms, parse_hms};
use chrono::{NaiveDate, NaiveDateTime};

/// What the user can ask of a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the n-th project (1-based, display order).
    Start(usize),
    StopAll,
    Save,
    Quit,
    /// Correct the time of the n-th project (seconds).
    SetTime(usize, i64),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim().to_lowercase();

        // t <n> HH:MM[:SS]
        if let [cmd, n, time] = line.split_whitespace().collect::<Vec<_>>()[..]
            && matches!(cmd, "t" | "time")
        {
            let n = n.parse::<usize>().ok()?;
            let seconds = parse_hms(time).ok()?;
            return Some(Command::SetTime(n, seconds));
        }

        match line.as_str() {
            "s" | "stop" => Some(Command::StopAll),
            "w" | "save" => Some(Command::Save),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => other.parse::<usize>().ok().map(Command::Start),
        }
    }
}

pub struct Tracker<'a, S: Store + ?Sized> {
    store: &'a S,
    date: NaiveDate,
    projects: Vec<Project>,
    registry: TimerRegistry,
    today: DailyLog,
}

impl<'a, S: Store + ?Sized> Tracker<'a, S> {
    /// Load the visible projects and today's records, then autostart.
    ///
    /// Only the first autostart project (in display order) is started.
    pub fn open(store: &'a S, now: NaiveDateTime) -> AppResult<Self> {
        let date = now.date();

        let today = store
            .daily_log_for_date(date)?
            .unwrap_or_else(|| DailyLog::open_at(now));

        let mut projects: Vec<Project> = store
            .all_projects()?
            .into_iter()
            .filter(|p| p.visible)
            .collect();
        sort_by_position(&mut projects);

        if projects.is_empty() {
            return Err(AppError::NoProjects);
        }

        let mut existing = store.history_for_date(date)?;
        let mut registry = TimerRegistry::new();
        for p in &projects {
            let record = existing
                .remove(&p.id)
                .unwrap_or_else(|| HistoryData::new(None, p.id, date, 0));
            registry.register(record);
        }

        if let Some(p) = projects.iter().find(|p| p.autostart) {
            registry.start_exclusive(p.id)?;
        }

        Ok(Self {
            store,
            date,
            projects,
            registry,
            today,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn registry(&self) -> &TimerRegistry {
        &self.registry
    }

    pub fn daily_log(&self) -> &DailyLog {
        &self.today
    }

    fn project_at(&self, index: usize) -> AppResult<&Project> {
        index
            .checked_sub(1)
            .and_then(|i| self.projects.get(i))
            .ok_or_else(|| AppError::InvalidArgument(format!("no project #{}", index)))
    }

    /// Start the n-th project (1-based) and stop the others.
    pub fn start(&mut self, index: usize) -> AppResult<bool> {
        let project_id = self.project_at(index)?.id;
        self.registry.start_exclusive(project_id)
    }

    /// Overwrite today's time of the n-th project (1-based).
    /// A running timer keeps running from the new value.
    pub fn set_time(&mut self, index: usize, seconds: i64) -> AppResult<()> {
        let project_id = self.project_at(index)?.id;
        self.registry.set_elapsed(project_id, seconds)
    }

    pub fn stop_all(&mut self) {
        self.registry.stop_all();
    }

    /// One second passed; returns the aggregate of all timers.
    pub fn tick(&mut self) -> i64 {
        self.registry.tick()
    }

    /// Apply a user command. Returns `false` once the session should end.
    pub fn apply(&mut self, cmd: &Command, now: NaiveDateTime) -> AppResult<bool> {
        match cmd {
            Command::Start(n) => {
                if self.start(*n)? {
                    info(format!("Started {}", self.projects[*n - 1].name));
                }
            }
            Command::StopAll => {
                self.stop_all();
                info("All timers stopped");
            }
            Command::Save => {
                self.write_all(now);
            }
            Command::SetTime(n, seconds) => {
                self.set_time(*n, *seconds)?;
                info(format!(
                    "{} set to {}",
                    self.projects[*n - 1].name,
                    format_hms(*seconds)
                ));
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Persist the daily log (end = `now`) and every timer's record.
    ///
    /// Failures are printed and skipped; returns how many writes failed.
    pub fn write_all(&mut self, now: NaiveDateTime) -> usize {
        let mut failed = 0;

        self.today.end = now;
        match self.store.save_daily_log(&self.today) {
            Ok(saved) => self.today = saved,
            Err(e) => {
                error(format!("Failed to save daily log: {}", e));
                failed += 1;
            }
        }

        self.registry.sync_records();
        for record in self.registry.records_mut() {
            match self.store.save_history(record) {
                Ok(saved) => record.id = saved.id,
                Err(e) => {
                    error(format!(
                        "Failed to save time of project {}: {}",
                        record.project_id, e
                    ));
                    failed += 1;
                }
            }
        }

        failed
    }

    /// Stop everything and write a final time.
    pub fn close(&mut self, now: NaiveDateTime) -> usize {
        self.stop_all();
        self.write_all(now)
    }

    /// One-line summary: aggregate, then every project with its time.
    pub fn status_line(&self) -> String {
        let running = self.registry.running();

        let cells: Vec<String> = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let secs = self
                    .registry
                    .timer(p.id)
                    .map(|t| t.elapsed_seconds())
                    .unwrap_or(0);
                let mark = if running == Some(p.id) { "*" } else { " " };
                format!("{}:{} {}{}", i + 1, p.name, format_hms(secs), mark)
            })
            .collect();

        format!(
            "[{}] {}",
            format_hms(self.registry.total_seconds()),
            cells.join(" | ")
        )
    }
}
