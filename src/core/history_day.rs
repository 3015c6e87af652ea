use crate::db::HistoryStore;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::models::history_data::HistoryData;
use crate::models::project::Project;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One calendar day of per-project time, with change tracking so edits can
/// be written back later.
#[derive(Debug, Clone)]
pub struct HistoryDay {
    day: NaiveDate,
    entries: HashMap<i64, HistoryData>, // project id → record
    original: HashMap<i64, i64>,        // project id → seconds at construction
    daily_log: Option<DailyLog>,
    total: i64,
    max_time: i64,
}

impl HistoryDay {
    /// `entries` may be partial: projects without a record count as 0.
    pub fn new(
        day: NaiveDate,
        entries: HashMap<i64, HistoryData>,
        daily_log: Option<DailyLog>,
    ) -> Self {
        let original = entries
            .iter()
            .map(|(project_id, d)| (*project_id, d.time))
            .collect();

        let mut out = Self {
            day,
            entries,
            original,
            daily_log,
            total: 0,
            max_time: 0,
        };
        out.recompute();
        out
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn daily_log(&self) -> Option<&DailyLog> {
        self.daily_log.as_ref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryData> {
        self.entries.values()
    }

    /// Sum of the current seconds of every entry.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Largest current entry, 0 for an empty day.
    pub fn max_time(&self) -> i64 {
        self.max_time
    }

    pub fn time_for(&self, project: &Project) -> i64 {
        self.entries.get(&project.id).map(|d| d.time).unwrap_or(0)
    }

    /// Set the time of `project` from milliseconds.
    ///
    /// Sub-second precision is dropped (integer division by 1000).
    pub fn set_time(&mut self, project: &Project, millis: i64) {
        let seconds = millis / 1000;

        match self.entries.get_mut(&project.id) {
            Some(d) => d.set_time(seconds),
            None => {
                let d = HistoryData::new(None, project.id, self.day, seconds);
                self.entries.insert(project.id, d);
                self.original.insert(project.id, 0);
            }
        }

        self.recompute();
    }

    pub fn has_changed(&self) -> bool {
        self.entries
            .iter()
            .any(|(project_id, d)| self.original.get(project_id).copied().unwrap_or(0) != d.time)
    }

    /// Write every entry, changed or not. Stops at the first storage error.
    pub fn persist<S: HistoryStore + ?Sized>(&mut self, store: &S) -> AppResult<()> {
        for d in self.entries.values_mut() {
            let saved = store.save_history(d)?;
            d.id = saved.id;
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.total = self.entries.values().map(|d| d.time).sum();
        self.max_time = self.entries.values().map(|d| d.time).max().unwrap_or(0);
    }
}
