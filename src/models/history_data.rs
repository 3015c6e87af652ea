use chrono::NaiveDate;
use serde::Serialize;

/// Seconds spent on one project on one day.
///
/// Storage does not enforce one row per (project, date); callers look the
/// record up first and only insert when none exists.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryData {
    pub id: Option<i64>,  // ⇔ historydata.id, None until first save
    pub project_id: i64,  // ⇔ historydata.project_id
    pub date: NaiveDate,  // ⇔ historydata.date (TEXT "YYYY-MM-DD")
    pub time: i64,        // ⇔ historydata.time (seconds, never negative)
}

impl HistoryData {
    pub fn new(id: Option<i64>, project_id: i64, date: NaiveDate, time: i64) -> Self {
        Self {
            id,
            project_id,
            date,
            time: time.max(0),
        }
    }

    pub fn set_time(&mut self, seconds: i64) {
        self.time = seconds.max(0);
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl PartialEq for HistoryData {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.project_id == other.project_id && self.date == other.date,
        }
    }
}
