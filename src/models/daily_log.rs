use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start/end bracket of the tracked work session of one day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyLog {
    pub id: Option<i64>,
    pub date: NaiveDate,      // ⇔ dailylog.date  (TEXT "YYYY-MM-DD")
    pub start: NaiveDateTime, // ⇔ dailylog.start (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end: NaiveDateTime,   // ⇔ dailylog.end   (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl DailyLog {
    /// A fresh, unsaved log opened and closed at `now`.
    pub fn open_at(now: NaiveDateTime) -> Self {
        Self {
            id: None,
            date: now.date(),
            start: now,
            end: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_TIME_FORMAT).to_string()
    }
}

impl PartialEq for DailyLog {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
