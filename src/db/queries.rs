//! Row mapping shared by the SQLite store.
//!
//! Malformed date/time text is reported as a `FromSqlConversionFailure`
//! wrapping the matching `AppError`, so parse failures surface as storage
//! errors at the data-access boundary.

use crate::errors::AppError;
use crate::models::daily_log::{DATE_FORMAT, DATE_TIME_FORMAT, DailyLog};
use crate::models::history_data::HistoryData;
use crate::models::project::Project;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{Result, Row};

pub const SELECT_PROJECTS: &str =
    "SELECT id, name, autostart, visibility, position FROM projects";

pub const SELECT_HISTORY: &str = "SELECT id, project_id, date, time FROM historydata";

pub const SELECT_DAILY_LOG: &str = r#"SELECT id, date, start, "end" FROM dailylog"#;

pub fn map_project(row: &Row) -> Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        autostart: row.get::<_, i64>("autostart")? != 0,
        visible: row.get::<_, i64>("visibility")? != 0,
        position: row.get("position")?,
    })
}

pub fn map_history(row: &Row) -> Result<HistoryData> {
    let date_str: String = row.get("date")?;

    Ok(HistoryData {
        id: Some(row.get("id")?),
        project_id: row.get("project_id")?,
        date: parse_date_column(2, &date_str)?,
        time: row.get::<_, i64>("time")?.max(0),
    })
}

pub fn map_daily_log(row: &Row) -> Result<DailyLog> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start")?;
    let end_str: String = row.get("end")?;

    Ok(DailyLog {
        id: Some(row.get("id")?),
        date: parse_date_column(1, &date_str)?,
        start: parse_date_time_column(2, &start_str)?,
        end: parse_date_time_column(3, &end_str)?,
    })
}

fn parse_date_column(idx: usize, s: &str) -> Result<NaiveDate> {
    // Rows written through SQLite's date() may carry a time suffix.
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_date_time_column(idx: usize, s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}
