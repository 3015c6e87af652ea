use super::SqliteStore;
use super::queries::{SELECT_HISTORY, map_history};
use super::store::{HistoryStore, ProjectStore};
use crate::errors::AppResult;
use crate::models::daily_log::DATE_FORMAT;
use crate::models::history_data::HistoryData;
use crate::models::project::Project;
use chrono::NaiveDate;
use rusqlite::params;
use std::collections::HashMap;

impl HistoryStore for SqliteStore {
    fn all_history(&self) -> AppResult<Vec<HistoryData>> {
        self.pool().with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_HISTORY)?;
            let rows = stmt.query_map([], map_history)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    fn history_for_date(&self, date: NaiveDate) -> AppResult<HashMap<i64, HistoryData>> {
        let date_str = date.format(DATE_FORMAT).to_string();

        self.pool().with_conn(|conn| {
            let sql = format!("{SELECT_HISTORY} WHERE date(date) = ?1 ORDER BY id ASC");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([date_str], map_history)?;

            // Later rows win if duplicates slipped in.
            let mut out = HashMap::new();
            for r in rows {
                let record = r?;
                out.insert(record.project_id, record);
            }
            Ok(out)
        })
    }

    fn save_history(&self, record: &HistoryData) -> AppResult<HistoryData> {
        if self.is_read_only() {
            return Ok(record.clone());
        }

        // The project may have been deleted while the record was in memory.
        if self.project_by_id(record.project_id)?.is_none() {
            return Ok(record.clone());
        }

        self.pool().with_conn(|conn| {
            let mut saved = record.clone();

            match record.id {
                Some(id) => {
                    conn.execute(
                        "UPDATE historydata SET project_id = ?1, date = ?2, time = ?3 WHERE id = ?4",
                        params![record.project_id, record.date_str(), record.time, id],
                    )?;
                }
                None => {
                    conn.execute(
                        "INSERT INTO historydata (project_id, date, time) VALUES (?1, ?2, ?3)",
                        params![record.project_id, record.date_str(), record.time],
                    )?;
                    saved.id = Some(conn.last_insert_rowid());
                }
            }

            Ok(saved)
        })
    }

    fn delete_history_for_project(&self, project: &Project) -> AppResult<bool> {
        if self.is_read_only() {
            return Ok(false);
        }

        // Zero matching rows is not an error.
        self.pool().with_conn(|conn| {
            conn.execute("DELETE FROM historydata WHERE project_id = ?1", [project.id])?;
            Ok(true)
        })
    }
}
