use super::SqliteStore;
use super::queries::{SELECT_DAILY_LOG, map_daily_log};
use super::store::DailyLogStore;
use crate::errors::AppResult;
use crate::models::daily_log::{DATE_FORMAT, DailyLog};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

impl DailyLogStore for SqliteStore {
    fn daily_log_for_date(&self, date: NaiveDate) -> AppResult<Option<DailyLog>> {
        let date_str = date.format(DATE_FORMAT).to_string();

        self.pool().with_conn(|conn| {
            let sql = format!("{SELECT_DAILY_LOG} WHERE date(date) = ?1 ORDER BY id ASC LIMIT 1");
            let log = conn.query_row(&sql, [date_str], map_daily_log).optional()?;
            Ok(log)
        })
    }

    fn save_daily_log(&self, log: &DailyLog) -> AppResult<DailyLog> {
        if self.is_read_only() {
            return Ok(log.clone());
        }

        self.pool().with_conn(|conn| {
            let mut saved = log.clone();

            match log.id {
                Some(id) => {
                    conn.execute(
                        r#"UPDATE dailylog SET date = ?1, start = ?2, "end" = ?3 WHERE id = ?4"#,
                        params![log.date_str(), log.start_str(), log.end_str(), id],
                    )?;
                }
                None => {
                    conn.execute(
                        r#"INSERT INTO dailylog (date, start, "end") VALUES (?1, ?2, ?3)"#,
                        params![log.date_str(), log.start_str(), log.end_str()],
                    )?;
                    saved.id = Some(conn.last_insert_rowid());
                }
            }

            Ok(saved)
        })
    }
}
