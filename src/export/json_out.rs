use super::model::DayExport;
use crate::errors::AppResult;

/// History rows as pretty-printed JSON.
pub fn to_json(rows: &[DayExport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
