use super::model::{DayExport, row_to_strings};
use crate::errors::{AppError, AppResult};
use csv::Writer;

/// History rows as CSV, durations formatted `HH:MM:SS`.
pub fn to_csv(headers: &[String], rows: &[DayExport]) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row_to_strings(row))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
