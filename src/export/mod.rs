mod csv_out;
mod json_out;
mod model;
mod table;

pub use model::{DayExport, ProjectTime, history_rows};

use crate::core::history::History;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Table,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Table => "table",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Render the report. Tables are coloured only when `colored` is set.
pub fn render(history: &History, format: ExportFormat, colored: bool) -> AppResult<String> {
    match format {
        ExportFormat::Table => Ok(table::to_table(history, colored)),
        ExportFormat::Json => json_out::to_json(&history_rows(history)),
        ExportFormat::Csv => csv_out::to_csv(&model::headers(history), &history_rows(history)),
    }
}

/// Render into a file (never coloured).
pub fn write_to(history: &History, format: ExportFormat, path: &Path) -> AppResult<()> {
    let content = render(history, format, false)?;
    fs::write(path, content)?;
    success(format!(
        "{} export completed: {}",
        format.as_str(),
        path.display()
    ));
    Ok(())
}
