use crate::core::history::History;
use crate::utils::time::format_hms;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProjectTime {
    pub project: String,
    pub seconds: i64,
}

/// Flat view of one history row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub date: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub projects: Vec<ProjectTime>,
    pub total: i64,
}

/// Rows in date order, one `ProjectTime` per project column.
pub fn history_rows(history: &History) -> Vec<DayExport> {
    history
        .days()
        .iter()
        .map(|day| DayExport {
            date: day.day().format("%Y-%m-%d").to_string(),
            start: day.daily_log().map(|l| l.start.format("%H:%M:%S").to_string()),
            end: day.daily_log().map(|l| l.end.format("%H:%M:%S").to_string()),
            projects: history
                .projects()
                .iter()
                .map(|p| ProjectTime {
                    project: p.name.clone(),
                    seconds: day.time_for(p),
                })
                .collect(),
            total: day.total(),
        })
        .collect()
}

/// Header: date, start, end, one column per project, sum.
pub(crate) fn headers(history: &History) -> Vec<String> {
    let mut h = vec!["date".to_string(), "start".to_string(), "end".to_string()];
    h.extend(history.projects().iter().map(|p| p.name.clone()));
    h.push("sum".to_string());
    h
}

pub(crate) fn row_to_strings(row: &DayExport) -> Vec<String> {
    let mut out = vec![
        row.date.clone(),
        row.start.clone().unwrap_or_default(),
        row.end.clone().unwrap_or_default(),
    ];
    out.extend(row.projects.iter().map(|p| format_hms(p.seconds)));
    out.push(format_hms(row.total));
    out
}
