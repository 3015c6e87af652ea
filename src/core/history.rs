//! The history report: every past day as a row, every project as a column,
//! cells shaded by a white-to-black gradient over `[0, largest day total]`.

use crate::core::gradient::{Gradient, Rgb};
use crate::core::history_day::HistoryDay;
use crate::db::{HistoryStore, Store};
use crate::errors::{AppError, AppResult};
use crate::models::history_data::HistoryData;
use crate::models::project::{Project, sort_by_position};
use crate::ui::messages::{error, warning};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// A rendered cell: its seconds and the colours to paint it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub seconds: i64,
    pub background: Rgb,
    pub foreground: Rgb,
}

#[derive(Debug, Clone)]
pub struct History {
    projects: Vec<Project>,
    days: Vec<HistoryDay>,
    gradient: Option<Gradient>,
}

impl History {
    /// Load every record except those of `today`, grouped per day.
    ///
    /// A daily log that cannot be read only costs that day its start/end.
    pub fn load<S: Store + ?Sized>(store: &S, today: NaiveDate) -> AppResult<Self> {
        let projects = store.all_projects()?;

        let mut grouped: BTreeMap<NaiveDate, HashMap<i64, HistoryData>> = BTreeMap::new();
        for d in store.all_history()? {
            if d.date == today {
                continue;
            }
            grouped.entry(d.date).or_default().insert(d.project_id, d);
        }

        let days = grouped
            .into_iter()
            .map(|(date, entries)| {
                let log = store.daily_log_for_date(date).unwrap_or_else(|e| {
                    warning(format!("Daily log for {} unavailable: {}", date, e));
                    None
                });
                HistoryDay::new(date, entries, log)
            })
            .collect();

        Ok(Self::from_days(projects, days))
    }

    pub fn from_days(mut projects: Vec<Project>, mut days: Vec<HistoryDay>) -> Self {
        sort_by_position(&mut projects);
        days.sort_by_key(|d| d.day());

        let mut out = Self {
            projects,
            days,
            gradient: None,
        };
        out.refresh_gradient();
        out
    }

    /// Keep only the days within `[from, to]`; the gradient follows.
    pub fn retain_between(&mut self, from: NaiveDate, to: NaiveDate) {
        self.days.retain(|d| d.day() >= from && d.day() <= to);
        self.refresh_gradient();
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn days(&self) -> &[HistoryDay] {
        &self.days
    }

    pub fn gradient(&self) -> Option<&Gradient> {
        self.gradient.as_ref()
    }

    /// Largest day total, the top of the gradient.
    pub fn max_total(&self) -> Option<i64> {
        self.days.iter().map(HistoryDay::total).max()
    }

    fn refresh_gradient(&mut self) {
        let Some(max) = self.max_total() else {
            self.gradient = None;
            return;
        };

        match &mut self.gradient {
            Some(g) => g.set_max(max as f64),
            None => self.gradient = Gradient::heat(max as f64).ok(),
        }
    }

    /// Colour `seconds` on the current gradient.
    pub fn shade(&self, seconds: i64) -> Cell {
        let (background, foreground) = match &self.gradient {
            Some(g) => (g.color_for(seconds as f64), g.text_color_for(seconds as f64)),
            None => (Rgb::WHITE, Rgb::BLACK),
        };

        Cell {
            seconds,
            background,
            foreground,
        }
    }

    pub fn cell(&self, day: &HistoryDay, project: &Project) -> Cell {
        self.shade(day.time_for(project))
    }

    pub fn total_cell(&self, day: &HistoryDay) -> Cell {
        self.shade(day.total())
    }

    /// Overwrite one cell. Only days already in the report can be edited.
    pub fn set_time(&mut self, date: NaiveDate, project_id: i64, seconds: i64) -> AppResult<()> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or(AppError::ProjectNotFound(project_id))?;

        let day = self
            .days
            .iter_mut()
            .find(|d| d.day() == date)
            .ok_or_else(|| AppError::NoHistory(date.to_string()))?;

        day.set_time(&project, seconds.saturating_mul(1000));
        self.refresh_gradient();
        Ok(())
    }

    pub fn changed_days(&self) -> usize {
        self.days.iter().filter(|d| d.has_changed()).count()
    }

    /// Persist every changed day. Failures are printed and skipped;
    /// returns the number of days written.
    pub fn save_changed<S: HistoryStore + ?Sized>(&mut self, store: &S) -> usize {
        let mut saved = 0;

        for day in self.days.iter_mut().filter(|d| d.has_changed()) {
            match day.persist(store) {
                Ok(()) => saved += 1,
                Err(e) => error(format!("Failed to save history of {}: {}", day.day(), e)),
            }
        }

        saved
    }
}
