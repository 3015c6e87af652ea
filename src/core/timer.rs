//! Per-project stopwatches and the registry that keeps at most one running.

use crate::errors::{AppError, AppResult};
use crate::models::history_data::HistoryData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Stopped,
    Running,
}

/// A single-project stopwatch counting whole seconds.
#[derive(Debug, Clone)]
pub struct Timer {
    project_id: i64,
    state: TimerState,
    elapsed: i64,
}

impl Timer {
    pub fn new(project_id: i64, elapsed: i64) -> Self {
        Self {
            project_id,
            state: TimerState::Stopped,
            elapsed: elapsed.max(0),
        }
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Returns `false` when the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = TimerState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Count one second if running.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed += 1;
        }
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed
    }

    /// Overwrite the accumulated time; negative values become 0.
    pub fn set_elapsed(&mut self, seconds: i64) {
        self.elapsed = seconds.max(0);
    }
}

/// A timer together with the record it accumulates into.
#[derive(Debug, Clone)]
pub struct TimerEntry {
    pub timer: Timer,
    pub record: HistoryData,
}

/// All timers of a tracking session, in display order.
///
/// Owned by the session controller. Starting a timer through the registry
/// stops every other one, so at most one timer runs at any time.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    entries: Vec<TimerEntry>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stopped timer seeded with the record's seconds.
    pub fn register(&mut self, record: HistoryData) {
        let timer = Timer::new(record.project_id, record.time);
        self.entries.push(TimerEntry { timer, record });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimerEntry] {
        &self.entries
    }

    pub fn timer(&self, project_id: i64) -> Option<&Timer> {
        self.entries
            .iter()
            .map(|e| &e.timer)
            .find(|t| t.project_id() == project_id)
    }

    /// Start the timer of `project_id` and stop all others.
    ///
    /// Returns `Ok(false)` when it was already running (nothing changes).
    pub fn start_exclusive(&mut self, project_id: i64) -> AppResult<bool> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.timer.project_id() == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;

        if !self.entries[idx].timer.start() {
            return Ok(false);
        }

        for (i, e) in self.entries.iter_mut().enumerate() {
            if i != idx {
                e.timer.stop();
            }
        }
        Ok(true)
    }

    /// Correct the accumulated time of one timer. Its state is unchanged.
    pub fn set_elapsed(&mut self, project_id: i64, seconds: i64) -> AppResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.timer.project_id() == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;

        entry.timer.set_elapsed(seconds);
        Ok(())
    }

    pub fn stop(&mut self, project_id: i64) {
        if let Some(e) = self
            .entries
            .iter_mut()
            .find(|e| e.timer.project_id() == project_id)
        {
            e.timer.stop();
        }
    }

    pub fn stop_all(&mut self) {
        for e in &mut self.entries {
            e.timer.stop();
        }
    }

    /// Project id of the running timer, if any.
    pub fn running(&self) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.timer.is_running())
            .map(|e| e.timer.project_id())
    }

    /// Advance running timers by one second; returns the new aggregate.
    pub fn tick(&mut self) -> i64 {
        for e in &mut self.entries {
            e.timer.tick();
        }
        self.total_seconds()
    }

    /// Sum of all timers, running or not.
    pub fn total_seconds(&self) -> i64 {
        self.entries.iter().map(|e| e.timer.elapsed_seconds()).sum()
    }

    /// Copy every timer's seconds into its record.
    pub fn sync_records(&mut self) {
        for e in &mut self.entries {
            e.record.set_time(e.timer.elapsed_seconds());
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &HistoryData> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut HistoryData> {
        self.entries.iter_mut().map(|e| &mut e.record)
    }
}
