//! Cooperative fixed-interval scheduler for the single session loop.
//!
//! The loop asks for the next deadline, waits at most that long for input,
//! then collects the tasks that fell due. Nothing runs on another thread.

use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Tick,
    Autosave,
}

#[derive(Debug, Clone)]
struct Slot {
    task: Task,
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual session schedule: tick every second, autosave every 5 min.
    pub fn session(now: Instant) -> Self {
        let mut s = Self::new();
        s.every(Task::Tick, TICK_INTERVAL, now);
        s.every(Task::Autosave, AUTOSAVE_INTERVAL, now);
        s
    }

    /// Run `task` every `period`, first at `now + period`.
    pub fn every(&mut self, task: Task, period: Duration, now: Instant) {
        self.slots.push(Slot {
            task,
            period,
            next_due: now + period,
            cancelled: false,
        });
    }

    pub fn cancel(&mut self, task: Task) {
        for s in self.slots.iter_mut().filter(|s| s.task == task) {
            s.cancelled = true;
        }
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .filter(|s| !s.cancelled && !s.period.is_zero())
            .map(|s| s.next_due)
            .min()
    }

    /// Every occurrence due at `now`, oldest first.
    ///
    /// A loop that fell behind gets each missed occurrence, so one second of
    /// wall time is never counted twice nor lost.
    pub fn due(&mut self, now: Instant) -> Vec<Task> {
        let mut fired: Vec<(Instant, Task)> = Vec::new();

        for s in self.slots.iter_mut() {
            if s.cancelled || s.period.is_zero() {
                continue;
            }
            while s.next_due <= now {
                fired.push((s.next_due, s.task));
                s.next_due += s.period;
            }
        }

        fired.sort_by_key(|(at, _)| *at);
        fired.into_iter().map(|(_, task)| task).collect()
    }
}
