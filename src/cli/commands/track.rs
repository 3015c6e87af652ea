//! Interactive tracking session.
//!
//! A reader thread forwards stdin lines over a channel; the main loop waits
//! on that channel until the scheduler's next deadline, so ticks, autosaves
//! and commands are all handled on this thread.

use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scheduler::{Scheduler, Task};
use crate::core::tracker::{Command, Tracker};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, status, success, warning};
use crate::utils::date;

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Track) {
        return Ok(());
    }

    let store = open_store(cfg)?;
    if cfg.read_only {
        warning("Read-only mode: times will not be saved");
    }

    let mut tracker = Tracker::open(&store, date::now())?;

    header(format!("Tracking {}", tracker.date()));
    info("Type a project number to start it, `s` to stop, `w` to save, `q` to quit.");
    info("`t <n> HH:MM[:SS]` corrects the time of project <n>.");
    for (i, p) in tracker.projects().iter().enumerate() {
        println!("  {:>2}  {}", i + 1, p.name);
    }

    let input = spawn_stdin_reader();
    let mut scheduler = Scheduler::session(Instant::now());
    if cfg.read_only {
        scheduler.cancel(Task::Autosave);
    }
    status(tracker.status_line());

    loop {
        let wait = scheduler
            .next_deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or_default();

        match input.recv_timeout(wait) {
            Ok(line) => {
                println!();
                match Command::parse(&line) {
                    Some(c) => match tracker.apply(&c, date::now()) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => error(e),
                    },
                    None if line.trim().is_empty() => {}
                    None => warning(format!("Unknown command: {}", line.trim())),
                }
                status(tracker.status_line());
            }
            Err(RecvTimeoutError::Timeout) => {}
            // stdin closed
            Err(RecvTimeoutError::Disconnected) => {
                println!();
                break;
            }
        }

        for task in scheduler.due(Instant::now()) {
            match task {
                Task::Tick => {
                    tracker.tick();
                }
                Task::Autosave => {
                    let failed = tracker.write_all(date::now());
                    if failed > 0 {
                        println!();
                        warning(format!("Autosave: {} write(s) failed", failed));
                    }
                }
            }
        }
        status(tracker.status_line());
    }

    let failed = tracker.close(date::now());
    if failed == 0 {
        success(format!("Session saved: {}", tracker.status_line()));
    } else {
        warning(format!("Session closed with {} failed write(s)", failed));
    }

    Ok(())
}
