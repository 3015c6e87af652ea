//! Console messages: the application's logging surface.
//!
//! Status goes to stdout, errors to stderr. Colours are dropped when
//! `NO_COLOR` is set.

use std::env;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn coloured() -> bool {
    env::var_os("NO_COLOR").is_none()
}

fn line(level: Level, msg: &dyn fmt::Display) -> String {
    if coloured() {
        format!("{}{}{} {}{}", level.colour(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, &msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, &msg));
}

/// Section header above a report or session.
pub fn header<T: fmt::Display>(msg: T) {
    if coloured() {
        println!("{}{}== {} =={}", Level::Info.colour(), BOLD, msg, RESET);
    } else {
        println!("== {} ==", msg);
    }
}

/// Redraw the current terminal line in place (no newline).
pub fn status<T: fmt::Display>(msg: T) {
    print!("\r{}\x1b[K", msg);
    let _ = io::stdout().flush();
}
