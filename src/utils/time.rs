//! Time utilities: HH:MM:SS formatting and parsing of second counts.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static HMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3}):([0-5]?\d)(?::([0-5]?\d))?$").unwrap());

/// `3725` → `"01:02:05"`. Hours are not wrapped at 24.
pub fn format_hms(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let s = seconds.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

/// Parse `HH:MM:SS` (or `HH:MM`) into seconds. An empty string is zero.
pub fn parse_hms(input: &str) -> AppResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    let caps = HMS
        .captures(input)
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))?;

    let field = |i: usize| -> i64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    Ok(field(1) * 3600 + field(2) * 60 + field(3))
}
