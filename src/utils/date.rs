use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `2025-10-11` → `"2025-10-11 Sat"`
pub fn day_with_weekday(d: NaiveDate) -> String {
    d.format("%Y-%m-%d %a").to_string()
}

/// First and last day covered by `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    if let Some(first) = parse_date(&format!("{}-01", p)) {
        let last = last_day_of_month(first.year(), first.month());
        return Ok((first, last));
    }

    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// A single period or a `start:end` range of periods.
pub fn resolve_range(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    match p.split_once(':') {
        Some((start, end)) => {
            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;
            if from > to {
                return Err(format!("Invalid range: {} is after {}", start, end));
            }
            Ok((from, to))
        }
        None => period_bounds(p),
    }
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
