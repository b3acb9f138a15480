use std::env;
use std::sync::OnceLock;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

const TIMEZONE_ENV_VAR: &str = "RECRUIT_TIMEZONE";

static PROJECT_TZ: OnceLock<Option<Tz>> = OnceLock::new();

/// Installs the configured timezone for "today" computations. The
/// RECRUIT_TIMEZONE environment variable takes precedence over the config
/// value; the first caller wins.
pub fn init_timezone(configured: Option<&str>) {
    let resolved = resolve_timezone(configured);
    if PROJECT_TZ.set(resolved).is_err() {
        debug!("project timezone already initialized");
    }
}

fn resolve_timezone(configured: Option<&str>) -> Option<Tz> {
    let name = env::var(TIMEZONE_ENV_VAR)
        .ok()
        .or_else(|| configured.map(ToString::to_string))?;

    match name.parse::<Tz>() {
        Ok(tz) => {
            debug!(timezone = %tz, "resolved project timezone");
            Some(tz)
        }
        Err(_) => {
            warn!(timezone = %name, "unknown timezone name, using local offset");
            None
        }
    }
}

/// Current date in the project timezone, or the machine-local offset when
/// none is configured.
pub fn today() -> NaiveDate {
    match PROJECT_TZ.get().copied().flatten() {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

pub fn today_iso() -> String {
    iso_date(today())
}

/// `YYYY-MM-DD`, zero padded. This exact string is the calendar join key.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

pub fn parse_clock(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .with_context(|| format!("invalid time (expected HH:MM): {raw}"))
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `YYYY-MM-DDTHH:MM` (or with a space), taken as UTC.
pub fn parse_iso_datetime(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .with_context(|| format!("invalid datetime (expected YYYY-MM-DDTHH:MM): {raw}"))?;
    Ok(naive.and_utc())
}

/// `YYYY-MM` month selector used by the calendar command.
pub fn parse_year_month(raw: &str) -> anyhow::Result<(i32, u32)> {
    let (year_raw, month_raw) = raw
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("invalid month (expected YYYY-MM): {raw}"))?;

    let year: i32 = year_raw
        .parse()
        .with_context(|| format!("invalid year in: {raw}"))?;
    let month: u32 = month_raw
        .parse()
        .with_context(|| format!("invalid month in: {raw}"))?;

    if !(1..=12).contains(&month) {
        return Err(anyhow!("month out of range (1-12): {raw}"));
    }

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{iso_date, parse_clock, parse_iso_date, parse_year_month};

    #[test]
    fn iso_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(iso_date(date), "2024-01-05");
    }

    #[test]
    fn parses_and_rejects_month_selectors() {
        assert_eq!(parse_year_month("2024-01").expect("valid"), (2024, 1));
        assert_eq!(parse_year_month("2023-12").expect("valid"), (2023, 12));
        assert!(parse_year_month("2024-13").is_err());
        assert!(parse_year_month("January").is_err());
    }

    #[test]
    fn clock_times_are_hh_mm() {
        assert!(parse_clock("09:00").is_ok());
        assert!(parse_clock("9am").is_err());
        assert!(parse_iso_date("2024-02-30").is_err());
    }
}
