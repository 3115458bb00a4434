//! Time utilities: day-first parsing of export dates and calendar windows.

use anyhow::Result;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Reference instant used when the caller does not supply one.
pub const DEFAULT_REFERENCE: &str = "2021-12-31 16:44:00";

const REFERENCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DAY_FIRST_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

const DATETIME_FORMATS: [&str; 4] = [
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

/// Parse a date as it appears in a bank export, day first.
/// Date-only values land at midnight. Anything else is `None`.
pub fn parse_day_first(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Strict `YYYY-MM-DD HH:MM:SS` parse for reference instants.
pub fn parse_reference(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), REFERENCE_FORMAT)
        .map_err(|e| anyhow::anyhow!("invalid reference datetime '{raw}': {e}"))
}

/// The fixed fallback reference instant (2021-12-31 16:44:00).
pub fn default_reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 12, 31)
        .and_then(|d| d.and_hms_opt(16, 44, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Strict `YYYY-MM-DD` parse, returning midnight of that day.
pub fn parse_report_date(raw: &str) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| anyhow::anyhow!("invalid report date '{raw}': {e}"))
}

/// Convert `DD.MM.YYYY HH:MM:SS` into `YYYY-MM-DD HH:MM:SS`.
pub fn convert_date_format(raw: &str) -> Result<String> {
    let dt = NaiveDateTime::parse_from_str(raw.trim(), DAY_FIRST_FORMAT)
        .map_err(|e| anyhow::anyhow!("invalid day-first datetime '{raw}': {e}"))?;
    Ok(dt.format(REFERENCE_FORMAT).to_string())
}

/// First calendar day of the month of `dt`, at 00:00:00.
pub fn month_start(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date()
        .with_day(1)
        .unwrap_or(dt.date())
        .and_time(NaiveTime::MIN)
}

/// Shift `dt` back by whole calendar months, clamping the day when the
/// target month is shorter.
pub fn months_back(dt: NaiveDateTime, months: u32) -> NaiveDateTime {
    dt.checked_sub_months(Months::new(months)).unwrap_or(NaiveDateTime::MIN)
}

/// Whole days elapsed since the first of the month (the 1st is day 0).
pub fn days_into_month(dt: NaiveDateTime) -> u32 {
    dt.day0()
}

/// Render as `DD.MM.YYYY`.
pub fn format_day_first(dt: NaiveDateTime) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// `YYYY-MM` key of the month `dt` falls in.
pub fn month_key(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m").to_string()
}
