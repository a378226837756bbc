//! Human-readable date rendering
//!
//! Input strings are parsed the way a browser `Date` constructor reads them:
//! offset-bearing timestamps are absolute, date-times without an offset are
//! wall-clock times in the configured zone, and bare ISO dates (including
//! `2024` and `2024-03`) are midnight UTC. Slash and month-name dates are
//! read as local midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::consts::{DISPLAY_FORMAT, INVALID_DATE};
use crate::utils::{DateLocale, Timezone, debug_enabled};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// Offset forms RFC 3339 rejects because the seconds are missing
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

const LEGACY_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d %Y"];

/// Locale and zone used for rendering. The default follows the host zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormatOptions {
    pub locale: DateLocale,
    pub timezone: Timezone,
}

impl DateFormatOptions {
    pub fn new(locale: DateLocale, timezone: Timezone) -> Self {
        Self { locale, timezone }
    }
}

/// Format a date string as e.g. `March 15, 2024 at 02:30 PM`.
///
/// Missing or empty input gives an empty string. Input that cannot be read
/// as a date gives [`INVALID_DATE`].
pub fn format_date(input: Option<&str>, options: &DateFormatOptions) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match parse_instant(raw.trim(), options.timezone) {
        Some(dt) => format_datetime(dt.with_timezone(&Utc), options),
        None => {
            if debug_enabled() {
                eprintln!("[DEBUG] Unrecognized date input: {raw:?}");
            }
            INVALID_DATE.to_string()
        }
    }
}

/// [`format_date`] with the host zone.
pub fn format_date_default(input: Option<&str>) -> String {
    format_date(input, &DateFormatOptions::default())
}

/// Render an already-parsed instant.
pub fn format_datetime(instant: DateTime<Utc>, options: &DateFormatOptions) -> String {
    let local = options.timezone.to_fixed_offset(instant);
    let pattern = match options.locale {
        DateLocale::EnUs => DISPLAY_FORMAT,
    };
    local.format(pattern).to_string()
}

fn parse_instant(s: &str, timezone: Timezone) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }
    // Offset-less forms with a trailing Z, e.g. "2024-03-15T14:30Z"
    let zulu = s.strip_suffix('Z').or_else(|| s.strip_suffix('z'));
    if let Some(naive) = zulu.and_then(parse_naive) {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Some(naive) = parse_naive(s) {
        return timezone.resolve_local(naive);
    }
    if let Some(date) = parse_iso_date(s) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().fixed_offset());
    }
    LEGACY_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|naive| timezone.resolve_local(naive))
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; missing parts default to the first.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        4 if s.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
        }
        7 => NaiveDate::parse_from_str(&format!("{s}-01"), DATE_ONLY_FORMAT).ok(),
        10 => NaiveDate::parse_from_str(s, DATE_ONLY_FORMAT).ok(),
        _ => None,
    }
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
