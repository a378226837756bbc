use chrono::offset::{LocalResult, Offset};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone that wall-clock input is interpreted in and output is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    /// Whatever the host is configured with
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => fix(utc.with_timezone(&Local)),
            Timezone::Named(tz) => fix(utc.with_timezone(&tz)),
        }
    }

    /// Pin a wall-clock time to an instant in this zone.
    ///
    /// Ambiguous times (DST fall-back) take the earlier instant. Times inside a
    /// DST gap are moved forward by an hour, which lands past the gap for every
    /// zone with a one-hour shift.
    pub(crate) fn resolve_local(self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Timezone::Local => resolve_in(&Local, naive),
            Timezone::Named(tz) => resolve_in(&tz, naive),
        }
    }
}

fn fix<Z: TimeZone>(dt: DateTime<Z>) -> DateTime<FixedOffset> {
    let offset = dt.offset().fix();
    dt.with_timezone(&offset)
}

fn resolve_in<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(fix(dt)),
        LocalResult::Ambiguous(earliest, _) => Some(fix(earliest)),
        LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::hours(1))?;
            zone.from_local_datetime(&shifted).earliest().map(fix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_empty_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_local_string_returns_local() {
        for raw in ["local", "LOCAL", "Local", "  local  "] {
            assert!(matches!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Local
            ));
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z", "  UTC  "] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn to_fixed_offset_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let fixed = tz.to_fixed_offset(utc);
        // EDT is UTC-4 in June
        assert_eq!(fixed.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(fixed.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn resolve_local_plain_time_keeps_wall_clock() {
        let tz = Timezone::Named(chrono_tz::Asia::Tokyo);
        let dt = tz.resolve_local(naive(2024, 3, 15, 14, 30)).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(dt.format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn resolve_local_ambiguous_takes_earlier() {
        // 2024-11-03 01:30 happens twice in New York
        let tz = Timezone::Named(chrono_tz::America::New_York);
        let dt = tz.resolve_local(naive(2024, 11, 3, 1, 30)).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn resolve_local_gap_moves_forward() {
        // 2024-03-10 02:30 does not exist in New York
        let tz = Timezone::Named(chrono_tz::America::New_York);
        let dt = tz.resolve_local(naive(2024, 3, 10, 2, 30)).unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "03:30");
        assert_eq!(dt.offset().local_minus_utc(), -4 * 3600);
    }
}
