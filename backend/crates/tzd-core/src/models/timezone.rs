//! Fixed catalog of UTC-offset timezones offered to members.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// One selectable timezone.
///
/// `value` is what gets stored on a [`crate::UserRecord`]; `label` is only
/// shown in menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneOption {
    pub label: &'static str,
    pub value: &'static str,
    /// Signed offset from UTC in minutes
    pub offset_minutes: i32,
}

impl TimezoneOption {
    const fn new(label: &'static str, value: &'static str, offset_minutes: i32) -> Self {
        Self {
            label,
            value,
            offset_minutes,
        }
    }
}

pub const TIMEZONES: &[TimezoneOption] = &[
    TimezoneOption::new("UTC-12", "UTC-12:00", -720),
    TimezoneOption::new("UTC-11", "UTC-11:00", -660),
    TimezoneOption::new("UTC-10", "UTC-10:00", -600),
    TimezoneOption::new("UTC-9", "UTC-09:00", -540),
    TimezoneOption::new("UTC-8 (PST)", "UTC-08:00", -480),
    TimezoneOption::new("UTC-7 (MST)", "UTC-07:00", -420),
    TimezoneOption::new("UTC-6 (CST)", "UTC-06:00", -360),
    TimezoneOption::new("UTC-5 (EST)", "UTC-05:00", -300),
    TimezoneOption::new("UTC-4 (AST)", "UTC-04:00", -240),
    TimezoneOption::new("UTC-3", "UTC-03:00", -180),
    TimezoneOption::new("UTC-2", "UTC-02:00", -120),
    TimezoneOption::new("UTC-1", "UTC-01:00", -60),
    TimezoneOption::new("UTC+0 (GMT)", "UTC+00:00", 0),
    TimezoneOption::new("UTC+1 (CET)", "UTC+01:00", 60),
    TimezoneOption::new("UTC+2 (EET)", "UTC+02:00", 120),
    TimezoneOption::new("UTC+3 (MSK)", "UTC+03:00", 180),
    TimezoneOption::new("UTC+4", "UTC+04:00", 240),
    TimezoneOption::new("UTC+5", "UTC+05:00", 300),
    TimezoneOption::new("UTC+5:30 (IST)", "UTC+05:30", 330),
    TimezoneOption::new("UTC+6", "UTC+06:00", 360),
    TimezoneOption::new("UTC+7", "UTC+07:00", 420),
    TimezoneOption::new("UTC+8 (CST)", "UTC+08:00", 480),
    TimezoneOption::new("UTC+9 (JST)", "UTC+09:00", 540),
    TimezoneOption::new("UTC+10", "UTC+10:00", 600),
    TimezoneOption::new("UTC+11", "UTC+11:00", 660),
];

pub struct TimezoneCatalog;

impl TimezoneCatalog {
    pub fn options() -> &'static [TimezoneOption] {
        TIMEZONES
    }

    /// Look up a catalog entry by its stored value (`UTC+05:30`)
    pub fn find(value: &str) -> Option<&'static TimezoneOption> {
        TIMEZONES.iter().find(|tz| tz.value == value)
    }

    /// Ensure `value` is one of the catalog's stored values.
    #[track_caller]
    pub fn validate(value: &str) -> CoreErrorResult<&'static str> {
        Self::find(value)
            .map(|tz| tz.value)
            .ok_or_else(|| CoreError::InvalidTimezone {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Parse a `UTC±HH[:MM]` label into signed minutes.
///
/// Returns `None` for anything that doesn't follow that shape; callers treat
/// such labels as unsortable.
pub fn parse_utc_offset(label: &str) -> Option<i32> {
    let rest = label.strip_prefix("UTC")?;

    let (sign, rest) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (rest, None),
    };

    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;

    let minutes: i32 = match minutes {
        None => 0,
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
    };

    if hours > 14 || minutes >= 60 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}
