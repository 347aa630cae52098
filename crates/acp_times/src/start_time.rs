use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{ControlTime, ControlTimeError};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a brevet start time.
///
/// Accepts RFC 3339 timestamps, which keep their offset, plus offset-less
/// date-times and bare dates, which are taken as UTC.
pub fn parse_start_time(raw: &str) -> Result<ControlTime, ControlTimeError> {
    let raw = raw.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(time);
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }

    Err(ControlTimeError::InputType(format!(
        "'{raw}' is not a recognizable start time"
    )))
}
