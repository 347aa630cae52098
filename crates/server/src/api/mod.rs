use std::str::FromStr;

use acp_times::{compute_control_times, parse_start_time, ControlTimeError, ControlTimes};
use shared::{
    error::ErrorCode,
    protocol::{CalcTimesQuery, CalcTimesResult},
};
use tracing::{debug, warn};

/// Values used when the calculator page leaves a query parameter out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcDefaults {
    pub control_km: f64,
    pub brevet_km: i64,
}

impl Default for CalcDefaults {
    fn default() -> Self {
        Self {
            control_km: 999.0,
            brevet_km: 200,
        }
    }
}

pub fn calc_times(query: &CalcTimesQuery, defaults: CalcDefaults) -> CalcTimesResult {
    match control_times_for(query, defaults) {
        Ok(times) => CalcTimesResult::times(&times.open, &times.close),
        Err(error) => {
            warn!(%error, "control time request rejected");
            CalcTimesResult::failed(error_code(&error))
        }
    }
}

pub fn error_code(error: &ControlTimeError) -> ErrorCode {
    match error {
        ControlTimeError::InputType(_) => ErrorCode::InvalidInput,
        ControlTimeError::OutOfRange(_) => ErrorCode::OutOfRange,
        ControlTimeError::UnsupportedBrevet(_) => ErrorCode::UnsupportedBrevet,
        ControlTimeError::ControlBeyondBrevet { .. } => ErrorCode::ControlBeyondBrevet,
    }
}

fn control_times_for(
    query: &CalcTimesQuery,
    defaults: CalcDefaults,
) -> Result<ControlTimes, ControlTimeError> {
    let control_km = param_or("km", query.km.as_deref(), defaults.control_km)?;
    let brevet_km = param_or("brev_dist", query.brev_dist.as_deref(), defaults.brevet_km)?;
    let start_date = non_blank(query.start_date.as_deref())
        .ok_or_else(|| ControlTimeError::InputType("start_date is required".into()))?;
    let start = parse_start_time(start_date)?;
    debug!(control_km, brevet_km, %start, "calculating control times");

    compute_control_times(control_km, brevet_km, start)
}

fn param_or<T: FromStr>(name: &str, raw: Option<&str>, default: T) -> Result<T, ControlTimeError> {
    match non_blank(raw) {
        Some(value) => value
            .parse()
            .map_err(|_| ControlTimeError::InputType(format!("{name}={value} is not a number"))),
        None => Ok(default),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
