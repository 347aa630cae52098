//! Control open and close times for ACP-sanctioned brevets.
//!
//! A control opens once a rider at the maximum permitted speed could have
//! reached it and closes once a rider at the minimum permitted speed would
//! have. Both speeds are tiered: each band's speed only applies to the part
//! of the distance that falls inside that band.

use chrono::{DateTime, FixedOffset};
use shared::domain::{BrevetDistance, UnsupportedBrevet, MAX_CONTROL_KM};
use thiserror::Error;
use tracing::debug;

mod start_time;
mod time_shift;

pub use start_time::parse_start_time;
pub use time_shift::TimeShift;

pub type ControlTime = DateTime<FixedOffset>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlTimeError {
    #[error("invalid input: {0}")]
    InputType(String),
    #[error("control distance {0} km is outside 0..=1000 km")]
    OutOfRange(f64),
    #[error(transparent)]
    UnsupportedBrevet(#[from] UnsupportedBrevet),
    #[error("control at {control_km} km lies beyond the {brevet} brevet")]
    ControlBeyondBrevet {
        control_km: f64,
        brevet: BrevetDistance,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SpeedBand {
    width_km: f64,
    speed_kmh: f64,
}

const fn band(width_km: f64, speed_kmh: f64) -> SpeedBand {
    SpeedBand {
        width_km,
        speed_kmh,
    }
}

/// Maximum speeds for 0-200, 200-400, 400-600 and 600-1000 km.
const OPEN_SPEEDS: [SpeedBand; 4] = [
    band(200.0, 34.0),
    band(200.0, 32.0),
    band(200.0, 30.0),
    band(400.0, 28.0),
];

/// Minimum speeds: 15 km/h up to 600 km, 11.428 km/h for everything past it.
const CLOSE_SPEEDS: [SpeedBand; 2] = [band(600.0, 15.0), band(f64::INFINITY, 11.428)];

/// No control closes earlier than this after the start. Applying it to every
/// control, not only the one at 0 km, keeps closing times monotonic in
/// distance: controls under 15 km all close at the one hour mark.
const START_CONTROL_CLOSE: TimeShift = TimeShift {
    hours: 1,
    minutes: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlTimes {
    pub open: ControlTime,
    pub close: ControlTime,
}

/// Checks the inputs shared by both calculations, in the order callers
/// rely on: finiteness, physical range, sanctioned length, then fit.
pub fn validate_control(
    control_km: f64,
    brevet_km: i64,
) -> Result<BrevetDistance, ControlTimeError> {
    if !control_km.is_finite() {
        return Err(ControlTimeError::InputType(format!(
            "control distance must be a finite number, got {control_km}"
        )));
    }
    if !(0.0..=MAX_CONTROL_KM).contains(&control_km) {
        return Err(ControlTimeError::OutOfRange(control_km));
    }
    let brevet = BrevetDistance::try_from(brevet_km)?;
    if control_km > f64::from(brevet.km()) {
        return Err(ControlTimeError::ControlBeyondBrevet { control_km, brevet });
    }
    Ok(brevet)
}

pub fn compute_open_time(
    control_km: f64,
    brevet_km: i64,
    start: ControlTime,
) -> Result<ControlTime, ControlTimeError> {
    let brevet = validate_control(control_km, brevet_km)?;
    let shift = open_shift(control_km);
    debug!(
        control_km,
        brevet = brevet.km(),
        hours = shift.hours,
        minutes = shift.minutes,
        "open time shift"
    );
    shift.apply(start)
}

pub fn compute_close_time(
    control_km: f64,
    brevet_km: i64,
    start: ControlTime,
) -> Result<ControlTime, ControlTimeError> {
    let brevet = validate_control(control_km, brevet_km)?;
    let shift = close_shift(control_km);
    debug!(
        control_km,
        brevet = brevet.km(),
        hours = shift.hours,
        minutes = shift.minutes,
        "close time shift"
    );
    shift.apply(start)
}

pub fn compute_control_times(
    control_km: f64,
    brevet_km: i64,
    start: ControlTime,
) -> Result<ControlTimes, ControlTimeError> {
    Ok(ControlTimes {
        open: compute_open_time(control_km, brevet_km, start)?,
        close: compute_close_time(control_km, brevet_km, start)?,
    })
}

/// Offset from the start at which a control `control_km` in opens.
pub fn open_shift(control_km: f64) -> TimeShift {
    TimeShift::from_decimal_hours(tiered_hours(control_km, &OPEN_SPEEDS))
}

/// Offset from the start at which a control `control_km` in closes.
pub fn close_shift(control_km: f64) -> TimeShift {
    let shift = TimeShift::from_decimal_hours(tiered_hours(control_km, &CLOSE_SPEEDS));
    shift.max(START_CONTROL_CLOSE)
}

fn tiered_hours(distance_km: f64, bands: &[SpeedBand]) -> f64 {
    let mut remaining = distance_km;
    let mut hours = 0.0;
    for band in bands {
        if remaining > band.width_km {
            hours += band.width_km / band.speed_kmh;
            remaining -= band.width_km;
        } else {
            hours += remaining / band.speed_kmh;
            break;
        }
    }
    hours
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
