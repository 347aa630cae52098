use chrono::Duration;

use crate::{ControlTime, ControlTimeError};

/// Whole hours and minutes added to a brevet's start time.
///
/// Minutes are always normalized into `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeShift {
    pub hours: i64,
    pub minutes: i64,
}

impl TimeShift {
    /// Splits decimal hours (1.5 = 1h30) into hours and minutes, rounding the
    /// fractional hour to the nearest minute with halves rounding up.
    pub fn from_decimal_hours(decimal_hours: f64) -> Self {
        let whole = decimal_hours.trunc();
        let minutes = ((decimal_hours - whole) * 60.0).round() as i64;
        let hours = whole as i64;
        // 59.5 minutes and up rounds into the next hour.
        Self {
            hours: hours + minutes / 60,
            minutes: minutes % 60,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::hours(self.hours) + Duration::minutes(self.minutes)
    }

    pub fn apply(self, start: ControlTime) -> Result<ControlTime, ControlTimeError> {
        start.checked_add_signed(self.duration()).ok_or_else(|| {
            ControlTimeError::InputType(format!("start time {start} is too late to shift"))
        })
    }
}
