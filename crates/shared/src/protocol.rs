use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

pub const CALC_TIMES_ROUTE: &str = "/_calc_times";

/// `strftime` pattern for times sent back to the calculator page.
pub const CONTROL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Shown in the open/close fields when a calculation fails, matching the
/// empty state of the page's datetime inputs.
pub const PLACEHOLDER_TIME: &str = "mm/dd/yyyy --:-- --";

/// Query string of `GET /_calc_times`.
///
/// Values stay as raw strings so that malformed numbers surface as an
/// `InvalidInput` code instead of a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcTimesQuery {
    pub km: Option<String>,
    pub brev_dist: Option<String>,
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcTimesResult {
    pub open: String,
    pub close: String,
    pub ecode: ErrorCode,
}

impl CalcTimesResult {
    pub fn times(open: &DateTime<FixedOffset>, close: &DateTime<FixedOffset>) -> Self {
        Self {
            open: format_control_time(open),
            close: format_control_time(close),
            ecode: ErrorCode::Ok,
        }
    }

    pub fn failed(code: ErrorCode) -> Self {
        Self {
            open: PLACEHOLDER_TIME.to_string(),
            close: PLACEHOLDER_TIME.to_string(),
            ecode: code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcTimesResponse {
    pub result: CalcTimesResult,
}

pub fn format_control_time(time: &DateTime<FixedOffset>) -> String {
    time.format(CONTROL_TIME_FORMAT).to_string()
}
