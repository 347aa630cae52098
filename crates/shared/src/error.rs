use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome codes carried in the `ecode` field of a calculation response.
///
/// The numeric values are part of the wire contract with the calculator page
/// and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ErrorCode {
    Ok,
    OutOfRange,
    ControlBeyondBrevet,
    UnsupportedBrevet,
    InvalidInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code {0}")]
pub struct UnknownErrorCode(pub u8);

impl ErrorCode {
    pub fn ecode(self) -> u8 {
        match self {
            ErrorCode::Ok => 0,
            ErrorCode::OutOfRange => 1,
            ErrorCode::ControlBeyondBrevet => 2,
            ErrorCode::UnsupportedBrevet => 3,
            ErrorCode::InvalidInput => 4,
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, ErrorCode::Ok)
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Ok),
            1 => Ok(ErrorCode::OutOfRange),
            2 => Ok(ErrorCode::ControlBeyondBrevet),
            3 => Ok(ErrorCode::UnsupportedBrevet),
            4 => Ok(ErrorCode::InvalidInput),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(value: ErrorCode) -> Self {
        value.ecode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ControlBeyondBrevet).expect("json"),
            "2"
        );
        let code: ErrorCode = serde_json::from_str("1").expect("code");
        assert_eq!(code, ErrorCode::OutOfRange);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(ErrorCode::try_from(9), Err(UnknownErrorCode(9)));
    }
}
