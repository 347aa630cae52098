use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest control distance, in kilometers, any brevet can carry.
pub const MAX_CONTROL_KM: f64 = 1000.0;

/// Nominal brevet lengths sanctioned by the ACP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} km is not a sanctioned brevet distance")]
pub struct UnsupportedBrevet(pub i64);

impl BrevetDistance {
    pub const ALL: [BrevetDistance; 5] = [
        BrevetDistance::Km200,
        BrevetDistance::Km300,
        BrevetDistance::Km400,
        BrevetDistance::Km600,
        BrevetDistance::Km1000,
    ];

    pub fn km(self) -> u32 {
        match self {
            BrevetDistance::Km200 => 200,
            BrevetDistance::Km300 => 300,
            BrevetDistance::Km400 => 400,
            BrevetDistance::Km600 => 600,
            BrevetDistance::Km1000 => 1000,
        }
    }
}

impl TryFrom<i64> for BrevetDistance {
    type Error = UnsupportedBrevet;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        BrevetDistance::ALL
            .into_iter()
            .find(|brevet| i64::from(brevet.km()) == value)
            .ok_or(UnsupportedBrevet(value))
    }
}

impl TryFrom<u32> for BrevetDistance {
    type Error = UnsupportedBrevet;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BrevetDistance::try_from(i64::from(value))
    }
}

impl From<BrevetDistance> for u32 {
    fn from(value: BrevetDistance) -> Self {
        value.km()
    }
}

impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}
