use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the two drop zones of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    Pending,
    Completed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown zone '{0}', expected 'pending' or 'completed'")]
pub struct ParseZoneError(pub String);

impl ZoneId {
    pub const ALL: [ZoneId; 2] = [ZoneId::Pending, ZoneId::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// The other zone, used when cycling the drag hover with the keyboard
    pub fn other(&self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneId {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "todos" is the historical name of the pending drop area
            "pending" | "todos" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(ParseZoneError(other.to_string())),
        }
    }
}
