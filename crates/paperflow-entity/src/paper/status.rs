//! Paper reading status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a saved paper sits in the owner's reading workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reading_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    /// Saved but not started.
    Unread,
    /// Currently being read.
    Reading,
    /// Finished.
    Read,
}

impl ReadingStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Reading => "reading",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = paperflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unread" => Ok(Self::Unread),
            "reading" => Ok(Self::Reading),
            "read" => Ok(Self::Read),
            _ => Err(paperflow_core::AppError::validation(format!(
                "Invalid reading status: '{s}'. Expected one of: unread, reading, read"
            ))),
        }
    }
}
