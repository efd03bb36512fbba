//! Section permission kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fine-grained edit rights a domain user can hold on a single section,
/// independent of their coarse role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    /// May edit the section's own data (name, description, membership).
    EditSection,
    /// May record and correct attendance for the section's classes.
    EditAttendance,
}

impl PermissionKind {
    /// Return the permission kind as its stored snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EditSection => "edit_section",
            Self::EditAttendance => "edit_attendance",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PermissionKind {
    type Err = techconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit_section" => Ok(Self::EditSection),
            "edit_attendance" => Ok(Self::EditAttendance),
            _ => Err(techconnect_core::AppError::validation(format!(
                "Invalid permission kind: '{s}'"
            ))),
        }
    }
}
