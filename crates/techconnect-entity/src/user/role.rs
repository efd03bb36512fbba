//! Domain role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse domain roles.
///
/// Role resolution is fail-closed: any stored value other than `teacher`
/// (in any casing), including a missing row, resolves to [`Role::Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can view their own sections, schedule, and attendance.
    Student,
    /// Can manage sections they hold per-section permissions for.
    Teacher,
}

impl Role {
    /// Total mapping from the raw stored role column to a role.
    ///
    /// `None` and unrecognized strings map to the least-privileged role.
    pub fn from_db_value(value: Option<&str>) -> Self {
        match value {
            Some(s) if s.trim().eq_ignore_ascii_case("teacher") => Self::Teacher,
            _ => Self::Student,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Whether this role is the teacher role.
    pub fn is_teacher(&self) -> bool {
        matches!(self, Self::Teacher)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = techconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(techconnect_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, teacher"
            ))),
        }
    }
}
