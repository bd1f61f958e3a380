//! Status enums for steps and defects.
//!
//! JSON serialization uses `snake_case`. The SQL representation (`as_str`)
//! keeps the human-readable labels the tracking store has always held
//! (`"Not Started"`, `"Open"`), because retrieval filters on those exact values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lowercase and collapse `-`/`_`/whitespace runs to a single space.
fn fold(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Execution status of a scenario step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    NotStarted,
    InProgress,
    Passed,
    Failed,
    Blocked,
}

impl StepStatus {
    pub const ALL: [Self; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Passed,
        Self::Failed,
        Self::Blocked,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = CoreError;

    /// Accepts the SQL label or any case/separator variant of it
    /// (`"Not Started"`, `"not_started"`, `"not-started"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_ascii_lowercase() == folded)
            .ok_or_else(|| CoreError::UnknownStatus {
                kind: "step",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// DefectStatus
// ---------------------------------------------------------------------------

/// Status of a defect. `Resolved` is accepted on input as an alias of `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectStatus {
    Open,
    Closed,
}

impl DefectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for DefectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "open" | "reopened" => Ok(Self::Open),
            "closed" | "resolved" => Ok(Self::Closed),
            _ => Err(CoreError::UnknownStatus {
                kind: "defect",
                value: s.to_string(),
            }),
        }
    }
}
