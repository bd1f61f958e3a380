use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::DefectStatus;

/// Minimum length of a defect title after trimming.
pub const MIN_TITLE_LEN: usize = 5;

/// A defect raised against a scenario step.
///
/// `step_number` is not a foreign key: the referenced step row may be
/// renamed or removed without touching the defect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Defect {
    pub id: i64,
    pub scenario_id: i64,
    pub step_number: u32,
    pub title: String,
    pub status: DefectStatus,
    pub reported_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
