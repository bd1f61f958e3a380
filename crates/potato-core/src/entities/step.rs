use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StepStatus;

/// An ordered step of a scenario. `step_number` is 1-based and unique per scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub id: i64,
    pub scenario_id: i64,
    pub step_number: u32,
    pub step_name: String,
    pub status: StepStatus,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
