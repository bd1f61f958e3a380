use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An evidence file attached to a (scenario, step number) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proof {
    pub id: i64,
    pub scenario_id: i64,
    pub step_number: u32,
    /// Stored file name inside the upload directory.
    pub filename: String,
    pub created_at: DateTime<Utc>,
}
