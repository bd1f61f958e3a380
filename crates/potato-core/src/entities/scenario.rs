use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Minimum length of a scenario name after trimming.
pub const MIN_NAME_LEN: usize = 3;

/// A QA test scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub id: i64,
    pub name: String,
    /// Functional area under test (e.g. `Authentication`, `Payment`).
    pub area: String,
    /// Kind of test (e.g. `Functional`, `Integration`).
    #[serde(rename = "type")]
    pub scenario_type: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewScenario {
    pub name: String,
    pub area: String,
    pub scenario_type: String,
    pub assigned_to: String,
}

impl NewScenario {
    /// Trim every field and check the creation rules.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every rule that failed.
    pub fn validated(&self) -> Result<Self, CoreError> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            area: self.area.trim().to_string(),
            scenario_type: self.scenario_type.trim().to_string(),
            assigned_to: self.assigned_to.trim().to_string(),
        };

        let mut problems = Vec::new();
        if trimmed.name.chars().count() < MIN_NAME_LEN {
            problems.push(format!(
                "scenario name must be at least {MIN_NAME_LEN} characters"
            ));
        }
        if trimmed.area.is_empty() {
            problems.push("area is required".to_string());
        }
        if trimmed.scenario_type.is_empty() {
            problems.push("type is required".to_string());
        }
        if trimmed.assigned_to.is_empty() {
            problems.push("assigned to is required".to_string());
        }

        if problems.is_empty() {
            Ok(trimmed)
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> NewScenario {
        NewScenario {
            name: name.to_string(),
            area: "Payment".to_string(),
            scenario_type: "Integration".to_string(),
            assigned_to: "Jane Smith".to_string(),
        }
    }

    #[test]
    fn trims_fields() {
        let ok = input("  Checkout flow  ").validated().unwrap();
        assert_eq!(ok.name, "Checkout flow");
    }

    #[test]
    fn short_name_rejected() {
        let err = input(" ab ").validated().unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn collects_every_problem() {
        let err = NewScenario::default().validated().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("area"));
        assert!(msg.contains("type"));
        assert!(msg.contains("assigned to"));
    }
}
