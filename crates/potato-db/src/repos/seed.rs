//! Sample data for local testing.

use potato_core::entities::{NewScenario, Scenario};
use potato_core::enums::StepStatus;

use crate::PotatoDb;
use crate::error::DatabaseError;

/// Steps per sample scenario.
const SAMPLE_STEPS: u32 = 5;
/// Steps `1..=PASSED_STEPS` start `Passed`.
const PASSED_STEPS: u32 = 2;

const SAMPLES: [(&str, &str, &str, &str); 3] = [
    ("Login Functionality Test", "Authentication", "Functional", "John Doe"),
    ("Payment Gateway Integration", "Payment", "Integration", "Jane Smith"),
    ("Dashboard Performance", "UI/UX", "Performance", "Bob Johnson"),
];

impl PotatoDb {
    /// Insert three sample scenarios, each with five steps (the first two
    /// `Passed`) and one open defect on step 1 reported by the assignee.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails.
    pub async fn seed_sample_data(&self) -> Result<Vec<Scenario>, DatabaseError> {
        let mut created = Vec::with_capacity(SAMPLES.len());
        for (name, area, scenario_type, assigned_to) in SAMPLES {
            let scenario = self
                .create_scenario(
                    &NewScenario {
                        name: name.to_string(),
                        area: area.to_string(),
                        scenario_type: scenario_type.to_string(),
                        assigned_to: assigned_to.to_string(),
                    },
                    SAMPLE_STEPS,
                )
                .await?;
            for step in 1..=PASSED_STEPS {
                self.update_step(scenario.id, step, StepStatus::Passed, None)
                    .await?;
            }
            self.add_defect(
                scenario.id,
                1,
                &format!("Issue in {name} - Step 1"),
                Some(assigned_to),
            )
            .await?;
            created.push(scenario);
        }
        tracing::info!(scenarios = created.len(), "sample data inserted");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::retrieval::TrackingReader;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn seed_shapes_data() {
        let db = test_db().await;
        let seeded = db.seed_sample_data().await.unwrap();
        assert_eq!(seeded.len(), 3);

        let steps = db.list_steps(seeded[0].id).await.unwrap();
        let statuses: Vec<_> = steps.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Passed,
                StepStatus::Passed,
                StepStatus::NotStarted,
                StepStatus::NotStarted,
                StepStatus::NotStarted,
            ]
        );

        let open = db.open_defects().await.unwrap();
        assert_eq!(open.len(), 3);
        assert!(
            open.iter()
                .any(|d| d.title == "Issue in Dashboard Performance - Step 1"
                    && d.reported_by.as_deref() == Some("Bob Johnson"))
        );

        // No proofs uploaded yet: every seeded step is missing one.
        assert_eq!(db.steps_without_proof().await.unwrap().len(), 15);
    }
}
