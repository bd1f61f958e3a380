//! Shared test utilities for potato-db unit tests.

use potato_core::entities::{NewScenario, Scenario};

use crate::PotatoDb;

/// In-memory store with migrations applied.
pub async fn test_db() -> PotatoDb {
    PotatoDb::open_local(":memory:").await.unwrap()
}

/// Scenario input with the given name and fixed remaining fields.
pub fn new_scenario(name: &str) -> NewScenario {
    NewScenario {
        name: name.to_string(),
        area: "Payment".to_string(),
        scenario_type: "Integration".to_string(),
        assigned_to: "Jane Smith".to_string(),
    }
}

/// Create a scenario with `steps` default steps.
pub async fn scenario_with_steps(db: &PotatoDb, name: &str, steps: u32) -> Scenario {
    db.create_scenario(&new_scenario(name), steps).await.unwrap()
}
