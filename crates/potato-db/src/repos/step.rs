//! Step repository: list per scenario, update status and assignee.

use chrono::Utc;

use potato_core::entities::Step;
use potato_core::enums::StepStatus;

use crate::PotatoDb;
use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, get_step_number, non_blank, parse_datetime, parse_status, timestamp,
};

const SELECT_COLS: &str =
    "id, scenario_id, step_number, step_name, status, assigned_to, created_at, updated_at";

fn row_to_step(row: &libsql::Row) -> Result<Step, DatabaseError> {
    Ok(Step {
        id: row.get(0)?,
        scenario_id: row.get(1)?,
        step_number: get_step_number(row, 2)?,
        step_name: row.get(3)?,
        status: parse_status(&row.get::<String>(4)?)?,
        assigned_to: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl PotatoDb {
    /// Steps of a scenario ordered by step number.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_steps(&self, scenario_id: i64) -> Result<Vec<Step>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM steps WHERE scenario_id = ?1 ORDER BY step_number"
                ),
                [scenario_id],
            )
            .await?;
        let mut steps = Vec::new();
        while let Some(row) = rows.next().await? {
            steps.push(row_to_step(&row)?);
        }
        Ok(steps)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when the scenario has no such step.
    pub async fn get_step(&self, scenario_id: i64, step_number: u32) -> Result<Step, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM steps WHERE scenario_id = ?1 AND step_number = ?2"
                ),
                libsql::params![scenario_id, i64::from(step_number)],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("step", format!("{scenario_id}#{step_number}")))?;
        row_to_step(&row)
    }

    /// Set a step's status and assignee. A blank assignee clears it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when the scenario has no such step.
    pub async fn update_step(
        &self,
        scenario_id: i64,
        step_number: u32,
        status: StepStatus,
        assigned_to: Option<&str>,
    ) -> Result<Step, DatabaseError> {
        let now = timestamp(Utc::now());
        let changed = self
            .conn
            .execute(
                "UPDATE steps SET status = ?1, assigned_to = ?2, updated_at = ?3
                 WHERE scenario_id = ?4 AND step_number = ?5",
                libsql::params![
                    status.as_str(),
                    non_blank(assigned_to),
                    now.as_str(),
                    scenario_id,
                    i64::from(step_number)
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found(
                "step",
                format!("{scenario_id}#{step_number}"),
            ));
        }
        tracing::debug!(scenario_id, step_number, status = %status, "step updated");
        self.get_step(scenario_id, step_number).await
    }
}
