//! Scenario repository: create (with default steps), get, paginated list, detail.

use chrono::Utc;

use potato_core::entities::{NewScenario, Scenario};
use potato_core::enums::StepStatus;
use potato_core::responses::{ScenarioDetail, ScenarioPage};

use crate::PotatoDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, timestamp};

const SELECT_COLS: &str = "id, name, area, type, assigned_to, created_at, updated_at";

fn row_to_scenario(row: &libsql::Row) -> Result<Scenario, DatabaseError> {
    Ok(Scenario {
        id: row.get(0)?,
        name: row.get(1)?,
        area: row.get(2)?,
        scenario_type: row.get(3)?,
        assigned_to: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl PotatoDb {
    /// Create a scenario and `step_count` default steps named `Step 1..=n`.
    ///
    /// The scenario row and its steps are written in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` when the input fails validation.
    pub async fn create_scenario(
        &self,
        input: &NewScenario,
        step_count: u32,
    ) -> Result<Scenario, DatabaseError> {
        let input = input.validated()?;
        let now = Utc::now();
        let ts = timestamp(now);

        let tx = self.conn.transaction().await?;
        tx.execute(
            "INSERT INTO scenarios (name, area, type, assigned_to, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                input.name.as_str(),
                input.area.as_str(),
                input.scenario_type.as_str(),
                input.assigned_to.as_str(),
                ts.as_str(),
                ts.as_str()
            ],
        )
        .await?;
        let id = tx.last_insert_rowid();

        for number in 1..=step_count {
            tx.execute(
                "INSERT INTO steps (scenario_id, step_number, step_name, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id,
                    i64::from(number),
                    format!("Step {number}"),
                    StepStatus::NotStarted.as_str(),
                    ts.as_str(),
                    ts.as_str()
                ],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(scenario_id = id, steps = step_count, "scenario created");

        Ok(Scenario {
            id,
            name: input.name,
            area: input.area,
            scenario_type: input.scenario_type,
            assigned_to: input.assigned_to,
            created_at: parse_datetime(&ts)?,
            updated_at: parse_datetime(&ts)?,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no scenario has this id.
    pub async fn get_scenario(&self, id: i64) -> Result<Scenario, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM scenarios WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("scenario", id))?;
        row_to_scenario(&row)
    }

    /// One page of scenarios, newest first. `page` is 1-based; 0 is treated as 1.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` when `per_page` is zero.
    pub async fn list_scenarios(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ScenarioPage, DatabaseError> {
        if per_page == 0 {
            return Err(potato_core::errors::CoreError::Validation(
                "page size must be greater than zero".to_string(),
            )
            .into());
        }
        let page = page.max(1);

        let mut count_rows = self.conn.query("SELECT COUNT(*) FROM scenarios", ()).await?;
        let total = count_rows
            .next()
            .await?
            .ok_or(DatabaseError::NoResult)?
            .get::<i64>(0)?;
        let total = u64::try_from(total).unwrap_or_default();

        let offset = (i64::from(page) - 1) * i64::from(per_page);
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM scenarios ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2"
                ),
                libsql::params![i64::from(per_page), offset],
            )
            .await?;
        let mut scenarios = Vec::new();
        while let Some(row) = rows.next().await? {
            scenarios.push(row_to_scenario(&row)?);
        }

        let total_pages = u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);
        Ok(ScenarioPage {
            scenarios,
            page,
            per_page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        })
    }

    /// A scenario with its steps (by number), defects and proofs (newest first).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no scenario has this id.
    pub async fn scenario_detail(&self, id: i64) -> Result<ScenarioDetail, DatabaseError> {
        let scenario = self.get_scenario(id).await?;
        let steps = self.list_steps(id).await?;
        let defects = self.list_defects(id).await?;
        let proofs = self.list_proofs(id).await?;
        Ok(ScenarioDetail {
            scenario,
            steps,
            defects,
            proofs,
        })
    }
}
