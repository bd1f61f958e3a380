//! Read-only retrieval queries behind the question pipeline.
//!
//! One query per supported intent. Each returns a small structured result
//! and an empty one when nothing matches. Errors are returned as-is; turning
//! them into empty results is the dispatcher's job.

use std::future::Future;

use potato_core::enums::{DefectStatus, StepStatus};
use potato_core::facts::{OpenDefect, ScenarioDefectCount, StepRef};

use crate::PotatoDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_step_number};

/// Read interface over the tracking store used by question answering.
pub trait TrackingReader {
    /// All scenario names, newest first.
    fn scenario_names(&self) -> impl Future<Output = Result<Vec<String>, DatabaseError>>;

    /// Scenario with the most defects of any status.
    ///
    /// Ties go to the lexicographically smaller name, then the older id.
    fn most_defects_scenario(
        &self,
    ) -> impl Future<Output = Result<Option<ScenarioDefectCount>, DatabaseError>>;

    /// Defects with status exactly `Open`, newest first.
    fn open_defects(&self) -> impl Future<Output = Result<Vec<OpenDefect>, DatabaseError>>;

    /// Steps with status exactly `Failed`, by scenario name then step number.
    fn failed_steps(&self) -> impl Future<Output = Result<Vec<StepRef>, DatabaseError>>;

    /// Steps with no proof sharing their (scenario, step number), by scenario
    /// name then step number.
    fn steps_without_proof(&self) -> impl Future<Output = Result<Vec<StepRef>, DatabaseError>>;
}

impl<T: TrackingReader + ?Sized> TrackingReader for &T {
    fn scenario_names(&self) -> impl Future<Output = Result<Vec<String>, DatabaseError>> {
        (**self).scenario_names()
    }

    fn most_defects_scenario(
        &self,
    ) -> impl Future<Output = Result<Option<ScenarioDefectCount>, DatabaseError>> {
        (**self).most_defects_scenario()
    }

    fn open_defects(&self) -> impl Future<Output = Result<Vec<OpenDefect>, DatabaseError>> {
        (**self).open_defects()
    }

    fn failed_steps(&self) -> impl Future<Output = Result<Vec<StepRef>, DatabaseError>> {
        (**self).failed_steps()
    }

    fn steps_without_proof(&self) -> impl Future<Output = Result<Vec<StepRef>, DatabaseError>> {
        (**self).steps_without_proof()
    }
}

fn row_to_step_ref(row: &libsql::Row) -> Result<StepRef, DatabaseError> {
    Ok(StepRef {
        step_name: row.get(0)?,
        step_number: get_step_number(row, 1)?,
        scenario: row.get(2)?,
    })
}

impl PotatoDb {
    async fn step_refs(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<StepRef>, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        let mut steps = Vec::new();
        while let Some(row) = rows.next().await? {
            steps.push(row_to_step_ref(&row)?);
        }
        Ok(steps)
    }
}

impl TrackingReader for PotatoDb {
    async fn scenario_names(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT name FROM scenarios ORDER BY created_at DESC, id DESC",
                (),
            )
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>(0)?);
        }
        Ok(names)
    }

    async fn most_defects_scenario(&self) -> Result<Option<ScenarioDefectCount>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT s.name, COUNT(d.id) AS defect_count
                 FROM defects d
                 JOIN scenarios s ON s.id = d.scenario_id
                 GROUP BY s.id, s.name
                 ORDER BY defect_count DESC, s.name ASC, s.id ASC
                 LIMIT 1",
                (),
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let count = row.get::<i64>(1)?;
        Ok(Some(ScenarioDefectCount {
            name: row.get(0)?,
            defect_count: u32::try_from(count).map_err(|_| {
                DatabaseError::InvalidState(format!("defect count out of range: {count}"))
            })?,
        }))
    }

    async fn open_defects(&self) -> Result<Vec<OpenDefect>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT d.title, d.reported_by, s.name
                 FROM defects d
                 JOIN scenarios s ON s.id = d.scenario_id
                 WHERE d.status = ?1
                 ORDER BY d.created_at DESC, d.id DESC",
                [DefectStatus::Open.as_str()],
            )
            .await?;
        let mut defects = Vec::new();
        while let Some(row) = rows.next().await? {
            defects.push(OpenDefect {
                title: row.get(0)?,
                reported_by: get_opt_string(&row, 1)?,
                scenario: row.get(2)?,
            });
        }
        Ok(defects)
    }

    async fn failed_steps(&self) -> Result<Vec<StepRef>, DatabaseError> {
        self.step_refs(
            "SELECT st.step_name, st.step_number, s.name
             FROM steps st
             JOIN scenarios s ON s.id = st.scenario_id
             WHERE st.status = ?1
             ORDER BY s.name, st.step_number, s.id",
            [StepStatus::Failed.as_str()],
        )
        .await
    }

    async fn steps_without_proof(&self) -> Result<Vec<StepRef>, DatabaseError> {
        self.step_refs(
            "SELECT st.step_name, st.step_number, s.name
             FROM steps st
             JOIN scenarios s ON s.id = st.scenario_id
             LEFT JOIN proofs p
               ON p.scenario_id = st.scenario_id AND p.step_number = st.step_number
             WHERE p.id IS NULL
             ORDER BY s.name, st.step_number, s.id",
            (),
        )
        .await
    }
}
