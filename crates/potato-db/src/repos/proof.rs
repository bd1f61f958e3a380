//! Proof repository: record an uploaded file against a scenario step.

use chrono::Utc;

use potato_core::entities::Proof;
use potato_core::errors::CoreError;

use crate::PotatoDb;
use crate::error::DatabaseError;
use crate::helpers::{get_step_number, parse_datetime, timestamp};

const SELECT_COLS: &str = "id, scenario_id, step_number, filename, created_at";

fn row_to_proof(row: &libsql::Row) -> Result<Proof, DatabaseError> {
    Ok(Proof {
        id: row.get(0)?,
        scenario_id: row.get(1)?,
        step_number: get_step_number(row, 2)?,
        filename: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PotatoDb {
    /// Record a stored proof file. Copying the file itself is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for an empty filename and
    /// `DatabaseError::NotFound` for an unknown scenario.
    pub async fn add_proof(
        &self,
        scenario_id: i64,
        step_number: u32,
        filename: &str,
    ) -> Result<Proof, DatabaseError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(CoreError::Validation("proof filename is required".to_string()).into());
        }
        self.get_scenario(scenario_id).await?;

        let ts = timestamp(Utc::now());
        self.conn
            .execute(
                "INSERT INTO proofs (scenario_id, step_number, filename, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![scenario_id, i64::from(step_number), filename, ts.as_str()],
            )
            .await?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(proof_id = id, scenario_id, step_number, filename, "proof recorded");

        Ok(Proof {
            id,
            scenario_id,
            step_number,
            filename: filename.to_string(),
            created_at: parse_datetime(&ts)?,
        })
    }

    /// Proofs of a scenario, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_proofs(&self, scenario_id: i64) -> Result<Vec<Proof>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM proofs WHERE scenario_id = ?1
                     ORDER BY created_at DESC, id DESC"
                ),
                [scenario_id],
            )
            .await?;
        let mut proofs = Vec::new();
        while let Some(row) = rows.next().await? {
            proofs.push(row_to_proof(&row)?);
        }
        Ok(proofs)
    }
}
