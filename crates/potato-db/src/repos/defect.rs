//! Defect repository: raise, list per scenario, change status.

use chrono::Utc;

use potato_core::entities::{Defect, MIN_TITLE_LEN};
use potato_core::enums::DefectStatus;
use potato_core::errors::CoreError;

use crate::PotatoDb;
use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, get_step_number, non_blank, parse_datetime, parse_status, timestamp,
};

const SELECT_COLS: &str =
    "id, scenario_id, step_number, title, status, reported_by, created_at, updated_at";

fn row_to_defect(row: &libsql::Row) -> Result<Defect, DatabaseError> {
    Ok(Defect {
        id: row.get(0)?,
        scenario_id: row.get(1)?,
        step_number: get_step_number(row, 2)?,
        title: row.get(3)?,
        status: parse_status(&row.get::<String>(4)?)?,
        reported_by: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl PotatoDb {
    /// Raise an `Open` defect against a scenario step.
    ///
    /// The step number is not checked against existing steps.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for a short title and
    /// `DatabaseError::NotFound` for an unknown scenario.
    pub async fn add_defect(
        &self,
        scenario_id: i64,
        step_number: u32,
        title: &str,
        reported_by: Option<&str>,
    ) -> Result<Defect, DatabaseError> {
        let title = title.trim();
        if title.chars().count() < MIN_TITLE_LEN {
            return Err(CoreError::Validation(format!(
                "defect title must be at least {MIN_TITLE_LEN} characters"
            ))
            .into());
        }
        self.get_scenario(scenario_id).await?;

        let now = Utc::now();
        let ts = timestamp(now);
        let reported_by = non_blank(reported_by);
        self.conn
            .execute(
                "INSERT INTO defects (scenario_id, step_number, title, status, reported_by, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    scenario_id,
                    i64::from(step_number),
                    title,
                    DefectStatus::Open.as_str(),
                    reported_by,
                    ts.as_str(),
                    ts.as_str()
                ],
            )
            .await?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(defect_id = id, scenario_id, step_number, "defect raised");

        Ok(Defect {
            id,
            scenario_id,
            step_number,
            title: title.to_string(),
            status: DefectStatus::Open,
            reported_by: reported_by.map(String::from),
            created_at: parse_datetime(&ts)?,
            updated_at: parse_datetime(&ts)?,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no defect has this id.
    pub async fn get_defect(&self, id: i64) -> Result<Defect, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM defects WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("defect", id))?;
        row_to_defect(&row)
    }

    /// Defects of a scenario, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_defects(&self, scenario_id: i64) -> Result<Vec<Defect>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM defects WHERE scenario_id = ?1
                     ORDER BY created_at DESC, id DESC"
                ),
                [scenario_id],
            )
            .await?;
        let mut defects = Vec::new();
        while let Some(row) = rows.next().await? {
            defects.push(row_to_defect(&row)?);
        }
        Ok(defects)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no defect has this id.
    pub async fn update_defect_status(
        &self,
        id: i64,
        status: DefectStatus,
    ) -> Result<Defect, DatabaseError> {
        let now = timestamp(Utc::now());
        let changed = self
            .conn
            .execute(
                "UPDATE defects SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![status.as_str(), now.as_str(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("defect", id));
        }
        tracing::debug!(defect_id = id, status = %status, "defect status changed");
        self.get_defect(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scenario_with_steps, test_db};

    #[tokio::test]
    async fn add_defect_starts_open() {
        let db = test_db().await;
        let scenario = scenario_with_steps(&db, "Checkout flow", 2).await;
        let defect = db
            .add_defect(scenario.id, 1, "  Total shows NaN ", Some("Ann"))
            .await
            .unwrap();
        assert_eq!(defect.title, "Total shows NaN");
        assert_eq!(defect.status, DefectStatus::Open);
        assert_eq!(db.get_defect(defect.id).await.unwrap(), defect);
    }

    #[tokio::test]
    async fn add_defect_allows_unknown_step_number() {
        let db = test_db().await;
        let scenario = scenario_with_steps(&db, "Checkout flow", 2).await;
        let defect = db.add_defect(scenario.id, 9, "Ghost step bug", None).await.unwrap();
        assert_eq!(defect.step_number, 9);
        assert_eq!(defect.reported_by, None);
    }

    #[tokio::test]
    async fn add_defect_rejects_short_title() {
        let db = test_db().await;
        let scenario = scenario_with_steps(&db, "Checkout flow", 1).await;
        let err = db.add_defect(scenario.id, 1, "bug", None).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn add_defect_unknown_scenario() {
        let db = test_db().await;
        let err = db.add_defect(99, 1, "Orphan defect", None).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "scenario", .. }));
    }

    #[tokio::test]
    async fn close_and_reopen() {
        let db = test_db().await;
        let scenario = scenario_with_steps(&db, "Checkout flow", 1).await;
        let defect = db.add_defect(scenario.id, 1, "Button misaligned", None).await.unwrap();

        let closed = db
            .update_defect_status(defect.id, DefectStatus::Closed)
            .await
            .unwrap();
        assert_eq!(closed.status, DefectStatus::Closed);

        let reopened = db
            .update_defect_status(defect.id, DefectStatus::Open)
            .await
            .unwrap();
        assert!(reopened.status.is_open());
    }

    #[tokio::test]
    async fn update_missing_defect() {
        let db = test_db().await;
        let err = db
            .update_defect_status(5, DefectStatus::Closed)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "defect", .. }));
    }
}
