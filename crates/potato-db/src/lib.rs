//! # potato-db
//!
//! libSQL storage for the AskPOTATO tracking store.
//!
//! Holds every scenario, its ordered steps, the defects raised against
//! those steps, and the proof files uploaded for them. Two surfaces sit on
//! top of the connection:
//!
//! - [`repos`]: CRUD used by the `potato` CLI (create scenarios, update
//!   steps, raise and close defects, record proofs, seed sample data).
//! - [`retrieval`]: the five read-only queries the question pipeline runs,
//!   exposed through the [`retrieval::TrackingReader`] trait.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retrieval;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the tracking store.
pub struct PotatoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PotatoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let potato_db = Self { db, conn };
        potato_db.run_migrations().await?;
        tracing::debug!(path, "tracking store opened");
        Ok(potato_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
