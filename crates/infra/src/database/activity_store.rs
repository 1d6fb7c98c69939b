//! SQLite-backed activity store.
//!
//! Implements the `ActivityStore` port. Every call checks one connection out
//! of the pool and runs a single statement inside `spawn_blocking`.

use std::sync::Arc;

use async_trait::async_trait;
use mergington_common::storage::{SqliteConnection, StorageError};
use mergington_core::ActivityStore;
use mergington_domain::{Activity, ActivityCatalog, ActivityDetails, Result as DomainResult};
use rusqlite::params;
use tokio::task;
use tracing::debug;

use super::manager::{map_storage_error, DbManager};
use crate::errors::map_join_error;

/// SQLite-backed [`ActivityStore`].
pub struct SqliteActivityStore {
    db: Arc<DbManager>,
}

impl SqliteActivityStore {
    /// Create a new store over the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityStore for SqliteActivityStore {
    async fn init_schema(&self) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || db.run_migrations()).await.map_err(map_join_error)?
    }

    async fn list_activities(&self) -> DomainResult<ActivityCatalog> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<ActivityCatalog> {
            let conn = db.get_connection()?;
            query_catalog(&conn).map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create_activity(&self, activity: Activity) -> DomainResult<()> {
        activity.validate()?;
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let inserted = insert_activity(&conn, &activity).map_err(map_storage_error)?;
            if inserted == 0 {
                debug!(activity = %activity.name, "activity already exists, left unchanged");
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn add_participant(&self, activity_name: &str, email: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let activity_name = activity_name.to_string();
        let email = email.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO participants (activity_name, email) VALUES (?1, ?2)",
                params![activity_name, email],
            )
            .map_err(map_storage_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn remove_participant(&self, activity_name: &str, email: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let activity_name = activity_name.to_string();
        let email = email.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let removed = conn
                .execute(
                    "DELETE FROM participants WHERE activity_name = ?1 AND email = ?2",
                    params![activity_name, email],
                )
                .map_err(map_storage_error)?;
            if removed == 0 {
                debug!(activity = %activity_name, email = %email, "no participant row to remove");
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

struct CatalogRow {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    email: Option<String>,
}

/// Load every activity with its participants in one statement.
///
/// Activities without participants come back as a single row with a NULL
/// email. Participants are ordered by rowid, i.e. signup order.
fn query_catalog(conn: &SqliteConnection) -> Result<ActivityCatalog, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT a.name, a.description, a.schedule, a.max_participants, p.email
         FROM activities a
         LEFT JOIN participants p ON p.activity_name = a.name
         ORDER BY a.rowid, p.rowid",
    )?;

    let rows = stmt.query_map(params![], |row| {
        Ok(CatalogRow {
            name: row.get(0)?,
            description: row.get(1)?,
            schedule: row.get(2)?,
            max_participants: row.get(3)?,
            email: row.get(4)?,
        })
    })?;

    let mut catalog = ActivityCatalog::new();
    for row in rows {
        let details = catalog.entry(row.name).or_insert_with(|| ActivityDetails {
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants: Vec::new(),
        });
        if let Some(email) = row.email {
            details.participants.push(email);
        }
    }
    Ok(catalog)
}

/// Insert an activity unless one with the same name exists. Returns the
/// number of rows written.
fn insert_activity(conn: &SqliteConnection, activity: &Activity) -> Result<usize, StorageError> {
    conn.execute(
        "INSERT OR IGNORE INTO activities (name, description, schedule, max_participants)
         VALUES (?1, ?2, ?3, ?4)",
        params![activity.name, activity.description, activity.schedule, activity.max_participants],
    )
}
