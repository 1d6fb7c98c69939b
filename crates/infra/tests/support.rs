//! Shared helpers for infra integration tests.

use std::sync::Arc;

use mergington_core::ActivityStore;
use mergington_infra::{DbManager, SqliteActivityStore};
use tempfile::TempDir;

/// A migrated store over a fresh database file. Keep the `TempDir` alive
/// for as long as the store is used.
pub async fn setup_store() -> (Arc<SqliteActivityStore>, Arc<DbManager>, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir created");
    let db = Arc::new(
        DbManager::new(temp_dir.path().join("mergington.db"), 4).expect("manager created"),
    );
    let store = Arc::new(SqliteActivityStore::new(Arc::clone(&db)));
    store.init_schema().await.expect("schema created");
    (store, db, temp_dir)
}
