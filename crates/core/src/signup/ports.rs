//! Port interfaces for activity persistence
//!
//! The store is plain CRUD. It knows nothing about capacity or duplicate
//! signups; [`SignupService`](super::SignupService) checks those first.

use async_trait::async_trait;
use mergington_domain::{Activity, ActivityCatalog, Result};

/// Persistence for activities and their participant rows.
///
/// Every method is a single atomic unit against the backing storage.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Create the storage structures if they are missing. Safe to call
    /// repeatedly.
    async fn init_schema(&self) -> Result<()>;

    /// Every activity with its participants in signup order.
    async fn list_activities(&self) -> Result<ActivityCatalog>;

    /// Insert an activity. An existing row with the same name is left
    /// untouched and the call still succeeds.
    async fn create_activity(&self, activity: Activity) -> Result<()>;

    /// Insert a participant row.
    ///
    /// Fails with `ConstraintViolation` if the pair already exists or the
    /// activity does not.
    async fn add_participant(&self, activity_name: &str, email: &str) -> Result<()>;

    /// Delete a participant row. Removing a row that does not exist is a
    /// no-op.
    async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<()>;
}
