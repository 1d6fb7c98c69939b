//! Signup service - core business logic

use std::sync::Arc;

use mergington_domain::{ActivityCatalog, ActivityDetails, MergingtonError, Result};
use tracing::{debug, info, warn};

use super::ports::ActivityStore;

/// Enforces signup and unregister rules on top of an [`ActivityStore`].
///
/// Validation reads a catalog snapshot and then mutates in a separate store
/// call, so two concurrent signups can both pass the capacity check. Nothing
/// here serializes them.
pub struct SignupService {
    store: Arc<dyn ActivityStore>,
}

impl SignupService {
    /// Create a new signup service
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    /// Every activity with its current participants.
    pub async fn list_activities(&self) -> Result<ActivityCatalog> {
        self.store.list_activities().await
    }

    /// Sign `email` up for `activity_name`.
    ///
    /// Checks run in order: the activity exists, the student is not already
    /// registered, the activity has a free slot.
    ///
    /// # Errors
    /// `NotFound`, `AlreadyRegistered` or `CapacityExceeded` when a rule
    /// rejects the request; storage errors otherwise.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<()> {
        let catalog = self.store.list_activities().await?;
        let details = find_activity(&catalog, activity_name)?;

        if details.is_registered(email) {
            debug!(activity = activity_name, email, "signup rejected: already registered");
            return Err(MergingtonError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if details.is_full() {
            debug!(
                activity = activity_name,
                max_participants = details.max_participants,
                "signup rejected: activity full"
            );
            return Err(MergingtonError::CapacityExceeded {
                activity: activity_name.to_string(),
                max_participants: details.max_participants,
            });
        }

        let spots_left = details.spots_left().saturating_sub(1);
        match self.store.add_participant(activity_name, email).await {
            Ok(()) => {
                info!(activity = activity_name, email, spots_left, "student signed up");
                Ok(())
            }
            // Another request inserted the same pair after our snapshot.
            Err(MergingtonError::ConstraintViolation(reason)) => {
                warn!(activity = activity_name, email, %reason, "concurrent duplicate signup");
                Err(MergingtonError::AlreadyRegistered {
                    activity: activity_name.to_string(),
                    email: email.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Remove `email` from `activity_name`.
    ///
    /// # Errors
    /// `NotFound` for an unknown activity, `NotRegistered` when the student
    /// is not a participant; storage errors otherwise.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<()> {
        let catalog = self.store.list_activities().await?;
        let details = find_activity(&catalog, activity_name)?;

        if !details.is_registered(email) {
            debug!(activity = activity_name, email, "unregister rejected: not registered");
            return Err(MergingtonError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        self.store.remove_participant(activity_name, email).await?;
        info!(activity = activity_name, email, "student unregistered");
        Ok(())
    }
}

fn find_activity<'a>(catalog: &'a ActivityCatalog, activity_name: &str) -> Result<&'a ActivityDetails> {
    catalog.get(activity_name).ok_or_else(|| {
        debug!(activity = activity_name, "unknown activity");
        MergingtonError::NotFound { activity: activity_name.to_string() }
    })
}
